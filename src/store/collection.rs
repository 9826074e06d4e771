//! Id-keyed operations shared by every store collection.

use uuid::Uuid;

use crate::domain::common::{position_of, Identifiable};
use crate::errors::{EntityKind, StoreError};

/// A fresh id that no record in `items` uses yet.
pub(crate) fn fresh_id<T: Identifiable>(items: &[T]) -> String {
    loop {
        let candidate = Uuid::new_v4().simple().to_string();
        if position_of(items, &candidate).is_none() {
            return candidate;
        }
    }
}

/// Swaps in `record` at the position of the record sharing its id.
pub(crate) fn replace<T: Identifiable>(
    items: &mut [T],
    record: T,
    kind: EntityKind,
) -> Result<(), StoreError> {
    let index =
        position_of(items, record.id()).ok_or_else(|| StoreError::not_found(kind, record.id()))?;
    items[index] = record;
    Ok(())
}

/// Removes and returns the record with `id`, keeping the order of the rest.
pub(crate) fn take<T: Identifiable>(
    items: &mut Vec<T>,
    id: &str,
    kind: EntityKind,
) -> Result<T, StoreError> {
    let index = position_of(items, id).ok_or_else(|| StoreError::not_found(kind, id))?;
    Ok(items.remove(index))
}
