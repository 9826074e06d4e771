//! Pure services over store snapshots: aggregation, insights, and queries.

pub mod services;
