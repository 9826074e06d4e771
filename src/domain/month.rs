//! The `YYYY-MM` reporting month.

use std::{fmt, str::FromStr};

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::StoreError;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// A calendar month rendered as `YYYY-MM`.
///
/// A transaction belongs to a month when its ISO date string starts with the
/// month key, so `2025-05` contains `2025-05-31` but not `2025-06-01`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MonthKey {
    year: i32,
    month: u32,
    key: String,
}

impl MonthKey {
    pub fn new(year: i32, month: u32) -> Result<Self, StoreError> {
        if !(1..=12).contains(&month) || !(0..=9999).contains(&year) {
            return Err(StoreError::InvalidMonth(format!("{year}-{month}")));
        }
        Ok(Self::from_parts(year, month))
    }

    /// Callers guarantee `1..=12` for `month`.
    pub(crate) fn from_parts(year: i32, month: u32) -> Self {
        Self {
            year,
            month,
            key: format!("{:04}-{:02}", year, month),
        }
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self::from_parts(date.year(), date.month())
    }

    /// The month containing today's local date.
    pub fn current() -> Self {
        Self::from_date(Local::now().date_naive())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn as_str(&self) -> &str {
        &self.key
    }

    /// Moves by `months` calendar months; negative values go back in time.
    pub fn shift(&self, months: i32) -> Self {
        let index = self.year * 12 + self.month as i32 - 1 + months;
        Self::from_parts(index.div_euclid(12), index.rem_euclid(12) as u32 + 1)
    }

    pub fn previous(&self) -> Self {
        self.shift(-1)
    }

    pub fn next(&self) -> Self {
        self.shift(1)
    }

    /// Prefix match against an ISO `YYYY-MM-DD` date string.
    pub fn contains(&self, date: &str) -> bool {
        date.starts_with(self.key.as_str())
    }

    /// Three-letter label used on trend chart axes, e.g. `May`.
    pub fn short_label(&self) -> &'static str {
        let name: &'static str = MONTH_NAMES[(self.month - 1) as usize];
        &name[..3]
    }

    /// Full label such as `May 2025`.
    pub fn long_label(&self) -> String {
        format!("{} {}", MONTH_NAMES[(self.month - 1) as usize], self.year)
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key)
    }
}

impl FromStr for MonthKey {
    type Err = StoreError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let invalid = || StoreError::InvalidMonth(raw.to_string());
        let trimmed = raw.trim();
        let (year, month) = trimmed.split_once('-').ok_or_else(invalid)?;
        if year.len() != 4 || month.len() != 2 {
            return Err(invalid());
        }
        if !year.bytes().chain(month.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        Self::new(year, month).map_err(|_| invalid())
    }
}

impl TryFrom<String> for MonthKey {
    type Error = StoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<MonthKey> for String {
    fn from(value: MonthKey) -> Self {
        value.key
    }
}
