//! Usage records and ordered record sets.

use std::ops::Deref;

use serde::Serialize;

/// Number of comma-separated fields in a data row.
pub const FIELD_COUNT: usize = 6;

/// The canonical month names accepted by the month filter.
pub const MONTHS: [&str; 12] = [
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

/// First year offered by the year filter.
pub const FIRST_YEAR: i32 = 2024;

/// Returns the canonical spelling of `name` if it is one of [`MONTHS`].
///
/// Matching is exact. `"january"` is not a month name.
pub fn canonical_month(name: &str) -> Option<&'static str> {
    MONTHS.iter().copied().find(|m| *m == name)
}

/// Years to offer in a year dropdown, `first..=current`.
///
/// Empty when `current` is before `first`.
pub fn year_options(first: i32, current: i32) -> Vec<i32> {
    (first..=current).collect()
}

/// One usage event: a month of document processing for one account and model.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Record {
    pub year: i32,
    pub month: String,
    pub email: String,
    pub model_id: String,
    pub pages: u64,
    pub documents: u64,
}

impl Record {
    pub fn new(
        year: i32,
        month: impl Into<String>,
        email: impl Into<String>,
        model_id: impl Into<String>,
        pages: u64,
        documents: u64,
    ) -> Self {
        Self {
            year,
            month: month.into(),
            email: email.into(),
            model_id: model_id.into(),
            pages,
            documents,
        }
    }
}

/// An ordered, immutable collection of records.
///
/// Order is source order. Nothing in the crate reorders a set; filtering
/// builds a new one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RecordSet {
    records: Vec<Record>,
}

impl RecordSet {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn as_slice(&self) -> &[Record] {
        &self.records
    }

    pub fn into_vec(self) -> Vec<Record> {
        self.records
    }
}

impl Deref for RecordSet {
    type Target = [Record];

    fn deref(&self) -> &[Record] {
        &self.records
    }
}

impl FromIterator<Record> for RecordSet {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl From<Vec<Record>> for RecordSet {
    fn from(records: Vec<Record>) -> Self {
        Self::new(records)
    }
}
