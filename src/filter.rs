//! Filter engine.
//!
//! A record passes when every predicate that is set matches:
//! - `year`: equal
//! - `month`: equal, case-sensitive
//! - `email`: lowercase containment of the lowercased needle

use serde::Serialize;

use crate::record::{Record, RecordSet};

/// Optional year/month/email-substring predicates. Unset matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterCriteria {
    pub year: Option<i32>,
    pub month: Option<String>,
    pub email: Option<String>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn with_month(mut self, month: impl Into<String>) -> Self {
        self.month = Some(month.into());
        self
    }

    /// Set the email needle. Surrounding whitespace is dropped and an
    /// all-whitespace needle leaves the predicate unset.
    pub fn with_email(mut self, needle: &str) -> Self {
        let needle = needle.trim();
        self.email = (!needle.is_empty()).then(|| needle.to_string());
        self
    }

    /// True when no predicate is set.
    pub fn is_empty(&self) -> bool {
        self.year.is_none() && self.month.is_none() && self.email_needle().is_none()
    }

    fn email_needle(&self) -> Option<&str> {
        self.email.as_deref().filter(|n| !n.is_empty())
    }

    /// Check a single record. Prefer [`apply_filter`] for whole sets, which
    /// lowercases the needle once.
    pub fn matches(&self, record: &Record) -> bool {
        Matcher::new(self).matches(record)
    }
}

/// Criteria prepared for repeated matching.
struct Matcher<'a> {
    year: Option<i32>,
    month: Option<&'a str>,
    email: Option<String>,
}

impl<'a> Matcher<'a> {
    fn new(criteria: &'a FilterCriteria) -> Self {
        Self {
            year: criteria.year,
            month: criteria.month.as_deref(),
            email: criteria.email_needle().map(str::to_lowercase),
        }
    }

    fn matches(&self, record: &Record) -> bool {
        self.year.is_none_or(|y| record.year == y)
            && self.month.is_none_or(|m| record.month == m)
            && self
                .email
                .as_deref()
                .is_none_or(|needle| record.email.to_lowercase().contains(needle))
    }
}

/// Return the records matching `criteria`, in their original order.
pub fn apply_filter(records: &RecordSet, criteria: &FilterCriteria) -> RecordSet {
    if criteria.is_empty() {
        return records.clone();
    }
    let matcher = Matcher::new(criteria);
    records
        .iter()
        .filter(|r| matcher.matches(r))
        .cloned()
        .collect()
}
