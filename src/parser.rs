//! Record parser.
//!
//! Input layout:
//! ```text
//! year,month,email,model_id,pages,documents      <- header, always skipped
//! "2024","January","a@x.com","m1","1234","5"
//! 2024,February,b@y.com,m2,10,1
//! ```
//!
//! - Every `"` is removed before a row is split; there is no escaping.
//! - Blank rows are skipped and not reported.
//! - A row that does not split into exactly six fields, or whose year is
//!   not an integer, is dropped and reported as malformed.
//! - A non-numeric `pages` or `documents` value becomes 0; the row is kept
//!   and a notice is reported.

use tracing::{debug, info, warn};

use crate::error::{RowError, RowIssue};
use crate::record::{FIELD_COUNT, Record, RecordSet};

/// Result of parsing a whole source text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedRecords {
    pub records: RecordSet,
    /// Rows that were dropped or repaired, in source order.
    pub issues: Vec<RowIssue>,
}

impl ParsedRecords {
    /// Number of non-blank rows that produced no record.
    pub fn skipped(&self) -> usize {
        self.issues.iter().filter(|i| i.error.is_malformed()).count()
    }

    /// Log each issue: dropped rows at WARN, repaired rows at DEBUG.
    pub fn log_issues(&self) {
        for issue in &self.issues {
            if issue.error.is_malformed() {
                warn!(line = issue.line, error = %issue.error, "skipping malformed row");
            } else {
                debug!(line = issue.line, error = %issue.error, "repaired row");
            }
        }
        let skipped = self.skipped();
        if skipped > 0 {
            warn!(skipped, "some rows could not be loaded");
        }
    }
}

/// Parse source text into records, collecting per-row issues.
pub fn parse_records(text: &str) -> ParsedRecords {
    let mut records = Vec::new();
    let mut issues = Vec::new();

    // Line 1 is the header.
    for (idx, raw) in text.lines().enumerate().skip(1) {
        let line = idx + 1;
        let cleaned = raw.replace('"', "");
        let cleaned = cleaned.trim();
        if cleaned.is_empty() {
            continue;
        }

        let mut notices = Vec::new();
        match parse_row(cleaned, &mut notices) {
            Ok(record) => records.push(record),
            Err(error) => issues.push(RowIssue { line, error }),
        }
        issues.extend(notices.into_iter().map(|error| RowIssue { line, error }));
    }

    ParsedRecords {
        records: RecordSet::new(records),
        issues,
    }
}

/// Parse source text, logging any issues, and return only the records.
///
/// This is the entry point for a front-end that has just obtained the
/// source text.
pub fn load_from_text(text: &str) -> RecordSet {
    let parsed = parse_records(text);
    parsed.log_issues();
    info!(records = parsed.records.len(), "loaded records");
    parsed.records
}

/// Parse one cleaned, non-empty row.
///
/// Recoverable problems are pushed onto `notices`; fatal ones are returned.
fn parse_row(row: &str, notices: &mut Vec<RowError>) -> Result<Record, RowError> {
    let fields: Vec<&str> = row.split(',').map(str::trim).collect();
    let [year, month, email, model_id, pages, documents] = fields[..] else {
        return Err(RowError::FieldCount {
            expected: FIELD_COUNT,
            found: fields.len(),
        });
    };

    let year = year
        .parse::<i32>()
        .map_err(|_| RowError::InvalidYear(year.to_string()))?;

    Ok(Record {
        year,
        month: month.to_string(),
        email: email.to_string(),
        model_id: model_id.to_string(),
        pages: parse_count("pages", pages, notices),
        documents: parse_count("documents", documents, notices),
    })
}

fn parse_count(field: &'static str, value: &str, notices: &mut Vec<RowError>) -> u64 {
    value.parse().unwrap_or_else(|_| {
        notices.push(RowError::NonNumeric {
            field,
            value: value.to_string(),
        });
        0
    })
}
