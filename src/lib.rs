//! # usage-viewer
//!
//! Load a CSV of monthly usage records, narrow it by year, month and email,
//! and show it one page at a time.
//!
//! ## Overview
//!
//! The pipeline runs in three pure steps on every user action:
//! - **Parse**: header skipped, quotes stripped, blank rows ignored,
//!   six positional fields per row
//! - **Filter**: optional year, month and email-substring predicates, ANDed
//! - **Paginate**: fixed-size pages numbered from 1, never fewer than one
//!
//! [`ViewState`] holds the results between actions for a front-end.
//!
//! ## Example
//!
//! ```
//! use usage_viewer::{FilterCriteria, apply_filter, load_from_text, paginate, DEFAULT_PAGE_SIZE};
//!
//! let text = "year,month,email,model_id,pages,documents\n\
//!             2024,January,a@x.com,m1,1234,5\n\
//!             2024,February,b@y.com,m2,10,1\n";
//!
//! let records = load_from_text(text);
//! assert_eq!(records.len(), 2);
//!
//! let january = apply_filter(&records, &FilterCriteria::new().with_month("January"));
//! let page = paginate(&january, DEFAULT_PAGE_SIZE, 1);
//!
//! assert_eq!(page.records.len(), 1);
//! assert_eq!(page.total_pages, 1);
//! assert_eq!(page.records[0].email, "a@x.com");
//! ```

#[cfg(feature = "cli")]
pub mod cli;
pub mod error;
pub mod filter;
pub mod format;
pub mod paginator;
pub mod parser;
pub mod record;
pub mod view;

pub use error::{RowError, RowIssue, ViewerError};
pub use filter::{FilterCriteria, apply_filter};
pub use format::format_count;
pub use paginator::{DEFAULT_PAGE_SIZE, PageCursor, PageView, get_page, page_count, paginate};
pub use parser::{ParsedRecords, load_from_text, parse_records};
pub use record::{FIRST_YEAR, MONTHS, Record, RecordSet, canonical_month, year_options};
pub use view::ViewState;
