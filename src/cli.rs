//! Command-line front-end behind the `usage-view` binary.

use std::fs;
use std::io::{self, Read, Write};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::error::ViewerError;
use crate::filter::FilterCriteria;
use crate::format::format_count;
use crate::paginator::{DEFAULT_PAGE_SIZE, PageView};
use crate::parser::parse_records;
use crate::record::canonical_month;
use crate::view::ViewState;

/// Show one page of a usage CSV, optionally filtered by year, month and email.
#[derive(Parser, Debug)]
#[command(name = "usage-view")]
pub struct Cli {
    /// Usage CSV file (`-` reads stdin)
    pub input: PathBuf,

    /// Keep only rows from this year
    #[arg(long)]
    pub year: Option<i32>,

    /// Keep only rows from this month (full English name, e.g. "March")
    #[arg(long, value_parser = parse_month)]
    pub month: Option<String>,

    /// Keep only rows whose email contains this text (case-insensitive)
    #[arg(long)]
    pub email: Option<String>,

    /// Page to show; out-of-range values snap to the first or last page
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// Rows per page
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    pub page_size: NonZeroUsize,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Log more on stderr (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

/// Counts from one run, reported on stderr by the binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub total: usize,
    pub matched: usize,
    pub skipped: usize,
    pub page_number: usize,
    pub total_pages: usize,
}

fn parse_month(value: &str) -> Result<String, ViewerError> {
    canonical_month(value)
        .map(str::to_string)
        .ok_or_else(|| ViewerError::InvalidMonth(value.to_string()))
}

impl Cli {
    /// The filter described by the command-line flags.
    pub fn criteria(&self) -> FilterCriteria {
        let mut criteria = FilterCriteria::new();
        if let Some(year) = self.year {
            criteria = criteria.with_year(year);
        }
        if let Some(month) = &self.month {
            criteria = criteria.with_month(month.as_str());
        }
        if let Some(email) = &self.email {
            criteria = criteria.with_email(email);
        }
        criteria
    }
}

/// Install the stderr log subscriber. Safe to call more than once.
pub fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

/// Load, filter and paginate according to `cli`, then write the page.
pub fn run(cli: &Cli) -> Result<RunSummary, ViewerError> {
    let text = read_source(&cli.input)?;

    let parsed = parse_records(&text);
    parsed.log_issues();
    let skipped = parsed.skipped();

    let mut view = ViewState::new(parsed.records, cli.page_size);
    view.apply_filter(cli.criteria());
    view.go_to_page(cli.page);

    let page = view.page_view();
    info!(
        total = view.total_records(),
        matched = view.filtered_records().len(),
        page = page.page_number,
        pages = page.total_pages,
        "rendering page"
    );

    let rendered = match cli.format {
        OutputFormat::Table => render_table(&page),
        OutputFormat::Json => serde_json::to_string_pretty(&page)?,
    };
    write_output(cli.output.as_deref(), &rendered)?;

    Ok(RunSummary {
        total: view.total_records(),
        matched: view.filtered_records().len(),
        skipped,
        page_number: page.page_number,
        total_pages: page.total_pages,
    })
}

fn read_source(path: &Path) -> Result<String, ViewerError> {
    let result = if path.as_os_str() == "-" {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text).map(|_| text)
    } else {
        fs::read_to_string(path)
    };
    result.map_err(|source| ViewerError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })
}

fn write_output(path: Option<&Path>, rendered: &str) -> Result<(), ViewerError> {
    match path {
        Some(path) => {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, rendered)?;
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            if !rendered.ends_with('\n') {
                writeln!(stdout)?;
            }
        }
    }
    Ok(())
}

const HEADERS: [&str; 6] = ["Year", "Month", "Email", "Model", "Pages", "Documents"];

/// Render a page as an aligned text table with a "Page N of M" footer.
///
/// Count columns are right-aligned and use thousand separators.
pub fn render_table(page: &PageView<'_>) -> String {
    let rows: Vec<[String; 6]> = page
        .records
        .iter()
        .map(|r| {
            [
                r.year.to_string(),
                r.month.clone(),
                r.email.clone(),
                r.model_id.clone(),
                format_count(r.pages),
                format_count(r.documents),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(str::len);
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &HEADERS.map(str::to_string), &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(rule.join("  ").as_str());
    out.push('\n');
    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    if rows.is_empty() {
        out.push_str("(no matching records)\n");
    }
    out.push_str(&page.label());
    out.push('\n');
    out
}

fn push_row(out: &mut String, cells: &[String; 6], widths: &[usize; 6]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .enumerate()
        .map(|(i, (cell, &w))| {
            // Pages and Documents
            if i >= 4 {
                format!("{cell:>w$}")
            } else {
                format!("{cell:<w$}")
            }
        })
        .collect();
    out.push_str(line.join("  ").trim_end());
    out.push('\n');
}
