//! CLI tool to show one filtered page of a usage CSV.
//!
//! Usage:
//!   usage-view <data.csv> [--year Y] [--month M] [--email TEXT] [--page N]
//!   usage-view <data.csv> --format json -o page.json

use clap::Parser;
use std::process;
use usage_viewer::cli::{Cli, init_logging, run};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(summary) => {
            if cli.verbose > 0 {
                eprintln!(
                    "Records:  {} loaded, {} skipped, {} matched",
                    summary.total, summary.skipped, summary.matched
                );
                eprintln!(
                    "Page:     {} of {}",
                    summary.page_number, summary.total_pages
                );
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}
