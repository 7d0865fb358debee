//! domain_records library: DNS records for a sheet of domains
//!
//! This library fills a spreadsheet, one domain per row, with the MX, TXT,
//! SPF, A, CNAME, NS, DKIM, DMARC and AAAA records of each domain. Records
//! are fetched one at a time from a public DNS-over-HTTPS resolver.
//!
//! # Example
//!
//! ```no_run
//! use domain_records::{run_pull, Config};
//! use std::path::Path;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let report = run_pull(&Config::default(), Path::new("domains.csv")).await?;
//! println!("{} succeeded, {} failed", report.successful, report.failed);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! Lookups are async and require a Tokio runtime.

#![warn(missing_docs)]

mod app;
pub mod columns;
pub mod config;
pub mod dns;
pub mod driver;
pub mod error_handling;
pub mod initialization;
pub mod sheet;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use driver::{handle_edit, pull_all, update_single, DomainOutcome, PullReport};
pub use run::{run_headers, run_pull, run_update};
pub use sheet::{CsvSheet, MemorySheet, Sheet};

// Entry points used by the CLI
mod run {
    use std::path::Path;

    use anyhow::{Context, Result};
    use log::info;

    use crate::app::{print_error_statistics, print_pull_summary};
    use crate::config::Config;
    use crate::driver::{pull_all, update_single, PullReport};
    use crate::error_handling::ProcessingStats;
    use crate::initialization::init_doh_client;
    use crate::sheet::{ensure_headers, CsvSheet, Sheet};

    /// Pulls DNS records for every domain of the CSV sheet at `path`.
    ///
    /// Writes the header row if needed, then runs the chunked bulk pull.
    /// Per-domain failures are reported, not returned as errors.
    ///
    /// # Errors
    ///
    /// Returns an error if the sheet cannot be opened or committed, or if the
    /// resolver client cannot be initialized.
    pub async fn run_pull(config: &Config, path: &Path) -> Result<PullReport> {
        let client = init_doh_client(config).context("Failed to initialize DoH client")?;
        let mut sheet = CsvSheet::open(path)
            .with_context(|| format!("Failed to open sheet {}", path.display()))?;
        if ensure_headers(&mut sheet) {
            info!("Wrote header row to {}", path.display());
        }

        let stats = ProcessingStats::new();
        let report = pull_all(&mut sheet, &client, config, &stats)
            .await
            .context("Bulk pull aborted")?;

        print_error_statistics(&stats);
        print_pull_summary(&report);
        Ok(report)
    }

    /// Refreshes the DNS records of a single row of the CSV sheet at `path`.
    ///
    /// Returns `false` when the row holds no domain.
    ///
    /// # Errors
    ///
    /// Returns an error if any lookup fails; cells written before the failure
    /// are still committed.
    pub async fn run_update(config: &Config, path: &Path, row: usize) -> Result<bool> {
        let client = init_doh_client(config).context("Failed to initialize DoH client")?;
        let mut sheet = CsvSheet::open(path)
            .with_context(|| format!("Failed to open sheet {}", path.display()))?;
        update_single(&mut sheet, &client, row).await
    }

    /// Writes the header row of the CSV sheet at `path`.
    ///
    /// Returns whether the header row changed.
    ///
    /// # Errors
    ///
    /// Returns an error if the sheet cannot be opened or committed.
    pub fn run_headers(path: &Path) -> Result<bool> {
        let mut sheet = CsvSheet::open(path)
            .with_context(|| format!("Failed to open sheet {}", path.display()))?;
        let changed = ensure_headers(&mut sheet);
        sheet.flush().context("Failed to commit sheet")?;
        Ok(changed)
    }
}
