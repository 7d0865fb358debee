//! Bulk pull over every row of the sheet.

use std::time::Instant;

use crate::app::log_progress;
use crate::columns::domain_column;
use crate::config::{Config, FIRST_DATA_ROW};
use crate::dns::DohClient;
use crate::error_handling::{update_error_stats, LookupError, ProcessingStats, SheetError};
use crate::sheet::Sheet;

use super::row::populate_row;

/// Result of processing one domain during a bulk pull.
#[derive(Debug)]
pub struct DomainOutcome {
    /// Sheet row of the domain
    pub row: usize,
    /// Domain as read from the sheet (trimmed)
    pub domain: String,
    /// `Ok(())` if every record was written, otherwise the failing lookup
    pub result: Result<(), LookupError>,
}

impl DomainOutcome {
    /// Whether every record of the domain was written.
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// Summary of a bulk pull.
#[derive(Debug, Default)]
pub struct PullReport {
    /// Data rows examined (blank ones included)
    pub rows_scanned: usize,
    /// Rows that held a domain
    pub domains_processed: usize,
    /// Domains whose row was fully written
    pub successful: usize,
    /// Domains whose processing stopped on a lookup failure
    pub failed: usize,
    /// Number of sheet commits performed
    pub chunks_committed: usize,
    /// One entry per processed domain, in row order
    pub outcomes: Vec<DomainOutcome>,
    /// Elapsed time in seconds
    pub elapsed_seconds: f64,
}

impl PullReport {
    /// Outcomes of the domains that failed.
    pub fn failures(&self) -> impl Iterator<Item = &DomainOutcome> {
        self.outcomes.iter().filter(|outcome| !outcome.is_success())
    }
}

/// Refreshes every domain of the sheet.
///
/// Data rows are taken in chunks of `config.batch_size`; the sheet is
/// committed after each chunk. Blank domain cells are skipped. A failing
/// domain is logged once with its name and recorded in the report, and the
/// pull moves on to the next row.
///
/// # Errors
///
/// Only a failed sheet commit aborts the pull.
pub async fn pull_all<S: Sheet + ?Sized>(
    sheet: &mut S,
    client: &DohClient,
    config: &Config,
    stats: &ProcessingStats,
) -> Result<PullReport, SheetError> {
    let start_time = Instant::now();
    let mut report = PullReport::default();

    let last_row = sheet.last_row();
    if last_row < FIRST_DATA_ROW {
        log::info!("No domains to process");
        return Ok(report);
    }

    let total_rows = last_row - FIRST_DATA_ROW + 1;
    report.rows_scanned = total_rows;
    let domains = sheet.grid(FIRST_DATA_ROW, domain_column(), total_rows, 1);
    let batch_size = config.effective_batch_size();
    log::info!("Pulling DNS records for {total_rows} row(s) in chunks of {batch_size}");

    for (chunk_index, chunk) in domains.chunks(batch_size).enumerate() {
        let chunk_first_row = FIRST_DATA_ROW + chunk_index * batch_size;

        for (offset, cells) in chunk.iter().enumerate() {
            let row = chunk_first_row + offset;
            let domain = cells.first().map(|cell| cell.trim()).unwrap_or_default();
            if domain.is_empty() {
                continue;
            }

            let result = populate_row(sheet, client, row, domain).await;
            report.domains_processed += 1;
            match &result {
                Ok(()) => report.successful += 1,
                Err(e) => {
                    report.failed += 1;
                    update_error_stats(stats, e);
                    log::warn!("Error processing domain {domain} (row {row}): {e}");
                }
            }
            report.outcomes.push(DomainOutcome {
                row,
                domain: domain.to_string(),
                result,
            });
        }

        sheet.flush()?;
        report.chunks_committed += 1;
        log_progress(
            start_time,
            report.domains_processed,
            report.failed,
            total_rows,
        );
    }

    report.elapsed_seconds = start_time.elapsed().as_secs_f64();
    Ok(report)
}
