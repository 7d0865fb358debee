//! Edit-triggered refresh of a single row.

use anyhow::{Context, Result};

use crate::columns::domain_column;
use crate::config::FIRST_DATA_ROW;
use crate::dns::DohClient;
use crate::sheet::Sheet;

use super::row::{populate_row, read_domain};

/// Refreshes the DNS records of one row.
///
/// A blank domain cell is a no-op (`Ok(false)`). Lookup failures are not
/// handled here: they propagate to the caller, after whatever cells were
/// already written have been committed.
///
/// # Errors
///
/// Returns an error if a lookup fails or the sheet cannot be committed.
pub async fn update_single<S: Sheet + ?Sized>(
    sheet: &mut S,
    client: &DohClient,
    row: usize,
) -> Result<bool> {
    let Some(domain) = read_domain(sheet, row) else {
        log::debug!("Row {row} has no domain, nothing to update");
        return Ok(false);
    };

    log::info!("Updating DNS records for {domain} (row {row})");
    let result = populate_row(sheet, client, row, &domain).await;
    sheet.flush().context("Failed to commit sheet")?;
    result.with_context(|| format!("Failed to update DNS records for {domain}"))?;
    Ok(true)
}

/// Reacts to a cell edit.
///
/// Only edits of the domain column below the header row trigger a refresh.
/// Returns whether the row was refreshed.
///
/// # Errors
///
/// Propagates the errors of [`update_single`].
pub async fn handle_edit<S: Sheet + ?Sized>(
    sheet: &mut S,
    client: &DohClient,
    row: usize,
    column: usize,
) -> Result<bool> {
    if column != domain_column() || row < FIRST_DATA_ROW {
        log::trace!("Ignoring edit of cell ({row}, {column})");
        return Ok(false);
    }
    update_single(sheet, client, row).await
}
