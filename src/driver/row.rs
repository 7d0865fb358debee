//! Per-row lookup-and-write sequence.

use crate::columns::{domain_column, record_column, LOOKUP_ORDER};
use crate::dns::{lookup_record, DohClient};
use crate::error_handling::LookupError;
use crate::sheet::Sheet;

/// Reads the domain of `row`, trimmed. `None` when the cell is blank.
pub fn read_domain<S: Sheet + ?Sized>(sheet: &S, row: usize) -> Option<String> {
    let domain = sheet.get_cell(row, domain_column());
    let domain = domain.trim();
    if domain.is_empty() {
        None
    } else {
        Some(domain.to_string())
    }
}

/// Fetches every record of `domain` and writes it into `row`.
///
/// Records are fetched one at a time in `LOOKUP_ORDER` and each cell is
/// written as soon as its value is known. The first failing lookup stops the
/// row; cells written before it are kept.
pub async fn populate_row<S: Sheet + ?Sized>(
    sheet: &mut S,
    client: &DohClient,
    row: usize,
    domain: &str,
) -> Result<(), LookupError> {
    for record_type in LOOKUP_ORDER {
        let value = lookup_record(client, domain, *record_type).await?;
        log::trace!("{domain} {record_type}: {value}");
        sheet.set_cell(row, record_column(*record_type), &value);
    }
    Ok(())
}
