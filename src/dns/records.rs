//! Record lookups for one domain.
//!
//! Each function performs the lookups a sheet column needs and returns the
//! formatted cell value:
//! - Direct types (MX, TXT, A, CNAME, NS, AAAA): one lookup of the domain
//! - SPF: TXT lookup of the domain, filtered on `v=spf1`
//! - DMARC: TXT lookup of `_dmarc.{domain}`
//! - DKIM: TXT lookups of `{selector}._domainkey.{domain}` for each selector

use crate::config::DKIM_SELECTORS;
use crate::error_handling::LookupError;

use super::extract::{dkim_query_name, dmarc_query_name};
use super::format::{format_dkim, format_dmarc, format_records, format_spf};
use super::resolver::DohClient;
use super::types::{QueryType, RecordType};

/// Looks up `record_type` for `domain` and returns the cell value.
pub async fn lookup_record(
    client: &DohClient,
    domain: &str,
    record_type: RecordType,
) -> Result<String, LookupError> {
    match record_type {
        RecordType::Spf => lookup_spf(client, domain).await,
        RecordType::Dmarc => lookup_dmarc(client, domain).await,
        RecordType::Dkim => lookup_dkim(client, domain).await,
        direct => {
            let records = client.lookup(domain, direct.query_type()).await?;
            Ok(format_records(direct.label(), &records))
        }
    }
}

/// SPF cell: the domain's TXT records starting with `v=spf1`.
pub async fn lookup_spf(client: &DohClient, domain: &str) -> Result<String, LookupError> {
    let txt_records = client.lookup(domain, QueryType::Txt).await?;
    Ok(format_spf(&txt_records))
}

/// DMARC cell: every TXT record at `_dmarc.{domain}`.
pub async fn lookup_dmarc(client: &DohClient, domain: &str) -> Result<String, LookupError> {
    let txt_records = client
        .lookup(&dmarc_query_name(domain), QueryType::Txt)
        .await?;
    Ok(format_dmarc(&txt_records))
}

/// DKIM cell: `"{selector}: {records}"` for each selector that has records.
///
/// Selectors are probed one after the other; the first failing probe aborts
/// the whole cell.
pub async fn lookup_dkim(client: &DohClient, domain: &str) -> Result<String, LookupError> {
    let mut selectors = Vec::with_capacity(DKIM_SELECTORS.len());
    for selector in DKIM_SELECTORS {
        let records = client
            .lookup(&dkim_query_name(selector, domain), QueryType::Txt)
            .await?;
        selectors.push((*selector, records));
    }
    Ok(format_dkim(&selectors))
}
