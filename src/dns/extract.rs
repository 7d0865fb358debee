//! DNS record extraction utilities.
//!
//! This module provides functions to pick specific policies out of TXT record
//! collections and to build the query names of derived records.

use crate::config::{DKIM_SUBDOMAIN, DMARC_PREFIX, SPF_PREFIX};

/// Whether a raw TXT value is an SPF policy.
///
/// Resolvers return TXT data either bare or wrapped in double quotes, so a
/// single leading `"` is ignored.
pub fn is_spf_record(txt: &str) -> bool {
    txt.strip_prefix('"').unwrap_or(txt).starts_with(SPF_PREFIX)
}

/// Extracts the SPF records from TXT records, preserving their order.
///
/// Values are returned untouched (quotes included).
pub fn extract_spf_records(txt_records: &[String]) -> Vec<&str> {
    txt_records
        .iter()
        .map(String::as_str)
        .filter(|txt| is_spf_record(txt))
        .collect()
}

/// Name under which `domain` publishes its DMARC policy.
pub fn dmarc_query_name(domain: &str) -> String {
    format!("{DMARC_PREFIX}.{domain}")
}

/// Name under which `domain` publishes the DKIM key of `selector`.
pub fn dkim_query_name(selector: &str, domain: &str) -> String {
    format!("{selector}.{DKIM_SUBDOMAIN}.{domain}")
}
