//! DNS-over-HTTPS lookups and record formatting.
//!
//! This module provides:
//! - A resolver client for DoH JSON endpoints (`DohClient`)
//! - SPF extraction and derived query names (DMARC, DKIM)
//! - Pure formatters turning answers into sheet cell values
//! - Per-record lookups combining both

mod extract;
mod format;
mod records;
mod resolver;
mod types;

// Re-export public API
pub use extract::{dkim_query_name, dmarc_query_name, extract_spf_records, is_spf_record};
pub use format::{format_dkim, format_dmarc, format_records, format_spf, no_records_message};
pub use records::{lookup_dkim, lookup_dmarc, lookup_record, lookup_spf};
pub use resolver::DohClient;
pub use types::{QueryType, RecordType};

#[cfg(test)]
mod tests;
