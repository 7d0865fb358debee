//! Configuration constants.
//!
//! This module defines the constants used throughout the application: the
//! resolver endpoint, the sheet layout anchors, and the record naming rules.

/// Public DNS-over-HTTPS resolver queried by default (JSON API).
pub const DEFAULT_DOH_ENDPOINT: &str = "https://dns.google/resolve";

/// Media type requested from the resolver.
pub const DNS_JSON_CONTENT_TYPE: &str = "application/dns-json";

/// Default User-Agent string for resolver requests.
///
/// Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str = concat!("domain_records/", env!("CARGO_PKG_VERSION"));

// Bulk pull
/// Number of rows processed between two sheet commits.
/// The store and the resolver both cope better with small bursts of writes.
pub const BATCH_SIZE: usize = 40;

// Sheet layout
/// Row holding the column labels (1-based).
pub const HEADER_ROW: usize = 1;
/// First row holding a domain (1-based).
pub const FIRST_DATA_ROW: usize = 2;

// Record naming
/// Prefix identifying an SPF policy inside a TXT record.
pub const SPF_PREFIX: &str = "v=spf1";
/// Label under which a domain publishes its DMARC policy.
pub const DMARC_PREFIX: &str = "_dmarc";
/// Label under which DKIM selectors are published.
pub const DKIM_SUBDOMAIN: &str = "_domainkey";
/// DKIM selectors probed for every domain, in output order.
///
/// Covers Google Workspace (`google`, `google2`) and Microsoft 365
/// (`selector1`, `selector2`).
pub const DKIM_SELECTORS: &[&str] = &["google", "google2", "selector1", "selector2"];

/// Separator used when several records share one cell.
pub const RECORD_SEPARATOR: &str = ", ";
