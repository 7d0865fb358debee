//! Drivers filling the sheet with DNS records.
//!
//! - `update_single` / `handle_edit`: one row, errors propagate
//! - `pull_all`: every row, per-domain failures are collected and the run
//!   goes on, with a commit every `batch_size` rows

mod pull;
mod row;
mod single;

// Re-export public API
pub use pull::{pull_all, DomainOutcome, PullReport};
pub use row::{populate_row, read_domain};
pub use single::{handle_edit, update_single};
