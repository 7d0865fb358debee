//! Error handling and processing statistics.
//!
//! This module provides:
//! - Error type definitions (initialization, lookup, sheet)
//! - Failure categorization
//! - Processing statistics tracking

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::{categorize_lookup_error, update_error_stats};
pub use stats::ProcessingStats;
pub use types::{ErrorType, InitializationError, LookupError, SheetError};
