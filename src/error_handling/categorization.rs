//! Error categorization.
//!
//! Maps lookup failures onto the `ErrorType` counters.

use super::stats::ProcessingStats;
use super::types::{ErrorType, LookupError};

/// Categorizes a `LookupError` into an `ErrorType`.
pub fn categorize_lookup_error(error: &LookupError) -> ErrorType {
    match error {
        LookupError::Transport { source, .. } => {
            if source.is_timeout() {
                ErrorType::DohTimeoutError
            } else if source.is_connect() {
                ErrorType::DohConnectError
            } else {
                ErrorType::DohTransportError
            }
        }
        LookupError::Status { .. } => ErrorType::DohStatusError,
        LookupError::Decode { .. } => ErrorType::DohDecodeError,
    }
}

/// Updates processing statistics based on a `LookupError`.
pub fn update_error_stats(stats: &ProcessingStats, error: &LookupError) {
    stats.increment_error(categorize_lookup_error(error));
}
