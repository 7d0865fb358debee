//! Main application modules.
//!
//! This module provides progress logging and statistics printing used by
//! the bulk pull and the CLI.

pub mod logging;
pub mod statistics;

// Re-export public API
pub use logging::log_progress;
pub use statistics::{print_error_statistics, print_pull_summary};
