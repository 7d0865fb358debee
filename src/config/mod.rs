//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (resolver endpoint, batch size, record naming)
//! - Library configuration and CLI option types

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, LogFormat, LogLevel};
