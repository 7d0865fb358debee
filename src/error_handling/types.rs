//! Error type definitions.
//!
//! This module defines the error types returned by the library and the
//! categories used to count failures during a bulk pull.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

use crate::dns::QueryType;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// The resolver endpoint is not an absolute http(s) URL.
    #[error("Invalid DNS-over-HTTPS endpoint '{endpoint}': {reason}")]
    InvalidEndpointError {
        /// Endpoint as configured
        endpoint: String,
        /// Why it was rejected
        reason: String,
    },
}

/// A single DNS-over-HTTPS lookup failed.
///
/// An empty answer is not an error: it is returned as an empty record list.
#[derive(Error, Debug)]
pub enum LookupError {
    /// The request never produced a response (DNS, connect, TLS, body read).
    #[error("DoH request for {name} ({record_type}) failed: {source}")]
    Transport {
        /// Queried name
        name: String,
        /// Queried type
        record_type: QueryType,
        /// Underlying client error
        #[source]
        source: ReqwestError,
    },

    /// The resolver answered with a non-2xx status.
    #[error("DoH resolver returned HTTP {status} for {name} ({record_type})")]
    Status {
        /// Queried name
        name: String,
        /// Queried type
        record_type: QueryType,
        /// Status code received
        status: reqwest::StatusCode,
    },

    /// The response body was not the expected JSON envelope.
    #[error("Malformed DoH response for {name} ({record_type}): {source}")]
    Decode {
        /// Queried name
        name: String,
        /// Queried type
        record_type: QueryType,
        /// Parse failure
        #[source]
        source: serde_json::Error,
    },
}

impl LookupError {
    /// Name that was being queried when the failure happened.
    pub fn name(&self) -> &str {
        match self {
            LookupError::Transport { name, .. }
            | LookupError::Status { name, .. }
            | LookupError::Decode { name, .. } => name,
        }
    }
}

/// Error types for the tabular store.
#[derive(Error, Debug)]
pub enum SheetError {
    /// Reading or replacing the backing file failed.
    #[error("Sheet I/O error on {path}: {source}")]
    Io {
        /// File involved
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The backing file is not valid CSV.
    #[error("Sheet CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Categories of lookup failures counted during a bulk pull.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    // HTTP/Network errors
    /// Could not connect to the resolver
    DohConnectError,
    /// The resolver did not answer in time
    DohTimeoutError,
    /// Any other failure to obtain a response
    DohTransportError,

    // Resolver response errors
    /// The resolver answered with a non-2xx status
    DohStatusError,
    /// The response body is not the expected JSON envelope
    DohDecodeError,
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    /// Human-readable name used in the error statistics.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::DohConnectError => "DoH connect error",
            ErrorType::DohTimeoutError => "DoH timeout error",
            ErrorType::DohTransportError => "DoH transport error",
            ErrorType::DohStatusError => "DoH HTTP status error",
            ErrorType::DohDecodeError => "DoH response decode error",
        }
    }
}
