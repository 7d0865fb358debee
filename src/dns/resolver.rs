//! DNS-over-HTTPS resolver client.
//!
//! Sends one JSON-API query per call to the configured resolver endpoint and
//! returns the raw `data` strings of its answer.

use reqwest::header::ACCEPT;

use crate::config::DNS_JSON_CONTENT_TYPE;
use crate::error_handling::LookupError;

use super::types::{DohResponse, QueryType};

/// Client for a DNS-over-HTTPS JSON endpoint (`?name=...&type=...`).
///
/// Holds no state besides the HTTP client and endpoint: no cache, no retry.
#[derive(Debug, Clone)]
pub struct DohClient {
    http: reqwest::Client,
    endpoint: String,
}

impl DohClient {
    /// Wraps `http` for queries against `endpoint`.
    pub fn new(http: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
        }
    }

    /// Resolver endpoint queried by this client.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Queries `name` for records of `record_type`.
    ///
    /// # Returns
    ///
    /// The `data` field of every `Answer` entry, in the order the resolver
    /// sent them. A response without `Answer` yields an empty vector.
    ///
    /// # Errors
    ///
    /// - `LookupError::Transport` if no response could be obtained
    /// - `LookupError::Status` if the resolver answered with a non-2xx status
    /// - `LookupError::Decode` if the body is not the expected JSON envelope
    pub async fn lookup(
        &self,
        name: &str,
        record_type: QueryType,
    ) -> Result<Vec<String>, LookupError> {
        log::debug!("DoH lookup {name} {record_type} via {}", self.endpoint);

        let response = self
            .http
            .get(&self.endpoint)
            .query(&[("name", name), ("type", record_type.as_str())])
            .header(ACCEPT, DNS_JSON_CONTENT_TYPE)
            .send()
            .await
            .map_err(|source| LookupError::Transport {
                name: name.to_string(),
                record_type,
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status {
                name: name.to_string(),
                record_type,
                status,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|source| LookupError::Transport {
                name: name.to_string(),
                record_type,
                source,
            })?;

        let parsed: DohResponse =
            serde_json::from_str(&body).map_err(|source| LookupError::Decode {
                name: name.to_string(),
                record_type,
                source,
            })?;

        let records = parsed.into_data();
        log::trace!("{name} {record_type}: {} record(s)", records.len());
        Ok(records)
    }
}
