//! HTTP client initialization.
//!
//! This module builds the DNS-over-HTTPS client used for every lookup.

use reqwest::ClientBuilder;
use url::Url;

use crate::config::Config;
use crate::dns::DohClient;
use crate::error_handling::InitializationError;

/// Initializes the HTTP client with default settings.
///
/// Creates a `reqwest::Client` configured with the User-Agent from the
/// configuration. No request timeout is set: a slow resolver simply slows
/// the run down.
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_client(config: &Config) -> Result<reqwest::Client, InitializationError> {
    let client = ClientBuilder::new()
        .user_agent(config.user_agent.clone())
        .build()?;
    Ok(client)
}

/// Checks that the resolver endpoint is an absolute http(s) URL.
///
/// # Errors
///
/// Returns `InitializationError::InvalidEndpointError` otherwise.
pub fn validate_endpoint(endpoint: &str) -> Result<Url, InitializationError> {
    let url = Url::parse(endpoint).map_err(|e| InitializationError::InvalidEndpointError {
        endpoint: endpoint.to_string(),
        reason: e.to_string(),
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(InitializationError::InvalidEndpointError {
            endpoint: endpoint.to_string(),
            reason: format!("unsupported scheme '{}'", url.scheme()),
        });
    }
    Ok(url)
}

/// Initializes the resolver client from the configuration.
///
/// # Errors
///
/// Returns an error if the endpoint is invalid or the HTTP client cannot be built.
pub fn init_doh_client(config: &Config) -> Result<DohClient, InitializationError> {
    validate_endpoint(&config.endpoint)?;
    let http = init_client(config)?;
    log::debug!("Using DNS-over-HTTPS endpoint {}", config.endpoint);
    Ok(DohClient::new(http, config.endpoint.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_endpoint_accepts_https() {
        assert!(validate_endpoint("https://dns.google/resolve").is_ok());
        assert!(validate_endpoint("http://127.0.0.1:8053/dns-query").is_ok());
    }

    #[test]
    fn test_validate_endpoint_rejects_garbage() {
        assert!(matches!(
            validate_endpoint("dns.google/resolve"),
            Err(InitializationError::InvalidEndpointError { .. })
        ));
        assert!(matches!(
            validate_endpoint("ftp://dns.google/resolve"),
            Err(InitializationError::InvalidEndpointError { .. })
        ));
    }

    #[test]
    fn test_invalid_endpoint_error_names_the_endpoint() {
        let err = validate_endpoint("ftp://dns.google/resolve").unwrap_err();
        assert!(matches!(
            &err,
            InitializationError::InvalidEndpointError { endpoint, .. }
                if endpoint == "ftp://dns.google/resolve"
        ));
        assert!(err
            .to_string()
            .starts_with("Invalid DNS-over-HTTPS endpoint 'ftp://dns.google/resolve'"));
    }

    #[test]
    fn test_init_doh_client_keeps_endpoint() {
        let config = Config {
            endpoint: "https://cloudflare-dns.com/dns-query".to_string(),
            ..Default::default()
        };
        let client = init_doh_client(&config).expect("client should build");
        assert_eq!(client.endpoint(), "https://cloudflare-dns.com/dns-query");
    }
}
