//! DNS module tests.
//!
//! A `wiremock` server stands in for the DoH resolver.

use super::*;
use crate::error_handling::LookupError;
use serde_json::{json, Value};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Builds a resolver JSON body carrying the given `data` strings.
fn answer_body(records: &[&str]) -> Value {
    let answers: Vec<Value> = records
        .iter()
        .map(|data| json!({"name": "example.com.", "type": 16, "TTL": 300, "data": data}))
        .collect();
    json!({"Status": 0, "TC": false, "Answer": answers})
}

/// Mounts a low-priority mock answering NXDOMAIN (no `Answer`) to any query.
async fn mount_empty_fallback(server: &MockServer) {
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"Status": 3})))
        .with_priority(10)
        .mount(server)
        .await;
}

async fn mount_answer(server: &MockServer, name: &str, record_type: &str, records: &[&str]) {
    Mock::given(method("GET"))
        .and(path("/resolve"))
        .and(query_param("name", name))
        .and(query_param("type", record_type))
        .respond_with(ResponseTemplate::new(200).set_body_json(answer_body(records)))
        .mount(server)
        .await;
}

fn test_client(server: &MockServer) -> DohClient {
    DohClient::new(
        reqwest::Client::new(),
        format!("{}/resolve", server.uri()),
    )
}

#[tokio::test]
async fn test_lookup_sends_name_type_and_accept_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/resolve"))
        .and(query_param("name", "example.com"))
        .and(query_param("type", "MX"))
        .and(header("accept", "application/dns-json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(answer_body(&["20 alt.example.com.", "10 mx.example.com."])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let records = test_client(&server)
        .lookup("example.com", QueryType::Mx)
        .await
        .expect("lookup should succeed");

    assert_eq!(records, vec!["20 alt.example.com.", "10 mx.example.com."]);
}

#[tokio::test]
async fn test_lookup_without_answer_is_empty() {
    let server = MockServer::start().await;
    mount_empty_fallback(&server).await;

    let records = test_client(&server)
        .lookup("nothing.example", QueryType::Aaaa)
        .await
        .expect("missing Answer is not an error");

    assert!(records.is_empty());
}

#[tokio::test]
async fn test_lookup_non_2xx_is_status_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = test_client(&server)
        .lookup("example.com", QueryType::A)
        .await
        .unwrap_err();

    match err {
        LookupError::Status { status, name, .. } => {
            assert_eq!(status.as_u16(), 503);
            assert_eq!(name, "example.com");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_lookup_malformed_body_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = test_client(&server)
        .lookup("example.com", QueryType::Txt)
        .await
        .unwrap_err();

    assert!(matches!(err, LookupError::Decode { .. }), "got {err:?}");
}

#[tokio::test]
async fn test_lookup_unreachable_resolver_is_transport_error() {
    // Bind then drop a listener so the port is known to be closed.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = DohClient::new(reqwest::Client::new(), format!("http://{addr}/resolve"));
    let err = client.lookup("example.com", QueryType::Ns).await.unwrap_err();

    assert!(matches!(err, LookupError::Transport { .. }), "got {err:?}");
}

#[tokio::test]
async fn test_lookup_record_direct_type_placeholder() {
    let server = MockServer::start().await;
    mount_empty_fallback(&server).await;

    let value = lookup_record(&test_client(&server), "example.com", RecordType::Cname)
        .await
        .unwrap();

    assert_eq!(value, "No CNAME records found");
}

#[tokio::test]
async fn test_lookup_spf_filters_txt() {
    let server = MockServer::start().await;
    mount_answer(
        &server,
        "example.com",
        "TXT",
        &["v=spf1 include:_spf.example.com ~all", "other=value"],
    )
    .await;

    let value = lookup_spf(&test_client(&server), "example.com").await.unwrap();

    assert_eq!(value, "v=spf1 include:_spf.example.com ~all");
}

#[tokio::test]
async fn test_lookup_dmarc_queries_dmarc_label_unfiltered() {
    let server = MockServer::start().await;
    mount_empty_fallback(&server).await;
    mount_answer(&server, "_dmarc.example.com", "TXT", &["whatever is here"]).await;

    let value = lookup_dmarc(&test_client(&server), "example.com").await.unwrap();

    assert_eq!(value, "whatever is here");
}

#[tokio::test]
async fn test_lookup_dkim_aggregates_found_selectors_in_order() {
    let server = MockServer::start().await;
    mount_empty_fallback(&server).await;
    mount_answer(
        &server,
        "selector2._domainkey.example.com",
        "TXT",
        &["v=DKIM1; p=BBB"],
    )
    .await;
    mount_answer(
        &server,
        "google._domainkey.example.com",
        "TXT",
        &["v=DKIM1; k=rsa; p=AAA"],
    )
    .await;

    let value = lookup_dkim(&test_client(&server), "example.com").await.unwrap();

    assert_eq!(
        value,
        "google: v=DKIM1; k=rsa; p=AAA, selector2: v=DKIM1; p=BBB"
    );
}

#[tokio::test]
async fn test_lookup_dkim_without_records_is_empty() {
    let server = MockServer::start().await;
    mount_empty_fallback(&server).await;

    let value = lookup_dkim(&test_client(&server), "example.com").await.unwrap();

    assert_eq!(value, "");
}
