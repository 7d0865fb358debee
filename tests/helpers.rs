// Shared test helpers: a wiremock server standing in for the DoH resolver.
//
// Every test file includes this module with `#[path = "helpers.rs"]`.

use std::time::Duration;

use domain_records::dns::DohClient;
use domain_records::Config;
use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Builds a resolver JSON body carrying the given `data` strings.
pub fn answer_body(records: &[&str]) -> Value {
    let answers: Vec<Value> = records
        .iter()
        .map(|data| json!({"name": "example.", "type": 1, "TTL": 60, "data": data}))
        .collect();
    json!({"Status": 0, "Answer": answers})
}

/// Starts a resolver that answers NXDOMAIN (no `Answer`) unless a more
/// specific mock matches.
pub async fn start_resolver() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"Status": 3})))
        .with_priority(10)
        .mount(&server)
        .await;
    server
}

pub async fn mount_answer(server: &MockServer, name: &str, record_type: &str, records: &[&str]) {
    Mock::given(method("GET"))
        .and(path("/resolve"))
        .and(query_param("name", name))
        .and(query_param("type", record_type))
        .respond_with(ResponseTemplate::new(200).set_body_json(answer_body(records)))
        .mount(server)
        .await;
}

/// Makes every query for `name` fail with the given HTTP status.
///
/// Takes precedence over answers mounted for the same name.
#[allow(dead_code)]
pub async fn mount_failure(server: &MockServer, name: &str, status: u16) {
    Mock::given(method("GET"))
        .and(path("/resolve"))
        .and(query_param("name", name))
        .respond_with(ResponseTemplate::new(status))
        .with_priority(1)
        .mount(server)
        .await;
}

/// Makes every query for `name` hang for `delay` before answering.
///
/// Paired with a client whose timeout is shorter than `delay`, this gives a
/// transport failure for that name only.
#[allow(dead_code)]
pub async fn mount_stalled(server: &MockServer, name: &str, delay: Duration) {
    Mock::given(method("GET"))
        .and(path("/resolve"))
        .and(query_param("name", name))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(answer_body(&[]))
                .set_delay(delay),
        )
        .with_priority(1)
        .mount(server)
        .await;
}

/// Publishes a typical set of records for `domain` (no CNAME).
pub async fn mount_full_domain(server: &MockServer, domain: &str) {
    let mx = [format!("10 mx1.{domain}."), format!("20 mx2.{domain}.")];
    let spf = format!("\"v=spf1 include:_spf.{domain} ~all\"");
    let ns = [format!("ns1.{domain}."), format!("ns2.{domain}.")];

    mount_answer(server, domain, "MX", &[&mx[0], &mx[1]]).await;
    mount_answer(server, domain, "TXT", &[&spf, "\"site-verification=abc\""]).await;
    mount_answer(server, domain, "A", &["192.0.2.10"]).await;
    mount_answer(server, domain, "AAAA", &["2001:db8::10"]).await;
    mount_answer(server, domain, "NS", &[&ns[0], &ns[1]]).await;
    mount_answer(
        server,
        &format!("google._domainkey.{domain}"),
        "TXT",
        &["\"v=DKIM1; k=rsa; p=KEY\""],
    )
    .await;
    mount_answer(
        server,
        &format!("_dmarc.{domain}"),
        "TXT",
        &["\"v=DMARC1; p=none\""],
    )
    .await;
}

/// Row contents (columns 1 to 10) expected for a domain set up with
/// `mount_full_domain`.
pub fn expected_row(domain: &str) -> Vec<String> {
    vec![
        domain.to_string(),
        format!("10 mx1.{domain}., 20 mx2.{domain}."),
        format!("\"v=spf1 include:_spf.{domain} ~all\", \"site-verification=abc\""),
        format!("\"v=spf1 include:_spf.{domain} ~all\""),
        "192.0.2.10".to_string(),
        "No CNAME records found".to_string(),
        format!("ns1.{domain}., ns2.{domain}."),
        "google: \"v=DKIM1; k=rsa; p=KEY\"".to_string(),
        "\"v=DMARC1; p=none\"".to_string(),
        "2001:db8::10".to_string(),
    ]
}

pub fn endpoint_for(server: &MockServer) -> String {
    format!("{}/resolve", server.uri())
}

#[allow(dead_code)]
pub fn client_for(server: &MockServer) -> DohClient {
    DohClient::new(reqwest::Client::new(), endpoint_for(server))
}

/// Client that gives up on requests after `timeout`.
#[allow(dead_code)]
pub fn client_with_timeout(server: &MockServer, timeout: Duration) -> DohClient {
    let http = reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .expect("client should build");
    DohClient::new(http, endpoint_for(server))
}

#[allow(dead_code)]
pub fn config_for(server: &MockServer, batch_size: usize) -> Config {
    Config {
        endpoint: endpoint_for(server),
        batch_size,
        ..Default::default()
    }
}
