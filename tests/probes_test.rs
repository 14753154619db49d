//! Integration tests for the XSS and SQL injection probes

use vulnx::http::HttpClient;
use vulnx::models::{ScanConfig, VulnKind};
use vulnx::scanner::sqli::SqliProbe;
use vulnx::scanner::xss::{XssProbe, XSS_PAYLOAD};
use vulnx::scanner::Probe;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_config(target: &str) -> ScanConfig {
    ScanConfig {
        target: target.to_string(),
        max_depth: 1,
        timeout_secs: 5,
        user_agent: "VulnX-Test/0.1.0".to_string(),
    }
}

#[tokio::test]
async fn test_xss_flags_verbatim_reflection() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/page"))
        .and(query_param("input", XSS_PAYLOAD))
        .respond_with(ResponseTemplate::new(200).set_body_string(format!(
            "<html>You searched for: {XSS_PAYLOAD}</html>"
        )))
        .expect(1)
        .mount(&mock_server)
        .await;

    let base_url = format!("{}/page", mock_server.uri());
    let config = test_config(&mock_server.uri());
    let client = HttpClient::from_config(&config).expect("client");

    let findings = XssProbe.probe(&client, &base_url).await;

    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].kind, VulnKind::Xss);
    // The finding carries the base URL, not the marker test URL
    assert_eq!(findings[0].url, base_url);
}

#[tokio::test]
async fn test_xss_ignores_encoded_reflection() {
    let mock_server = MockServer::start().await;

    // Output-encoded reflection must not count
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            "&lt;script&gt;alert('XSS')&lt;/script&gt;",
        ))
        .mount(&mock_server)
        .await;

    let config = test_config(&mock_server.uri());
    let client = HttpClient::from_config(&config).expect("client");

    let findings = XssProbe.probe(&client, &mock_server.uri()).await;
    assert!(findings.is_empty());
}

#[tokio::test]
async fn test_sqli_stops_at_first_matching_payload() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/item"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("You have an error in your SQL syntax"),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let base_url = format!("{}/item", mock_server.uri());
    let config = test_config(&mock_server.uri());
    let client = HttpClient::from_config(&config).expect("client");

    let findings = SqliProbe.probe(&client, &base_url).await;

    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].kind, VulnKind::SqlInjection);
    assert_eq!(findings[0].url, format!("{base_url}?id=' OR '1'='1"));
}

#[tokio::test]
async fn test_sqli_tries_all_payloads_on_clean_responses() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/item"))
        .respond_with(ResponseTemplate::new(200).set_body_string("hello world"))
        .expect(3)
        .mount(&mock_server)
        .await;

    let base_url = format!("{}/item", mock_server.uri());
    let config = test_config(&mock_server.uri());
    let client = HttpClient::from_config(&config).expect("client");

    let findings = SqliProbe.probe(&client, &base_url).await;
    assert!(findings.is_empty());
}

#[tokio::test]
async fn test_sqli_appends_to_existing_query_string() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/item"))
        .and(query_param("x", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("mysql error near line 1"))
        .mount(&mock_server)
        .await;

    let base_url = format!("{}/item?x=1", mock_server.uri());
    let config = test_config(&mock_server.uri());
    let client = HttpClient::from_config(&config).expect("client");

    let findings = SqliProbe.probe(&client, &base_url).await;

    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].url, format!("{base_url}&id=' OR '1'='1"));
}

#[tokio::test]
async fn test_probe_errors_swallowed() {
    let config = test_config("http://127.0.0.1:1");
    let client = HttpClient::from_config(&config).expect("client");

    assert!(XssProbe.probe(&client, "http://127.0.0.1:1/x").await.is_empty());
    assert!(SqliProbe.probe(&client, "http://127.0.0.1:1/x").await.is_empty());
}
