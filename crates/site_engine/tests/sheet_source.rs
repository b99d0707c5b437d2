use std::time::Duration;

use pretty_assertions::assert_eq;
use site_engine::{http_client, FailureKind, FetchSettings, JobSource, SheetJobSource};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn source_for(server: &MockServer, route: &str, settings: FetchSettings) -> SheetJobSource {
    let client = http_client(&settings).expect("client");
    SheetJobSource::new(client, format!("{}{route}", server.uri()), settings.max_bytes)
}

#[tokio::test]
async fn fetches_rows_as_records() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/sheet"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"[{"Title":"ML Engineer","Company":"Acme","Location":"Remote","Link":"https://x"}]"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    let source = source_for(&server, "/api/v1/sheet", FetchSettings::default());
    let records = source.fetch_jobs().await.expect("fetch ok");

    assert_eq!(records.len(), 1);
    let keys: Vec<_> = records[0].fields().map(|(key, _)| key).collect();
    assert_eq!(keys, vec!["Title", "Company", "Location", "Link"]);
}

#[tokio::test]
async fn http_status_failure_mentions_code() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let source = source_for(&server, "/broken", FetchSettings::default());
    let err = source.fetch_jobs().await.unwrap_err();

    assert_eq!(err.kind, FailureKind::HttpStatus(500));
    assert_eq!(err.message, "Failed to fetch data: 500");
}

#[tokio::test]
async fn non_array_payload_is_a_decode_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/object"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(r#"{"error":"quota"}"#, "application/json"),
        )
        .mount(&server)
        .await;

    let source = source_for(&server, "/object", FetchSettings::default());
    let err = source.fetch_jobs().await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Decode);
}

#[tokio::test]
async fn slow_upstream_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_string("[]"),
        )
        .mount(&server)
        .await;

    let settings = FetchSettings {
        request_timeout: Duration::from_millis(50),
        ..FetchSettings::default()
    };
    let source = source_for(&server, "/slow", settings);
    let err = source.fetch_jobs().await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn oversized_payload_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/large"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"[{"a":"0123456789"}]"#))
        .mount(&server)
        .await;

    let settings = FetchSettings {
        max_bytes: 10,
        ..FetchSettings::default()
    };
    let source = source_for(&server, "/large", settings);
    let err = source.fetch_jobs().await.unwrap_err();
    assert!(
        matches!(err.kind, FailureKind::TooLarge { max_bytes: 10, .. }),
        "{err:?}"
    );
}

#[tokio::test]
async fn unreachable_host_is_a_network_failure() {
    let settings = FetchSettings {
        connect_timeout: Duration::from_millis(200),
        request_timeout: Duration::from_secs(2),
        ..FetchSettings::default()
    };
    let client = http_client(&settings).expect("client");
    // Bind then release a port so nothing is listening on it.
    let addr = std::net::TcpListener::bind("127.0.0.1:0")
        .and_then(|listener| listener.local_addr())
        .expect("free port");
    let url = format!("http://{addr}/jobs");
    let source = SheetJobSource::new(client, url, settings.max_bytes);
    let err = source.fetch_jobs().await.unwrap_err();
    assert!(
        matches!(err.kind, FailureKind::Network | FailureKind::Timeout),
        "{err:?}"
    );
    assert!(!err.message.is_empty());
}

#[tokio::test]
async fn invalid_url_is_reported() {
    let client = http_client(&FetchSettings::default()).expect("client");
    let source = SheetJobSource::new(client, "not a url", 1024);
    let err = source.fetch_jobs().await.unwrap_err();
    assert_eq!(err.kind, FailureKind::InvalidUrl);
}
