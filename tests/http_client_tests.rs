//! Integration tests for the HTTP executor.
//!
//! These tests run the executor against a local mock server and verify
//! authentication, retry classification, timeouts, cancellation and
//! rate-limit bookkeeping.

use std::time::{Duration, Instant};

use riot_api::clients::{HttpClient, HttpError, HttpMethod, HttpRequest, TransientError};
use riot_api::{ApiKey, HostUrl, RetryPolicy, RiotConfig, RiotConfigBuilder};
use tokio_util::sync::CancellationToken;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const CHAMPIONS_URL: &str = "https://na1.api.riotgames.com/lol/platform/v3/champions";
const CHAMPIONS_PATH: &str = "/lol/platform/v3/champions";

/// Creates a config builder pointed at the mock server with fast retries.
fn config_for(server: &MockServer) -> RiotConfigBuilder {
    RiotConfig::builder()
        .api_key(ApiKey::new("RGAPI-test-key").unwrap())
        .api_host(HostUrl::new(server.uri()).unwrap())
        .retry_base_delay(Duration::from_millis(1))
}

fn client_for(server: &MockServer) -> HttpClient {
    HttpClient::new(&config_for(server).build().unwrap()).unwrap()
}

fn champions_request() -> HttpRequest {
    HttpRequest::builder(HttpMethod::Get, CHAMPIONS_URL)
        .rate_limit_key("champion.all")
        .build()
        .unwrap()
}

// ============================================================================
// Request Tests
// ============================================================================

#[tokio::test]
async fn test_request_sends_api_key_and_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(CHAMPIONS_PATH))
        .and(header("X-Riot-Token", "RGAPI-test-key"))
        .and(query_param("freeToPlay", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"champions": []}"#))
        .expect(1)
        .mount(&server)
        .await;

    let request = HttpRequest::builder(HttpMethod::Get, CHAMPIONS_URL)
        .query_param("freeToPlay", "true")
        .build()
        .unwrap();
    let response = client_for(&server).request(&request).await.unwrap();

    assert_eq!(response.code, 200);
    assert_eq!(response.body, r#"{"champions": []}"#);
}

#[tokio::test]
async fn test_empty_success_body_is_returned() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(CHAMPIONS_PATH))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let response = client_for(&server)
        .request(&champions_request())
        .await
        .unwrap();

    assert!(response.is_ok());
    assert!(response.body.is_empty());
}

// ============================================================================
// Retry Tests
// ============================================================================

#[tokio::test]
async fn test_server_errors_exhaust_retry_budget() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(CHAMPIONS_PATH))
        .respond_with(ResponseTemplate::new(503))
        .expect(3)
        .mount(&server)
        .await;

    let client = HttpClient::new(&config_for(&server).max_retries(2).build().unwrap()).unwrap();
    let error = client.request(&champions_request()).await.unwrap_err();

    match error {
        HttpError::MaxRetries(e) => {
            assert_eq!(e.attempts, 3);
            assert!(matches!(e.last, TransientError::Server { code: 503, .. }));
        }
        other => panic!("Expected MaxRetries, got {other:?}"),
    }
}

#[tokio::test]
async fn test_transient_failure_then_success() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(CHAMPIONS_PATH))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(CHAMPIONS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .expect(1)
        .mount(&server)
        .await;

    let response = client_for(&server)
        .request(&champions_request())
        .await
        .unwrap();
    assert_eq!(response.body, "[]");
}

#[tokio::test]
async fn test_not_found_is_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(CHAMPIONS_PATH))
        .respond_with(ResponseTemplate::new(404).set_body_string(
            r#"{"status": {"message": "Data not found", "status_code": 404}}"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    let error = client_for(&server)
        .request(&champions_request())
        .await
        .unwrap_err();

    assert!(error.is_not_found());
    match error {
        HttpError::Response(e) => assert_eq!(e.message, "Data not found"),
        other => panic!("Expected Response, got {other:?}"),
    }
}

#[tokio::test]
async fn test_client_errors_are_never_retried() {
    for status in [400, 401, 403, 404] {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(CHAMPIONS_PATH))
            .respond_with(ResponseTemplate::new(status))
            .expect(1)
            .mount(&server)
            .await;

        let error = client_for(&server)
            .request(&champions_request())
            .await
            .unwrap_err();

        match error {
            HttpError::Response(e) => assert_eq!(e.code, status),
            other => panic!("Expected Response for {status}, got {other:?}"),
        }
        server.verify().await;
    }
}

#[tokio::test]
async fn test_transient_statuses_use_whole_retry_budget() {
    for status in [500, 502, 503, 429] {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(CHAMPIONS_PATH))
            .respond_with(ResponseTemplate::new(status))
            .expect(3)
            .mount(&server)
            .await;

        let client =
            HttpClient::new(&config_for(&server).max_retries(2).build().unwrap()).unwrap();
        let error = client.request(&champions_request()).await.unwrap_err();

        match error {
            HttpError::MaxRetries(e) => {
                assert_eq!(e.attempts, 3, "attempts for {status}");
                assert_eq!(e.last.status(), Some(status));
            }
            other => panic!("Expected MaxRetries for {status}, got {other:?}"),
        }
        server.verify().await;
    }
}

#[tokio::test]
async fn test_connection_refused_is_retried_as_network_failure() {
    // Reserve a port, then free it so nothing listens there
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let config = RiotConfig::builder()
        .api_key(ApiKey::new("RGAPI-test-key").unwrap())
        .api_host(HostUrl::new(format!("http://127.0.0.1:{port}")).unwrap())
        .retry_base_delay(Duration::from_millis(1))
        .max_retries(2)
        .build()
        .unwrap();
    let error = HttpClient::new(&config)
        .unwrap()
        .request(&champions_request())
        .await
        .unwrap_err();

    assert!(error.is_transient());
    match error {
        HttpError::MaxRetries(e) => {
            assert_eq!(e.attempts, 3);
            assert!(matches!(e.last, TransientError::Network(_)));
        }
        other => panic!("Expected MaxRetries, got {other:?}"),
    }
}

#[tokio::test]
async fn test_rate_limited_response_honors_retry_after() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(CHAMPIONS_PATH))
        .respond_with(
            ResponseTemplate::new(429)
                .insert_header("Retry-After", "0")
                .insert_header("X-Rate-Limit-Type", "application"),
        )
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(CHAMPIONS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(1)
        .mount(&server)
        .await;

    let response = client_for(&server)
        .request(&champions_request())
        .await
        .unwrap();
    assert_eq!(response.code, 200);
}

#[tokio::test]
async fn test_disabled_retry_class_fails_on_first_attempt() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(CHAMPIONS_PATH))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let policy = RetryPolicy {
        retry_on_server_error: false,
        ..RetryPolicy::default()
    };
    let config = config_for(&server).retry_policy(policy).build().unwrap();
    let error = HttpClient::new(&config)
        .unwrap()
        .request(&champions_request())
        .await
        .unwrap_err();

    match error {
        HttpError::MaxRetries(e) => assert_eq!(e.attempts, 1),
        other => panic!("Expected MaxRetries, got {other:?}"),
    }
}

#[tokio::test]
async fn test_slow_response_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(CHAMPIONS_PATH))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
        .mount(&server)
        .await;

    let request = HttpRequest::builder(HttpMethod::Get, CHAMPIONS_URL)
        .timeout(Duration::from_millis(50))
        .max_retries(0)
        .build()
        .unwrap();
    let error = client_for(&server).request(&request).await.unwrap_err();

    assert!(error.is_timeout());
    assert!(error.is_transient());
}

// ============================================================================
// Cancellation Tests
// ============================================================================

#[tokio::test]
async fn test_cancellation_interrupts_in_flight_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(CHAMPIONS_PATH))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&server)
        .await;

    let token = CancellationToken::new();
    let request = HttpRequest::builder(HttpMethod::Get, CHAMPIONS_URL)
        .cancellation(token.clone())
        .build()
        .unwrap();

    let canceller = tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        token.cancel();
    });

    let started = Instant::now();
    let error = client_for(&server).request(&request).await.unwrap_err();
    canceller.await.unwrap();

    assert!(error.is_cancelled());
    assert!(started.elapsed() < Duration::from_secs(2));
}

#[tokio::test]
async fn test_cancelled_token_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let token = CancellationToken::new();
    token.cancel();
    let request = HttpRequest::builder(HttpMethod::Get, CHAMPIONS_URL)
        .cancellation(token)
        .build()
        .unwrap();

    let error = client_for(&server).request(&request).await.unwrap_err();
    assert!(error.is_cancelled());
}

// ============================================================================
// Rate Limit Tests
// ============================================================================

#[tokio::test]
async fn test_rate_limit_headers_update_limiter() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(CHAMPIONS_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("{}")
                .insert_header("X-App-Rate-Limit", "20:1,100:120")
                .insert_header("X-App-Rate-Limit-Count", "5:1,50:120")
                .insert_header("X-Method-Rate-Limit", "10:10")
                .insert_header("X-Method-Rate-Limit-Count", "9:10"),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.request(&champions_request()).await.unwrap();

    let snapshot = client.rate_limiter().snapshot("na1.api.riotgames.com");
    assert_eq!(snapshot.app.len(), 2);
    assert_eq!(snapshot.app[0].remaining, 15);
    assert_eq!(snapshot.app[1].remaining, 50);
    assert_eq!(snapshot.methods["champion.all"][0].remaining, 1);
    assert!(!snapshot.blocked);
}

#[tokio::test]
async fn test_oversized_rate_limit_headers_are_tolerated() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(CHAMPIONS_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("{}")
                .insert_header("X-App-Rate-Limit", "20:18446744073709551615")
                .insert_header("X-App-Rate-Limit-Count", "1:18446744073709551615"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let response = client.request(&champions_request()).await.unwrap();

    assert_eq!(response.code, 200);
    let snapshot = client.rate_limiter().snapshot("na1.api.riotgames.com");
    assert_eq!(snapshot.app[0].remaining, 19);
}

#[tokio::test]
async fn test_configured_limits_are_enforced_locally() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(CHAMPIONS_PATH))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let config = config_for(&server)
        .rate_limit(riot_api::clients::RateLimitWindow::new(
            1,
            Duration::from_secs(60),
        ))
        .build()
        .unwrap();
    let client = HttpClient::new(&config).unwrap();
    client.request(&champions_request()).await.unwrap();

    // The second call waits for the window; cancel it while it waits
    let token = CancellationToken::new();
    let request = HttpRequest::builder(HttpMethod::Get, CHAMPIONS_URL)
        .cancellation(token.clone())
        .build()
        .unwrap();
    let waiting = tokio::spawn(async move { client.request(&request).await });
    tokio::time::sleep(Duration::from_millis(50)).await;
    token.cancel();

    let error = waiting.await.unwrap().unwrap_err();
    assert!(error.is_cancelled());
}
