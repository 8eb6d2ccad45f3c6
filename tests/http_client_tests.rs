//! Integration tests for the HTTP client functionality.
//!
//! These tests verify the client configuration, request building,
//! default headers and error mapping behavior.

use nylas_api::clients::{
    basic_auth_header, DataType, HttpClient, HttpMethod, HttpRequest, MultipartPart, RequestBody,
    SDK_VERSION, WRAPPER_HEADER,
};
use nylas_api::{AccessToken, ApiServer, AppId, AppSecret, HttpError, NylasConfig};
use serde_json::json;
use std::collections::BTreeMap;
use wiremock::matchers::{header, header_regex, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a config pointing at the given server.
fn create_test_config(server: &str, token: Option<&str>) -> NylasConfig {
    let mut builder = NylasConfig::builder()
        .app_id(AppId::new("test-app").unwrap())
        .app_secret(AppSecret::new("test-secret").unwrap())
        .api_server(ApiServer::new(server).unwrap());
    if let Some(token) = token {
        builder = builder.access_token(AccessToken::new(token));
    }
    builder.build().unwrap()
}

// ============================================================================
// Client configuration
// ============================================================================

#[test]
fn test_client_default_headers() {
    let config = create_test_config("https://api.nylas.com", Some("tok"));
    let client = HttpClient::new(&config).unwrap();

    assert_eq!(client.base_uri(), "https://api.nylas.com");
    let headers = client.default_headers();
    assert_eq!(headers.get("Authorization"), Some(&"Basic dG9rOg==".to_string()));
    assert_eq!(headers.get(WRAPPER_HEADER), Some(&"rust".to_string()));
    assert!(headers
        .get("User-Agent")
        .is_some_and(|ua| ua.starts_with(&format!("Nylas API Library v{SDK_VERSION}"))));
}

#[test]
fn test_client_without_access_token() {
    let config = create_test_config("https://api.nylas.com", None);
    let client = HttpClient::new(&config).unwrap();

    assert_eq!(
        client.default_headers().get("Authorization"),
        Some(&"Basic Og==".to_string())
    );
}

#[test]
fn test_user_agent_prefix_and_wrapper_name() {
    let config = NylasConfig::builder()
        .app_id(AppId::new("a").unwrap())
        .app_secret(AppSecret::new("b").unwrap())
        .user_agent_prefix("MyApp/2.0")
        .wrapper_name("my-wrapper")
        .build()
        .unwrap();
    let client = HttpClient::new(&config).unwrap();

    let headers = client.default_headers();
    assert!(headers
        .get("User-Agent")
        .is_some_and(|ua| ua.starts_with("MyApp/2.0 | Nylas API Library")));
    assert_eq!(headers.get(WRAPPER_HEADER), Some(&"my-wrapper".to_string()));
}

#[test]
fn test_set_access_token_updates_header() {
    let config = create_test_config("https://api.nylas.com", None);
    let mut client = HttpClient::new(&config).unwrap();

    let token = AccessToken::new("fresh");
    client.set_access_token(Some(&token));
    assert_eq!(
        client.default_headers().get("Authorization"),
        Some(&basic_auth_header(Some(&token)))
    );
}

#[test]
fn test_debug_lists_header_names_only() {
    let config = create_test_config("https://api.nylas.com", Some("secret-token"));
    let client = HttpClient::new(&config).unwrap();

    let debug = format!("{client:?}");
    assert!(debug.contains("Authorization"));
    assert!(!debug.contains("secret-token"));
    assert!(!debug.contains("c2VjcmV0LXRva2VuOg=="));
}

// ============================================================================
// Request building
// ============================================================================

#[test]
fn test_invalid_request_produces_correct_error() {
    let result = HttpRequest::builder(HttpMethod::Post, "/n/ns/tags").build();

    assert!(matches!(
        result,
        Err(nylas_api::InvalidHttpRequestError::MissingBody { .. })
    ));
}

#[test]
fn test_data_type_content_types() {
    assert_eq!(DataType::Json.as_content_type(), "application/json");
    assert_eq!(
        DataType::Form.as_content_type(),
        "application/x-www-form-urlencoded"
    );
    assert_eq!(DataType::Multipart.as_content_type(), "multipart/form-data");
}

#[test]
fn test_request_body_reports_data_type() {
    let body = RequestBody::Multipart(vec![MultipartPart::Text {
        name: "k".to_string(),
        value: "v".to_string(),
    }]);
    assert_eq!(body.data_type(), DataType::Multipart);
}

// ============================================================================
// Round trips
// ============================================================================

#[tokio::test]
async fn test_request_sends_defaults_and_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/n/ns/threads"))
        .and(query_param("limit", "5"))
        .and(header("authorization", "Basic dG9rOg=="))
        .and(header(WRAPPER_HEADER, "rust"))
        .and(header_regex("user-agent", "^Nylas API Library v"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("X-Request-Id", "req-1")
                .set_body_json(json!([])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpClient::new(&create_test_config(&server.uri(), Some("tok"))).unwrap();
    let mut query = BTreeMap::new();
    query.insert("limit".to_string(), "5".to_string());
    let request = HttpRequest::builder(HttpMethod::Get, "/n/ns/threads")
        .query(query)
        .build()
        .unwrap();

    let response = client.request(request).await.unwrap();
    assert_eq!(response.code, 200);
    assert_eq!(response.request_id(), Some("req-1"));
    assert_eq!(response.json().unwrap(), json!([]));
}

#[tokio::test]
async fn test_extra_headers_override_defaults() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ping"))
        .and(header(WRAPPER_HEADER, "override"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpClient::new(&create_test_config(&server.uri(), None)).unwrap();
    let request = HttpRequest::builder(HttpMethod::Get, "/ping")
        .header(WRAPPER_HEADER, "override")
        .build()
        .unwrap();

    client.request(request).await.unwrap();
}

#[tokio::test]
async fn test_non_2xx_maps_to_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/account"))
        .respond_with(
            ResponseTemplate::new(401)
                .insert_header("X-Request-Id", "req-9")
                .set_body_string("unauthorized"),
        )
        .mount(&server)
        .await;

    let client = HttpClient::new(&create_test_config(&server.uri(), None)).unwrap();
    let request = HttpRequest::builder(HttpMethod::Get, "/account").build().unwrap();

    match client.request(request).await {
        Err(HttpError::Api(e)) => {
            assert_eq!(e.code, 401);
            assert_eq!(e.body, "unauthorized");
            assert_eq!(e.error_reference.as_deref(), Some("req-9"));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}
