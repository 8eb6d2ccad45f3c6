//! Integration tests for the REST client against a mock server.
//!
//! These tests verify URL construction, body encoding, response decoding
//! and error mapping for the generic resource operations.

use nylas_api::clients::basic_auth_header;
use nylas_api::rest::resources::{Account, File, Message};
use nylas_api::rest::{FileUpload, Filters, Payload, ResourceKind};
use nylas_api::{
    AccessToken, ApiServer, AppId, AppSecret, HttpError, InvalidHttpRequestError, NamespaceId,
    NylasConfig, RestClient,
};
use serde_json::{json, Value};
use wiremock::matchers::{body_json, body_string_contains, header, header_regex, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a client pointed at the mock server with a token.
fn create_client(server: &MockServer) -> RestClient {
    let config = NylasConfig::builder()
        .app_id(AppId::new("test-app").unwrap())
        .app_secret(AppSecret::new("test-secret").unwrap())
        .access_token(AccessToken::new("tok-1"))
        .api_server(ApiServer::new(server.uri()).unwrap())
        .build()
        .unwrap();
    RestClient::new(config).unwrap()
}

fn ns() -> NamespaceId {
    NamespaceId::new("ns-1").unwrap()
}

// ============================================================================
// list
// ============================================================================

#[tokio::test]
async fn test_list_returns_one_instance_per_element() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/n/ns-1/messages"))
        .and(header(
            "authorization",
            basic_auth_header(Some(&AccessToken::new("tok-1"))).as_str(),
        ))
        .and(header("x-nylas-api-wrapper", "rust"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "m1", "subject": "a"},
            {"id": "m2", "subject": "b"},
            {"id": "m3", "subject": "c"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let namespace = ns();
    let messages = client
        .list(ResourceKind::Message, Some(&namespace), &Filters::new())
        .await
        .unwrap();

    assert_eq!(messages.len(), 3);
    assert_eq!(
        messages.iter().map(|m| m.id().unwrap()).collect::<Vec<_>>(),
        vec!["m1", "m2", "m3"]
    );
    for message in &messages {
        assert_eq!(message.kind(), ResourceKind::Message);
        assert_eq!(message.namespace(), Some(&namespace));
    }
}

#[tokio::test]
async fn test_list_without_namespace_omits_namespace_segment() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/threads"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let threads = client
        .list(ResourceKind::Thread, None, &Filters::new())
        .await
        .unwrap();

    assert!(threads.is_empty());
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), None);
}

#[tokio::test]
async fn test_list_sends_filters_as_query_but_never_extra() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/n/ns-1/threads"))
        .and(query_param("unread", "true"))
        .and(query_param("limit", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": "t1"}])))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let filters = Filters::new()
        .with("unread", "true")
        .with("limit", "5")
        .with("extra", "raw");
    client
        .list(ResourceKind::Thread, Some(&ns()), &filters)
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert!(!requests[0].url.query().unwrap_or_default().contains("extra"));
}

#[tokio::test]
async fn test_list_404_is_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/n/ns-1/events"))
        .respond_with(ResponseTemplate::new(404).set_body_string("no such namespace"))
        .mount(&server)
        .await;

    let client = create_client(&server);
    let result = client
        .list(ResourceKind::Event, Some(&ns()), &Filters::new())
        .await;

    assert!(matches!(result, Err(HttpError::Api(ref e)) if e.code == 404));
}

#[tokio::test]
async fn test_list_rejects_non_array_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/n/ns-1/tags"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "t1"})))
        .mount(&server)
        .await;

    let client = create_client(&server);
    let result = client
        .list(ResourceKind::Tag, Some(&ns()), &Filters::new())
        .await;

    assert!(matches!(result, Err(HttpError::Decode(_))));
}

// ============================================================================
// get / get_raw / account
// ============================================================================

#[tokio::test]
async fn test_get_decodes_single_instance() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/n/ns-1/messages/m1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "m1",
            "subject": "Hello",
            "date": 1_370_084_645,
            "x-custom": 1
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let instance = client
        .get(ResourceKind::Message, Some(&ns()), "m1", &Filters::new())
        .await
        .unwrap();

    assert_eq!(instance.undeclared_fields(), vec!["x-custom"]);
    let message: Message = instance.parse().unwrap();
    assert_eq!(message.subject.as_deref(), Some("Hello"));
}

#[tokio::test]
async fn test_get_with_extra_appends_path_segment() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/n/ns-1/messages/m1/raw"))
        .and(query_param("view", "expanded"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "m1"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let filters = Filters::new().with("extra", "raw").with("view", "expanded");
    client
        .get(ResourceKind::Message, Some(&ns()), "m1", &filters)
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.path(), "/n/ns-1/messages/m1/raw");
    assert_eq!(requests[0].url.query(), Some("view=expanded"));
}

#[tokio::test]
async fn test_get_404_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/n/ns-1/drafts/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"type": "invalid_request_error"})))
        .mount(&server)
        .await;

    let client = create_client(&server);
    let result = client
        .get(ResourceKind::Draft, Some(&ns()), "missing", &Filters::new())
        .await;

    assert!(matches!(
        result,
        Err(HttpError::NotFound { resource: "drafts", ref id }) if id == "missing"
    ));
}

#[tokio::test]
async fn test_get_other_failure_keeps_status_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/n/ns-1/contacts/c1"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&server)
        .await;

    let client = create_client(&server);
    let error = client
        .get(ResourceKind::Contact, Some(&ns()), "c1", &Filters::new())
        .await
        .unwrap_err();

    assert_eq!(error.status(), Some(500));
    match error {
        HttpError::Api(e) => assert_eq!(e.body, "upstream exploded"),
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_get_raw_returns_undecoded_bytes() {
    let server = MockServer::start().await;
    let mime = b"From: ben@example.com\r\nSubject: hi\r\n\r\nbody".to_vec();
    Mock::given(method("GET"))
        .and(path("/n/ns-1/messages/m1/raw"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(mime.clone(), "message/rfc822"),
        )
        .mount(&server)
        .await;

    let client = create_client(&server);
    let raw = client
        .get_raw(
            ResourceKind::Message,
            Some(&ns()),
            "m1",
            &Filters::new().with("extra", "raw"),
        )
        .await
        .unwrap();

    assert_eq!(raw.status(), 200);
    assert_eq!(raw.content_type(), Some("message/rfc822"));
    assert_eq!(raw.bytes(), mime.as_slice());
    assert!(raw.json().is_err());
}

#[tokio::test]
async fn test_get_raw_404_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/files/f1/download"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = create_client(&server);
    let result = client
        .get_raw(
            ResourceKind::File,
            None,
            "f1",
            &Filters::new().with("extra", "download"),
        )
        .await;

    assert!(matches!(result, Err(HttpError::NotFound { resource: "files", .. })));
}

#[tokio::test]
async fn test_account_fetches_top_level_account() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/account"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "acc1",
            "namespace_id": "ns-1",
            "email_address": "ben@example.com"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let instance = client.account().await.unwrap();

    assert_eq!(instance.kind(), ResourceKind::Account);
    assert!(instance.namespace().is_none());
    let account: Account = instance.parse().unwrap();
    assert_eq!(account.namespace_id.as_deref(), Some("ns-1"));
}

// ============================================================================
// create / update / delete
// ============================================================================

#[tokio::test]
async fn test_create_sends_json_for_non_file_kinds() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/n/ns-1/tags"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"name": "todo"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "t1", "name": "todo"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let tag = client
        .create(
            ResourceKind::Tag,
            Some(&ns()),
            Payload::Json(json!({"name": "todo"})),
        )
        .await
        .unwrap();

    assert_eq!(tag.id(), Some("t1"));
}

#[tokio::test]
async fn test_create_sends_multipart_for_files() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/n/ns-1/files"))
        .and(header_regex("content-type", "^multipart/form-data; boundary="))
        .and(body_string_contains(r#"name="file""#))
        .and(body_string_contains(r#"filename="notes.txt""#))
        .and(body_string_contains("hello world"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "f1",
            "filename": "notes.txt",
            "size": 11
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let upload = FileUpload::new("notes.txt", b"hello world".to_vec()).with_content_type("text/plain");
    let instance = client
        .create(ResourceKind::File, Some(&ns()), Payload::Upload(upload))
        .await
        .unwrap();

    let file: File = instance.parse().unwrap();
    assert_eq!(file.size, Some(11));
}

#[tokio::test]
async fn test_create_upload_for_json_kind_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let result = client
        .create(
            ResourceKind::Message,
            Some(&ns()),
            Payload::Upload(FileUpload::new("a.txt", vec![1, 2, 3])),
        )
        .await;

    assert!(matches!(result, Err(HttpError::InvalidRequest(_))));
}

#[tokio::test]
async fn test_create_file_with_invalid_content_type_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let upload = FileUpload::new("a.txt", b"hello".to_vec()).with_content_type("not a mime");
    let result = client
        .create(ResourceKind::File, Some(&ns()), Payload::Upload(upload))
        .await;

    assert!(matches!(
        result,
        Err(HttpError::InvalidRequest(InvalidHttpRequestError::InvalidContentType { .. }))
    ));
}

#[tokio::test]
async fn test_update_puts_json_to_id_url() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/n/ns-1/threads/t1"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"unread": false})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "t1", "unread": false})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let thread = client
        .update(
            ResourceKind::Thread,
            Some(&ns()),
            "t1",
            Payload::Json(json!({"unread": false})),
        )
        .await
        .unwrap();

    assert_eq!(thread.get("unread"), Some(&json!(false)));
}

#[tokio::test]
async fn test_update_for_files_decodes_response() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/n/ns-1/files/f1"))
        .and(header_regex("content-type", "^multipart/form-data"))
        .and(body_string_contains(r#"filename="v2.txt""#))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "f1",
            "filename": "v2.txt"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let instance = client
        .update(
            ResourceKind::File,
            Some(&ns()),
            "f1",
            Payload::Upload(FileUpload::new("v2.txt", b"v2".to_vec())),
        )
        .await
        .unwrap();

    assert_eq!(instance.kind(), ResourceKind::File);
    assert_eq!(instance.get("filename"), Some(&json!("v2.txt")));
}

#[tokio::test]
async fn test_delete_returns_decoded_body_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/n/ns-1/events/e1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"job_status_id": "j1"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let body = client
        .delete(ResourceKind::Event, Some(&ns()), "e1")
        .await
        .unwrap();

    assert_eq!(body, json!({"job_status_id": "j1"}));
}

#[tokio::test]
async fn test_delete_with_empty_body_is_null() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/n/ns-1/drafts/d1"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let client = create_client(&server);
    let body = client
        .delete(ResourceKind::Draft, Some(&ns()), "d1")
        .await
        .unwrap();

    assert_eq!(body, Value::Null);
}

#[tokio::test]
async fn test_delete_failure_is_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/n/ns-1/calendars/cal1"))
        .respond_with(ResponseTemplate::new(403).set_body_string("read only"))
        .mount(&server)
        .await;

    let client = create_client(&server);
    let result = client
        .delete(ResourceKind::Calendar, Some(&ns()), "cal1")
        .await;

    assert!(matches!(result, Err(HttpError::Api(ref e)) if e.code == 403 && e.body == "read only"));
}

#[tokio::test]
async fn test_invalid_json_body_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/n/ns-1/calendars/cal1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let client = create_client(&server);
    let result = client
        .get(ResourceKind::Calendar, Some(&ns()), "cal1", &Filters::new())
        .await;

    match result {
        Err(HttpError::Decode(e)) => assert!(e.body.contains("oops")),
        other => panic!("expected Decode error, got {other:?}"),
    }
}
