//! Integration tests for the HTTP transport.
//!
//! These tests run the Feed API surface through the reqwest-backed
//! [`RestClient`] against a local mock server and check what actually goes
//! over the wire.

use ebay_feed::clients::{FilePart, HttpError, InvalidHttpRequestError, MultipartForm, RestClient};
use ebay_feed::{AccessToken, Feed, FeedConfig, FeedParams, HostUrl, MarketplaceId};
use serde_json::json;
use wiremock::matchers::{body_json, header, header_regex, method, path, query_param};
use wiremock::{Match, Mock, MockServer, Request, ResponseTemplate};

/// Matches when the request has no body.
struct EmptyBody;

impl Match for EmptyBody {
    fn matches(&self, request: &Request) -> bool {
        request.body.is_empty()
    }
}

/// Matches when the query string carries exactly the given keys.
struct QueryKeys(&'static [&'static str]);

impl Match for QueryKeys {
    fn matches(&self, request: &Request) -> bool {
        let mut keys: Vec<String> = request
            .url
            .query_pairs()
            .map(|(k, _)| k.into_owned())
            .collect();
        keys.sort();
        let mut expected: Vec<&str> = self.0.to_vec();
        expected.sort_unstable();
        keys == expected
    }
}

/// Matches when the raw body contains the given text.
struct BodyContains(&'static str);

impl Match for BodyContains {
    fn matches(&self, request: &Request) -> bool {
        String::from_utf8_lossy(&request.body).contains(self.0)
    }
}

fn feed_for(server: &MockServer) -> Feed<RestClient> {
    let config = FeedConfig::builder()
        .api_host(HostUrl::new(server.uri()).unwrap())
        .access_token(AccessToken::new("test-token").unwrap())
        .marketplace_id(MarketplaceId::new("EBAY_US").unwrap())
        .build()
        .unwrap();
    Feed::new(RestClient::new(&config))
}

#[tokio::test]
async fn test_listing_sends_only_set_filters_and_default_headers() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/sell/feed/v1/order_task"))
        .and(query_param("feed_type", "LMS_ORDER_REPORT"))
        .and(query_param("limit", "10"))
        .and(QueryKeys(&["feed_type", "limit"]))
        .and(header("authorization", "Bearer test-token"))
        .and(header("x-ebay-c-marketplace-id", "EBAY_US"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"tasks": [], "total": 0})))
        .expect(1)
        .mount(&server)
        .await;

    let feed = feed_for(&server);
    let response = feed
        .get_order_tasks(Some(
            FeedParams::new().feed_type("LMS_ORDER_REPORT").limit(10),
        ))
        .await
        .unwrap();

    assert_eq!(response.code, 200);
    assert_eq!(response.body["total"], 0);
}

#[tokio::test]
async fn test_encoded_identifier_reaches_server_encoded() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/sell/feed/v1/task/abc%2F123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"taskId": "abc/123"})))
        .expect(1)
        .mount(&server)
        .await;

    let response = feed_for(&server).get_task("abc/123").await.unwrap();
    assert_eq!(response.body["taskId"], "abc/123");
}

#[tokio::test]
async fn test_create_task_posts_json_and_exposes_location() {
    let server = MockServer::start().await;
    let body = json!({"feedType": "LMS_ADD_FIXED_PRICE_ITEM", "schemaVersion": "1149"});

    Mock::given(method("POST"))
        .and(path("/sell/feed/v1/task"))
        .and(header("content-type", "application/json"))
        .and(body_json(body.clone()))
        .respond_with(ResponseTemplate::new(202).insert_header(
            "location",
            "https://api.ebay.com/sell/feed/v1/task/task-11-123",
        ))
        .expect(1)
        .mount(&server)
        .await;

    let response = feed_for(&server).create_task(body).await.unwrap();
    assert_eq!(response.code, 202);
    assert_eq!(response.created_resource_id(), Some("task-11-123"));
}

#[tokio::test]
async fn test_update_schedule_without_body_sends_empty_put() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/sell/feed/v1/schedule/sched-1"))
        .and(EmptyBody)
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let response = feed_for(&server)
        .update_schedule("sched-1", None)
        .await
        .unwrap();
    assert_eq!(response.code, 204);
    assert!(response.body.is_null());
}

#[tokio::test]
async fn test_delete_schedule() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/sell/feed/v1/schedule/sched-2"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let response = feed_for(&server).delete_schedule("sched-2").await.unwrap();
    assert!(response.is_ok());
}

#[tokio::test]
async fn test_create_customer_service_metric_task_sends_accept_language() {
    let server = MockServer::start().await;
    let body = json!({"feedType": "CUSTOMER_SERVICE_METRICS_REPORT"});

    Mock::given(method("POST"))
        .and(path("/sell/feed/v1/customer_service_metric_task"))
        .and(header("accept-language", "de-DE"))
        .and(body_json(body.clone()))
        .respond_with(ResponseTemplate::new(202))
        .expect(1)
        .mount(&server)
        .await;

    feed_for(&server)
        .create_customer_service_metric_task("de-DE", body)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_upload_file_sends_multipart_form() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/sell/feed/v1/task/task-3/upload_file"))
        .and(header_regex("content-type", "^multipart/form-data; boundary=.+"))
        .and(BodyContains(r#"name="fileName""#))
        .and(BodyContains(r#"filename="items.xml""#))
        .and(BodyContains("<items/>"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let form = MultipartForm::file_upload("items.xml", b"<items/>".to_vec());
    let response = feed_for(&server).upload_file("task-3", form).await.unwrap();
    assert_eq!(response.code, 200);
}

#[tokio::test]
async fn test_upload_with_bad_mime_type_fails_before_sending() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let form = MultipartForm::new().part(FilePart {
        field_name: "file".to_string(),
        file_name: "items.xml".to_string(),
        mime_type: Some("not a mime".to_string()),
        content: b"<items/>".to_vec(),
    });
    let err = feed_for(&server).upload_file("t", form).await.unwrap_err();

    assert!(matches!(
        err,
        HttpError::InvalidRequest(InvalidHttpRequestError::InvalidMimeType { .. })
    ));
}

#[tokio::test]
async fn test_result_file_download_keeps_bytes() {
    let server = MockServer::start().await;
    let payload = vec![0x50, 0x4b, 0x03, 0x04, 0x00, 0xff];

    Mock::given(method("GET"))
        .and(path("/sell/feed/v1/task/task-4/download_result_file"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_bytes(payload.clone())
                .insert_header("content-disposition", r#"attachment; filename="task-4.zip""#),
        )
        .expect(1)
        .mount(&server)
        .await;

    let response = feed_for(&server).get_result_file("task-4").await.unwrap();
    assert_eq!(response.bytes, payload);
    assert!(response.body.is_null());
    assert_eq!(response.file_name().as_deref(), Some("task-4.zip"));
}

#[tokio::test]
async fn test_non_2xx_becomes_response_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/sell/feed/v1/schedule/unknown"))
        .respond_with(
            ResponseTemplate::new(404)
                .insert_header("x-ebay-c-request-id", "rid-42")
                .set_body_json(json!({
                    "errors": [{"errorId": 160022, "message": "The schedule does not exist."}]
                })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let err = feed_for(&server).get_schedule("unknown").await.unwrap_err();
    match err {
        HttpError::Response(e) => {
            assert_eq!(e.code, 404);
            assert_eq!(e.error_reference.as_deref(), Some("rid-42"));
            assert!(e.message.contains("160022"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_server_errors_are_not_retried() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/sell/feed/v1/schedule_template"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal error"))
        .expect(1)
        .mount(&server)
        .await;

    let err = feed_for(&server)
        .get_schedule_templates(None)
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(500));
    assert!(err.to_string().contains("Internal error"));
}

#[tokio::test]
async fn test_network_error_when_nothing_listens() {
    let config = FeedConfig::builder()
        .api_host(HostUrl::new("http://127.0.0.1:1").unwrap())
        .build()
        .unwrap();
    let feed = Feed::new(RestClient::new(&config));

    let err = feed.get_tasks(None).await.unwrap_err();
    assert!(matches!(err, HttpError::Network(_)));
}
