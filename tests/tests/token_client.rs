//! Contract tests for `OAuthClient` against a wiremock token service.
//!
//! Every outcome of `GET /oauth/access_token/{id}` must come back as either
//! an `AccessToken` or a `RestError`.

use std::time::Duration;

use integration_tests::{fixtures, setup::TokenServiceContext};
use oauth::{OAuthClient, OAuthConfig, TokenLookup};
use wiremock::ResponseTemplate;

#[tokio::test]
async fn test_fetch_access_token_success() {
    let ctx = TokenServiceContext::new().await;
    ctx.respond_with(
        fixtures::TOKEN_ID,
        ResponseTemplate::new(200).set_body_json(fixtures::token_body(1, 1)),
    )
    .await;

    let token = ctx.client.fetch_access_token(fixtures::TOKEN_ID).await.unwrap();
    assert_eq!(token, fixtures::access_token(1, 1));
    assert_eq!(ctx.lookup_count().await, 1);
}

#[tokio::test]
async fn test_fetch_access_token_malformed_body() {
    let ctx = TokenServiceContext::new().await;
    ctx.respond_with(
        fixtures::TOKEN_ID,
        ResponseTemplate::new(200).set_body_json(fixtures::malformed_token_body()),
    )
    .await;

    let err = ctx
        .client
        .fetch_access_token(fixtures::TOKEN_ID)
        .await
        .unwrap_err();
    assert_eq!(err.status, 500);
    assert_eq!(err.kind, "internal_server_error");
    assert_eq!(err.message, "error while trying to unmarshal token response");
}

#[tokio::test]
async fn test_fetch_access_token_not_found_propagates() {
    let ctx = TokenServiceContext::new().await;
    ctx.respond_with(
        fixtures::TOKEN_ID,
        ResponseTemplate::new(404).set_body_json(fixtures::not_found_body()),
    )
    .await;

    let err = ctx
        .client
        .fetch_access_token(fixtures::TOKEN_ID)
        .await
        .unwrap_err();
    assert_eq!(err.status, 404);
    assert_eq!(err.kind, "not_found");
    assert_eq!(err.message, "not found");
}

#[tokio::test]
async fn test_fetch_access_token_remote_error_unchanged() {
    let ctx = TokenServiceContext::new().await;
    ctx.respond_with(
        fixtures::TOKEN_ID,
        ResponseTemplate::new(400)
            .set_body_json(fixtures::error_body("invalid access token", 400, "bad_request")),
    )
    .await;

    let err = ctx
        .client
        .fetch_access_token(fixtures::TOKEN_ID)
        .await
        .unwrap_err();
    assert_eq!(err.status, 400);
    assert_eq!(err.kind, "bad_request");
    assert_eq!(err.message, "invalid access token");
    assert!(err.causes.is_empty());
}

#[tokio::test]
async fn test_fetch_access_token_not_found_with_null_causes() {
    let ctx = TokenServiceContext::new().await;
    ctx.respond_with(
        fixtures::TOKEN_ID,
        ResponseTemplate::new(404).set_body_json(fixtures::error_body_with_causes(
            "not found",
            404,
            "not_found",
            serde_json::Value::Null,
        )),
    )
    .await;

    let err = ctx
        .client
        .fetch_access_token(fixtures::TOKEN_ID)
        .await
        .unwrap_err();
    assert_eq!(err.status, 404);
    assert_eq!(err.message, "not found");
    assert!(err.causes.is_empty());
}

#[tokio::test]
async fn test_fetch_access_token_structured_causes_kept() {
    let ctx = TokenServiceContext::new().await;
    ctx.respond_with(
        fixtures::TOKEN_ID,
        ResponseTemplate::new(500).set_body_json(fixtures::error_body_with_causes(
            "database error",
            500,
            "internal_server_error",
            serde_json::json!([{"code": 1}]),
        )),
    )
    .await;

    let err = ctx
        .client
        .fetch_access_token(fixtures::TOKEN_ID)
        .await
        .unwrap_err();
    assert_eq!(err.status, 500);
    assert_eq!(err.message, "database error");
    assert_eq!(err.causes, vec![serde_json::json!({"code": 1})]);
}

#[tokio::test]
async fn test_fetch_access_token_body_status_is_authoritative() {
    let ctx = TokenServiceContext::new().await;
    ctx.respond_with(
        fixtures::TOKEN_ID,
        ResponseTemplate::new(503).set_body_json(fixtures::not_found_body()),
    )
    .await;

    let err = ctx
        .client
        .fetch_access_token(fixtures::TOKEN_ID)
        .await
        .unwrap_err();
    assert_eq!(err.status, 404);
}

#[tokio::test]
async fn test_fetch_access_token_invalid_error_body() {
    let ctx = TokenServiceContext::new().await;
    ctx.respond_with(
        fixtures::TOKEN_ID,
        ResponseTemplate::new(500).set_body_json(serde_json::json!({
            "message": "boom",
            "status": "500",
            "error": "internal_server_error"
        })),
    )
    .await;

    let err = ctx
        .client
        .fetch_access_token(fixtures::TOKEN_ID)
        .await
        .unwrap_err();
    assert_eq!(err.status, 500);
    assert_eq!(
        err.message,
        "invalid error interface while trying to get access token"
    );
    assert_eq!(err.causes.len(), 1);
}

#[tokio::test]
async fn test_fetch_access_token_unmatched_route_is_internal_error() {
    // wiremock answers unknown routes with an empty 404
    let ctx = TokenServiceContext::new().await;

    let err = ctx.client.fetch_access_token("unknown").await.unwrap_err();
    assert_eq!(err.status, 500);
    assert_eq!(
        err.message,
        "invalid error interface while trying to get access token"
    );
}

#[tokio::test]
async fn test_fetch_access_token_timeout() {
    let ctx = TokenServiceContext::new().await;
    ctx.respond_with(
        fixtures::TOKEN_ID,
        ResponseTemplate::new(200)
            .set_body_json(fixtures::token_body(1, 1))
            .set_delay(Duration::from_millis(1000)),
    )
    .await;

    let err = ctx
        .client
        .fetch_access_token(fixtures::TOKEN_ID)
        .await
        .unwrap_err();
    assert_eq!(err.status, 500);
    assert_eq!(
        err.message,
        "invalid response while trying to get access token"
    );
}

#[tokio::test]
async fn test_fetch_access_token_connection_refused() {
    let config = OAuthConfig::new("http://127.0.0.1:1").with_timeout_ms(200);
    let client = OAuthClient::new(&config).unwrap();

    let err = client.fetch_access_token(fixtures::TOKEN_ID).await.unwrap_err();
    assert_eq!(err.status, 500);
    assert_eq!(err.kind, "internal_server_error");
}
