use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};

use super::{send, test_app, test_state};
use crate::data::{roster::test::FixedRoster, tickets::MemoryTicketStore};

fn callback_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/oauth/callback")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// A body without `code.code` is rejected before any outbound call is made.
#[tokio::test]
async fn callback_without_code_is_400_and_makes_no_outbound_call() {
    let mut server = mockito::Server::new_async().await;
    let token_mock = server
        .mock("POST", "/oauth2/token")
        .expect(0)
        .create_async()
        .await;

    let state = test_state(
        Arc::new(FixedRoster::new(Vec::new())),
        Arc::new(MemoryTicketStore::new()),
        &server.url(),
        &format!("{}/oauth2/token", server.url()),
    );

    for body in [r#"{}"#, r#"{"code": {}}"#, r#"{"code": {"code": ""}}"#] {
        let (status, json) = send(test_app(state.clone()), callback_request(body)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "Missing authorization code");
    }

    token_mock.assert_async().await;
}

#[tokio::test]
async fn callback_exchanges_code_for_access_token() {
    let mut server = mockito::Server::new_async().await;
    let token_mock = server
        .mock("POST", "/oauth2/token")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"access_token": "user-token", "token_type": "Bearer",
                "expires_in": 604800, "scope": "identify guilds"}"#,
        )
        .create_async()
        .await;

    let state = test_state(
        Arc::new(FixedRoster::new(Vec::new())),
        Arc::new(MemoryTicketStore::new()),
        &server.url(),
        &format!("{}/oauth2/token", server.url()),
    );

    let (status, json) = send(
        test_app(state),
        callback_request(r#"{"code": {"code": "authcode123"}}"#),
    )
    .await;

    token_mock.assert_async().await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["access_token"], "user-token");
}

/// A provider rejection of the exchange surfaces as 502, not a retry.
#[tokio::test]
async fn callback_reports_provider_failure() {
    let mut server = mockito::Server::new_async().await;
    let token_mock = server
        .mock("POST", "/oauth2/token")
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(r#"{"error": "invalid_grant"}"#)
        .expect(1)
        .create_async()
        .await;

    let state = test_state(
        Arc::new(FixedRoster::new(Vec::new())),
        Arc::new(MemoryTicketStore::new()),
        &server.url(),
        &format!("{}/oauth2/token", server.url()),
    );

    let (status, json) = send(
        test_app(state),
        callback_request(r#"{"code": {"code": "already-used"}}"#),
    )
    .await;

    token_mock.assert_async().await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(json["error"]
        .as_str()
        .unwrap()
        .starts_with("Failed to exchange authorization code"));
}

#[tokio::test]
async fn users_me_without_token_is_400_before_any_network_call() {
    let mut server = mockito::Server::new_async().await;
    let identity_mock = server
        .mock("GET", "/users/@me")
        .expect(0)
        .create_async()
        .await;

    let state = test_state(
        Arc::new(FixedRoster::new(Vec::new())),
        Arc::new(MemoryTicketStore::new()),
        &server.url(),
        &format!("{}/oauth2/token", server.url()),
    );

    let (status, json) = send(
        test_app(state),
        Request::builder()
            .uri("/users/me")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    identity_mock.assert_async().await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Missing access_token header");
}

#[tokio::test]
async fn users_me_returns_caller_profile() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/users/@me")
        .match_header("authorization", "Bearer user-token")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"id": "739440618107043901", "username": "tricked",
                "discriminator": "0", "avatar": "a1b2c3"}"#,
        )
        .create_async()
        .await;

    let state = test_state(
        Arc::new(FixedRoster::new(Vec::new())),
        Arc::new(MemoryTicketStore::new()),
        &server.url(),
        &format!("{}/oauth2/token", server.url()),
    );

    let (status, json) = send(
        test_app(state),
        Request::builder()
            .uri("/users/me")
            .header("access_token", "user-token")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["id"], 739440618107043901u64);
    assert_eq!(json["username"], "tricked");
    assert_eq!(json["discriminator"], "0");
    assert_eq!(
        json["avatar"],
        "https://cdn.discordapp.com/avatars/739440618107043901/a1b2c3.png"
    );
}
