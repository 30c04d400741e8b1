use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};

use super::{bot_guild, send, test_app, test_state};
use crate::data::{roster::test::FixedRoster, tickets::MemoryTicketStore};

#[tokio::test]
async fn stats_reports_counts_and_rounded_ping() {
    let roster = FixedRoster {
        guilds: vec![bot_guild(111), bot_guild(222)],
        user_count: 1337,
        latency: Duration::from_secs_f64(0.123456),
    };

    let state = test_state(
        Arc::new(roster),
        Arc::new(MemoryTicketStore::new()),
        "http://127.0.0.1:1",
        "http://127.0.0.1:1/token",
    );

    let (status, json) = send(
        test_app(state),
        Request::builder()
            .uri("/stats")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["guilds"], 2);
    assert_eq!(json["users"], 1337);
    // 0.123456 s -> 123.456 ms, rounded to two decimal places.
    assert_eq!(json["ping"], 123.46);
}

#[tokio::test]
async fn stats_with_empty_roster_reports_zero_ping() {
    let state = test_state(
        Arc::new(FixedRoster::new(Vec::new())),
        Arc::new(MemoryTicketStore::new()),
        "http://127.0.0.1:1",
        "http://127.0.0.1:1/token",
    );

    let (status, json) = send(
        test_app(state),
        Request::builder()
            .uri("/stats")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["guilds"], 0);
    assert_eq!(json["users"], 0);
    assert_eq!(json["ping"], 0.0);
}
