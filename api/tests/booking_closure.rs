mod helper;

use std::sync::atomic::Ordering;

use axum::http::StatusCode;
use helper::{TestApp, ADMIN_TOKEN, CUSTOMER_TOKEN};
use serde_json::json;

#[tokio::test]
async fn status_defaults_to_open() {
    let app = TestApp::new();

    let res = app.get("/api/v1/booking-closure").await;

    assert_eq!(res.status, StatusCode::OK);
    let body = res.json();
    assert_eq!(body["isClosed"], json!(false));
    assert_eq!(body["remainingTime"], json!(null));
    assert_eq!(body["isLoading"], json!(false));
}

#[tokio::test]
async fn admin_can_close_and_reopen() {
    let app = TestApp::new();

    let res = app
        .post(
            "/api/v1/booking-closure/close",
            Some(ADMIN_TOKEN),
            Some(json!({ "hours": 2 })),
        )
        .await;
    assert_eq!(res.status, StatusCode::OK);
    let body = res.json();
    assert_eq!(body["isClosed"], json!(true));
    assert_eq!(body["remainingTime"], json!("in 2 hours"));

    let stored = app
        .settings
        .value("booking_closure")
        .expect("closure is persisted");
    assert_eq!(stored["isClosed"], json!(true));
    assert!(stored["endTime"].is_string());

    let res = app.get("/api/v1/booking-closure").await;
    assert_eq!(res.json()["isClosed"], json!(true));

    let res = app
        .post("/api/v1/booking-closure/reopen", Some(ADMIN_TOKEN), None)
        .await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.json()["isClosed"], json!(false));
    assert_eq!(
        app.settings.value("booking_closure"),
        Some(json!({ "isClosed": false, "endTime": null }))
    );
}

#[tokio::test]
async fn close_requires_admin() {
    let app = TestApp::new();
    let body = Some(json!({ "hours": 1 }));

    let res = app
        .post("/api/v1/booking-closure/close", None, body.clone())
        .await;
    assert_eq!(res.status, StatusCode::UNAUTHORIZED);

    let res = app
        .post(
            "/api/v1/booking-closure/close",
            Some("unknown-token"),
            body.clone(),
        )
        .await;
    assert_eq!(res.status, StatusCode::FORBIDDEN);

    let res = app
        .post("/api/v1/booking-closure/close", Some(CUSTOMER_TOKEN), body)
        .await;
    assert_eq!(res.status, StatusCode::FORBIDDEN);

    let res = app
        .post("/api/v1/booking-closure/reopen", Some(CUSTOMER_TOKEN), None)
        .await;
    assert_eq!(res.status, StatusCode::FORBIDDEN);

    assert_eq!(app.settings.writes.load(Ordering::SeqCst), 0);
    assert!(!app.registry.booking_closure().is_closed());
}

#[tokio::test]
async fn close_rejects_out_of_range_hours() {
    let app = TestApp::new();

    for hours in [0, 721] {
        let res = app
            .post(
                "/api/v1/booking-closure/close",
                Some(ADMIN_TOKEN),
                Some(json!({ "hours": hours })),
            )
            .await;
        assert_eq!(res.status, StatusCode::BAD_REQUEST, "hours = {hours}");
    }
    assert_eq!(app.settings.writes.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn store_failure_is_reported_and_state_kept() {
    let app = TestApp::new();
    app.settings.fail_writes.store(true, Ordering::SeqCst);

    let res = app
        .post(
            "/api/v1/booking-closure/close",
            Some(ADMIN_TOKEN),
            Some(json!({ "hours": 3 })),
        )
        .await;

    assert_eq!(res.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(res.body, "settings store is unavailable");

    let body = app.get("/api/v1/booking-closure").await.json();
    assert_eq!(body["isClosed"], json!(false));
    assert_eq!(body["error"], json!("settings store is unavailable"));
}
