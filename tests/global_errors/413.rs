//! tests/global_errors/413.rs
//! Ensures that a body larger than MAX_REQUEST_BODY_SIZE triggers 413.

#[path = "../mod.rs"]
mod common;

use reqwest::StatusCode;
use serde_json::Value;

#[tokio::test]
async fn returns_413_when_payload_exceeds_global_limit() {
    let base_url: String = common::spawn_app_with(&[("MAX_REQUEST_BODY_SIZE", "1024")]).await;

    // Valid JSON so only the size limit can reject it.
    let oversized_query: String = "x".repeat(4096);
    let payload: String = format!(r#"{{"query":"{}"}}"#, oversized_query);

    let resp: reqwest::Response = reqwest::Client::new()
        .post(format!("{}/retrieve-citations", base_url))
        .header("content-type", "application/json")
        .body(payload)
        .send()
        .await
        .expect("Failed to send large request.");

    assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);

    let json: Value = resp.json().await.unwrap();
    assert_eq!(json["status"], "PAYLOAD_TOO_LARGE");
    assert_eq!(json["code"], 413);
}
