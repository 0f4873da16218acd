//! tests/global_errors/422.rs
//! Ensures that a well-formed JSON body lacking required fields returns HTTP 422.

#[path = "../mod.rs"]
mod common;

use reqwest::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn returns_422_when_body_has_no_query() {
    let base_url: String = common::spawn_app().await;

    let resp: reqwest::Response = reqwest::Client::new()
        .post(format!("{}/retrieve-citations", base_url))
        .json(&json!({ "num_citations": 2 }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    // The extractor's rejection text is surfaced as a message.
    let json: Value = resp.json().await.unwrap();
    assert_eq!(json["status"], "UNPROCESSABLE_ENTITY");
    assert_eq!(json["code"], 422);
    assert!(json["messages"][0].as_str().unwrap().contains("missing field `query`"));
}
