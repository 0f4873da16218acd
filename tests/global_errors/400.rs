//! tests/global_errors/400.rs
//! Ensures that malformed literature requests are rejected with HTTP 400.

#[path = "../mod.rs"]
mod common;

use reqwest::StatusCode;
use serde_json::Value;

#[tokio::test]
async fn returns_400_when_num_citations_is_out_of_range() {
    let base_url: String = common::spawn_app().await;

    let resp: reqwest::Response = reqwest::Client::new()
        .get(format!("{}/api/retrieve_literature?query=lipid&num_citations=0", base_url))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let json: Value = resp.json().await.unwrap();
    assert_eq!(json["status"], "BAD_REQUEST");
    assert_eq!(json["data"]["error"], "invalid_num_citations");
    assert!(json["messages"][0].as_str().unwrap().contains("num_citations"));
}

#[tokio::test]
async fn returns_400_when_query_is_missing() {
    let base_url: String = common::spawn_app().await;

    let resp: reqwest::Response = reqwest::Client::new()
        .get(format!("{}/api/retrieve_literature?num_citations=2", base_url))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // The extractor's rejection text is surfaced as a message.
    let json: Value = resp.json().await.unwrap();
    assert_eq!(json["code"], 400);
    assert!(json["messages"][0].as_str().unwrap().contains("query"));
}

#[tokio::test]
async fn returns_400_when_json_body_is_malformed() {
    let base_url: String = common::spawn_app().await;

    let resp: reqwest::Response = reqwest::Client::new()
        .post(format!("{}/retrieve-citations", base_url))
        .header("content-type", "application/json")
        .body("not json")
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let json: Value = resp.json().await.unwrap();
    assert_eq!(json["status"], "BAD_REQUEST");
    assert!(json["messages"][0].as_str().unwrap().contains("JSON"));
}
