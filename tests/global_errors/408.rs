//! tests/global_errors/408.rs
//! Ensures that a request outliving the configured timeout results in a 408.

#[path = "../mod.rs"]
mod common;

use httpmock::prelude::*;
use reqwest::StatusCode;
use serde_json::{json, Value};
use std::time::Duration;
use tokio::time::timeout;

#[tokio::test]
async fn returns_408_when_pubmed_is_slower_than_request_timeout() {
    // A slow NCBI keeps the handler busy past the 1 second request timeout.
    let ncbi: MockServer = MockServer::start_async().await;
    ncbi.mock_async(|when, then| {
        when.method(GET).path("/esearch.fcgi");
        then.status(200)
            .delay(Duration::from_secs(3))
            .json_body(json!({ "esearchresult": { "idlist": [] } }));
    })
    .await;

    let ncbi_url: String = ncbi.base_url();
    let base_url: String = common::spawn_app_with(&[
        ("NCBI_BASE_URL", ncbi_url.as_str()),
        ("DEFAULT_TIMEOUT_SECONDS", "1"),
    ])
    .await;

    let resp_result: Result<Result<reqwest::Response, reqwest::Error>, tokio::time::error::Elapsed> = timeout(
        Duration::from_secs(5), // client-side timeout duration
        async {
            reqwest::Client::new()
                .get(format!("{}/api/retrieve_literature?query=lipid", base_url))
                .send()
                .await
        }
    )
    .await;

    assert!(resp_result.is_ok(), "Client timed out waiting for server.");

    let resp: reqwest::Response = resp_result.unwrap().expect("Request failed unexpectedly.");
    assert_eq!(resp.status(), StatusCode::REQUEST_TIMEOUT);

    let json: Value = resp.json().await.unwrap();
    assert_eq!(json["status"], "REQUEST_TIMEOUT");
    assert_eq!(json["code"], 408);
}
