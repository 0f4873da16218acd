//! tests/mod.rs
//! A shared test helper to spawn the Axum app on an ephemeral port.
#![allow(dead_code)]

use std::collections::HashMap;

use axum::{Router, serve};
use fatplants_api::{create_app, AppState, EnvironmentVariables};
use tokio::net::TcpListener;

/// Spawns the app with test defaults and returns its base URL.
pub async fn spawn_app() -> String {
    spawn_app_with(&[]).await
}

/// Spawns the app on a random unused port with extra environment variables
/// (e.g. NCBI_BASE_URL pointing at a mock server) and returns its base URL.
pub async fn spawn_app_with(overrides: &[(&str, &str)]) -> String {
    // * Keep tests independent of any local .env or credentials file.
    let mut vars: HashMap<String, String> = HashMap::from([
        ("CONFIG_FILE".to_string(), "tests/fixtures/missing.yaml".to_string()),
        ("NCBI_API_KEY".to_string(), "test-key".to_string()),
        ("NCBI_BASE_URL".to_string(), "http://127.0.0.1:9".to_string()),
    ]);
    for (key, value) in overrides {
        vars.insert(key.to_string(), value.to_string());
    }

    let env: EnvironmentVariables = EnvironmentVariables::from_vars(&vars)
        .expect("Failed to build test environment");
    let state: AppState = AppState::new(env).expect("Failed to build app state");
    let app: Router = create_app(state);

    // * Bind an ephemeral port.
    let listener: TcpListener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");
    let addr: std::net::SocketAddr = listener.local_addr().unwrap();

    // * Spawn the server in a background task.
    tokio::spawn(async move {
        serve(listener, app)
            .await
            .expect("Server failed");
    });

    // * Return the base URL, e.g. "http://127.0.0.1:12345".
    format!("http://{}", addr)
}
