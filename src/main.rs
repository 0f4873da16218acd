// Start of file: src/main.rs

use axum::{Router, serve};
use tokio::net::TcpListener;

use fatplants_api::config::state::AppState;
use fatplants_api::core::{
    logging::init_tracing,
    server::{create_app, setup_listener, shutdown_signal},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let state: AppState = AppState::from_env()?;
    let listener: TcpListener = setup_listener(&state.environment).await?;
    let app: Router = create_app(state);

    tracing::info!("Server listening on: {}", listener.local_addr()?);

    serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

// End of file: src/main.rs
