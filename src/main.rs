use tracing::info;
use tracing_subscriber::EnvFilter;

use nextstep_api::{app, errors::Result, state::AppState};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let state = AppState::init().await?;

    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:3587".to_string());

    info!("Starting server");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Serving api at http://{}", listener.local_addr()?);
    axum::serve(listener, app(state)).await?;

    Ok(())
}
