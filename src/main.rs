use anyhow::Context;
use authorfeed::config::EmbedConfig;
use bluesky_embed::app;
use bluesky_embed::state::AppState;
use std::net::SocketAddr;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    bluesky_embed::init_tracing();

    let config = EmbedConfig::from_env();
    tracing::info!(
        "Using AppView {} (timeout: {:?})",
        config.api_base,
        config.timeout
    );

    let app_state = AppState::new(&config).context("Failed to build HTTP client")?;

    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    tracing::info!("Embed server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    let router = app(app_state);
    axum::serve(listener, router).await?;

    Ok(())
}
