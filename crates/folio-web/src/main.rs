use anyhow::Context;
use folio_web::{build_router, with_middleware, with_static_files, AppState, ServerConfig};
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "folio_web=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env()?;
    tracing::info!("Opening content store: {}", config.source);

    let state = AppState::open(&config.source)
        .await
        .context("failed to open content store")?;
    state
        .store
        .health()
        .await
        .context("content store health check failed")?;

    tracing::info!("Serving static files from: {}", config.static_dir.display());
    let app = with_middleware(with_static_files(build_router(state), &config.static_dir));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind to {addr}"))?;

    tracing::info!("Portfolio server running on http://{}", addr);
    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
