//! Books Server - in-memory book catalog REST API

use std::net::SocketAddr;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use books_server::{api, config::AppConfig, repository::Repository, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("books_server={},tower_http=debug", config.logging.level).into());

    let registry = tracing_subscriber::registry().with(filter);
    if config.logging.format == "json" {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!("Starting Books Server v{}", env!("CARGO_PKG_VERSION"));

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);
    tracing::info!(
        "Book routes mounted at {} with a {:?} handler timeout",
        config.books.path,
        config.books.timeout()
    );

    let state = AppState::new(config, Repository::in_memory());
    let app = api::router(state);

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
