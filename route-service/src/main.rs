//! Route service entry point.

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use route_service::provider::TomTomProvider;
use route_service::{routes, Config, RouteTracker};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    let _log = rolling_logger::init_logger(&config.log_dir, "route-service", config.log_max_lines)
        .context("failed to init rolling logger")?;

    let provider = TomTomProvider::new(
        config.tomtom_base_url.clone(),
        config.tomtom_api_key.clone(),
        config.request_timeout(),
    )
    .context("failed to build HTTP client")?;

    let app = routes::router(RouteTracker::new(Arc::new(provider)));

    let listener = tokio::net::TcpListener::bind(config.listen)
        .await
        .with_context(|| format!("failed to bind {}", config.listen))?;
    tracing::info!("route-service listening on {}", config.listen);

    axum::serve(listener, app.into_make_service())
        .await
        .context("server error")?;
    Ok(())
}
