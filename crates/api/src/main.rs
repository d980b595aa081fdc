use std::sync::Arc;

use anyhow::Context;

use stockly_api::app::{self, services::AppServices};
use stockly_infra::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("failed to load configuration")?;
    stockly_observability::init(&config.logging);

    let services = AppServices::from_config(&config)
        .await
        .context("failed to open record stores")?;

    // Seeding must finish before the listener is bound.
    let app = app::start(Arc::new(services))
        .await
        .context("startup seeding failed")?;

    let listener = tokio::net::TcpListener::bind(config.server.bind_addr())
        .await
        .with_context(|| format!("failed to bind {}", config.server.bind_addr()))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
