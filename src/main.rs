use anyhow::Context;
use api::{serve, Config};
use repository::Repository;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

const DATABASE_URL_ENV: &str = "DATABASE_URL";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut config = util::load_config::<Config>(&util::config_path())?;
    if let Ok(url) = std::env::var(DATABASE_URL_ENV) {
        config.database.url = url;
    }

    let repository = Repository::new(
        &config.database.url,
        config.database.pool_options(),
    )
    .await
    .context("failed to open the event database")?;

    let router = serve(repository, &config.cors)?;

    let address = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {address}"))?;
    info!(task = "listen", %address);

    Ok(axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(task = "shutdown", error = %e);
    }
    info!(task = "shutdown");
}
