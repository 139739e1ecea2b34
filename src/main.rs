use std::sync::Arc;

use cinema_api::config::Config;
use cinema_api::service::MovieService;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();
    let service = Arc::new(MovieService::new());
    let app = cinema_api::create_app(service);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "cinema api listening");
    axum::serve(listener, app).await?;

    Ok(())
}
