use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use priceboard_backend::app;
use priceboard_backend::config::AppConfig;
use priceboard_backend::logging::{self, LoggingConfig};
use priceboard_backend::services::rate_cache::RateCache;
use priceboard_backend::state::AppState;
use priceboard_backend::store::FileStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    logging::init_logging(LoggingConfig::from_env())?;

    let config = AppConfig::from_env();
    config.validate().map_err(anyhow::Error::msg)?;
    let config = Arc::new(config);

    let state = AppState {
        store: Arc::new(FileStore::new(config.data_dir.clone())),
        rate_cache: RateCache::new(),
        config: config.clone(),
    };
    let app = app::create_app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(
        "🚀 Priceboard backend running at http://{}/ (data dir {})",
        addr,
        config.data_dir.display()
    );
    axum::serve(listener, app).await?;

    Ok(())
}
