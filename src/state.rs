use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::rate_cache::RateCache;
use crate::store::CatalogStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn CatalogStore>,
    pub rate_cache: RateCache,
    pub config: Arc<AppConfig>,
}
