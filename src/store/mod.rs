mod file_store;

pub use file_store::FileStore;

use std::collections::BTreeMap;
use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{CountryEntry, ProductEntry, RateTable};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("data file not found: {}", path.display())]
    NotFound { path: PathBuf },
    #[error("malformed data file {}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("i/o error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Read-only access to the static price/catalog data. Behind a trait so
/// handlers and services stay independent of where the JSON actually lives.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    async fn load_countries(&self) -> Result<BTreeMap<String, CountryEntry>, StoreError>;

    async fn load_products(&self) -> Result<BTreeMap<String, ProductEntry>, StoreError>;

    /// The exchange-rate table for one year. `NotFound` when that year has
    /// no file.
    async fn load_rate_table(&self, year: i32) -> Result<RateTable, StoreError>;
}
