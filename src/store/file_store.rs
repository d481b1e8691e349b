use std::collections::BTreeMap;
use std::path::PathBuf;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::{CatalogStore, StoreError};
use crate::models::{CountryEntry, ProductEntry, RateTable};

/// File-backed store reading the static JSON data under one directory:
/// `data-sample.json`, `products.json` and `exchange-rates/<year>.json`.
///
/// Files are read fresh on every call; the data is immutable so there is
/// nothing to invalidate.
#[derive(Debug, Clone)]
pub struct FileStore {
    data_dir: PathBuf,
}

impl FileStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    async fn read_json<T: DeserializeOwned>(&self, path: PathBuf) -> Result<T, StoreError> {
        debug!("reading data file {}", path.display());
        let raw = match tokio::fs::read_to_string(&path).await {
            Ok(raw) => raw,
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                return Err(StoreError::NotFound { path });
            }
            Err(source) => return Err(StoreError::Io { path, source }),
        };
        serde_json::from_str(&raw).map_err(|source| StoreError::Malformed { path, source })
    }
}

#[async_trait]
impl CatalogStore for FileStore {
    async fn load_countries(&self) -> Result<BTreeMap<String, CountryEntry>, StoreError> {
        self.read_json(self.data_dir.join("data-sample.json")).await
    }

    async fn load_products(&self) -> Result<BTreeMap<String, ProductEntry>, StoreError> {
        self.read_json(self.data_dir.join("products.json")).await
    }

    async fn load_rate_table(&self, year: i32) -> Result<RateTable, StoreError> {
        self.read_json(
            self.data_dir
                .join("exchange-rates")
                .join(format!("{year}.json")),
        )
        .await
    }
}
