use std::sync::Arc;

use dashmap::DashMap;

type RateKey = (i32, String, String);

/// Thread-safe memo of exchange-rate lookups, keyed strictly on
/// (year, month, currency code).
///
/// The backing tables are immutable, so entries never go stale; the cache
/// only saves the repeated file reads a single aggregation pass would
/// otherwise issue for every country sharing a currency.
#[derive(Clone, Default)]
pub struct RateCache {
    cache: Arc<DashMap<RateKey, f64>>,
}

impl RateCache {
    pub fn new() -> Self {
        Self {
            cache: Arc::new(DashMap::new()),
        }
    }

    pub fn get(&self, year: i32, month: &str, currency: &str) -> Option<f64> {
        self.cache
            .get(&(year, month.to_string(), currency.to_string()))
            .map(|entry| *entry.value())
    }

    pub fn insert(&self, year: i32, month: &str, currency: &str, rate: f64) {
        self.cache
            .insert((year, month.to_string(), currency.to_string()), rate);
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}
