use serde::{Deserialize, Serialize};

/// One catalog entry from `products.json`, keyed externally by product id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductEntry {
    pub name: String,
    pub description: String,
    pub category: String,
    pub unit: String,
    pub emoji: String,
}

/// A catalog entry together with its id, as served by `/api/products`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductWithId {
    pub id: String,
    #[serde(flatten)]
    pub details: ProductEntry,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductList {
    pub products: Vec<ProductWithId>,
}
