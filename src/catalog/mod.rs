//! Product catalog loading.
//!
//! A catalog is the read-only product list plus a normalized [`SearchKey`]
//! per product, built once at load time so repeated searches only pay for
//! scoring.

mod facets;
mod product;

pub use facets::{CategoryCount, Facets, PriceBounds};
pub use product::{MAX_RATING, Product};

use crate::error::LoadError;
use crate::search::SearchKey;
use serde_json::Value;
use std::path::Path;
use xxhash_rust::xxh3::xxh3_64;

/// An immutable, search-ready product collection.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    keys: Vec<SearchKey>,
    /// xxh3 of the source bytes; 0 when built from in-memory products.
    fingerprint: u64,
}

impl Catalog {
    /// Build a catalog from already-parsed products.
    pub fn from_products(products: Vec<Product>) -> Self {
        let keys = products.iter().map(SearchKey::new).collect();
        Self {
            products,
            keys,
            fingerprint: 0,
        }
    }

    /// Parse a `products.json` document.
    ///
    /// Accepts either a top-level array or an object with a `products` array.
    /// Entries that are not JSON objects are skipped with a warning.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, LoadError> {
        let document: Value = serde_json::from_slice(bytes).map_err(|e| LoadError::Parse {
            error: e.to_string(),
        })?;

        let entries = match document {
            Value::Array(entries) => entries,
            Value::Object(mut object) => match object.remove("products") {
                Some(Value::Array(entries)) => entries,
                _ => {
                    return Err(LoadError::Parse {
                        error: "expected a `products` array".to_string(),
                    });
                }
            },
            _ => {
                return Err(LoadError::Parse {
                    error: "expected an array of products".to_string(),
                });
            }
        };

        let mut products = Vec::with_capacity(entries.len());
        for (index, entry) in entries.into_iter().enumerate() {
            match serde_json::from_value::<Product>(entry) {
                Ok(product) => products.push(product),
                Err(e) => tracing::warn!("Skipping catalog entry {}: {}", index, e),
            }
        }

        let mut catalog = Self::from_products(products);
        catalog.fingerprint = fingerprint(bytes);
        Ok(catalog)
    }

    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        Self::from_slice(json.as_bytes())
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Products paired with their search keys, in catalog order.
    pub fn entries(&self) -> impl Iterator<Item = (&Product, &SearchKey)> {
        self.products.iter().zip(&self.keys)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn fingerprint(&self) -> u64 {
        self.fingerprint
    }

    /// Whether any product is in exactly this category.
    pub fn has_category(&self, category: &str) -> bool {
        self.products.iter().any(|p| p.category == category)
    }
}

/// Content fingerprint used to decide whether a cached catalog is stale.
pub fn fingerprint(bytes: &[u8]) -> u64 {
    xxh3_64(bytes)
}

/// Read and parse a catalog file.
pub async fn load(path: &Path) -> Result<Catalog, LoadError> {
    let bytes = read(path).await?;
    parse_blocking(bytes).await
}

/// Read the raw catalog bytes.
pub(crate) async fn read(path: &Path) -> Result<Vec<u8>, LoadError> {
    tokio::fs::read(path).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            LoadError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            LoadError::Io {
                path: path.to_path_buf(),
                error: e.to_string(),
            }
        }
    })
}

/// Parse in spawn_blocking since large catalogs are CPU intensive to key.
pub(crate) async fn parse_blocking(bytes: Vec<u8>) -> Result<Catalog, LoadError> {
    let start = std::time::Instant::now();
    let catalog = tokio::task::spawn_blocking(move || Catalog::from_slice(&bytes))
        .await
        .map_err(|e| LoadError::Parse {
            error: format!("catalog parsing task failed: {}", e),
        })??;

    tracing::info!(
        "Parsed catalog: {} products in {:?}",
        catalog.len(),
        start.elapsed()
    );
    Ok(catalog)
}
