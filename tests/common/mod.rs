//! Shared test fixtures and utilities for integration tests.
//!
//! - `catalog`: an in-memory catalog covering every filter dimension
//! - `TempCatalog`: a `products.json` on disk, for loader and tool tests

// Each integration test crate uses a different subset
#![allow(dead_code)]

use catalog_search::{Catalog, CatalogState, Product, SearchConfig};
use rstest::fixture;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

/// The products behind most tests, in catalog order.
pub fn sample_products() -> Vec<Product> {
    vec![
        Product::new("hp-1", "Wireless Headphones", "Electronics")
            .with_price(50.0)
            .with_list_price(79.99)
            .with_rating(4.5)
            .with_reviews(100)
            .with_badge("Best Seller")
            .with_added_at("2024-01-10"),
        Product::new("mouse-1", "Wireless Mouse", "Electronics")
            .with_price(19.99)
            .with_rating(4.1)
            .with_reviews(2300)
            .with_added_at("2024-03-02"),
        Product::new("lamp-1", "LED Desk Lamp with USB Charging Port", "Home")
            .with_price(32.5)
            .with_list_price(45.0)
            .with_rating(4.6)
            .with_reviews(870)
            .with_badge("Amazon's Choice"),
        Product::new("kettle-1", "Electric Kettle", "Kitchen")
            .with_price(39.0)
            .with_rating(4.3)
            .with_reviews(15400)
            .with_badge("Best Seller")
            .with_added_at("2023-11-20"),
        Product::new("knife-1", "Chef Knife", "Kitchen")
            .with_price(89.0)
            .with_list_price(120.0)
            .with_rating(4.8)
            .with_reviews(640),
        Product::new("cable-1", "Braided USB-C Cable", "Electronics")
            .with_price(9.99)
            .with_rating(3.9)
            .with_reviews(52),
        Product::new("mat-1", "Yoga Mat", "Sports")
            .with_price(25.0)
            .with_rating(4.4),
    ]
}

#[fixture]
pub fn catalog() -> Catalog {
    Catalog::from_products(sample_products())
}

/// A temporary directory holding a catalog file.
pub struct TempCatalog {
    _temp: TempDir,
    path: PathBuf,
}

impl TempCatalog {
    /// Write `json` as `products.json` in a fresh temp dir.
    pub fn with_json(json: &str) -> Self {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let path = temp.path().join("products.json");
        std::fs::write(&path, json).expect("Failed to write catalog");
        Self { _temp: temp, path }
    }

    /// Serialize `products` to disk.
    pub fn with_products(products: &[Product]) -> Self {
        let json = serde_json::to_string_pretty(products).expect("Failed to serialize products");
        Self::with_json(&json)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replace the file contents.
    pub fn rewrite(&self, json: &str) {
        std::fs::write(&self.path, json).expect("Failed to rewrite catalog");
    }
}

#[fixture]
pub fn temp_catalog() -> TempCatalog {
    TempCatalog::with_products(&sample_products())
}

/// Fresh state with no default catalog.
pub fn empty_state() -> Arc<CatalogState> {
    Arc::new(CatalogState::new(SearchConfig::default()))
}
