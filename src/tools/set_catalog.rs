use crate::catalog::{Catalog, Facets};
use crate::config::expand_tilde;
use crate::state::CatalogState;
use anyhow::{Result, anyhow};
use rmcp::schemars;
use serde::Deserialize;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Parameters for set_catalog tool
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SetCatalogRequest {
    /// Path to a products.json file
    pub path: String,
}

/// Validate, load and remember a catalog as the default for later requests.
pub async fn handle_set_catalog(
    state: &CatalogState,
    request: SetCatalogRequest,
) -> Result<(PathBuf, Arc<Catalog>)> {
    let expanded = expand_tilde(&request.path);
    let path_buf = PathBuf::from(expanded.as_ref());

    let canonical_path = tokio::fs::canonicalize(&path_buf)
        .await
        .map_err(|e| anyhow!("Failed to resolve path '{}': {}", request.path, e))?;

    let metadata = tokio::fs::metadata(&canonical_path)
        .await
        .map_err(|e| anyhow!("Failed to read '{}': {}", canonical_path.display(), e))?;
    if !metadata.is_file() {
        return Err(anyhow!("Path is not a file: {}", canonical_path.display()));
    }

    let catalog = state.get(&canonical_path).await?;
    state.set_default_catalog(canonical_path.clone()).await;

    Ok((canonical_path, catalog))
}

/// Format a user-friendly response showing the configured catalog.
pub fn format_response(path: &Path, catalog: &Catalog) -> String {
    let facets = Facets::from_catalog(catalog);
    let mut response = format!("Catalog configured: {}\n\n", path.display());

    let _ = writeln!(response, "Products: {}", catalog.len());
    let _ = writeln!(response, "Categories: {}", facets.categories.len());
    for category in facets.categories.iter().take(10) {
        let _ = writeln!(response, "  - {} ({})", category.name, category.count);
    }
    if facets.categories.len() > 10 {
        let _ = writeln!(response, "  ... and {} more", facets.categories.len() - 10);
    }

    response
}
