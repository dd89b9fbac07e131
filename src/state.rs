//! Shared catalog state for tool handlers.
//!
//! Catalogs are cached per path and revalidated against a content fingerprint
//! on every access, so edits made by the data-fetching scripts show up on the
//! next request without a restart.

use crate::catalog::{self, Catalog};
use crate::config::SearchConfig;
use crate::error::LoadError;
use crate::search::RelevanceScorer;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Maximum number of parsed catalogs to keep in memory.
const LRU_CACHE_SIZE: NonZeroUsize = NonZeroUsize::new(8).unwrap();

/// Central coordination point for:
/// - the loaded configuration and scorer
/// - the default catalog path
/// - caching parsed catalogs (LRU)
pub struct CatalogState {
    config: SearchConfig,
    scorer: RelevanceScorer,
    default_catalog: RwLock<Option<PathBuf>>,
    cache: RwLock<LruCache<PathBuf, Arc<Catalog>>>,
}

impl std::fmt::Debug for CatalogState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogState")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl CatalogState {
    pub fn new(config: SearchConfig) -> Self {
        let default_catalog = config.catalog_path();
        Self {
            scorer: RelevanceScorer::new(config.scoring),
            config,
            default_catalog: RwLock::new(default_catalog),
            cache: RwLock::new(LruCache::new(LRU_CACHE_SIZE)),
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn scorer(&self) -> &RelevanceScorer {
        &self.scorer
    }

    pub async fn default_catalog(&self) -> Option<PathBuf> {
        self.default_catalog.read().await.clone()
    }

    pub async fn set_default_catalog(&self, path: PathBuf) {
        tracing::info!("Default catalog set to {}", path.display());
        *self.default_catalog.write().await = Some(path);
    }

    /// Resolve an explicit path, falling back to the default catalog.
    pub async fn resolve(&self, explicit: Option<&Path>) -> Option<PathBuf> {
        match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => self.default_catalog().await,
        }
    }

    /// Get a catalog, reparsing only when the file content changed.
    pub async fn get(&self, path: &Path) -> Result<Arc<Catalog>, LoadError> {
        let key = tokio::fs::canonicalize(path)
            .await
            .unwrap_or_else(|_| path.to_path_buf());

        let bytes = catalog::read(&key).await?;
        let fingerprint = catalog::fingerprint(&bytes);

        {
            let mut cache = self.cache.write().await;
            if let Some(cached) = cache.get(&key) {
                if cached.fingerprint() == fingerprint {
                    tracing::debug!("Cache hit for {}", key.display());
                    return Ok(cached.clone());
                }
                tracing::info!("Catalog {} changed on disk, reloading", key.display());
            }
        }

        let parsed = Arc::new(catalog::parse_blocking(bytes).await.inspect_err(|e| {
            tracing::warn!("Failed to load catalog {}: {}", key.display(), e);
        })?);

        self.cache.write().await.put(key, parsed.clone());
        Ok(parsed)
    }

    pub async fn is_cached(&self, path: &Path) -> bool {
        let key = tokio::fs::canonicalize(path)
            .await
            .unwrap_or_else(|_| path.to_path_buf());
        self.cache.read().await.contains(&key)
    }

    pub async fn clear_cache(&self) {
        self.cache.write().await.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;

    #[tokio::test]
    async fn test_state_new() {
        let state = CatalogState::new(SearchConfig::default());
        check!(state.default_catalog().await.is_none());
        check!(state.resolve(None).await.is_none());
        check!(!state.is_cached(Path::new("/nope/products.json")).await);
    }

    #[tokio::test]
    async fn test_resolve_prefers_explicit_path() {
        let state = CatalogState::new(SearchConfig::default());
        state.set_default_catalog(PathBuf::from("/data/default.json")).await;

        check!(state.resolve(None).await == Some(PathBuf::from("/data/default.json")));
        check!(
            state.resolve(Some(Path::new("/data/other.json"))).await
                == Some(PathBuf::from("/data/other.json"))
        );
    }

    #[tokio::test]
    async fn test_missing_catalog_is_not_found() {
        let state = CatalogState::new(SearchConfig::default());
        let err = state.get(Path::new("/nope/products.json")).await.unwrap_err();
        check!(matches!(err, LoadError::NotFound { .. }));
    }
}
