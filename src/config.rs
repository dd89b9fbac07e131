//! Runtime configuration loaded from TOML.
//!
//! Every field has a default, so an empty (or absent) config file yields the
//! stock scoring weights, a page size of 12 and no default catalog path.
//!
//! ```toml
//! [scoring.weights]
//! title_exact = 100
//!
//! [scoring.thresholds]
//! title_token = 0.75
//!
//! [listing]
//! page_size = 24
//! default_sort = "rating"
//!
//! [catalog]
//! path = "~/site/public/data/products.json"
//! ```

use crate::error::ConfigError;
use crate::pipeline::SortMode;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::path::{Path, PathBuf};

/// Directory name under the platform config dir.
const CONFIG_DIR_NAME: &str = "catalog-search";

/// Products per page in the reference listing UI.
pub const DEFAULT_PAGE_SIZE: usize = 12;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub scoring: ScoringConfig,
    pub listing: ListingConfig,
    pub catalog: CatalogConfig,
}

/// Point values awarded by each relevance tier.
///
/// These were tuned by hand against a real catalog and have no derivation
/// beyond that; treat them as knobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    pub title_exact: u32,
    pub title_prefix: u32,
    pub title_substring: u32,
    pub title_token_fuzzy: u32,
    pub title_fuzzy: u32,
    pub title_near_exact: u32,
    pub category_exact: u32,
    pub category_substring: u32,
    pub category_fuzzy: u32,
    pub badge_substring: u32,
    pub badge_fuzzy: u32,
    pub multi_token_bonus: u32,
    pub concise_title_bonus: u32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            title_exact: 100,
            title_prefix: 50,
            title_substring: 30,
            title_token_fuzzy: 25,
            title_fuzzy: 20,
            title_near_exact: 15,
            category_exact: 20,
            category_substring: 10,
            category_fuzzy: 8,
            badge_substring: 5,
            badge_fuzzy: 3,
            multi_token_bonus: 10,
            concise_title_bonus: 5,
        }
    }
}

/// Similarity thresholds (0.0 to 1.0) for the fuzzy tiers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FuzzyThresholds {
    /// Single title token against the term.
    pub title_token: f64,
    /// Whole title against the term.
    pub title_whole: f64,
    /// Lower bound of the near-exact band; the upper bound is always 1.0 (exclusive).
    pub title_near_exact: f64,
    pub category: f64,
    pub badge: f64,
}

impl Default for FuzzyThresholds {
    fn default() -> Self {
        Self {
            title_token: 0.75,
            title_whole: 0.70,
            title_near_exact: 0.85,
            category: 0.80,
            badge: 0.80,
        }
    }
}

/// Everything the relevance scorer is parameterised by.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub weights: ScoringWeights,
    pub thresholds: FuzzyThresholds,
    /// Title tokens shorter than this never fuzzy-match.
    pub min_fuzzy_token_len: usize,
    /// Terms shorter than this skip the whole-title fuzzy attempt.
    pub min_whole_title_term_len: usize,
    /// Titles with at most this many tokens earn the concise bonus.
    pub concise_title_max_tokens: usize,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weights: ScoringWeights::default(),
            thresholds: FuzzyThresholds::default(),
            min_fuzzy_token_len: 3,
            min_whole_title_term_len: 4,
            concise_title_max_tokens: 5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListingConfig {
    pub page_size: usize,
    /// Sort mode used when a request does not name one.
    pub default_sort: SortMode,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            default_sort: SortMode::Default,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Catalog used when a request does not name one. `~` is expanded.
    pub path: Option<PathBuf>,
}

impl SearchConfig {
    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, the platform config location
    /// is tried and silently skipped when absent.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        match default_config_path() {
            Some(path) if path.is_file() => Self::from_file(&path),
            _ => {
                tracing::debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Parse a config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// The configured default catalog path, with `~` expanded.
    pub fn catalog_path(&self) -> Option<PathBuf> {
        self.catalog
            .path
            .as_ref()
            .map(|p| PathBuf::from(expand_tilde(&p.to_string_lossy()).into_owned()))
    }
}

/// `<config dir>/catalog-search/config.toml`, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join("config.toml"))
}

/// Expands tilde (`~`) in a path to the user's home directory.
///
/// - `~/foo` becomes `/home/user/foo`
/// - `~` becomes `/home/user`
/// - Other paths are returned unchanged
pub fn expand_tilde(path: &str) -> Cow<'_, str> {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return Cow::Owned(home.join(stripped).display().to_string());
        }
    } else if path == "~"
        && let Some(home) = dirs::home_dir()
    {
        return Cow::Owned(home.display().to_string());
    }
    Cow::Borrowed(path)
}
