pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod search;
pub mod server;
pub mod state;
pub mod tools;
pub mod tracing;

pub use catalog::{Catalog, Facets, Product};
pub use config::SearchConfig;
pub use error::{CriteriaError, LoadError};
pub use pipeline::{
    FilterCriteria, ListingState, Page, PageRequest, PriceRange, Ranking, ScoredProduct, SortMode,
    filter_and_rank,
};
pub use search::{RelevanceScorer, is_fuzzy_match, levenshtein, score_relevance, similarity};
pub use state::CatalogState;
