//! Typo-tolerant relevance scoring for product search.
//!
//! This module provides edit-distance similarity, normalized search keys and
//! the weighted scorer that decides whether (and how strongly) a product
//! matches a free-text query.

// Module declarations
pub(crate) mod distance;
pub(crate) mod scoring;
pub(crate) mod tokenize;

// Public re-exports (used via lib.rs)
pub use distance::{is_fuzzy_match, levenshtein, similarity};
pub use scoring::{PASS_THROUGH_SCORE, RelevanceScorer, score_relevance};
pub use tokenize::{Query, SearchKey};
