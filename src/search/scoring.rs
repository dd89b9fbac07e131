//! Relevance scoring of a product against a free-text query.
//!
//! Scores are additive across tiers:
//! - title: exact / prefix / substring, falling back to typo-tolerant matching
//! - category: exact / substring / fuzzy
//! - badge: substring / fuzzy
//! - bonuses for several matching title words and for short titles
//!
//! A score of 0 means the product is excluded from search results.

use super::distance::{is_fuzzy_match, similarity};
use super::tokenize::{Query, SearchKey};
use crate::catalog::Product;
use crate::config::ScoringConfig;

/// Score every product receives when the query is empty.
pub const PASS_THROUGH_SCORE: u32 = 1;

/// Score a product against a raw query using the default weights.
pub fn score_relevance(product: &Product, search_term: &str) -> u32 {
    RelevanceScorer::default().score(&SearchKey::new(product), &Query::new(search_term))
}

/// Weighted, typo-tolerant relevance scorer.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RelevanceScorer {
    config: ScoringConfig,
}

impl RelevanceScorer {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Compute the relevance of `key` for `query`.
    pub fn score(&self, key: &SearchKey, query: &Query) -> u32 {
        if query.is_empty() {
            return PASS_THROUGH_SCORE;
        }

        let weights = &self.config.weights;
        let term = query.term();

        let mut score = self.title_exact_tier(key, term);
        if score == 0 {
            score = self.title_fuzzy_tier(key, query);
        }

        // weights come from user config; saturate instead of overflowing
        score = score
            .saturating_add(self.category_tier(key, term))
            .saturating_add(self.badge_tier(key, term));

        if self.matching_token_count(key, term) > 1 {
            score = score.saturating_add(weights.multi_token_bonus);
        }
        if score > 0 && key.tokens.len() <= self.config.concise_title_max_tokens {
            score = score.saturating_add(weights.concise_title_bonus);
        }

        score
    }

    fn title_exact_tier(&self, key: &SearchKey, term: &str) -> u32 {
        let weights = &self.config.weights;
        if key.title == term {
            weights.title_exact
        } else if key.title.starts_with(term) {
            weights.title_prefix
        } else if key.title.contains(term) {
            weights.title_substring
        } else {
            0
        }
    }

    /// Typo fallback, only consulted when the title has no literal match.
    fn title_fuzzy_tier(&self, key: &SearchKey, query: &Query) -> u32 {
        let weights = &self.config.weights;
        let thresholds = &self.config.thresholds;
        let term = query.term();

        let token_hit = key
            .tokens
            .iter()
            .filter(|token| token.chars().count() >= self.config.min_fuzzy_token_len)
            .any(|token| is_fuzzy_match(token, term, thresholds.title_token));
        if token_hit {
            return weights.title_token_fuzzy;
        }

        if query.len() >= self.config.min_whole_title_term_len
            && is_fuzzy_match(&key.title, term, thresholds.title_whole)
        {
            return weights.title_fuzzy;
        }

        let whole = similarity(&key.title, term);
        if (thresholds.title_near_exact..1.0).contains(&whole) {
            return weights.title_near_exact;
        }

        0
    }

    fn category_tier(&self, key: &SearchKey, term: &str) -> u32 {
        let weights = &self.config.weights;
        if key.category.is_empty() {
            0
        } else if key.category == term {
            weights.category_exact
        } else if key.category.contains(term) {
            weights.category_substring
        } else if is_fuzzy_match(&key.category, term, self.config.thresholds.category) {
            weights.category_fuzzy
        } else {
            0
        }
    }

    fn badge_tier(&self, key: &SearchKey, term: &str) -> u32 {
        let weights = &self.config.weights;
        if key.badge.is_empty() {
            0
        } else if key.badge.contains(term) {
            weights.badge_substring
        } else if is_fuzzy_match(&key.badge, term, self.config.thresholds.badge) {
            weights.badge_fuzzy
        } else {
            0
        }
    }

    /// Title tokens that contain the term, or fuzzy-match it when long enough.
    fn matching_token_count(&self, key: &SearchKey, term: &str) -> usize {
        key.tokens
            .iter()
            .filter(|token| {
                token.contains(term)
                    || (token.chars().count() >= self.config.min_fuzzy_token_len
                        && is_fuzzy_match(token, term, self.config.thresholds.title_token))
            })
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScoringWeights;
    use assert2::check;
    use rstest::rstest;

    fn headphones() -> Product {
        Product::new("p1", "Wireless Headphones", "Electronics")
            .with_price(50.0)
            .with_rating(4.5)
            .with_reviews(100)
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn test_empty_term_passes_through(#[case] term: &str) {
        check!(score_relevance(&headphones(), term) == PASS_THROUGH_SCORE);
        check!(score_relevance(&Product::new("p2", "", ""), term) == PASS_THROUGH_SCORE);
    }

    #[test]
    fn test_exact_title_breakdown() {
        // 100 exact + 10 (both tokens are contained in the term) + 5 concise
        check!(score_relevance(&headphones(), "Wireless Headphones") == 115);
    }

    #[test]
    fn test_prefix_title() {
        // 50 prefix + 5 concise; "wireless" is the only token containing the term
        check!(score_relevance(&headphones(), "wireless") == 55);
    }

    #[test]
    fn test_substring_title() {
        // 30 substring + 5 concise
        check!(score_relevance(&headphones(), "phones") == 35);
    }

    #[test]
    fn test_token_typo_fires_fuzzy_tier() {
        // 25 token fuzzy ("headphones" ~ "hedphones" = 0.9) + 5 concise
        check!(score_relevance(&headphones(), "hedphones") == 30);
    }

    #[test]
    fn test_whole_title_fuzzy() {
        // no single token is close, but the whole title is
        let product = Product::new("p1", "ab cd ef", "");
        // tokens are shorter than 3 chars, so only the whole-title attempt can fire
        let score = score_relevance(&product, "ab cd eg");
        // similarity = 1 - 1/8 = 0.875 >= 0.70 → 20, + 5 concise
        check!(score == 25);
    }

    #[test]
    fn test_short_dissimilar_term_scores_zero() {
        // term shorter than 4 chars skips the whole-title fuzzy attempt; the
        // near-exact band needs similarity >= 0.85, which "abc"/"abd" (0.67) misses
        let product = Product::new("p1", "abc", "");
        check!(score_relevance(&product, "abd") == 0);
    }

    #[test]
    fn test_near_exact_band() {
        let scorer = RelevanceScorer::new(ScoringConfig {
            min_whole_title_term_len: 100,
            min_fuzzy_token_len: 100,
            ..ScoringConfig::default()
        });
        let product = Product::new("p1", "abcdefghij", "");
        // similarity = 0.9 in [0.85, 1.0)
        let score = scorer.score(&SearchKey::new(&product), &Query::new("abcdefghix"));
        check!(score == 15 + 5);
    }

    #[rstest]
    #[case("electronics", 20)]
    #[case("electro", 10)]
    #[case("electronix", 8)]
    fn test_category_tier(#[case] term: &str, #[case] expected: u32) {
        let product = Product::new("p1", "Zzz", "Electronics");
        // category contribution plus the concise-title bonus
        check!(score_relevance(&product, term) == expected + 5);
    }

    #[rstest]
    #[case("seller", 5)]
    #[case("best sellr", 3)]
    fn test_badge_tier(#[case] term: &str, #[case] expected: u32) {
        let product = Product::new("p1", "Qqq", "").with_badge("Best Seller");
        check!(score_relevance(&product, term) == expected + 5);
    }

    #[test]
    fn test_huge_weights_saturate() {
        let scorer = RelevanceScorer::new(ScoringConfig {
            weights: ScoringWeights {
                title_exact: u32::MAX,
                category_exact: u32::MAX,
                ..ScoringWeights::default()
            },
            ..ScoringConfig::default()
        });
        let product = Product::new("p1", "Home", "Home");
        let score = scorer.score(&SearchKey::new(&product), &Query::new("home"));
        check!(score == u32::MAX);
    }

    #[test]
    fn test_no_match_scores_zero() {
        check!(score_relevance(&headphones(), "xyz") == 0);
    }

    #[test]
    fn test_long_titles_lose_concise_bonus() {
        let product = Product::new("p1", "Fast Compact Travel USB Wall Charger", "Electronics");
        check!(score_relevance(&product, "usb") == 30);
    }

    #[test]
    fn test_multi_token_bonus() {
        // both "cable" tokens contain the term
        let product = Product::new("p1", "Cable Organizer for Cable Boxes", "Home");
        // 50 prefix + 10 multi-token + 5 concise
        check!(score_relevance(&product, "cable") == 65);
    }

    #[test]
    fn test_exact_beats_single_typo() {
        let product = headphones();
        let exact = score_relevance(&product, "Wireless Headphones");
        let typo = score_relevance(&product, "Wireless Headphonez");
        check!(exact > typo);
        check!(typo > 0);
    }

    #[test]
    fn test_custom_weights_are_respected() {
        let scorer = RelevanceScorer::new(ScoringConfig {
            weights: ScoringWeights {
                title_exact: 1000,
                concise_title_bonus: 0,
                multi_token_bonus: 0,
                ..ScoringWeights::default()
            },
            ..ScoringConfig::default()
        });
        let product = headphones();
        let score = scorer.score(&SearchKey::new(&product), &Query::new("wireless headphones"));
        check!(score == 1000);
    }

    #[test]
    fn test_scoring_is_deterministic() {
        let product = headphones();
        let first = score_relevance(&product, "hedphones");
        for _ in 0..10 {
            check!(score_relevance(&product, "hedphones") == first);
        }
    }
}
