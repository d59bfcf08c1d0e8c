//! Engine configuration with documented defaults
//!
//! Every numeric constant of the ranking algorithm lives here. The values
//! are fixed at process start and never vary per query; tests probe
//! boundary behavior by constructing non-default configs.

use serde::{Deserialize, Serialize};

/// Per-field weights applied to signal scores.
///
/// Title and citation key rank highest, DOI and authors next, tags next,
/// the remaining text fields lowest.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FieldWeights {
    pub title: f64,
    pub citation_key: f64,
    pub doi: f64,
    pub authors: f64,
    pub tags: f64,
    pub publication: f64,
    pub abstract_note: f64,
    pub url: f64,
    pub year: f64,
}

impl Default for FieldWeights {
    fn default() -> Self {
        Self {
            title: 3.0,
            citation_key: 3.0,
            doi: 2.0,
            authors: 2.0,
            tags: 1.5,
            publication: 1.0,
            abstract_note: 1.0,
            url: 1.0,
            year: 1.0,
        }
    }
}

/// Base scores for the match-signal tiers.
///
/// The tiers are strictly ordered: exact > word-boundary > substring >
/// fuzzy. A fuzzy match scores `similarity * fuzzy_scale`; with
/// similarity <= 1.0 that stays below the substring base, so a stronger
/// fuzzy match outranks a weaker one without ever outranking a substring
/// match.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SignalScores {
    pub exact: f64,
    pub word_boundary: f64,
    pub substring: f64,
    pub fuzzy_scale: f64,
}

impl Default for SignalScores {
    fn default() -> Self {
        Self {
            exact: 10.0,
            word_boundary: 8.0,
            substring: 5.0,
            fuzzy_scale: 3.0,
        }
    }
}

/// Full engine configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    pub weights: FieldWeights,
    pub signals: SignalScores,
    /// Minimum trigram similarity for a fuzzy match to count (default 0.35)
    pub fuzzy_threshold: f64,
    /// Multiplier applied when every query term matched somewhere (default 1.2)
    pub and_bonus: f64,
    /// When set, an item missing any query term is dropped instead of
    /// merely forfeiting the bonus (default false)
    pub require_all_terms: bool,
    /// Result count when the request carries no limit (default 50)
    pub default_limit: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            weights: FieldWeights::default(),
            signals: SignalScores::default(),
            fuzzy_threshold: 0.35,
            and_bonus: 1.2,
            require_all_terms: false,
            default_limit: 50,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tier_ordering() {
        let s = SignalScores::default();
        assert!(s.exact > s.word_boundary);
        assert!(s.word_boundary > s.substring);
        // fuzzy ceiling (similarity 1.0) stays below the substring base
        assert!(s.fuzzy_scale < s.substring);
    }

    #[test]
    fn test_default_weight_ordering() {
        let w = FieldWeights::default();
        assert!(w.title >= w.doi && w.citation_key >= w.authors);
        assert!(w.doi >= w.tags && w.authors >= w.tags);
        assert!(w.tags >= w.abstract_note);
    }

    #[test]
    fn test_config_serde_round_trip() {
        let config = SearchConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: SearchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
