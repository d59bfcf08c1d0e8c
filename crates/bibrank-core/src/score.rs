//! Per-item score aggregation

use std::collections::BTreeSet;

use crate::config::SearchConfig;
use crate::fields::{FieldText, SearchField};
use crate::signal::match_signal;

/// Outcome of scoring one item against a term list.
#[derive(Clone, Debug, PartialEq)]
pub struct ItemScore {
    pub score: f64,
    pub matched_fields: BTreeSet<SearchField>,
}

/// Score one item's extracted fields against the query terms.
///
/// A term's contribution is the sum over all fields of
/// `signal * field weight`, so a term hitting both title and abstract
/// outranks the same term hitting title alone. The item score is the sum
/// over terms, times the AND-bonus when every term matched somewhere.
/// Returns `None` when the item should not appear at all: no term
/// matched, or (under `require_all_terms`) any term missed.
pub fn score_item(fields: &[FieldText], terms: &[String], config: &SearchConfig) -> Option<ItemScore> {
    if terms.is_empty() || fields.is_empty() {
        return None;
    }

    let mut total = 0.0;
    let mut terms_matched = 0usize;
    let mut matched_fields = BTreeSet::new();

    for term in terms {
        let mut term_total = 0.0;
        for field in fields {
            if let Some((_, signal_score)) = match_signal(term, &field.text, config) {
                term_total += signal_score * field.weight;
                matched_fields.insert(field.field);
            }
        }
        if term_total > 0.0 {
            terms_matched += 1;
        }
        total += term_total;
    }

    if terms_matched == 0 {
        return None;
    }
    if config.require_all_terms && terms_matched < terms.len() {
        return None;
    }
    if terms_matched == terms.len() {
        total *= config.and_bonus;
    }

    Some(ItemScore {
        score: total,
        matched_fields,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FieldWeights;

    fn field(f: SearchField, text: &str) -> FieldText {
        FieldText {
            field: f,
            text: text.to_string(),
            weight: f.weight(&FieldWeights::default()),
        }
    }

    fn terms(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_sums_across_fields() {
        let config = SearchConfig::default();
        let title_only = vec![field(SearchField::Title, "deep learning survey")];
        let title_and_abstract = vec![
            field(SearchField::Title, "deep learning survey"),
            field(SearchField::Abstract, "a survey of deep learning methods"),
        ];
        let lone = score_item(&title_only, &terms(&["learning"]), &config).unwrap();
        let both = score_item(&title_and_abstract, &terms(&["learning"]), &config).unwrap();
        assert!(both.score > lone.score);
        assert!(both.matched_fields.contains(&SearchField::Abstract));
    }

    #[test]
    fn test_no_match_drops_item() {
        let config = SearchConfig::default();
        let fields = vec![field(SearchField::Title, "deep learning")];
        assert!(score_item(&fields, &terms(&["quantum"]), &config).is_none());
        assert!(score_item(&fields, &[], &config).is_none());
        assert!(score_item(&[], &terms(&["deep"]), &config).is_none());
    }

    #[test]
    fn test_and_bonus_applied_when_all_terms_match() {
        let config = SearchConfig::default();
        let fields = vec![field(SearchField::Title, "neural radiance fields")];
        let one = score_item(&fields, &terms(&["neural"]), &config).unwrap();
        let two = score_item(&fields, &terms(&["neural", "radiance"]), &config).unwrap();
        // two word-boundary title hits, both terms matched -> bonus on the sum
        let per_term = config.signals.word_boundary * config.weights.title;
        assert!((one.score - per_term * config.and_bonus).abs() < 1e-9);
        assert!((two.score - 2.0 * per_term * config.and_bonus).abs() < 1e-9);
    }

    #[test]
    fn test_partial_match_keeps_item_without_bonus() {
        let config = SearchConfig::default();
        let fields = vec![field(SearchField::Title, "neural radiance fields")];
        let partial = score_item(&fields, &terms(&["neural", "quantum"]), &config).unwrap();
        let per_term = config.signals.word_boundary * config.weights.title;
        assert!((partial.score - per_term).abs() < 1e-9);
    }

    #[test]
    fn test_require_all_terms_drops_partial_match() {
        let config = SearchConfig {
            require_all_terms: true,
            ..SearchConfig::default()
        };
        let fields = vec![field(SearchField::Title, "neural radiance fields")];
        assert!(score_item(&fields, &terms(&["neural", "quantum"]), &config).is_none());
        assert!(score_item(&fields, &terms(&["neural", "radiance"]), &config).is_some());
    }

    #[test]
    fn test_repeated_term_contributes_per_occurrence() {
        let config = SearchConfig::default();
        let fields = vec![field(SearchField::Title, "neural radiance fields")];
        let once = score_item(&fields, &terms(&["neural"]), &config).unwrap();
        let twice = score_item(&fields, &terms(&["neural", "neural"]), &config).unwrap();
        // both occurrences count, and the bonus still applies
        assert!((twice.score - 2.0 * once.score).abs() < 1e-9);
    }
}
