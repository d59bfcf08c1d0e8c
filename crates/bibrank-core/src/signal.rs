//! Per-(term, field) match signals
//!
//! For one term against one field text, only the single strongest
//! applicable signal counts; signals are never summed within a pair.
//! Tiers: exact > word-boundary > substring > fuzzy.

use crate::config::SearchConfig;
use crate::tokenize::{normalize, split_normalized};

/// Kind of match between a query term and a field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum MatchSignal {
    Fuzzy,
    Substring,
    WordBoundary,
    Exact,
}

impl MatchSignal {
    /// Stable name for diagnostics
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchSignal::Exact => "exact",
            MatchSignal::WordBoundary => "word_boundary",
            MatchSignal::Substring => "substring",
            MatchSignal::Fuzzy => "fuzzy",
        }
    }
}

/// Score one normalized term against one raw field text.
///
/// Returns the strongest signal and its base score, or `None` when no
/// tier applies at or above the fuzzy threshold. The term must already
/// be normalized (as produced by [`crate::tokenize::tokenize`]).
pub fn match_signal(
    term: &str,
    field_text: &str,
    config: &SearchConfig,
) -> Option<(MatchSignal, f64)> {
    if term.is_empty() {
        return None;
    }

    let normalized = normalize(field_text);
    if normalized.is_empty() {
        return None;
    }

    if normalized == term {
        return Some((MatchSignal::Exact, config.signals.exact));
    }

    if normalized.contains(term) {
        let words = split_normalized(field_text);
        if words.iter().any(|w| w == term) {
            return Some((MatchSignal::WordBoundary, config.signals.word_boundary));
        }
        return Some((MatchSignal::Substring, config.signals.substring));
    }

    // Fuzzy: best trigram similarity against any single token
    let best = split_normalized(field_text)
        .iter()
        .map(|w| trigram_similarity(term, w))
        .fold(0.0_f64, f64::max);
    if best >= config.fuzzy_threshold {
        return Some((MatchSignal::Fuzzy, best * config.signals.fuzzy_scale));
    }

    None
}

/// Dice coefficient on character trigrams.
///
/// Strings are padded with two leading spaces and one trailing space
/// before windowing, so short tokens still produce boundary-anchored
/// trigrams.
pub fn trigram_similarity(a: &str, b: &str) -> f64 {
    let a_tri = trigrams(a);
    let b_tri = trigrams(b);
    if a_tri.is_empty() && b_tri.is_empty() {
        return 1.0;
    }
    if a_tri.is_empty() || b_tri.is_empty() {
        return 0.0;
    }

    let a_set: std::collections::HashSet<&[char]> =
        a_tri.windows(3).collect();
    let intersection = b_tri
        .windows(3)
        .collect::<std::collections::HashSet<&[char]>>()
        .intersection(&a_set)
        .count();

    let a_count = a_tri.len() - 2;
    let b_count = b_tri.len() - 2;
    (2.0 * intersection as f64) / (a_count + b_count) as f64
}

/// Padded character sequence for trigram windowing; empty when the
/// padded form is still shorter than one window.
fn trigrams(s: &str) -> Vec<char> {
    if s.is_empty() {
        return Vec::new();
    }
    let mut chars: Vec<char> = Vec::with_capacity(s.chars().count() + 3);
    chars.push(' ');
    chars.push(' ');
    chars.extend(s.chars());
    chars.push(' ');
    if chars.len() < 3 {
        return Vec::new();
    }
    chars
}
