//! Deterministic ordering and truncation of scored items

use std::collections::BTreeSet;

use bibrank_domain::LibraryItem;

use crate::fields::SearchField;

/// One surviving item with its score, produced fresh per query.
#[derive(Clone, Debug)]
pub struct ScoredItem {
    pub item: LibraryItem,
    pub score: f64,
    pub matched_fields: BTreeSet<SearchField>,
}

/// Ranked, truncated results plus the pre-truncation total.
#[derive(Clone, Debug)]
pub struct Ranked {
    pub total: usize,
    pub items: Vec<ScoredItem>,
}

/// Sort by score descending; ties broken by `date_added` descending,
/// then by `key` ascending. The tie-break chain is a total order, so
/// identical inputs always produce identical output.
pub fn rank(mut scored: Vec<ScoredItem>, limit: usize) -> Ranked {
    scored.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| b.item.date_added.cmp(&a.item.date_added))
            .then_with(|| a.item.key.cmp(&b.item.key))
    });

    let total = scored.len();
    scored.truncate(limit.max(1));
    Ranked {
        total,
        items: scored,
    }
}

/// Effective limit for a request: absent falls back to the default,
/// zero or negative clamps to 1.
pub fn effective_limit(requested: Option<i64>, default_limit: usize) -> usize {
    match requested {
        None => default_limit.max(1),
        Some(l) if l <= 0 => 1,
        Some(l) => l as usize,
    }
}
