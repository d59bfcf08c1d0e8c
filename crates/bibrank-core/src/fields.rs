//! Weighted searchable fields extracted from a library item

use bibrank_domain::LibraryItem;
use serde::{Deserialize, Serialize};

use crate::config::FieldWeights;

/// The fields the engine searches, in extraction order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SearchField {
    Title,
    CitationKey,
    Doi,
    Authors,
    Tags,
    Publication,
    Abstract,
    Url,
    Year,
}

impl SearchField {
    /// Stable field name reported in `matched_fields`
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchField::Title => "title",
            SearchField::CitationKey => "citation_key",
            SearchField::Doi => "doi",
            SearchField::Authors => "authors",
            SearchField::Tags => "tags",
            SearchField::Publication => "publication",
            SearchField::Abstract => "abstract",
            SearchField::Url => "url",
            SearchField::Year => "year",
        }
    }

    /// Weight for this field under the given table
    pub fn weight(&self, weights: &FieldWeights) -> f64 {
        match self {
            SearchField::Title => weights.title,
            SearchField::CitationKey => weights.citation_key,
            SearchField::Doi => weights.doi,
            SearchField::Authors => weights.authors,
            SearchField::Tags => weights.tags,
            SearchField::Publication => weights.publication,
            SearchField::Abstract => weights.abstract_note,
            SearchField::Url => weights.url,
            SearchField::Year => weights.year,
        }
    }
}

/// One searchable field of one item: name, rendered text, weight.
#[derive(Clone, Debug)]
pub struct FieldText {
    pub field: SearchField,
    pub text: String,
    pub weight: f64,
}

/// Extract the weighted text fields of an item.
///
/// The citation key comes from the resolver rather than the item itself.
/// Fields with no text are omitted; they never contribute and never
/// error.
pub fn extract_fields(
    item: &LibraryItem,
    citation_key: Option<&str>,
    weights: &FieldWeights,
) -> Vec<FieldText> {
    let mut out = Vec::new();
    let mut push = |field: SearchField, text: Option<String>| {
        if let Some(text) = text.filter(|t| !t.is_empty()) {
            out.push(FieldText {
                field,
                text,
                weight: field.weight(weights),
            });
        }
    };

    push(SearchField::Title, item.title().map(str::to_string));
    push(SearchField::CitationKey, citation_key.map(str::to_string));
    push(SearchField::Doi, item.doi().map(str::to_string));
    push(SearchField::Authors, render_authors(item));
    push(SearchField::Tags, render_tags(item));
    push(
        SearchField::Publication,
        item.publication_title().map(str::to_string),
    );
    push(SearchField::Abstract, item.abstract_note().map(str::to_string));
    push(SearchField::Url, item.url().map(str::to_string));
    push(SearchField::Year, item.year());

    out
}

/// Creators rendered "family given", joined by spaces
fn render_authors(item: &LibraryItem) -> Option<String> {
    if item.creators.is_empty() {
        return None;
    }
    Some(
        item.creators
            .iter()
            .map(|c| c.search_text())
            .collect::<Vec<_>>()
            .join(" "),
    )
}

fn render_tags(item: &LibraryItem) -> Option<String> {
    if item.tags.is_empty() {
        return None;
    }
    Some(item.tags.join(" "))
}
