//! Search entry point
//!
//! Wires tokenizer, field extraction, scoring, and ranking over
//! candidates from the external data layer. Ranking itself is pure and
//! synchronous; the only shared state across queries is the write-once
//! citation-key cache.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use bibrank_domain::{ItemSource, LibraryId};

use crate::citekey::CiteKeyResolver;
use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::fields::extract_fields;
use crate::rank::{effective_limit, rank, ScoredItem};
use crate::score::score_item;
use crate::tokenize::tokenize;

/// A search query as delivered by the external request layer.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SearchRequest {
    pub text: String,
    /// Maximum items to return; absent uses the configured default,
    /// zero or negative clamps to 1
    pub limit: Option<i64>,
    pub library_scope: Option<LibraryId>,
}

impl SearchRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            limit: None,
            library_scope: None,
        }
    }

    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_library_scope(mut self, scope: LibraryId) -> Self {
        self.library_scope = Some(scope);
        self
    }
}

/// One ranked result shaped for the assistant-facing response.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchHit {
    pub key: String,
    pub item_type: String,
    pub title: Option<String>,
    /// Creators as display names, in item order
    pub creators: Vec<String>,
    pub year: Option<String>,
    pub citation_key: Option<String>,
    pub doi: Option<String>,
    pub publication: Option<String>,
    pub tags: Vec<String>,
    /// Names of the fields the query matched; never empty
    pub matched_fields: Vec<String>,
    pub score: f64,
}

/// Response for one query.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    /// The raw query text as received
    pub query: String,
    /// Count of all matching items before limit truncation
    pub total: usize,
    pub items: Vec<SearchHit>,
}

/// The relevance-ranking search engine.
///
/// Owns its configuration and citation-key resolver for the process
/// lifetime; candidate items are fetched per query from the read-only
/// data layer. Safe to share across concurrent queries.
pub struct SearchEngine {
    source: Arc<dyn ItemSource>,
    resolver: CiteKeyResolver,
    config: SearchConfig,
}

impl SearchEngine {
    pub fn new(source: Arc<dyn ItemSource>, resolver: CiteKeyResolver, config: SearchConfig) -> Self {
        Self {
            source,
            resolver,
            config,
        }
    }

    /// Engine with default configuration and an extra-field-only resolver.
    pub fn with_defaults(source: Arc<dyn ItemSource>) -> Self {
        Self::new(source, CiteKeyResolver::new(), SearchConfig::default())
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Run one query end to end.
    ///
    /// Rejects blank queries before any matching; items where no term
    /// matches are excluded rather than reported with score zero.
    pub fn search(&self, request: &SearchRequest) -> Result<SearchResponse, SearchError> {
        let terms = tokenize(&request.text)?;
        let limit = effective_limit(request.limit, self.config.default_limit);

        let candidates = self.source.fetch_candidate_items(request.library_scope)?;
        tracing::debug!(
            terms = terms.len(),
            candidates = candidates.len(),
            limit,
            "ranking candidates"
        );

        let mut scored: Vec<ScoredItem> = Vec::new();
        for item in candidates {
            let citation_key = self.resolver.resolve(&item);
            let fields = extract_fields(&item, citation_key.as_deref(), &self.config.weights);
            if let Some(result) = score_item(&fields, &terms, &self.config) {
                scored.push(ScoredItem {
                    item,
                    score: result.score,
                    matched_fields: result.matched_fields,
                });
            }
        }

        let ranked = rank(scored, limit);
        tracing::debug!(total = ranked.total, returned = ranked.items.len(), "query done");

        let items = ranked
            .items
            .into_iter()
            .map(|s| self.shape_hit(s))
            .collect();

        Ok(SearchResponse {
            query: request.text.clone(),
            total: ranked.total,
            items,
        })
    }

    fn shape_hit(&self, scored: ScoredItem) -> SearchHit {
        let item = &scored.item;
        SearchHit {
            key: item.key.clone(),
            item_type: item.item_type.clone(),
            title: item.title().map(str::to_string),
            creators: item.creators.iter().map(|c| c.display_name()).collect(),
            year: item.year(),
            citation_key: self.resolver.resolve(item),
            doi: item.doi().map(str::to_string),
            publication: item.publication_title().map(str::to_string),
            tags: item.tags.clone(),
            matched_fields: scored
                .matched_fields
                .iter()
                .map(|f| f.as_str().to_string())
                .collect(),
            score: scored.score,
        }
    }
}
