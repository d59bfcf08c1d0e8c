//! In-memory item source and item builders
//!
//! Each test binary uses a different subset of these helpers.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};

use bibrank_core::{CiteKeyStore, SearchEngine};
use bibrank_domain::{Creator, ItemSource, LibraryId, LibraryItem, SourceError};

/// Read-only in-memory source standing in for the data layer.
pub struct InMemorySource {
    items: Vec<LibraryItem>,
    /// library id -> item keys, for scope filtering
    scopes: HashMap<LibraryId, Vec<String>>,
}

impl InMemorySource {
    pub fn new(items: Vec<LibraryItem>) -> Self {
        Self {
            items,
            scopes: HashMap::new(),
        }
    }

    pub fn with_scope(mut self, library: LibraryId, keys: &[&str]) -> Self {
        self.scopes
            .insert(library, keys.iter().map(|k| k.to_string()).collect());
        self
    }
}

impl ItemSource for InMemorySource {
    fn fetch_candidate_items(
        &self,
        scope: Option<LibraryId>,
    ) -> Result<Vec<LibraryItem>, SourceError> {
        match scope {
            None => Ok(self.items.clone()),
            Some(id) => {
                let keys = self
                    .scopes
                    .get(&id)
                    .ok_or(SourceError::LibraryNotFound(id))?;
                Ok(self
                    .items
                    .iter()
                    .filter(|item| keys.contains(&item.key))
                    .cloned()
                    .collect())
            }
        }
    }
}

/// Secondary citation-key store backed by a map.
pub struct MapCiteKeyStore {
    keys: HashMap<String, String>,
}

impl MapCiteKeyStore {
    pub fn new(pairs: &[(&str, &str)]) -> Self {
        Self {
            keys: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

impl CiteKeyStore for MapCiteKeyStore {
    fn lookup_key(&self, item_key: &str) -> Result<Option<String>, SourceError> {
        Ok(self.keys.get(item_key).cloned())
    }
}

/// Engine over a fixed item list with default configuration.
pub fn engine_over(items: Vec<LibraryItem>) -> SearchEngine {
    SearchEngine::with_defaults(Arc::new(InMemorySource::new(items)))
}

pub fn added_at(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(secs, 0).unwrap()
}

/// A journal article with a title and a deterministic timestamp.
pub fn article(key: &str, title: &str) -> LibraryItem {
    LibraryItem::new(key, "journalArticle")
        .with_title(title)
        .with_dates(added_at(1_000_000), added_at(1_000_000))
}

pub fn author(family: &str, given: &str) -> Creator {
    Creator::new(family).with_given_name(given)
}
