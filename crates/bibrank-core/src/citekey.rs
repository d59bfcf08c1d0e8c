//! Citation-key resolution
//!
//! A citation key can come from two places, tried in order:
//! 1. The item's free-text "extra" field, via a `Citation Key:` or
//!    `bibtex:` line. This source always wins.
//! 2. An optional secondary key-value store maintained by a citation-key
//!    manager alongside the library.
//!
//! Resolutions (including "absent") are memoized for the process
//! lifetime; the backing data is assumed immutable while we run. The
//! resolver is an explicit object owned by the hosting service, not
//! global state.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use lazy_static::lazy_static;
use regex::Regex;

use bibrank_domain::{LibraryItem, SourceError};

lazy_static! {
    /// `Citation Key: <token>` or `bibtex: <token>` at a line start,
    /// case-insensitive
    static ref CITE_KEY_LINE: Regex =
        Regex::new(r"(?im)^\s*(?:citation key|bibtex)\s*:\s*(\S+)").unwrap();
}

/// Secondary citation-key collaborator, keyed by the item's stable key.
pub trait CiteKeyStore: Send + Sync {
    fn lookup_key(&self, item_key: &str) -> Result<Option<String>, SourceError>;
}

/// One way of resolving an item's citation key.
pub trait CiteKeyStrategy: Send + Sync {
    fn resolve(&self, item: &LibraryItem) -> Option<String>;
}

/// Parses the item's "extra" field; first matching line wins.
pub struct ExtraFieldStrategy;

impl CiteKeyStrategy for ExtraFieldStrategy {
    fn resolve(&self, item: &LibraryItem) -> Option<String> {
        let extra = item.extra()?;
        CITE_KEY_LINE
            .captures(extra)
            .map(|caps| caps[1].to_string())
    }
}

/// Queries the secondary store; failures degrade to "absent".
pub struct SecondaryStoreStrategy {
    store: Arc<dyn CiteKeyStore>,
}

impl SecondaryStoreStrategy {
    pub fn new(store: Arc<dyn CiteKeyStore>) -> Self {
        Self { store }
    }
}

impl CiteKeyStrategy for SecondaryStoreStrategy {
    fn resolve(&self, item: &LibraryItem) -> Option<String> {
        match self.store.lookup_key(&item.key) {
            Ok(key) => key,
            Err(err) => {
                tracing::warn!(item_key = %item.key, "citation-key store lookup failed: {}", err);
                None
            }
        }
    }
}

/// Ordered resolution pipeline with a write-once memo cache.
///
/// Running without a secondary store behaves exactly like running with a
/// store that has no entries.
pub struct CiteKeyResolver {
    strategies: Vec<Box<dyn CiteKeyStrategy>>,
    cache: RwLock<HashMap<String, Option<String>>>,
}

impl CiteKeyResolver {
    /// Resolver over the extra field only.
    pub fn new() -> Self {
        Self {
            strategies: vec![Box::new(ExtraFieldStrategy)],
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Resolver over the extra field, then a secondary store.
    pub fn with_store(store: Arc<dyn CiteKeyStore>) -> Self {
        Self {
            strategies: vec![
                Box::new(ExtraFieldStrategy),
                Box::new(SecondaryStoreStrategy::new(store)),
            ],
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Resolver over an explicit strategy list, first non-null wins.
    pub fn with_strategies(strategies: Vec<Box<dyn CiteKeyStrategy>>) -> Self {
        Self {
            strategies,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Resolve an item's citation key, memoized per item key.
    ///
    /// A cached "absent" short-circuits the same as a cached hit.
    /// Values are write-once: concurrent racers resolve the same input
    /// and the first insert sticks.
    pub fn resolve(&self, item: &LibraryItem) -> Option<String> {
        if let Some(cached) = self.cache.read().unwrap().get(&item.key) {
            return cached.clone();
        }

        let resolved = self
            .strategies
            .iter()
            .find_map(|strategy| strategy.resolve(item));

        self.cache
            .write()
            .unwrap()
            .entry(item.key.clone())
            .or_insert(resolved)
            .clone()
    }

    /// Number of items resolved so far (hits and absents)
    pub fn cached_len(&self) -> usize {
        self.cache.read().unwrap().len()
    }
}

impl Default for CiteKeyResolver {
    fn default() -> Self {
        Self::new()
    }
}
