//! Library item snapshot as materialized by the read-only data layer

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::creator::Creator;
use crate::year::extract_year;

/// Well-known scalar field names used across the library schema.
///
/// Items carry arbitrary field names in their map; these are the ones
/// the engine and hosts address directly.
pub mod field_names {
    pub const TITLE: &str = "title";
    pub const ABSTRACT: &str = "abstractNote";
    pub const PUBLICATION: &str = "publicationTitle";
    pub const DOI: &str = "DOI";
    pub const DATE: &str = "date";
    pub const URL: &str = "url";
    pub const EXTRA: &str = "extra";
}

/// An immutable snapshot of one bibliographic item.
///
/// Owned and mutated only by the external data layer; the engine reads
/// snapshots and never writes back. Scalar metadata lives in `fields`
/// keyed by the library's field names; structured metadata (creators,
/// tags, collection membership) lives on the struct directly.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct LibraryItem {
    /// Opaque item key, stable and library-scoped
    pub key: String,
    /// Item type name, e.g. "journalArticle", "book", "thesis"
    pub item_type: String,
    /// Scalar metadata fields keyed by field name; absent = null
    pub fields: BTreeMap<String, String>,
    /// Ordered creator list
    pub creators: Vec<Creator>,
    pub tags: Vec<String>,
    /// Keys of the collections this item belongs to
    pub collection_keys: Vec<String>,
    pub date_added: DateTime<Utc>,
    pub date_modified: DateTime<Utc>,
}

impl LibraryItem {
    /// Create an empty item with the given key and type
    pub fn new(key: impl Into<String>, item_type: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            item_type: item_type.into(),
            fields: BTreeMap::new(),
            creators: Vec::new(),
            tags: Vec::new(),
            collection_keys: Vec::new(),
            date_added: DateTime::<Utc>::UNIX_EPOCH,
            date_modified: DateTime::<Utc>::UNIX_EPOCH,
        }
    }

    /// Builder method to set a scalar field; empty values are dropped
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let value = value.into();
        if !value.is_empty() {
            self.fields.insert(name.into(), value);
        }
        self
    }

    /// Builder method to set the title
    pub fn with_title(self, title: impl Into<String>) -> Self {
        self.with_field(field_names::TITLE, title)
    }

    /// Builder method to append a creator
    pub fn with_creator(mut self, creator: Creator) -> Self {
        self.creators.push(creator);
        self
    }

    /// Builder method to append a tag
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Builder method to add the item to a collection
    pub fn with_collection(mut self, collection_key: impl Into<String>) -> Self {
        self.collection_keys.push(collection_key.into());
        self
    }

    /// Builder method to set both timestamps
    pub fn with_dates(mut self, added: DateTime<Utc>, modified: DateTime<Utc>) -> Self {
        self.date_added = added;
        self.date_modified = modified;
        self
    }

    /// Look up a scalar field, treating empty strings as absent
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str).filter(|v| !v.is_empty())
    }

    pub fn title(&self) -> Option<&str> {
        self.field(field_names::TITLE)
    }

    pub fn abstract_note(&self) -> Option<&str> {
        self.field(field_names::ABSTRACT)
    }

    pub fn publication_title(&self) -> Option<&str> {
        self.field(field_names::PUBLICATION)
    }

    pub fn doi(&self) -> Option<&str> {
        self.field(field_names::DOI)
    }

    pub fn url(&self) -> Option<&str> {
        self.field(field_names::URL)
    }

    /// Free-text "extra" field, the first citation-key source
    pub fn extra(&self) -> Option<&str> {
        self.field(field_names::EXTRA)
    }

    /// Publication year extracted from the date field
    pub fn year(&self) -> Option<String> {
        self.field(field_names::DATE).and_then(extract_year)
    }
}
