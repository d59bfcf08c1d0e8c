//! Collection representation for grouping library items

use serde::{Deserialize, Serialize};

/// A collection (folder) as materialized by the data layer
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Collection {
    /// Opaque collection key, stable within the library
    pub key: String,
    pub name: String,
    /// Parent collection key for nested collections
    pub parent_key: Option<String>,
}

impl Collection {
    /// Create a top-level collection
    pub fn new(key: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            parent_key: None,
        }
    }

    /// Create a subcollection under a parent
    pub fn with_parent(mut self, parent_key: impl Into<String>) -> Self {
        self.parent_key = Some(parent_key.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_new() {
        let col = Collection::new("C1", "Radiance Fields");
        assert_eq!(col.name, "Radiance Fields");
        assert!(col.parent_key.is_none());
    }

    #[test]
    fn test_subcollection() {
        let col = Collection::new("C2", "NeRF variants").with_parent("C1");
        assert_eq!(col.parent_key.as_deref(), Some("C1"));
    }
}
