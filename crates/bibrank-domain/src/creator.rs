//! Creator representation

use serde::{Deserialize, Serialize};

/// A creator (author, editor, ...) of a library item
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Creator {
    pub given_name: Option<String>,
    pub family_name: String,
    /// Creator role as reported by the library, e.g. "author" or "editor"
    pub role: String,
}

impl Creator {
    /// Create an author with just a family name
    pub fn new(family_name: impl Into<String>) -> Self {
        Self {
            given_name: None,
            family_name: family_name.into(),
            role: "author".to_string(),
        }
    }

    /// Builder method to add given name
    pub fn with_given_name(mut self, given: impl Into<String>) -> Self {
        self.given_name = Some(given.into());
        self
    }

    /// Builder method to set the role
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    /// Format as "Family Given" for search field rendering
    pub fn search_text(&self) -> String {
        match &self.given_name {
            Some(given) => format!("{} {}", self.family_name, given),
            None => self.family_name.clone(),
        }
    }

    /// Format as "Given Family" for display
    pub fn display_name(&self) -> String {
        match &self.given_name {
            Some(given) => format!("{} {}", given, self.family_name),
            None => self.family_name.clone(),
        }
    }
}
