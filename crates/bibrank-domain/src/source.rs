//! Read-only data-access collaborator boundary

use crate::item::LibraryItem;

/// Library identifier used to scope candidate fetches
pub type LibraryId = i64;

/// Errors from the external data layer.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Library not found: {0}")]
    LibraryNotFound(LibraryId),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// The read-only data-access collaborator.
///
/// Implementations materialize candidate items from the underlying
/// relational store; the engine never queries storage directly and never
/// initiates a write. Candidate selection (including any pre-filtering)
/// is this collaborator's contract.
pub trait ItemSource: Send + Sync {
    /// Fetch the candidate items for one query, optionally scoped to a
    /// single library.
    fn fetch_candidate_items(
        &self,
        scope: Option<LibraryId>,
    ) -> Result<Vec<LibraryItem>, SourceError>;
}
