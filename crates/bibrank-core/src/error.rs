//! Error types for the search core

use bibrank_domain::SourceError;

/// Errors scoped to one query invocation.
///
/// Nothing here is fatal to the host; a failed query leaves the engine
/// and its caches fully usable.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// Query text was empty or whitespace-only; rejected before matching
    #[error("Invalid query: text is empty")]
    InvalidQuery,

    /// The data-access collaborator failed to materialize candidates
    #[error("Candidate fetch failed: {0}")]
    Source(#[from] SourceError),
}
