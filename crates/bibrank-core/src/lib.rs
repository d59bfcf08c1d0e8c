//! bibrank-core: Relevance-ranked search over a local bibliographic library
//!
//! This library provides the pure, in-memory query core for an
//! assistant-facing bibliographic service:
//! - Query tokenization and normalization
//! - Per-field match signals (exact, word-boundary, substring, trigram fuzzy)
//! - Weighted scoring with a multi-term bonus
//! - Deterministic ranking with tie-breaks and limit truncation
//! - Citation-key resolution (extra field, then an optional secondary store)
//!
//! Candidate items come from an external read-only data layer via
//! [`bibrank_domain::ItemSource`]; the engine performs no I/O of its own.

pub mod citekey;
pub mod config;
pub mod engine;
pub mod error;
pub mod fields;
pub mod rank;
pub mod score;
pub mod signal;
pub mod tokenize;

pub use citekey::{
    CiteKeyResolver, CiteKeyStore, CiteKeyStrategy, ExtraFieldStrategy, SecondaryStoreStrategy,
};
pub use config::{FieldWeights, SearchConfig, SignalScores};
pub use engine::{SearchEngine, SearchHit, SearchRequest, SearchResponse};
pub use error::SearchError;
pub use fields::SearchField;
pub use rank::ScoredItem;
pub use signal::MatchSignal;
