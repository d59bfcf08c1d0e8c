//! Bibliographic domain types shared between the bibrank engine and its hosts
//!
//! This crate provides the canonical models for the read-only library view:
//! - LibraryItem: A paper, book, thesis, etc. as materialized by the data layer
//! - Creator: Author/editor with name parts and role
//! - Collection: Organization structure referenced by items
//! - ItemSource: The read-only data-access collaborator trait
//!
//! Everything here is an immutable snapshot from the engine's perspective;
//! the external data layer owns all mutation.

pub mod collection;
pub mod creator;
pub mod item;
pub mod source;
pub mod year;

pub use collection::*;
pub use creator::*;
pub use item::*;
pub use source::*;
pub use year::*;
