//! The aggregated study-unit library.
//!
//! Builds the master collection once, on first access, from the
//! authored batches in `prep-content` (adapting the non-native tracks
//! through `prep-transform`), then answers pure, non-mutating queries
//! and summary statistics over it. Construction happens before any
//! query; after construction the collection is immutable for the
//! process lifetime, so readers need no coordination.

pub mod collection;
pub mod conformance;
pub mod error;
pub mod query;
pub mod stats;

pub use collection::{Library, library};
pub use conformance::ConformanceSummary;
pub use error::{LibraryError, Result};
pub use stats::LibraryStats;
