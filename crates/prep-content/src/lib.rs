//! Authored content batches, one module per certification track.
//!
//! Everything in this crate is inert data: arrays of literal records
//! with no control flow beyond construction helpers. CPA content is
//! authored directly in the canonical shape; the other tracks author in
//! their native shapes and are adapted at aggregation time.
//!
//! Batches are kept separate (rather than pre-merged per track) because
//! they are authored independently; the aggregator concatenates them in
//! a fixed, documented order.

pub mod cfp;
pub mod cia;
pub mod cpa;
pub mod ea;
