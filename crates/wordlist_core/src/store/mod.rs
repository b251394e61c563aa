//! Reactive word store built on a dedicated worker thread.
//!
//! # Responsibility
//! - Serialize all storage reads and writes on one background worker.
//! - Publish full ordered snapshots to subscribers after each mutation.
//!
//! # Invariants
//! - Storage work never runs on a caller's thread.
//! - Every emission is a consistent snapshot; emissions are totally ordered.

pub mod word_store;
