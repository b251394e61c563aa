//! Domain model for the word list.
//!
//! # Responsibility
//! - Define the canonical record persisted by the word store.
//!
//! # Invariants
//! - A `Word` is identified by its text; there is no surrogate id.

pub mod word;
