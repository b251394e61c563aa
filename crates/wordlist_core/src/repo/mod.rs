//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the word-store data access contract.
//! - Isolate SQLite query details from service/stream orchestration.
//!
//! # Invariants
//! - Repository writes must enforce `Word::validate()` before persistence.
//! - Duplicate inserts are a silent no-op, never an error.

pub mod word_repo;
