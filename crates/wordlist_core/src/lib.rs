//! Core domain logic for the word list store.
//! This crate is the single source of truth for the persistence and
//! observation contract: unique word strings, ordered reactive reads,
//! insert-if-absent writes.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::word::{Word, WordValidationError};
pub use repo::word_repo::{RepoError, RepoResult, SqliteWordRepository, WordRepository};
pub use service::word_service::WordService;
pub use store::word_store::{WordStore, WordsFeed};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
