//! Word domain model.
//!
//! # Responsibility
//! - Define the single-field record stored in `word_table`.
//! - Enforce the non-empty invariant on construction and on write paths.
//!
//! # Invariants
//! - `text` is never empty.
//! - `text` doubles as the primary key; two words are equal iff their text is.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// A single stored word. The text is the identity: the store never holds two
/// records with the same text, and there is no separate id column.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Word {
    pub text: String,
}

/// Construction/write-path validation failures for `Word`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordValidationError {
    EmptyText,
}

impl Display for WordValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyText => write!(f, "word text must not be empty"),
        }
    }
}

impl Error for WordValidationError {}

impl Word {
    /// Creates a word, rejecting empty text.
    ///
    /// No trimming or normalization is applied: `" apple"` and `"apple"` are
    /// two distinct words by contract.
    pub fn new(text: impl Into<String>) -> Result<Self, WordValidationError> {
        let word = Self { text: text.into() };
        word.validate()?;
        Ok(word)
    }

    /// Re-checks the model invariant. Called by the repository before every
    /// SQL mutation so that records built through struct literals cannot
    /// bypass it.
    pub fn validate(&self) -> Result<(), WordValidationError> {
        if self.text.is_empty() {
            return Err(WordValidationError::EmptyText);
        }
        Ok(())
    }
}
