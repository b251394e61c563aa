//! Core use-case services.
//!
//! # Responsibility
//! - Mediate every caller's access to the word store.
//! - Keep UI layers decoupled from storage and threading details.

pub mod word_service;
