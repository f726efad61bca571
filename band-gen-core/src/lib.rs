//! Band name generation library.
//!
//! This crate assembles names like "Iron Maiden" or "The Rolling Stones"
//! from built-in word lists, including:
//! - A fixed taxonomy of name patterns (`Pattern`)
//! - Categorized and generic random words (`WordSource`)
//! - Text shaping: pluralization and capitalization
//! - An optional remote word list, fetched once and cached
//!
//! Network failures never reach the caller: the word source falls back to
//! the built-in lists. The only error a caller sees is
//! `GeneratorError::NotImplemented` for reserved patterns.

/// Patterns, word sources and the high-level generator.
pub mod model;

/// Remote word list download and filtering.
pub mod fetch;

/// Error types.
pub mod error;

pub use error::{FetchError, GeneratorError};
pub use fetch::{HttpWordList, WordListConfig, WordListFetch};
pub use model::generator::{capitalize, pluralize, BandNameGenerator};
pub use model::pattern::{Pattern, Slot};
pub use model::word_source::WordSource;
pub use model::words::WordCategory;
