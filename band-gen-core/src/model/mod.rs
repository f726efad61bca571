//! Top-level module for band name generation.
//!
//! - Built-in word lists by category (`WordCategory`)
//! - Name templates (`Pattern`)
//! - Random word supply with remote fallback (`WordSource`)
//! - The high-level interface (`BandNameGenerator`)

/// High-level interface turning patterns into finished names.
///
/// Applies pluralization and capitalization to the drawn words.
pub mod generator;

/// Enumerated name templates and their slot sequences.
pub mod pattern;

/// Random word supply: built-in categories and cached remote words.
pub mod word_source;

/// Built-in word lists.
pub mod words;
