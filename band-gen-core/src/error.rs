use thiserror::Error;

use crate::model::pattern::Pattern;

/// Errors surfaced to callers of the generator.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GeneratorError {
	/// The pattern is part of the taxonomy but has no slot definition yet.
	#[error("pattern {0} is not implemented yet")]
	NotImplemented(Pattern),

	#[error("unknown pattern '{0}'")]
	UnknownPattern(String),
}

/// Failure while downloading the remote word list.
///
/// Never leaves the crate's public generation API: the word source logs it
/// and falls back to the built-in lists.
#[derive(Debug, Error)]
pub enum FetchError {
	/// Transport failure, timeout or client setup error.
	#[error("word list request failed: {0}")]
	Request(#[from] reqwest::Error),

	#[error("word list server answered with status {0}")]
	Status(u16),

	#[error("word list is not valid UTF-8: {0}")]
	Decode(#[from] std::string::FromUtf8Error),
}
