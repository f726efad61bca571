use log::debug;
use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

use crate::error::FetchError;
use crate::fetch::{HttpWordList, WordListConfig, WordListFetch};
use super::words::{fallback_union, WordCategory};

/// Supplies random words to the generator.
///
/// # Responsibilities
/// - Draw categorized words uniformly from the built-in lists
/// - Draw generic words from a remote word list, cached for the lifetime
///   of the instance
/// - Fall back to the built-in adjectives, nouns and verbs when no remote
///   words are available
///
/// # Cache
/// The remote list is fetched at most once while caching is used. A failed
/// or empty fetch still populates the cache (with no words), so later calls
/// use the fallback lists without retrying.
///
/// The cache is owned by the instance and not synchronized: share a
/// `WordSource` between threads behind a `Mutex`.
///
/// # Randomness
/// Both the fetcher `F` and the random generator `R` are injectable; tests
/// use a seeded `StdRng` and stub fetchers.
#[derive(Debug)]
pub struct WordSource<F = HttpWordList, R = ThreadRng> {
	fetcher: F,
	rng: R,
	/// `None` until the first cached fetch, never reset afterwards.
	cache: Option<Vec<String>>,
}

impl WordSource {
	/// Word source using the default remote list and the thread-local RNG.
	///
	/// # Errors
	/// Fails only if the HTTP client cannot be initialized.
	pub fn new() -> Result<Self, FetchError> {
		Ok(Self::with_parts(HttpWordList::new(WordListConfig::default())?, rand::rng()))
	}
}

impl WordSource<HttpWordList, StdRng> {
	/// Reproducible word source: same seed, same categorized words.
	///
	/// # Errors
	/// Fails only if the HTTP client cannot be initialized.
	pub fn with_seed(config: WordListConfig, seed: u64) -> Result<Self, FetchError> {
		Ok(Self::with_parts(HttpWordList::new(config)?, StdRng::seed_from_u64(seed)))
	}
}

impl<F: WordListFetch, R: Rng> WordSource<F, R> {
	pub fn with_parts(fetcher: F, rng: R) -> Self {
		Self { fetcher, rng, cache: None }
	}

	/// Uniformly picks a word from the built-in list of `category`.
	pub fn get_categorized(&mut self, category: WordCategory) -> &'static str {
		*pick(category.words(), &mut self.rng)
	}

	pub fn get_adjective(&mut self) -> &'static str {
		self.get_categorized(WordCategory::Adjective)
	}

	pub fn get_noun(&mut self) -> &'static str {
		self.get_categorized(WordCategory::Noun)
	}

	/// Usually a present participle ("burning", "rolling").
	pub fn get_verb(&mut self) -> &'static str {
		self.get_categorized(WordCategory::Verb)
	}

	pub fn get_color(&mut self) -> &'static str {
		self.get_categorized(WordCategory::Color)
	}

	pub fn get_metal(&mut self) -> &'static str {
		self.get_categorized(WordCategory::Metal)
	}

	/// Whether the remote list has been fetched (successfully or not).
	pub fn is_cache_populated(&self) -> bool {
		self.cache.is_some()
	}

	/// Cached remote words, `None` before the first cached fetch.
	pub fn cached_words(&self) -> Option<&[String]> {
		self.cache.as_deref()
	}

	/// Fetches the remote list once and stores the result, even if empty.
	///
	/// Later calls return the stored words without any network access.
	pub fn populate_cache(&mut self) -> &[String] {
		if self.cache.is_none() {
			self.cache = Some(self.fetch_or_empty());
		}
		self.cache.as_deref().unwrap_or_default()
	}

	/// Returns `count` random words, drawn with replacement.
	///
	/// # Behavior
	/// - `use_cache == true`: the remote list is fetched on first use only
	/// - `use_cache == false`: every call performs a fresh fetch attempt
	/// - Empty remote result: words come from [`fallback_union`]
	///
	/// Never fails: fetch errors are logged at debug level and absorbed.
	pub fn get_generic_words(&mut self, count: usize, use_cache: bool) -> Vec<String> {
		let fresh;
		let source: &[String] = if use_cache {
			self.populate_cache();
			self.cache.as_deref().unwrap_or_default()
		} else {
			fresh = self.fetch_or_empty();
			&fresh
		};

		if !source.is_empty() {
			return (0..count).map(|_| pick(source, &mut self.rng).clone()).collect();
		}

		debug!("No remote words available, using built-in lists");
		let union = fallback_union();
		(0..count).map(|_| pick(&union, &mut self.rng).to_string()).collect()
	}

	/// Random generator shared with the pattern selection.
	pub(crate) fn rng(&mut self) -> &mut R {
		&mut self.rng
	}

	fn fetch_or_empty(&self) -> Vec<String> {
		match self.fetcher.fetch() {
			Ok(words) => {
				debug!("Remote word list provided {} words", words.len());
				words
			}
			Err(e) => {
				debug!("Remote word list unavailable: {e}");
				Vec::new()
			}
		}
	}
}

/// Uniform choice in a slice.
///
/// Callers only pass non-empty slices (built-in lists, or checked remote words).
pub(crate) fn pick<'a, T, R: Rng>(items: &'a [T], rng: &mut R) -> &'a T {
	&items[rng.random_range(0..items.len())]
}
