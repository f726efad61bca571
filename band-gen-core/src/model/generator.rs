use log::trace;
use rand::Rng;
use rand::rngs::{StdRng, ThreadRng};

use crate::error::{FetchError, GeneratorError};
use crate::fetch::{HttpWordList, WordListConfig, WordListFetch};
use super::pattern::Pattern;
use super::word_source::{pick, WordSource};

/// High-level band name generator.
///
/// # Responsibilities
/// - Dispatch a [`Pattern`] to its slot sequence
/// - Draw one word per slot from the [`WordSource`], pluralizing when asked
/// - Shape the final text: optional prefix, capitalization of every word
///
/// Example outputs: "Iron Maiden", "The Crystal Roses", "Red Hot Chili Peppers".
#[derive(Debug)]
pub struct BandNameGenerator<F = HttpWordList, R = ThreadRng> {
	words: WordSource<F, R>,
}

impl BandNameGenerator {
	/// # Errors
	/// Fails only if the HTTP client of the word source cannot be initialized.
	pub fn new() -> Result<Self, FetchError> {
		Ok(Self::from_source(WordSource::new()?))
	}
}

impl BandNameGenerator<HttpWordList, StdRng> {
	/// Reproducible generator: same seed, same names.
	pub fn with_seed(seed: u64) -> Result<Self, FetchError> {
		Ok(Self::from_source(WordSource::with_seed(WordListConfig::default(), seed)?))
	}
}

impl<F: WordListFetch, R: Rng> BandNameGenerator<F, R> {
	pub fn from_source(words: WordSource<F, R>) -> Self {
		Self { words }
	}

	/// Access to the underlying word source (ex. for generic words).
	pub fn word_source(&mut self) -> &mut WordSource<F, R> {
		&mut self.words
	}

	/// Generates a single name using `pattern`.
	///
	/// # Errors
	/// `GeneratorError::NotImplemented` for patterns without slots
	/// (`CompoundWord`, `SingleWord`).
	pub fn generate_one(&mut self, pattern: Pattern) -> Result<String, GeneratorError> {
		let slots = pattern.slots().ok_or(GeneratorError::NotImplemented(pattern))?;

		let mut phrase = String::new();
		if let Some(prefix) = pattern.prefix() {
			phrase.push_str(prefix);
		}

		for slot in slots {
			let word = self.words.get_categorized(slot.category);
			if !phrase.is_empty() {
				phrase.push(' ');
			}
			if slot.plural {
				phrase.push_str(&pluralize(word));
			} else {
				phrase.push_str(word);
			}
		}

		let name = capitalize(&phrase);
		trace!("Generated '{name}' with {pattern}");
		Ok(name)
	}

	/// Generates `count` names.
	///
	/// - `Some(pattern)`: every name uses that pattern
	/// - `None`: each name uses a pattern drawn independently from
	///   [`Pattern::multi_word_patterns`]
	///
	/// `count == 0` returns an empty list.
	///
	/// # Errors
	/// Propagates `GeneratorError::NotImplemented` from [`generate_one`](Self::generate_one).
	pub fn generate(&mut self, pattern: Option<Pattern>, count: usize) -> Result<Vec<String>, GeneratorError> {
		let mut names = Vec::with_capacity(count);
		for _ in 0..count {
			let chosen = match pattern {
				Some(pattern) => pattern,
				None => *pick(Pattern::multi_word_patterns(), self.words.rng()),
			};
			names.push(self.generate_one(chosen)?);
		}
		Ok(names)
	}
}

/// Approximate English plural of a lowercase word.
///
/// - Ends with s, x, z, ch or sh → append "es"
/// - Consonant followed by a final y → replace y with "ies"
/// - Otherwise → append "s"
///
/// Irregular plurals are not handled ("wolf" → "wolfs").
pub fn pluralize(word: &str) -> String {
	const SIBILANTS: [&str; 5] = ["s", "x", "z", "ch", "sh"];

	if SIBILANTS.iter().any(|suffix| word.ends_with(suffix)) {
		return format!("{word}es");
	}

	if let Some(stem) = word.strip_suffix('y') {
		if stem.chars().last().is_some_and(|c| !"aeiou".contains(c)) {
			return format!("{stem}ies");
		}
	}

	format!("{word}s")
}

/// Capitalizes every whitespace-separated word of a phrase.
///
/// The first character of each word is uppercased and the rest lowercased.
/// Words are joined back with single spaces.
pub fn capitalize(phrase: &str) -> String {
	phrase
		.split_whitespace()
		.map(|word| {
			let mut chars = word.chars();
			match chars.next() {
				Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
				None => String::new(),
			}
		})
		.collect::<Vec<String>>()
		.join(" ")
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;

	use super::*;
	use crate::model::words::WordCategory;

	struct Offline;

	impl WordListFetch for Offline {
		fn fetch(&self) -> Result<Vec<String>, FetchError> {
			Err(FetchError::Status(404))
		}
	}

	fn generator(seed: u64) -> BandNameGenerator<Offline, StdRng> {
		BandNameGenerator::from_source(WordSource::with_parts(Offline, StdRng::seed_from_u64(seed)))
	}

	#[test]
	fn pluralize_rules() {
		assert_eq!(pluralize("cat"), "cats");
		assert_eq!(pluralize("box"), "boxes");
		assert_eq!(pluralize("church"), "churches");
		assert_eq!(pluralize("city"), "cities");
		assert_eq!(pluralize("storm"), "storms");
		assert_eq!(pluralize("bush"), "bushes");
		assert_eq!(pluralize("waltz"), "waltzes");
		assert_eq!(pluralize("glass"), "glasses");
	}

	#[test]
	fn pluralize_keeps_vowel_y() {
		assert_eq!(pluralize("day"), "days");
		assert_eq!(pluralize("key"), "keys");
		assert_eq!(pluralize("y"), "ys");
	}

	#[test]
	fn pluralize_is_not_dictionary_correct() {
		assert_eq!(pluralize("wolf"), "wolfs");
		assert_eq!(pluralize("leaf"), "leafs");
	}

	#[test]
	fn capitalize_every_word() {
		assert_eq!(capitalize("iron maiden"), "Iron Maiden");
		assert_eq!(capitalize("the  rolling   stones"), "The Rolling Stones");
		assert_eq!(capitalize("DEEP pURPLE"), "Deep Purple");
		assert_eq!(capitalize(""), "");
	}

	#[test]
	fn generate_one_uses_slot_categories() {
		let mut generator = generator(1);
		for _ in 0..20 {
			let name = generator.generate_one(Pattern::MetalNoun).unwrap();
			let words: Vec<&str> = name.split(' ').collect();
			assert_eq!(words.len(), 2);
			let metals: Vec<String> = WordCategory::Metal.words().iter().map(|w| capitalize(w)).collect();
			assert!(metals.contains(&words[0].to_owned()), "{name}");
		}
	}

	#[test]
	fn the_adjective_noun_has_prefix_and_plural() {
		let mut generator = generator(2);
		for _ in 0..20 {
			let name = generator.generate_one(Pattern::TheAdjectiveNoun).unwrap();
			let words: Vec<&str> = name.split(' ').collect();
			assert_eq!(words.len(), 3);
			assert_eq!(words[0], "The");
			assert!(words[2].ends_with('s'), "{name}");
		}
	}

	#[test]
	fn reserved_patterns_are_not_implemented() {
		let mut generator = generator(3);
		assert_eq!(
			generator.generate_one(Pattern::CompoundWord),
			Err(GeneratorError::NotImplemented(Pattern::CompoundWord))
		);
		assert_eq!(
			generator.generate(Some(Pattern::SingleWord), 2),
			Err(GeneratorError::NotImplemented(Pattern::SingleWord))
		);
	}

	#[test]
	fn zero_count_is_empty() {
		let mut generator = generator(4);
		assert_eq!(generator.generate(None, 0), Ok(Vec::new()));
	}

	#[test]
	fn same_seed_same_names() {
		let left = generator(42).generate(None, 10).unwrap();
		let right = generator(42).generate(None, 10).unwrap();
		assert_eq!(left, right);
	}

	#[test]
	fn random_pattern_is_drawn_per_name() {
		// With one pattern for the whole batch, all names would share a word count.
		let mut generator = generator(5);
		let names = generator.generate(None, 200).unwrap();
		let mut lengths: Vec<usize> = names.iter().map(|n| n.split(' ').count()).collect();
		lengths.sort_unstable();
		lengths.dedup();
		assert_eq!(lengths, vec![2, 3, 4]);
	}

	#[test]
	fn generation_never_fetches_remote_words() {
		let mut generator = generator(6);
		generator.generate(None, 50).unwrap();
		assert!(!generator.word_source().is_cache_populated());
	}
}
