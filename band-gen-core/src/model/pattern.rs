use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GeneratorError;
use super::words::WordCategory::{self, Adjective, Color, Metal, Noun, Verb};

/// One word position inside a pattern.
///
/// A slot draws a word from `category`, and pluralizes it when `plural` is set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Slot {
	pub category: WordCategory,
	pub plural: bool,
}

impl Slot {
	const fn word(category: WordCategory) -> Self {
		Self { category, plural: false }
	}

	const fn plural(category: WordCategory) -> Self {
		Self { category, plural: true }
	}
}

const ADJECTIVE_NOUN: &[Slot] = &[Slot::word(Adjective), Slot::word(Noun)];
const COLOR_NOUN: &[Slot] = &[Slot::word(Color), Slot::word(Noun)];
const METAL_NOUN: &[Slot] = &[Slot::word(Metal), Slot::word(Noun)];
const VERB_NOUN: &[Slot] = &[Slot::word(Verb), Slot::word(Noun)];
const NOUN_NOUN: &[Slot] = &[Slot::word(Noun), Slot::word(Noun)];
const ADJECTIVE_NOUN_PLURAL: &[Slot] = &[Slot::word(Adjective), Slot::plural(Noun)];
const ADJECTIVE_ADJECTIVE_NOUN: &[Slot] = &[
	Slot::word(Adjective),
	Slot::word(Adjective),
	Slot::word(Noun),
];
const ADJECTIVE_ADJECTIVE_NOUN_PLURAL: &[Slot] = &[
	Slot::word(Adjective),
	Slot::word(Adjective),
	Slot::word(Noun),
	Slot::plural(Noun),
];
const COLOR_ADJECTIVE_NOUN_PLURAL: &[Slot] = &[
	Slot::word(Color),
	Slot::word(Adjective),
	Slot::word(Noun),
	Slot::plural(Noun),
];

/// Template used to assemble one band name.
///
/// Each implemented pattern is a fixed sequence of [`Slot`]s, optionally
/// preceded by a literal prefix ("the"). `CompoundWord` and `SingleWord` are
/// reserved: they have no slots, and generating them fails with
/// [`GeneratorError::NotImplemented`].
///
/// The serialized form (and `Display` / `FromStr`) is the snake_case name,
/// ex. `metal_noun`.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Pattern {
	AdjectiveNoun,
	ColorNoun,
	MetalNoun,
	VerbNoun,
	NounNoun,
	TheAdjectiveNoun,
	AdjectiveAdjectiveNoun,
	AdjectiveNounPlural,
	AdjectiveAdjectiveNounPlural,
	ColorAdjectiveNounPlural,
	CompoundWord,
	SingleWord,
}

impl Pattern {
	/// Every pattern tag, reserved ones included, in declaration order.
	pub const ALL: [Pattern; 12] = [
		Pattern::AdjectiveNoun,
		Pattern::ColorNoun,
		Pattern::MetalNoun,
		Pattern::VerbNoun,
		Pattern::NounNoun,
		Pattern::TheAdjectiveNoun,
		Pattern::AdjectiveAdjectiveNoun,
		Pattern::AdjectiveNounPlural,
		Pattern::AdjectiveAdjectiveNounPlural,
		Pattern::ColorAdjectiveNounPlural,
		Pattern::CompoundWord,
		Pattern::SingleWord,
	];

	const TWO_WORD: [Pattern; 6] = [
		Pattern::AdjectiveNoun,
		Pattern::ColorNoun,
		Pattern::MetalNoun,
		Pattern::VerbNoun,
		Pattern::NounNoun,
		Pattern::AdjectiveNounPlural,
	];

	const MULTI_WORD: [Pattern; 10] = [
		Pattern::AdjectiveNoun,
		Pattern::ColorNoun,
		Pattern::MetalNoun,
		Pattern::VerbNoun,
		Pattern::NounNoun,
		Pattern::TheAdjectiveNoun,
		Pattern::AdjectiveAdjectiveNoun,
		Pattern::AdjectiveNounPlural,
		Pattern::AdjectiveAdjectiveNounPlural,
		Pattern::ColorAdjectiveNounPlural,
	];

	/// Patterns producing exactly two words (`word_count() == Some(2)`).
	///
	/// `TheAdjectiveNoun` has two slots but three words, so it is not part of this group.
	pub fn two_word_patterns() -> &'static [Pattern] {
		&Self::TWO_WORD
	}

	/// All implemented patterns. Default pool for unconstrained generation.
	pub fn multi_word_patterns() -> &'static [Pattern] {
		&Self::MULTI_WORD
	}

	/// Returns the slot sequence of the pattern.
	///
	/// `None` for the reserved tags that have no implementation.
	pub fn slots(self) -> Option<&'static [Slot]> {
		match self {
			Pattern::AdjectiveNoun => Some(ADJECTIVE_NOUN),
			Pattern::ColorNoun => Some(COLOR_NOUN),
			Pattern::MetalNoun => Some(METAL_NOUN),
			Pattern::VerbNoun => Some(VERB_NOUN),
			Pattern::NounNoun => Some(NOUN_NOUN),
			Pattern::TheAdjectiveNoun => Some(ADJECTIVE_NOUN_PLURAL),
			Pattern::AdjectiveAdjectiveNoun => Some(ADJECTIVE_ADJECTIVE_NOUN),
			Pattern::AdjectiveNounPlural => Some(ADJECTIVE_NOUN_PLURAL),
			Pattern::AdjectiveAdjectiveNounPlural => Some(ADJECTIVE_ADJECTIVE_NOUN_PLURAL),
			Pattern::ColorAdjectiveNounPlural => Some(COLOR_ADJECTIVE_NOUN_PLURAL),
			Pattern::CompoundWord | Pattern::SingleWord => None,
		}
	}

	/// Literal word placed before the slots, if any.
	pub fn prefix(self) -> Option<&'static str> {
		match self {
			Pattern::TheAdjectiveNoun => Some("the"),
			_ => None,
		}
	}

	/// Number of word slots (the prefix is not counted).
	pub fn arity(self) -> Option<usize> {
		self.slots().map(<[Slot]>::len)
	}

	/// Number of words in a generated name: the slots plus the prefix, if any.
	pub fn word_count(self) -> Option<usize> {
		self.arity().map(|arity| arity + usize::from(self.prefix().is_some()))
	}

	pub fn is_implemented(self) -> bool {
		self.slots().is_some()
	}

	/// Snake_case name, as accepted by `FromStr`.
	pub fn name(self) -> &'static str {
		match self {
			Pattern::AdjectiveNoun => "adjective_noun",
			Pattern::ColorNoun => "color_noun",
			Pattern::MetalNoun => "metal_noun",
			Pattern::VerbNoun => "verb_noun",
			Pattern::NounNoun => "noun_noun",
			Pattern::TheAdjectiveNoun => "the_adjective_noun",
			Pattern::AdjectiveAdjectiveNoun => "adjective_adjective_noun",
			Pattern::AdjectiveNounPlural => "adjective_noun_plural",
			Pattern::AdjectiveAdjectiveNounPlural => "adjective_adjective_noun_plural",
			Pattern::ColorAdjectiveNounPlural => "color_adjective_noun_plural",
			Pattern::CompoundWord => "compound_word",
			Pattern::SingleWord => "single_word",
		}
	}

	/// A well-known band name in the style of the pattern.
	pub fn example(self) -> &'static str {
		match self {
			Pattern::AdjectiveNoun => "Silent Thunder",
			Pattern::ColorNoun => "Black Sabbath",
			Pattern::MetalNoun => "Iron Maiden",
			Pattern::VerbNoun => "Rolling Thunder",
			Pattern::NounNoun => "Thunder Mountain",
			Pattern::TheAdjectiveNoun => "The Rolling Stones",
			Pattern::AdjectiveAdjectiveNoun => "Deep Purple Haze",
			Pattern::AdjectiveNounPlural => "Silent Storms",
			Pattern::AdjectiveAdjectiveNounPlural => "Deep Purple Mystic Dragons",
			Pattern::ColorAdjectiveNounPlural => "Red Hot Chili Peppers",
			Pattern::CompoundWord => "Depeche Mode",
			Pattern::SingleWord => "Metallica",
		}
	}
}

impl fmt::Display for Pattern {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl FromStr for Pattern {
	type Err = GeneratorError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let needle = s.trim().to_ascii_lowercase();
		Self::ALL
			.into_iter()
			.find(|pattern| pattern.name() == needle)
			.ok_or_else(|| GeneratorError::UnknownPattern(s.to_owned()))
	}
}
