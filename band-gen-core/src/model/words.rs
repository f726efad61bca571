use std::fmt;

use serde::{Deserialize, Serialize};

const ADJECTIVES: &[&str] = &[
	"broken", "electric", "burning", "frozen", "wild", "dark", "silent", "crimson",
	"golden", "iron", "steel", "velvet", "crystal", "neon", "atomic", "cosmic",
	"lunar", "solar", "mystic", "savage", "ancient", "modern", "twisted", "sacred",
	"dirty", "clean", "rusty", "shiny", "heavy", "light", "deep", "shallow",
];

const NOUNS: &[&str] = &[
	"storm", "thunder", "lightning", "fire", "ice", "wind", "rain", "snow",
	"mountain", "valley", "ocean", "river", "forest", "desert", "city", "street",
	"machine", "engine", "weapon", "tool", "hammer", "blade", "sword", "shield",
	"wolf", "bear", "tiger", "eagle", "dragon", "phoenix", "serpent", "raven",
	"maiden", "warrior", "priest", "wizard", "prophet", "king", "queen", "knight",
	"rose", "thorn", "petal", "seed", "root", "vine", "tree", "leaf",
];

// Mostly present participles, for names like "Burning Sky".
const VERBS: &[&str] = &[
	"burning", "rising", "falling", "flying", "running", "screaming", "crying",
	"bleeding", "breaking", "melting", "freezing", "spinning", "rolling",
];

const COLORS: &[&str] = &[
	"red", "blue", "green", "yellow", "purple", "black", "white", "silver",
	"gold", "crimson", "scarlet", "azure", "emerald", "amber", "violet", "indigo",
];

const METALS: &[&str] = &[
	"iron", "steel", "bronze", "copper", "silver", "gold", "platinum", "titanium",
	"chrome", "aluminum", "zinc", "tin",
];

/// Category of a built-in word list.
///
/// Each category is backed by a fixed, non-empty list of lowercase words.
/// The lists are compiled into the binary and never change at runtime.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum WordCategory {
	Adjective,
	Noun,
	Verb,
	Color,
	Metal,
}

impl WordCategory {
	/// All categories, in declaration order.
	pub const ALL: [WordCategory; 5] = [
		WordCategory::Adjective,
		WordCategory::Noun,
		WordCategory::Verb,
		WordCategory::Color,
		WordCategory::Metal,
	];

	/// Returns the built-in word list backing this category.
	pub fn words(self) -> &'static [&'static str] {
		match self {
			WordCategory::Adjective => ADJECTIVES,
			WordCategory::Noun => NOUNS,
			WordCategory::Verb => VERBS,
			WordCategory::Color => COLORS,
			WordCategory::Metal => METALS,
		}
	}

	/// Lowercase name of the category.
	pub fn name(self) -> &'static str {
		match self {
			WordCategory::Adjective => "adjective",
			WordCategory::Noun => "noun",
			WordCategory::Verb => "verb",
			WordCategory::Color => "color",
			WordCategory::Metal => "metal",
		}
	}
}

impl fmt::Display for WordCategory {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

/// Concatenation of the adjective, noun and verb lists.
///
/// Used when no remote words are available. Duplicates across lists
/// (ex. "burning" is both an adjective and a verb) are kept, so they are
/// slightly more likely to be drawn.
pub fn fallback_union() -> Vec<&'static str> {
	ADJECTIVES.iter().chain(NOUNS).chain(VERBS).copied().collect()
}
