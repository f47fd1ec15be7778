use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::dictionary::DictionarySet;
use crate::lookup::MatchKind;

/// The two languages the translator knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "creole", alias = "rcf", alias = "kreol")]
    Creole,
    #[serde(rename = "fr", alias = "french", alias = "francais", alias = "français")]
    French,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::Creole => "creole",
            Language::French => "fr",
        }
    }

    /// The other side of the language pair
    pub fn counterpart(&self) -> Language {
        match self {
            Language::Creole => Language::French,
            Language::French => Language::Creole,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown language code: {0}")]
pub struct UnknownLanguage(pub String);

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "creole" | "rcf" | "kreol" => Ok(Language::Creole),
            "fr" | "french" | "francais" | "français" => Ok(Language::French),
            _ => Err(UnknownLanguage(s.to_string())),
        }
    }
}

/// A supported translation direction. Same-language pairs are not directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Direction {
    from: Language,
    to: Language,
}

impl Direction {
    pub const CREOLE_TO_FRENCH: Direction = Direction {
        from: Language::Creole,
        to: Language::French,
    };

    pub const FRENCH_TO_CREOLE: Direction = Direction {
        from: Language::French,
        to: Language::Creole,
    };

    pub fn new(from: Language, to: Language) -> Option<Self> {
        (from != to).then_some(Self { from, to })
    }

    /// Parse a pair of language codes; `None` for anything but the two supported pairs
    pub fn parse(from: &str, to: &str) -> Option<Self> {
        let from = from.parse().ok()?;
        let to = to.parse().ok()?;
        Self::new(from, to)
    }

    /// Build a direction, flipping the target when both sides are the same language
    pub fn auto_swap(from: Language, to: Language) -> Self {
        let to = if from == to { from.counterpart() } else { to };
        Self { from, to }
    }

    pub fn from(&self) -> Language {
        self.from
    }

    pub fn to(&self) -> Language {
        self.to
    }

    /// Whether lookups go through the authored (Creole keyed) dictionary
    pub fn is_forward(&self) -> bool {
        self.from == Language::Creole
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// Text processing and lookup interface for language implementations
pub trait LanguageProcessor: Send + Sync {
    /// Dictionaries backing every lookup
    fn dictionaries(&self) -> &DictionarySet;

    /// Break text into processable tokens
    fn tokenize(&self, text: &str) -> Vec<Token>;

    /// Look up a token in the dictionary serving `direction`
    fn lookup(&self, token: &Token, direction: Direction) -> LookupResult;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub surface: String,
    pub normalized: String,
    pub position: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupResult {
    pub term: String,
    pub translation: String,
    pub kind: MatchKind,
}
