use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use crate::language::{Direction, Language};
use crate::preprocess::PUNCTUATION;

/// Separator word between alternative translations of one entry
pub const ALTERNATIVES_SEPARATOR: &str = " ou ";

static PARENTHETICAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\([^)]*\)").expect("parenthetical pattern is valid"));

/// Dictionary lookup operations
pub trait Dictionary: Send + Sync {
    /// Value stored under an already normalized key
    fn lookup_exact(&self, query: &str) -> Option<&str>;

    /// All entries in insertion order
    fn entries(&self) -> Box<dyn Iterator<Item = (&str, &str)> + '_>;

    /// Entries whose key is a multi-word phrase, in insertion order
    fn phrase_entries(&self) -> Box<dyn Iterator<Item = (&str, &str)> + '_> {
        Box::new(self.entries().filter(|(key, _)| key.contains(' ')))
    }

    /// Get dictionary metadata
    fn metadata(&self) -> DictionaryMetadata;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryMetadata {
    pub name: String,
    pub language: String,
    pub entry_count: usize,
}

/// Authored Creole -> French mapping. Values may hold `ou`-joined
/// alternatives and parenthetical notes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ForwardDictionary {
    entries: IndexMap<String, String>,
}

impl ForwardDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, keyed by its trimmed lowercase form. An existing key
    /// keeps its position and gets the new value, which is returned.
    pub fn insert(&mut self, key: &str, value: impl Into<String>) -> Option<String> {
        self.entries
            .insert(key.trim().nfc().collect::<String>().to_lowercase(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Merge another dictionary into this one
    /// Values from `other` override existing keys; new keys are appended
    pub fn merge(mut self, other: ForwardDictionary) -> Self {
        for (key, value) in other.entries {
            if let Some(previous) = self.entries.insert(key.clone(), value) {
                tracing::debug!("Overriding entry {key:?} (was {previous:?})");
            }
        }
        self
    }
}

impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for ForwardDictionary {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut dict = ForwardDictionary::new();
        for (key, value) in iter {
            dict.insert(key.as_ref(), value);
        }
        dict
    }
}

impl Dictionary for ForwardDictionary {
    fn lookup_exact(&self, query: &str) -> Option<&str> {
        self.get(query)
    }

    fn entries(&self) -> Box<dyn Iterator<Item = (&str, &str)> + '_> {
        Box::new(self.iter())
    }

    fn metadata(&self) -> DictionaryMetadata {
        DictionaryMetadata {
            name: "forward".to_string(),
            language: Language::Creole.code().to_string(),
            entry_count: self.len(),
        }
    }
}

/// French -> Creole mapping derived from a [`ForwardDictionary`].
///
/// Precedence is insert-if-absent: once a key is present it keeps the first
/// source word that produced it, in forward iteration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReverseDictionary {
    entries: IndexMap<String, String>,
}

impl ReverseDictionary {
    pub fn build(forward: &ForwardDictionary) -> Self {
        let mut reverse = ReverseDictionary::default();

        for (source, target) in forward.iter() {
            let target = target.nfc().collect::<String>().to_lowercase();
            let target = target.trim();
            if target.is_empty() {
                continue;
            }

            for variant in target.split(ALTERNATIVES_SEPARATOR) {
                let variant = clean_variant(variant);
                if variant.chars().count() > 1 {
                    reverse.insert_if_absent(variant, source);
                }
            }

            let whole = clean_variant(target);
            if !whole.is_empty() {
                reverse.insert_if_absent(whole, source);
            }
        }

        tracing::debug!(
            "Built reverse dictionary: {} keys from {} entries",
            reverse.len(),
            forward.len()
        );
        reverse
    }

    fn insert_if_absent(&mut self, key: String, source: &str) -> bool {
        if self.entries.contains_key(&key) {
            return false;
        }
        self.entries.insert(key, source.to_string());
        true
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl Dictionary for ReverseDictionary {
    fn lookup_exact(&self, query: &str) -> Option<&str> {
        self.get(query)
    }

    fn entries(&self) -> Box<dyn Iterator<Item = (&str, &str)> + '_> {
        Box::new(self.iter())
    }

    fn metadata(&self) -> DictionaryMetadata {
        DictionaryMetadata {
            name: "reverse".to_string(),
            language: Language::French.code().to_string(),
            entry_count: self.len(),
        }
    }
}

/// Strip punctuation and `(...)` notes from one lowercased variant
fn clean_variant(variant: &str) -> String {
    let without_punctuation: String = variant
        .chars()
        .filter(|c| !PUNCTUATION.contains(c))
        .collect();
    PARENTHETICAL
        .replace_all(&without_punctuation, "")
        .trim()
        .to_string()
}

/// Forward dictionary plus its reverse, built once and never mutated
#[derive(Debug, Clone)]
pub struct DictionarySet {
    forward: ForwardDictionary,
    reverse: ReverseDictionary,
}

impl DictionarySet {
    pub fn new(forward: ForwardDictionary) -> Self {
        let reverse = ReverseDictionary::build(&forward);
        Self { forward, reverse }
    }

    pub fn forward(&self) -> &ForwardDictionary {
        &self.forward
    }

    pub fn reverse(&self) -> &ReverseDictionary {
        &self.reverse
    }

    /// Dictionary whose keys are in the source language of `direction`
    pub fn for_direction(&self, direction: Direction) -> &dyn Dictionary {
        if direction.is_forward() {
            &self.forward
        } else {
            &self.reverse
        }
    }
}
