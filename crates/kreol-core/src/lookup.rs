use crate::dictionary::Dictionary;
use crate::preprocess::normalize;

/// Which resolution rule produced a translation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    /// The normalized token is a key
    Exact,
    /// The normalized token contains a multi-word key
    Phrase,
    /// Nothing matched, the surface form is kept
    Fallback,
}

impl MatchKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchKind::Exact => "exact",
            MatchKind::Phrase => "phrase",
            MatchKind::Fallback => "fallback",
        }
    }
}

/// Resolve one token against `dict`, returning the translation and the rule used.
///
/// Rules, in order:
/// 1. the normalized token is a key with a non-empty value;
/// 2. the first multi-word key, in dictionary order, contained in the
///    normalized token (first match, not longest);
/// 3. the original token, unchanged.
pub fn resolve_match(token: &str, dict: &dyn Dictionary) -> (String, MatchKind) {
    let normalized = normalize(token);

    if let Some(value) = dict.lookup_exact(&normalized).filter(|v| !v.is_empty()) {
        return (value.to_string(), MatchKind::Exact);
    }

    let phrase = dict
        .phrase_entries()
        .find(|(key, value)| !value.is_empty() && normalized.contains(*key));
    if let Some((_, value)) = phrase {
        return (value.to_string(), MatchKind::Phrase);
    }

    (token.to_string(), MatchKind::Fallback)
}

pub fn resolve(token: &str, dict: &dyn Dictionary) -> String {
    resolve_match(token, dict).0
}
