use unicode_normalization::UnicodeNormalization;

use crate::language::Token;

/// Characters stripped from tokens before lookup
pub const PUNCTUATION: [char; 5] = ['.', ',', '!', '?', ';'];

/// Lookup key for a token: NFC composed, lowercased, without `. , ! ? ;`.
/// Parentheses and inner characters are kept.
pub fn normalize(token: &str) -> String {
    token
        .nfc()
        .collect::<String>()
        .to_lowercase()
        .chars()
        .filter(|c| !PUNCTUATION.contains(c))
        .collect()
}

/// Split on runs of whitespace, keeping the surface form of every token
pub fn tokenize(text: &str) -> Vec<Token> {
    text.split_whitespace()
        .enumerate()
        .map(|(position, surface)| Token {
            surface: surface.to_string(),
            normalized: normalize(surface),
            position,
        })
        .collect()
}
