pub type LanguageCode = String;

/// Output for a direction the translator does not serve
pub const UNSUPPORTED_DIRECTION: &str = "[Direction de traduction non supportée]";

/// Output when resolution fails unexpectedly
pub const TRANSLATION_ERROR: &str = "[Erreur de traduction]";

/// Translation provider interface
pub trait Translator: Send + Sync {
    /// Translate text from source to target language
    fn translate(&self, text: &str, from: &str, to: &str) -> Result<Translation, TranslateError>;

    /// Get supported language pairs
    fn supported_languages(&self) -> Vec<(LanguageCode, LanguageCode)>;

    /// Provider metadata
    fn metadata(&self) -> ProviderMetadata;

    /// String-only surface: never fails, errors become sentinel strings
    fn translate_or_sentinel(&self, text: &str, from: &str, to: &str) -> String {
        match self.translate(text, from, to) {
            Ok(translation) => translation.text,
            Err(e) => {
                tracing::warn!("Translation failed: {e}");
                e.sentinel().to_string()
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub text: String,
    pub from: LanguageCode,
    pub to: LanguageCode,
    pub provider: String,
    /// Number of tokens that had a dictionary match
    pub matched: usize,
    /// Number of tokens left untouched
    pub unmatched: usize,
}

#[derive(Debug, Clone)]
pub struct ProviderMetadata {
    pub name: String,
    pub entry_count: usize,
    pub reverse_entry_count: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    #[error("Unsupported language pair: {from} -> {to}")]
    UnsupportedLanguagePair { from: String, to: String },

    #[error("Resolution failed: {0}")]
    Resolution(String),
}

impl TranslateError {
    pub fn sentinel(&self) -> &'static str {
        match self {
            TranslateError::UnsupportedLanguagePair { .. } => UNSUPPORTED_DIRECTION,
            TranslateError::Resolution(_) => TRANSLATION_ERROR,
        }
    }
}
