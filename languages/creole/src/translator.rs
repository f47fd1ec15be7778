use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use kreol_core::language::LanguageProcessor;
use kreol_core::{Direction, Language, MatchKind};
use kreol_translator::{LanguageCode, ProviderMetadata, TranslateError, Translation, Translator};

use crate::processor::CreoleProcessor;

/// Word-by-word dictionary translator between Creole and French
pub struct CreoleTranslator<P: LanguageProcessor = CreoleProcessor> {
    processor: Arc<P>,
}

impl<P: LanguageProcessor> Clone for CreoleTranslator<P> {
    fn clone(&self) -> Self {
        Self {
            processor: Arc::clone(&self.processor),
        }
    }
}

impl<P: LanguageProcessor> CreoleTranslator<P> {
    pub fn new(processor: Arc<P>) -> Self {
        Self { processor }
    }

    pub fn processor(&self) -> &P {
        &self.processor
    }

    /// Resolve every token independently and join with single spaces
    fn translate_tokens(&self, text: &str, direction: Direction) -> (String, usize, usize) {
        let tokens = self.processor.tokenize(text);
        let mut matched = 0;
        let words: Vec<String> = tokens
            .iter()
            .map(|token| {
                let result = self.processor.lookup(token, direction);
                if result.kind != MatchKind::Fallback {
                    matched += 1;
                }
                result.translation
            })
            .collect();

        (words.join(" "), matched, tokens.len())
    }

    /// Typed entry point for callers that already hold a [`Direction`]
    pub fn translate_direction(
        &self,
        text: &str,
        direction: Direction,
    ) -> Result<Translation, TranslateError> {
        self.translate(text, direction.from().code(), direction.to().code())
    }
}

impl<P: LanguageProcessor> Translator for CreoleTranslator<P> {
    fn translate(&self, text: &str, from: &str, to: &str) -> Result<Translation, TranslateError> {
        let empty = |matched, unmatched| Translation {
            text: String::new(),
            from: from.to_string(),
            to: to.to_string(),
            provider: "dictionary".to_string(),
            matched,
            unmatched,
        };

        if text.trim().is_empty() {
            return Ok(empty(0, 0));
        }

        let direction =
            Direction::parse(from, to).ok_or_else(|| TranslateError::UnsupportedLanguagePair {
                from: from.to_string(),
                to: to.to_string(),
            })?;

        tracing::debug!("Translating {} chars, direction: {}", text.len(), direction);

        let (translated, matched, total) =
            panic::catch_unwind(AssertUnwindSafe(|| self.translate_tokens(text, direction)))
                .map_err(|payload| TranslateError::Resolution(panic_message(payload.as_ref())))?;

        tracing::debug!("Resolved {matched}/{total} tokens");

        Ok(Translation {
            text: translated,
            matched,
            unmatched: total - matched,
            ..empty(0, 0)
        })
    }

    fn supported_languages(&self) -> Vec<(LanguageCode, LanguageCode)> {
        [Direction::CREOLE_TO_FRENCH, Direction::FRENCH_TO_CREOLE]
            .iter()
            .map(|d| (d.from().code().to_string(), d.to().code().to_string()))
            .collect()
    }

    fn metadata(&self) -> ProviderMetadata {
        let dictionaries = self.processor.dictionaries();
        ProviderMetadata {
            name: format!("{}-{} dictionary", Language::Creole, Language::French),
            entry_count: dictionaries.forward().len(),
            reverse_entry_count: dictionaries.reverse().len(),
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        msg.to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use kreol_core::language::LookupResult;
    use kreol_core::{DictionarySet, Token, preprocess};
    use kreol_translator::TRANSLATION_ERROR;

    use super::*;

    /// Processor whose lookup fails on one poisoned token
    struct PoisonedProcessor {
        dictionaries: DictionarySet,
    }

    impl LanguageProcessor for PoisonedProcessor {
        fn dictionaries(&self) -> &DictionarySet {
            &self.dictionaries
        }

        fn tokenize(&self, text: &str) -> Vec<Token> {
            preprocess::tokenize(text)
        }

        fn lookup(&self, token: &Token, _direction: Direction) -> LookupResult {
            if token.normalized == "poison" {
                panic!("corrupt entry for {}", token.surface);
            }
            LookupResult {
                term: token.surface.clone(),
                translation: token.surface.clone(),
                kind: MatchKind::Fallback,
            }
        }
    }

    fn poisoned_translator() -> CreoleTranslator<PoisonedProcessor> {
        CreoleTranslator::new(Arc::new(PoisonedProcessor {
            dictionaries: DictionarySet::new([("bonzour", "bonjour")].into_iter().collect()),
        }))
    }

    #[test]
    fn lookup_panic_becomes_resolution_error() {
        let translator = poisoned_translator();

        let err = translator
            .translate("bonzour poison", "creole", "fr")
            .unwrap_err();
        assert!(matches!(err, TranslateError::Resolution(ref msg) if msg == "corrupt entry for poison"));
        assert_eq!(
            translator.translate_or_sentinel("bonzour poison", "creole", "fr"),
            TRANSLATION_ERROR
        );
    }

    #[test]
    fn translator_stays_usable_after_a_caught_panic() {
        let translator = poisoned_translator();

        assert_eq!(
            translator.translate_or_sentinel("Poison!", "fr", "creole"),
            TRANSLATION_ERROR
        );
        assert_eq!(
            translator.translate_or_sentinel("bonzour koman", "creole", "fr"),
            "bonzour koman"
        );
    }
}
