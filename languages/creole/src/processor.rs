use kreol_config::dictionary::DictionaryConfig;
use kreol_core::language::{LanguageProcessor, LookupResult};
use kreol_core::{Direction, DictionarySet, InitError, Token, preprocess, resolve_match};

use crate::loader::DictionaryLoader;

/// Creole/French processor over an immutable pair of dictionaries
pub struct CreoleProcessor {
    dictionaries: DictionarySet,
}

impl CreoleProcessor {
    pub fn new(dictionaries: DictionarySet) -> Self {
        Self { dictionaries }
    }

    /// Create a processor from configured dictionary sources
    pub fn from_config(config: &DictionaryConfig) -> Result<Self, InitError> {
        DictionaryLoader::from_config(config).map(Self::new)
    }
}

impl LanguageProcessor for CreoleProcessor {
    fn dictionaries(&self) -> &DictionarySet {
        &self.dictionaries
    }

    fn tokenize(&self, text: &str) -> Vec<Token> {
        preprocess::tokenize(text)
    }

    fn lookup(&self, token: &Token, direction: Direction) -> LookupResult {
        let dict = self.dictionaries.for_direction(direction);
        let (translation, kind) = resolve_match(&token.surface, dict);

        LookupResult {
            term: token.surface.clone(),
            translation,
            kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use kreol_core::MatchKind;

    use super::*;

    #[test]
    fn lookup_uses_the_dictionary_of_the_direction() {
        let processor = CreoleProcessor::new(DictionarySet::new(
            [("bonzour", "bonjour"), ("gro", "gros ou grand (taille)")]
                .into_iter()
                .collect(),
        ));

        let tokens = processor.tokenize("Bonzour GRAND!");
        let forward = processor.lookup(&tokens[0], Direction::CREOLE_TO_FRENCH);
        assert_eq!(forward.translation, "bonjour");
        assert_eq!(forward.kind, MatchKind::Exact);

        let reverse = processor.lookup(&tokens[1], Direction::FRENCH_TO_CREOLE);
        assert_eq!(reverse.translation, "gro");

        let miss = processor.lookup(&tokens[1], Direction::CREOLE_TO_FRENCH);
        assert_eq!(miss.translation, "GRAND!");
        assert_eq!(miss.kind, MatchKind::Fallback);
    }
}
