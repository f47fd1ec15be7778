use kreol_core::{Direction, Language};
use serde::{Deserialize, Serialize};

fn default_from_lang() -> Language {
    Language::Creole
}

fn default_to_lang() -> Language {
    Language::French
}

fn default_auto_swap() -> bool {
    true
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct TranslatorConfig {
    #[serde(default = "default_from_lang")]
    pub from_lang: Language,
    #[serde(default = "default_to_lang")]
    pub to_lang: Language,
    /// Flip the target language when it equals the source
    #[serde(default = "default_auto_swap")]
    pub auto_swap: bool,
}

impl TranslatorConfig {
    /// Configured direction, `None` when both sides match and auto swap is off
    pub fn direction(&self) -> Option<Direction> {
        if self.auto_swap {
            Some(Direction::auto_swap(self.from_lang, self.to_lang))
        } else {
            Direction::new(self.from_lang, self.to_lang)
        }
    }
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            from_lang: default_from_lang(),
            to_lang: default_to_lang(),
            auto_swap: default_auto_swap(),
        }
    }
}
