use std::sync::Arc;

use kreol_config::Config;
use kreol_core::{Direction, InitError, Language};
use kreol_lang_creole::{CreoleProcessor, CreoleTranslator};

pub struct AppState {
    pub config: Config,
    pub translator: CreoleTranslator,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, InitError> {
        let processor = CreoleProcessor::from_config(&config.dictionary)?;

        Ok(Self {
            translator: CreoleTranslator::new(Arc::new(processor)),
            config,
        })
    }

    /// Language codes for a request, falling back to the configured pair.
    /// With auto swap on, a pair naming the same language twice gets its target flipped.
    pub fn direction_codes(&self, from: Option<&str>, to: Option<&str>) -> (String, String) {
        let translator = &self.config.translator;
        let from = from.unwrap_or(translator.from_lang.code()).to_string();
        let to = to.unwrap_or(translator.to_lang.code()).to_string();

        if translator.auto_swap
            && let (Ok(f), Ok(t)) = (from.parse::<Language>(), to.parse::<Language>())
            && f == t
        {
            let direction = Direction::auto_swap(f, t);
            tracing::debug!("Same language on both sides, using {direction}");
            return (direction.from().code().to_string(), direction.to().code().to_string());
        }

        (from, to)
    }
}
