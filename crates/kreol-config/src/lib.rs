use std::env;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use self::dictionary::DictionaryConfig;
use self::log::LogConfig;
use self::translator::TranslatorConfig;

pub mod dictionary;
pub mod log;
pub mod translator;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub dictionary: DictionaryConfig,
    pub translator: TranslatorConfig,
    pub log: LogConfig,
}

impl Config {
    /// Defaults overridden by `KREOL_*` environment variables
    pub fn new() -> Self {
        let mut config = Config::default();
        config.apply_env();
        config
    }

    /// Read a JSON config file; missing sections fall back to defaults
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let file = File::open(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let reader = BufReader::new(file);
        serde_json::from_reader(reader).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn apply_env(&mut self) {
        self.apply_vars(|name| env::var(name).ok());
    }

    fn apply_vars(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(path) = var("KREOL_DICTIONARY").filter(|p| !p.trim().is_empty()) {
            self.dictionary.path = Some(path);
        }

        if let Some(lang) = var("KREOL_FROM").and_then(|v| v.parse().ok()) {
            self.translator.from_lang = lang;
        }

        if let Some(lang) = var("KREOL_TO").and_then(|v| v.parse().ok()) {
            self.translator.to_lang = lang;
        }

        if let Some(level) = var("KREOL_LOG") {
            self.log.level = level;
        }
    }
}
