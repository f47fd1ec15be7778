use std::path::Path;

use indexmap::IndexMap;
use kreol_config::dictionary::DictionaryConfig;
use kreol_core::{DictionarySet, ForwardDictionary, InitError, LoadError};
use serde_json::Value;

pub struct DictionaryLoader;

impl DictionaryLoader {
    /// Load embedded dictionary data
    pub fn load_embedded() -> Result<ForwardDictionary, LoadError> {
        let json = include_str!("../data/dictionnaire.json");
        tracing::info!("Loading embedded dictionary...");
        let dict = Self::from_json(json)?;
        tracing::info!("Loaded {} dictionary entries", dict.len());
        Ok(dict)
    }

    /// Load dictionary from file path
    pub fn load_from_file(path: &Path) -> Result<ForwardDictionary, LoadError> {
        if !path.exists() {
            return Err(LoadError::FileNotFound(path.display().to_string()));
        }

        tracing::info!("Loading dictionary from file: {}", path.display());
        let json = std::fs::read_to_string(path)?;
        let dict = Self::from_json(&json)?;
        tracing::info!("Loaded {} dictionary entries from file", dict.len());
        Ok(dict)
    }

    /// Parse a JSON object of `creole word -> french text`, in document order.
    /// Entries whose value is not a string are skipped.
    pub fn from_json(json: &str) -> Result<ForwardDictionary, LoadError> {
        let raw: IndexMap<String, Value> = serde_json::from_str(json).map_err(|e| {
            if e.is_data() {
                LoadError::InvalidFormat(format!("expected an object of strings: {e}"))
            } else {
                LoadError::ParseError(e.to_string())
            }
        })?;

        let mut dict = ForwardDictionary::new();
        for (word, value) in raw {
            match value {
                Value::String(text) => {
                    if dict.insert(&word, text).is_some() {
                        tracing::warn!("Duplicate dictionary key {word:?}, keeping the last value");
                    }
                }
                other => {
                    tracing::warn!("Skipping {word:?}: value is not a string ({other})");
                }
            }
        }

        Ok(dict)
    }

    /// Merge two dictionaries (later values override earlier ones by key)
    pub fn merge(base: ForwardDictionary, additional: ForwardDictionary) -> ForwardDictionary {
        base.merge(additional)
    }

    /// Resolve the configured sources into ready-to-use dictionaries.
    ///
    /// The primary source is `path` when set, otherwise the embedded data when
    /// enabled. Without a primary source the translator cannot start.
    /// Additional files that fail to load are skipped with a warning.
    pub fn from_config(config: &DictionaryConfig) -> Result<DictionarySet, InitError> {
        let mut dict = match (&config.path, config.use_embedded) {
            (Some(path), _) => Self::load_from_file(Path::new(path))
                .map_err(|e| InitError::from_load(path, e))?,
            (None, true) => {
                Self::load_embedded().map_err(|e| InitError::from_load("embedded dictionary", e))?
            }
            (None, false) => {
                return Err(InitError::missing(
                    "embedded dictionary disabled and no dictionary path configured",
                ));
            }
        };

        for path in &config.additional_paths {
            match Self::load_from_file(Path::new(path)) {
                Ok(additional) => {
                    tracing::info!("Merging additional dictionary from: {}", path);
                    dict = Self::merge(dict, additional);
                }
                Err(e) => {
                    tracing::warn!("Failed to load dictionary from {}: {}", path, e);
                }
            }
        }

        let set = DictionarySet::new(dict);
        tracing::info!(
            "Dictionary ready: {} words, {} reverse entries",
            set.forward().len(),
            set.reverse().len()
        );
        Ok(set)
    }
}
