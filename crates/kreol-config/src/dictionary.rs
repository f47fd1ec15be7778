use serde::{Deserialize, Serialize};

fn default_use_embedded() -> bool {
    true
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Start from the dictionary compiled into the binary
    #[serde(default = "default_use_embedded")]
    pub use_embedded: bool,
    /// Primary dictionary file, replaces the embedded one when set
    #[serde(default)]
    pub path: Option<String>,
    /// Merged in order over the primary dictionary
    #[serde(default)]
    pub additional_paths: Vec<String>,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            use_embedded: default_use_embedded(),
            path: None,
            additional_paths: vec![],
        }
    }
}
