#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Failures that prevent a translator from being built at all
#[derive(Debug, thiserror::Error)]
pub enum InitError {
    #[error("Dictionary not loaded: {reason}")]
    MissingDictionary {
        reason: String,
        #[source]
        source: Option<LoadError>,
    },
}

impl InitError {
    pub fn missing(reason: impl Into<String>) -> Self {
        Self::MissingDictionary {
            reason: reason.into(),
            source: None,
        }
    }

    pub fn from_load(path: &str, err: LoadError) -> Self {
        Self::MissingDictionary {
            reason: format!("failed to load {path}"),
            source: Some(err),
        }
    }
}
