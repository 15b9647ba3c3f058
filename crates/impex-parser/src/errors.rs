use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("catalog TOML invalid: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("catalog JSON invalid: {0}")]
    Json(#[from] serde_json::Error),

    #[error("option list '{list}' repeats id '{id}'")]
    DuplicateOptionId { list: &'static str, id: String },
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown {kind} '{value}'; expected one of: {expected}")]
pub struct OptionValueError {
    pub kind: &'static str,
    pub value: String,
    pub expected: &'static str,
}

impl OptionValueError {
    pub fn new(kind: &'static str, value: impl Into<String>, expected: &'static str) -> Self {
        Self {
            kind,
            value: value.into(),
            expected,
        }
    }
}
