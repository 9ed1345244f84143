//! Errors raised while generating code.

use crate::template::TemplateError;
use std::path::PathBuf;

/// Generation failed; nothing was written to the output.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// Every enum must declare at least one value.
    #[error("enum `{name}` declares no values")]
    EmptyEnum { name: String },

    /// A value name normalized to something the target language cannot
    /// use as an identifier.
    #[error("enum `{enum_name}` has a value named `{identifier}`, which is not a valid identifier")]
    InvalidIdentifier {
        enum_name: String,
        identifier: String,
    },

    #[error(transparent)]
    Template(#[from] TemplateError),
}

/// Error loading a generator configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("unknown backend `{0}`")]
    UnknownBackend(String),
}
