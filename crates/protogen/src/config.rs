//! Generator configuration.
//!
//! Example `protogen.toml`:
//! ```toml
//! backend = "rust"
//!
//! [rust]
//! runtime_path = "::my_runtime"
//! std_path = "::core"
//! ```
//!
//! Every key is optional.

use crate::error::ConfigError;
use crate::traits::Backend;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::path::Path;

/// Options for the Rust backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RustOptions {
    /// Path of the runtime crate in generated code.
    pub runtime_path: Cow<'static, str>,
    /// Path of the standard library in generated code.
    pub std_path: Cow<'static, str>,
}

impl RustOptions {
    pub const DEFAULT: Self = Self {
        runtime_path: Cow::Borrowed("::protogen_runtime"),
        std_path: Cow::Borrowed("::std"),
    };
}

impl Default for RustOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Root configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Name of the backend to generate with.
    pub backend: String,
    pub rust: RustOptions,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            backend: "rust".to_string(),
            rust: RustOptions::default(),
        }
    }
}

impl GeneratorConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(
            path = %path.display(),
            backend = %config.backend,
            "loaded generator config"
        );
        Ok(config)
    }

    /// The backend selected by this configuration.
    ///
    /// The built-in Rust backend is configured from [`Self::rust`]; other
    /// names are looked up in the registry.
    pub fn build_backend(&self) -> Result<Box<dyn Backend>, ConfigError> {
        #[cfg(feature = "backend-rust")]
        {
            if self.backend == "rust" {
                return Ok(Box::new(crate::output::rust::RustBackend::new(
                    self.rust.clone(),
                )));
            }
        }

        crate::registry::get_backend(&self.backend)
            .map(|backend| Box::new(backend) as Box<dyn Backend>)
            .ok_or_else(|| ConfigError::UnknownBackend(self.backend.clone()))
    }
}
