//! Configuration loading for curveml
//!
//! `defaults/curveml.default.toml` is embedded into the binary so that docs
//! and runtime behavior stay in sync. The CLI layers an optional user file
//! and per-flag overrides on top of those defaults via [`Loader`] before
//! deserializing into [`CurvemlConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

pub use config::ConfigError;

const DEFAULT_TOML: &str = include_str!("../defaults/curveml.default.toml");

/// Top-level configuration consumed by the curveml binary.
#[derive(Debug, Clone, Deserialize)]
pub struct CurvemlConfig {
    pub output: OutputConfig,
    pub graph: GraphConfig,
}

/// Destination of the generated coordinate module.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub path: String,
}

/// Projection window, scale, and sampling step for the draw mode.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphConfig {
    pub width: f64,
    pub height: f64,
    pub scale: f64,
    pub step: f64,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (used by CLI flags).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<CurvemlConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<CurvemlConfig, ConfigError> {
    Loader::new().build()
}
