//! Configuration management for `yuic.toml`.
//!
//! # Sections
//!
//! | Section                | Purpose                                     |
//! |------------------------|---------------------------------------------|
//! | `mode`                 | Build mode ("production", "development")    |
//! | `[compressor]`         | Jar location and java launcher override     |
//! | `[compressor.options]` | Option toggles forwarded to the compressor  |

mod error;

pub use error::ConfigError;

use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing yuic.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Build mode for the current run. Absent means production.
    pub mode: BuildMode,

    /// Compressor settings
    pub compressor: CompressorConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        Ok(toml::from_str(&raw)?)
    }
}

// ============================================================================
// BuildMode
// ============================================================================

/// Build mode classifier.
///
/// Modes are free-form strings; anything starting with `dev` counts as a
/// development build and skips compression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BuildMode(String);

impl Default for BuildMode {
    fn default() -> Self {
        Self("production".into())
    }
}

impl BuildMode {
    pub fn new(mode: impl Into<String>) -> Self {
        Self(mode.into())
    }

    /// Check if this is a development-like mode.
    #[inline]
    pub fn is_dev(&self) -> bool {
        self.0.starts_with("dev")
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// ============================================================================
// [compressor]
// ============================================================================

/// `[compressor]` section configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CompressorConfig {
    /// Path to the YUI Compressor jar. Required for any compression to
    /// happen; tilde is expanded.
    pub jar: Option<String>,

    /// Java launcher override. Defaults to `java` from PATH.
    pub java: Option<PathBuf>,

    /// Option toggles forwarded to the compressor. Options a kind does not
    /// accept are dropped at argument-build time, so one shared table can
    /// serve both js and css.
    pub options: OptionsConfig,
}

impl CompressorConfig {
    /// Resolve the jar location.
    ///
    /// Fails when the key is absent or the path does not name an existing
    /// filesystem entry; both cases produce the same diagnostic.
    pub fn jar(&self) -> Result<PathBuf, ConfigError> {
        let raw = self.jar.as_deref().ok_or(ConfigError::JarNotFound)?;
        let jar = PathBuf::from(shellexpand::tilde(raw).as_ref());
        if !jar.exists() {
            return Err(ConfigError::JarNotFound);
        }
        Ok(jar)
    }

    /// Resolve the java launcher: explicit override first, then PATH lookup.
    pub fn java(&self) -> PathBuf {
        match &self.java {
            Some(path) => path.clone(),
            None => which::which("java").unwrap_or_else(|_| PathBuf::from("java")),
        }
    }
}

/// `[compressor.options]` toggles.
///
/// Field names match the compressor's flag spelling (kebab-case in TOML).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct OptionsConfig {
    pub charset: bool,
    pub line_break: bool,
    pub nomunge: bool,
    pub preserve_semi: bool,
    pub disable_optimizations: bool,
}

// ============================================================================
// Tests
// ============================================================================
