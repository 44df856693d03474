//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config file parsing error")]
    Toml(#[from] toml::de::Error),

    /// Covers both "key absent" and "path does not exist" — the fix is the
    /// same either way, so both get the same diagnostic.
    #[error(
        "yuic jar path not configured properly. \
         This plugin expects `compressor.jar` to point to the YUI Compressor jar file."
    )]
    JarNotFound,
}
