//! Conditional JS/CSS minification through the YUI Compressor, for static
//! site build pipelines.
//!
//! This crate is an adapter, not a minifier: it decides whether the external
//! tool should run at all (development builds and non-js/css resources pass
//! through untouched), assembles a deterministic command line from the
//! per-kind allowed options, and owns the temp-file plumbing around one
//! synchronous process call per resource.

pub mod cli;
pub mod compressor;
pub mod config;
pub mod logger;
pub mod resource;

pub use compressor::{CompressError, Compressed, SkipReason, compress};
pub use config::{BuildMode, Config, ConfigError};
pub use resource::{Resource, SourceKind};
