//! Conditional JS/CSS compression through the YUI Compressor jar.
//!
//! This module is an orchestration boundary, not a minifier. Per resource it
//! runs four stages: mode gate → kind filter → command assembly → process
//! run, and each gate short-circuits to a skip instead of an error. The jar
//! is resolved before any temp file exists, and the temp pair is released on
//! every exit path.

mod args;
mod options;
mod runner;

use std::process::ExitStatus;

use thiserror::Error;

use crate::config::{BuildMode, Config, ConfigError};
use crate::debug;
use crate::resource::Resource;

use args::build_invocation;
use runner::WorkFiles;

// ============================================================================
// Outcome types
// ============================================================================

/// Outcome of one compression attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Compressed {
    /// The resource was transformed; this is its new content.
    Transformed(String),
    /// Nothing was done; the caller keeps the original text.
    Skipped(SkipReason),
}

/// Why a resource was passed through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The build mode starts with `dev`.
    DevMode,
    /// The resource is not a js or css file.
    UnsupportedKind,
}

/// Errors that abort the build step. Skips are not errors.
#[derive(Debug, Error)]
pub enum CompressError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to launch `{program}`")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{program}` exited with {status}")]
    ProcessFailed { program: String, status: ExitStatus },

    #[error("temp file handling failed")]
    TempFile(#[source] std::io::Error),
}

// ============================================================================
// Entry point
// ============================================================================

/// Compress one resource through the external jar.
///
/// Returns [`Compressed::Skipped`] for development builds and for kinds the
/// compressor does not handle; both mean the caller should keep the original
/// text. Configuration and process failures propagate — a resource is either
/// fully transformed or this step fails outright, never partially rewritten.
pub fn compress(
    resource: &Resource,
    config: &Config,
    mode: &BuildMode,
) -> Result<Compressed, CompressError> {
    if mode.is_dev() {
        debug!("compress"; "skipping {} in {} mode", resource.path.display(), mode.as_str());
        return Ok(Compressed::Skipped(SkipReason::DevMode));
    }

    let Some(ty) = resource.kind.tool_type() else {
        return Ok(Compressed::Skipped(SkipReason::UnsupportedKind));
    };

    // Fail fast on a bad jar before touching the filesystem.
    let jar = config.compressor.jar()?;
    let java = config.compressor.java();

    let work = WorkFiles::create(resource.text).map_err(CompressError::TempFile)?;
    let invocation = build_invocation(
        &java,
        &jar,
        resource.kind,
        ty,
        &config.compressor.options,
        work.source_path(),
        work.target_path(),
    );

    debug!(
        "compress";
        "calling `{}` for {}",
        invocation.display(),
        resource.path.display()
    );
    runner::run_tool(&invocation)?;

    let out = work.read_target().map_err(CompressError::TempFile)?;
    Ok(Compressed::Transformed(out))
}

// ============================================================================
// Tests
// ============================================================================
