//! External process execution and temp-artifact lifecycle.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::NamedTempFile;

use super::CompressError;
use super::args::Invocation;

// ============================================================================
// Temp artifacts
// ============================================================================

/// The per-invocation temp-file pair: `source` holds the original text and
/// `target` receives the compressor's output.
///
/// Both files are deleted on drop, so release happens on every exit path —
/// normal return, early return, launch failure, or non-zero exit.
pub(crate) struct WorkFiles {
    source: NamedTempFile,
    target: NamedTempFile,
}

impl WorkFiles {
    /// Create the pair and write the input text to the source file.
    pub fn create(text: &str) -> std::io::Result<Self> {
        let mut source = NamedTempFile::new()?;
        source.write_all(text.as_bytes())?;
        source.flush()?;
        let target = NamedTempFile::new()?;
        Ok(Self { source, target })
    }

    pub fn source_path(&self) -> &Path {
        self.source.path()
    }

    pub fn target_path(&self) -> &Path {
        self.target.path()
    }

    /// Read back the compressor's output.
    pub fn read_target(&self) -> std::io::Result<String> {
        std::fs::read_to_string(self.target.path())
    }
}

// ============================================================================
// Process execution
// ============================================================================

/// Run the assembled command to completion.
///
/// Blocks until the process exits; no timeout is applied. Output is captured
/// in full and only used for diagnostics — the transformed content comes from
/// the target temp file, not from the pipe.
pub(crate) fn run_tool(invocation: &Invocation) -> Result<(), CompressError> {
    let program = invocation.program.to_string_lossy().into_owned();

    let output = Command::new(&invocation.program)
        .args(&invocation.args)
        .output()
        .map_err(|e| {
            crate::log!("error"; "failed to launch `{}`: {e}", invocation.display());
            CompressError::Launch { program: program.clone(), source: e }
        })?;

    if !output.status.success() {
        crate::log!("error"; "compressor failed: {}", invocation.display());
        log_captured_output(&output);
        return Err(CompressError::ProcessFailed {
            program,
            status: output.status,
        });
    }

    Ok(())
}

/// Surface whatever the failed process printed.
fn log_captured_output(output: &Output) {
    for (label, bytes) in [("stdout", &output.stdout), ("stderr", &output.stderr)] {
        let text = String::from_utf8_lossy(bytes);
        let text = text.trim();
        if !text.is_empty() {
            crate::log!("error"; "{label}: {text}");
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
