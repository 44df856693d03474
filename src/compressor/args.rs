//! Command-line assembly for the external compressor.
//!
//! Shape: `java -jar <jar> --type <kind> [flags...] -o <target> <source>`

use std::ffi::OsString;
use std::path::Path;

use super::options::enabled_flags;
use crate::config::OptionsConfig;
use crate::resource::SourceKind;

/// A fully-assembled compressor invocation.
///
/// Ephemeral: built per resource, handed to the runner, never reused.
#[derive(Debug)]
pub(crate) struct Invocation {
    pub program: OsString,
    pub args: Vec<OsString>,
}

impl Invocation {
    /// Render the whole command line for diagnostics.
    pub fn display(&self) -> String {
        std::iter::once(&self.program)
            .chain(self.args.iter())
            .map(|a| a.to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Assemble the argument vector for one resource.
///
/// `ty` is the compressor's `--type` value, already checked against the
/// resource kind by the caller.
pub(crate) fn build_invocation(
    java: &Path,
    jar: &Path,
    kind: SourceKind,
    ty: &'static str,
    options: &OptionsConfig,
    source: &Path,
    target: &Path,
) -> Invocation {
    let mut args: Vec<OsString> = vec![
        "-jar".into(),
        jar.as_os_str().to_owned(),
        "--type".into(),
        ty.into(),
    ];
    for flag in enabled_flags(kind, options) {
        args.push(flag.into());
    }
    args.push("-o".into());
    args.push(target.as_os_str().to_owned());
    args.push(source.as_os_str().to_owned());

    Invocation {
        program: java.as_os_str().to_owned(),
        args,
    }
}

// ============================================================================
// Tests
// ============================================================================
