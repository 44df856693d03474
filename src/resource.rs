//! Resource classification for pipeline assets.

use std::path::Path;

/// Kind of source file flowing through the build pipeline.
///
/// Only `Js` and `Css` are eligible for compression; the other kinds exist
/// so the adapter can be attached to a whole asset tree without per-kind
/// guards upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Js,
    Css,
    Html,
    Image,
    Font,
    Other,
}

impl SourceKind {
    /// Classify a file by its extension.
    pub fn from_path(path: &Path) -> Self {
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            return Self::Other;
        };
        match ext.to_ascii_lowercase().as_str() {
            "js" | "mjs" => Self::Js,
            "css" => Self::Css,
            "html" | "htm" => Self::Html,
            "png" | "jpg" | "jpeg" | "gif" | "webp" | "avif" | "svg" | "ico" => Self::Image,
            "woff" | "woff2" | "ttf" | "otf" => Self::Font,
            _ => Self::Other,
        }
    }

    /// The `--type` value the compressor understands, if this kind is
    /// eligible at all.
    pub fn tool_type(self) -> Option<&'static str> {
        match self {
            Self::Js => Some("js"),
            Self::Css => Some("css"),
            _ => None,
        }
    }
}

/// A borrowed view of one asset being processed.
///
/// The pipeline owns the asset; the adapter only reads kind and text and
/// keeps the path for diagnostics.
#[derive(Debug, Clone, Copy)]
pub struct Resource<'a> {
    pub kind: SourceKind,
    pub text: &'a str,
    pub path: &'a Path,
}

impl<'a> Resource<'a> {
    /// Build a resource, classifying it by file extension.
    pub fn new(path: &'a Path, text: &'a str) -> Self {
        Self {
            kind: SourceKind::from_path(path),
            text,
            path,
        }
    }

    /// Build a resource with an explicit kind.
    pub fn with_kind(kind: SourceKind, path: &'a Path, text: &'a str) -> Self {
        Self { kind, text, path }
    }
}

// ============================================================================
// Tests
// ============================================================================
