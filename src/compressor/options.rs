//! Allowed-options table for the external compressor.
//!
//! The table is data, not branching logic: each entry pairs a flag spelling
//! with its toggle in [`OptionsConfig`], and the per-kind view is a fixed
//! slice chain. Emission order always follows the table, never the
//! configuration file, so identical inputs produce identical command lines.

use crate::config::OptionsConfig;
use crate::resource::SourceKind;

/// One forwardable compressor option.
pub struct ToolOption {
    name: &'static str,
    enabled: fn(&OptionsConfig) -> bool,
}

impl ToolOption {
    /// Flag spelling the compressor expects.
    pub fn flag(&self) -> String {
        format!("--{}", self.name)
    }

    /// Whether this option is switched on in the configuration.
    pub fn is_enabled(&self, options: &OptionsConfig) -> bool {
        (self.enabled)(options)
    }
}

/// Options every eligible kind accepts.
const COMMON: &[ToolOption] = &[
    ToolOption {
        name: "charset",
        enabled: |o| o.charset,
    },
    ToolOption {
        name: "line-break",
        enabled: |o| o.line_break,
    },
];

/// Additional options the compressor only understands for js input.
const JS_ONLY: &[ToolOption] = &[
    ToolOption {
        name: "nomunge",
        enabled: |o| o.nomunge,
    },
    ToolOption {
        name: "preserve-semi",
        enabled: |o| o.preserve_semi,
    },
    ToolOption {
        name: "disable-optimizations",
        enabled: |o| o.disable_optimizations,
    },
];

/// The options a kind may legally forward, in fixed emission order.
pub fn allowed_for(kind: SourceKind) -> impl Iterator<Item = &'static ToolOption> {
    let extra: &'static [ToolOption] = match kind {
        SourceKind::Js => JS_ONLY,
        _ => &[],
    };
    COMMON.iter().chain(extra.iter())
}

/// Render the enabled, allowed options as flag tokens.
///
/// Options enabled in configuration but not allowed for `kind` are dropped
/// silently, which lets one option table be shared across kinds.
pub fn enabled_flags(kind: SourceKind, options: &OptionsConfig) -> Vec<String> {
    allowed_for(kind)
        .filter(|opt| opt.is_enabled(options))
        .map(ToolOption::flag)
        .collect()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn all_on() -> OptionsConfig {
        OptionsConfig {
            charset: true,
            line_break: true,
            nomunge: true,
            preserve_semi: true,
            disable_optimizations: true,
        }
    }

    #[test]
    fn test_js_gets_full_table_in_order() {
        let flags = enabled_flags(SourceKind::Js, &all_on());
        assert_eq!(
            flags,
            vec![
                "--charset",
                "--line-break",
                "--nomunge",
                "--preserve-semi",
                "--disable-optimizations",
            ]
        );
    }

    #[test]
    fn test_css_drops_js_only_options() {
        let flags = enabled_flags(SourceKind::Css, &all_on());
        assert_eq!(flags, vec!["--charset", "--line-break"]);
    }

    #[test]
    fn test_disabled_options_not_rendered() {
        let options = OptionsConfig {
            charset: true,
            nomunge: true,
            ..Default::default()
        };
        let flags = enabled_flags(SourceKind::Js, &options);
        assert_eq!(flags, vec!["--charset", "--nomunge"]);
    }

    #[test]
    fn test_order_is_table_order_not_config_order() {
        // Whatever order the config enabled them in, emission follows the
        // table: charset always precedes nomunge.
        let options = OptionsConfig {
            nomunge: true,
            charset: true,
            ..Default::default()
        };
        let flags = enabled_flags(SourceKind::Js, &options);
        assert_eq!(flags, vec!["--charset", "--nomunge"]);
    }

    #[test]
    fn test_deterministic_across_runs() {
        let options = all_on();
        let first = enabled_flags(SourceKind::Js, &options);
        let second = enabled_flags(SourceKind::Js, &options);
        assert_eq!(first, second);
    }
}
