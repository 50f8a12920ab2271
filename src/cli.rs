//! Shared plumbing for the demo binaries.
//!
//! Each binary stays a standalone `main`; this module only carries the
//! pieces that should not diverge between them: semantic exit codes,
//! the output-format switch for the auxiliary-vector dump, and the
//! tracing setup.

use clap::ValueEnum;
use core::fmt;
use tracing_subscriber::EnvFilter;

/// Semantic exit codes for the demo binaries.
///
/// Codes stay in the valid 0–125 range; 126–255 are reserved by shells.
pub struct ExitCode;

impl ExitCode {
    /// Success - operation completed without errors.
    pub const SUCCESS: i32 = 0;

    /// User error - bad arguments, missing files, invalid input.
    pub const USER_ERROR: i32 = 1;

    /// Runtime error - the demo ran but its input was unusable.
    pub const RUNTIME_ERROR: i32 = 2;

    /// Internal error - bug in the tool itself.
    pub const INTERNAL_ERROR: i32 = 3;

    /// Get a human-readable description of an exit code.
    #[must_use]
    pub const fn description(code: i32) -> &'static str {
        match code {
            0 => "success",
            1 => "user error (invalid input/arguments)",
            2 => "runtime error",
            3 => "internal error (bug)",
            _ => "unknown",
        }
    }
}

/// Output format for structured sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One human-readable line per entry.
    #[default]
    Human,
    /// A JSON array of entries.
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Human => "human",
            Self::Json => "json",
        })
    }
}

/// Installs the global tracing subscriber for a binary.
///
/// `RUST_LOG` wins when set; otherwise verbosity counts map to warn,
/// info, debug, trace. Diagnostics go to stderr so stdout stays the
/// demo's own output.
pub fn init_tracing(verbosity: u8) {
    let fallback = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_have_descriptions() {
        for code in [
            ExitCode::SUCCESS,
            ExitCode::USER_ERROR,
            ExitCode::RUNTIME_ERROR,
            ExitCode::INTERNAL_ERROR,
        ] {
            assert_ne!(ExitCode::description(code), "unknown");
        }
        assert_eq!(ExitCode::description(99), "unknown");
    }

    #[test]
    fn output_format_defaults_to_human() {
        assert_eq!(OutputFormat::default(), OutputFormat::Human);
        assert_eq!(OutputFormat::Human.to_string(), "human");
        assert_eq!(OutputFormat::Json.to_string(), "json");
    }
}
