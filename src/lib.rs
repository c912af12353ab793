// cmdline — option registry, flag/value parser and usage renderer

pub mod config;
pub mod cli;

// ── Version constants ────────────────────────────────────────────────────────
pub const CMDLINE_VERSION_MAJOR: u32 = 0;
pub const CMDLINE_VERSION_MINOR: u32 = 3;
pub const CMDLINE_VERSION_RELEASE: u32 = 0;
pub const CMDLINE_VERSION_NUMBER: u32 =
    CMDLINE_VERSION_MAJOR * 100 * 100 + CMDLINE_VERSION_MINOR * 100 + CMDLINE_VERSION_RELEASE;
pub const CMDLINE_VERSION_STRING: &str = "0.3.0";

/// Returns the runtime version number (`major * 10000 + minor * 100 + release`).
pub fn version_number() -> u32 {
    CMDLINE_VERSION_NUMBER
}

/// Returns the runtime version string.
pub fn version_string() -> &'static str {
    CMDLINE_VERSION_STRING
}

// ── Top-level re-exports ──────────────────────────────────────────────────────
pub use cli::coerce::OptionValue;
pub use cli::error::CmdLineError;
pub use cli::parser::{CmdLine, ParseOutcome};
pub use cli::registry::{OptionItem, Registry, Requirement};
