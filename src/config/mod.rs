//! Config module.
//! Provides the runtime configuration type, log levels, and environment overlays.

mod env;
pub mod types;

pub use types::{Config, LogLevel};

/// Root used when nothing else is configured: the process working directory.
pub const ROOT_DEFAULT: &str = ".";

// Environment variables read by `Config::from_env`.
pub const ENV_ROOT: &str = "SYNTH_FS_ROOT";
pub const ENV_LOG_LEVEL: &str = "SYNTH_FS_LOG_LEVEL";
pub const ENV_LOG_FILE: &str = "SYNTH_FS_LOG_FILE";
pub const ENV_PRESERVE_METADATA: &str = "SYNTH_FS_PRESERVE_METADATA";
