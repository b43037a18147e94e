//! Environment overlay for [`Config`].
//! Unset or empty variables leave the default in place; unparsable values are
//! logged and ignored.

use std::env;
use std::path::PathBuf;
use tracing::warn;

use super::types::{Config, LogLevel};
use super::{ENV_LOG_FILE, ENV_LOG_LEVEL, ENV_PRESERVE_METADATA, ENV_ROOT};

fn non_empty(key: &str) -> Option<String> {
    env::var(key).ok().map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

impl Config {
    /// Defaults overlaid with `SYNTH_FS_*` environment variables.
    pub fn from_env() -> Self {
        let mut cfg = Config::default();

        if let Some(root) = non_empty(ENV_ROOT) {
            cfg.root = PathBuf::from(root);
        }
        if let Some(lvl) = non_empty(ENV_LOG_LEVEL) {
            match LogLevel::parse(&lvl) {
                Some(parsed) => cfg.log_level = parsed,
                None => warn!(var = ENV_LOG_LEVEL, value = %lvl, "ignoring unknown log level"),
            }
        }
        if let Some(file) = non_empty(ENV_LOG_FILE) {
            cfg.log_file = Some(PathBuf::from(file));
        }
        if let Some(flag) = non_empty(ENV_PRESERVE_METADATA) {
            match parse_bool(&flag) {
                Some(b) => cfg.preserve_metadata = b,
                None => warn!(var = ENV_PRESERVE_METADATA, value = %flag, "ignoring non-boolean value"),
            }
        }

        cfg
    }
}
