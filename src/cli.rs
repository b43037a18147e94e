//! CLI definition and parsing.
//! Global flags configure root and logging; subcommands map 1:1 onto the
//! library operations.

use clap::{Parser, Subcommand, ValueHint};
use std::path::PathBuf;

use synth_fs::{Config, LogLevel, PathSpec, PathSpecs, RegexFlags};

/// Copy generated files into place and patch them with regex substitutions.
/// CLI flags override SYNTH_FS_* environment values.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "File helpers for code-generation post-processing")]
pub struct Args {
    /// Directory that glob sources are resolved against (default: current directory).
    #[arg(long, global = true, value_hint = ValueHint::DirPath)]
    pub root: Option<PathBuf>,

    /// Enable debug logging (equivalent to `--log-level debug`).
    #[arg(short = 'd', long, global = true)]
    pub debug: bool,

    /// Set log level. One of: quiet, normal, info, debug.
    #[arg(long, global = true)]
    pub log_level: Option<LogLevel>,

    /// Also write logs to this file.
    #[arg(long, global = true, value_hint = ValueHint::FilePath)]
    pub log_file: Option<PathBuf>,

    /// Emit logs in structured JSON.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Copy files and directory trees into a destination, overwriting existing files.
    #[command(name = "move", visible_alias = "copy")]
    Move {
        /// Glob patterns (or literal paths with --literal).
        #[arg(required = true, value_hint = ValueHint::AnyPath)]
        sources: Vec<String>,

        /// Destination directory (default: the root).
        #[arg(long, short = 't', value_hint = ValueHint::DirPath)]
        dest: Option<PathBuf>,

        /// Treat sources as literal paths instead of glob patterns.
        #[arg(long)]
        literal: bool,

        /// Do not copy timestamps/permissions onto copied files.
        #[arg(long)]
        no_preserve_metadata: bool,
    },

    /// Replace regex matches in every matched file.
    Replace {
        /// Glob patterns (or literal paths with --literal).
        #[arg(required = true, value_hint = ValueHint::AnyPath)]
        sources: Vec<String>,

        /// Pattern to search for.
        #[arg(long)]
        before: String,

        /// Replacement text; `$1` / `${name}` refer to capture groups.
        #[arg(long)]
        after: String,

        /// Regex flags as letters from `imsxU`; pass an empty string for none.
        #[arg(long, default_value = "m")]
        flags: RegexFlags,

        /// Treat sources as literal paths instead of glob patterns.
        #[arg(long)]
        literal: bool,
    },
}

impl Args {
    /// Effective log level derived from flags.
    /// Precedence: --debug > --log-level value > None (use config default).
    pub fn effective_log_level(&self) -> Option<LogLevel> {
        if self.debug {
            return Some(LogLevel::Debug);
        }
        self.log_level.clone()
    }

    /// Apply CLI overrides to a loaded Config (in-place). No-ops for unset flags.
    pub fn apply_overrides(&self, cfg: &mut Config) {
        if let Some(root) = &self.root {
            cfg.root = root.clone();
        }
        if let Some(level) = self.effective_log_level() {
            cfg.log_level = level;
        }
        if let Some(file) = &self.log_file {
            cfg.log_file = Some(file.clone());
        }
        if let Command::Move {
            no_preserve_metadata: true,
            ..
        } = self.command
        {
            cfg.preserve_metadata = false;
        }
    }
}

/// Build specifiers from raw CLI strings.
pub fn to_specs(sources: &[String], literal: bool) -> PathSpecs {
    sources
        .iter()
        .map(|s| {
            if literal {
                PathSpec::literal(s)
            } else {
                PathSpec::glob(s.as_str())
            }
        })
        .collect()
}

pub fn parse() -> Args {
    Args::parse()
}
