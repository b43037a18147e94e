//! Application orchestrator.
//! Merges env + CLI config, initializes logging, and runs the requested operation.

use anyhow::{anyhow, Result};
use tracing::{debug, info};

use synth_fs::fs_ops::describe_io_error;
use synth_fs::output as out;
use synth_fs::{move_into, replace, Config, SynthError};

use crate::cli::{to_specs, Args, Command};
use crate::logging::init_tracing;

/// Run the CLI application.
pub fn run(args: Args) -> Result<()> {
    let mut cfg = Config::from_env();
    args.apply_overrides(&mut cfg);

    // Held until return so the file appender flushes.
    let _guard = init_tracing(&cfg.log_level, cfg.log_file.as_deref(), args.json).map_err(|e| {
        out::print_error(&format!("Failed to initialize logging: {e}"));
        e
    })?;

    debug!(?args, root = %cfg.root.display(), "Starting synth_fs");

    match &args.command {
        Command::Move {
            sources,
            dest,
            literal,
            ..
        } => {
            let summary = move_into(&cfg, to_specs(sources, *literal), dest.as_deref())
                .map_err(|e| failure("move", e))?;
            let dest = dest.as_deref().unwrap_or(cfg.root.as_path());
            out::print_success(&format!(
                "Copied {} file(s), {} bytes into {}",
                summary.copied.len(),
                summary.bytes,
                dest.display()
            ));
        }
        Command::Replace {
            sources,
            before,
            after,
            flags,
            literal,
        } => {
            let summary = replace(&cfg, to_specs(sources, *literal), before, after, *flags)
                .map_err(|e| failure("replace", e))?;
            for line in summary.notifications() {
                out::print_user(&line);
            }
            if summary.modified.is_empty() {
                out::print_info(&format!(
                    "No matches for {} in {} file(s)",
                    summary.quoted_pattern(),
                    summary.scanned
                ));
            }
            info!(
                scanned = summary.scanned,
                modified = summary.modified.len(),
                "Replace completed"
            );
        }
    }

    Ok(())
}

/// Record the error as a structured debug event and turn it into the
/// message `main` prints.
fn failure(op: &str, e: SynthError) -> anyhow::Error {
    let code = e.code();
    match &e {
        SynthError::InvalidPattern(inner) => {
            debug!(code, kind = "invalid_pattern", error = %inner, "{op} failed")
        }
        SynthError::InvalidGlob { pattern, reason } => {
            debug!(code, kind = "invalid_glob", %pattern, %reason, "{op} failed")
        }
        SynthError::SameFile { src, dest } => {
            debug!(code, kind = "same_file", src = %src.display(), dest = %dest.display(), "{op} failed")
        }
        SynthError::Io(io) => {
            debug!(code, kind = "io", io_kind = ?io.kind(), error = %io, "{op} failed")
        }
    }

    let msg = match e.as_io() {
        Some(io) => describe_io_error(io),
        None => e.to_string(),
    };
    anyhow!(msg).context(format!("{op} failed"))
}
