use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::config::Config;
use crate::errors::Result;
use crate::paths::{expand_paths, PathSpecs};

use super::dir_copy::copy_dir_to_existing_dir;
use super::file_copy::copy_file_into;

/// What a [`move_into`] call wrote.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopySummary {
    /// Destination paths in the order they were written.
    pub copied: Vec<PathBuf>,
    /// Total bytes copied.
    pub bytes: u64,
}

impl CopySummary {
    fn record(&mut self, dest: PathBuf, bytes: u64) {
        self.copied.push(dest);
        self.bytes += bytes;
    }
}

/// Copy every source into `destination` (default: `config.root`).
///
/// Sources are expanded against `config.root`. Directories are copied
/// recursively with their relative layout; files are copied into the
/// destination directory with their metadata when `config.preserve_metadata`
/// is set. Existing files are overwritten. Sources are left in place.
///
/// The first failure aborts the call; files copied before it stay.
pub fn move_into(
    config: &Config,
    sources: impl Into<PathSpecs>,
    destination: Option<&Path>,
) -> Result<CopySummary> {
    let destination = destination.unwrap_or(config.root.as_path());
    let mut summary = CopySummary::default();

    for source in expand_paths(sources, &config.root) {
        let source = source?;
        let meta = fs::metadata(&source)?;
        debug!(src = %source.display(), is_dir = meta.is_dir(), "dispatch move_into");

        if meta.is_dir() {
            for (dest, bytes) in copy_dir_to_existing_dir(&source, destination)? {
                summary.record(dest, bytes);
            }
        } else {
            let (dest, bytes) = copy_file_into(&source, destination, config.preserve_metadata)?;
            summary.record(dest, bytes);
        }
    }

    info!(
        dest = %destination.display(),
        files = summary.copied.len(),
        bytes = summary.bytes,
        "Copy completed"
    );
    Ok(summary)
}
