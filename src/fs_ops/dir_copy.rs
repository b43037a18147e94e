//! Directory tree copy onto an existing (or to-be-created) destination.
//! Only directories that hold at least one file are created; files already
//! present at the destination are overwritten.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

use crate::errors::{Result, SynthError};

use super::io_copy::copy_contents;
use super::util::is_same_file;

/// Copy every file under `src_dir` to the same relative location under
/// `destination`. Symlinked directories are not descended into; other
/// symlinks are copied as the file they point to.
pub(super) fn copy_dir_to_existing_dir(
    src_dir: &Path,
    destination: &Path,
) -> Result<Vec<(PathBuf, u64)>> {
    let mut copied = Vec::new();

    for entry in WalkDir::new(src_dir).min_depth(1).sort_by_file_name() {
        let entry = entry?;
        let ftype = entry.file_type();
        let path = entry.path();
        let is_file = ftype.is_file() || (ftype.is_symlink() && !path.is_dir());
        if !is_file {
            continue;
        }

        let Ok(rel) = path.strip_prefix(src_dir) else {
            continue;
        };
        let dst = destination.join(rel);
        if let Some(parent) = dst.parent() {
            fs::create_dir_all(parent)?;
        }
        if is_same_file(path, &dst)? {
            return Err(SynthError::SameFile {
                src: path.to_path_buf(),
                dest: dst,
            });
        }

        let bytes = copy_contents(path, &dst)?;
        debug!(src = %path.display(), dest = %dst.display(), bytes, "copied file");
        copied.push((dst, bytes));
    }

    Ok(copied)
}
