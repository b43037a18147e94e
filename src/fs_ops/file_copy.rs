//! Single-file copy into a destination directory.
//! Content is overwritten in place, then timestamps and permissions are
//! carried over when requested.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::errors::{Result, SynthError};

use super::io_copy::copy_contents;
use super::metadata::{preserve_metadata, preserve_xattrs};
use super::util::is_same_file;

/// Copy `src` into `destination` and return the written path and byte count.
///
/// - existing directory: the file lands at `destination/<file name>`;
/// - existing regular file: that file is overwritten;
/// - missing: the directory is created first.
pub(super) fn copy_file_into(src: &Path, destination: &Path, preserve: bool) -> Result<(PathBuf, u64)> {
    let src_meta = fs::metadata(src)?;

    let dest = if destination.is_file() {
        destination.to_path_buf()
    } else {
        let name = src.file_name().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("source has no file name: {}", src.display()),
            )
        })?;
        fs::create_dir_all(destination)?;
        destination.join(name)
    };

    if is_same_file(src, &dest)? {
        return Err(SynthError::SameFile {
            src: src.to_path_buf(),
            dest,
        });
    }

    let bytes = copy_contents(src, &dest)?;
    if preserve {
        preserve_metadata(&dest, &src_meta);
        preserve_xattrs(src, &dest);
    }

    debug!(src = %src.display(), dest = %dest.display(), bytes, "copied file");
    Ok((dest, bytes))
}
