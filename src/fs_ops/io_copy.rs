//! Streaming content copy.
//!
//! - Opens the destination with create+truncate, so an existing file is
//!   overwritten in place (its inode, owner and mode bits are kept).
//! - Buffered I/O with large (1 MiB) buffers to reduce syscall count.
//! - Only bytes move here; timestamps/permissions are handled by `metadata`.

use std::fs::{File, OpenOptions};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;

const BUF_SIZE: usize = 1024 * 1024;

/// Copy the contents of `src` over `dst`. Returns the number of bytes written.
pub(super) fn copy_contents(src: &Path, dst: &Path) -> io::Result<u64> {
    let src_f = File::open(src)?;
    let dst_f = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(dst)?;

    let mut reader = BufReader::with_capacity(BUF_SIZE, src_f);
    let mut writer = BufWriter::with_capacity(BUF_SIZE, dst_f);
    let bytes = io::copy(&mut reader, &mut writer)?;
    writer.flush()?;

    Ok(bytes)
}
