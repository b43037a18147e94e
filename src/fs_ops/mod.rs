//! Filesystem operations: the copy ("move") side of synth_fs.

mod dir_copy;
mod entry;
mod file_copy;
mod helpers;
mod io_copy;
mod metadata;
mod util;

pub use entry::{move_into, CopySummary};
pub use helpers::{describe_io_error, io_hint};
