//! I/O error hints.
//!
//! The library hands `io::Error` back untouched; front-ends use these helpers
//! to add an actionable hint when showing the error to a person.

use std::io;

/// Short platform-aware hint for common failure codes.
pub fn io_hint(e: &io::Error) -> Option<&'static str> {
    if let Some(code) = e.raw_os_error() {
        #[cfg(unix)]
        {
            let hint = match code {
                libc::EACCES | libc::EPERM => Some("permission denied; check ownership and write permissions"),
                libc::ENOENT => Some("path not found; verify it exists"),
                libc::ENOTDIR => Some("a path component is a file, not a directory"),
                libc::EISDIR => Some("expected a file but found a directory"),
                libc::ENOSPC => Some("insufficient space on device"),
                libc::EROFS => Some("read-only filesystem; cannot write here"),
                libc::ELOOP => Some("too many symbolic link levels; possible symlink cycle"),
                libc::ENAMETOOLONG => Some("filename or path too long; shorten path segments"),
                libc::EMFILE | libc::ENFILE => Some("too many open files; close files or raise limits"),
                _ => None,
            };
            if hint.is_some() {
                return hint;
            }
        }
        #[cfg(windows)]
        {
            let hint = match code {
                5 => Some("access denied; check permissions"),
                32 => Some("sharing violation; file is in use"),
                2 | 3 => Some("path not found; verify it exists"),
                112 => Some("insufficient disk space"),
                19 => Some("write protected / read-only media"),
                206 => Some("filename or path too long"),
                _ => None,
            };
            if hint.is_some() {
                return hint;
            }
        }
    }

    match e.kind() {
        io::ErrorKind::PermissionDenied => Some("permission denied; check ownership and write permissions"),
        io::ErrorKind::NotFound => Some("path not found; verify it exists"),
        io::ErrorKind::InvalidData => Some("file is not valid UTF-8 text"),
        _ => None,
    }
}

/// Error text plus hint and OS code, for user-facing output.
pub fn describe_io_error(e: &io::Error) -> String {
    let mut msg = e.to_string();
    if let Some(hint) = io_hint(e) {
        msg.push_str(" (");
        msg.push_str(hint);
        msg.push(')');
    }
    if let Some(code) = e.raw_os_error() {
        msg.push_str(&format!(" [os code: {code}]"));
    }
    msg
}
