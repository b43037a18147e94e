//! Typed error definitions for synth_fs.
//! I/O failures are carried unchanged so callers can still match on `ErrorKind`.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SynthError {
    #[error("invalid regular expression: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("invalid glob pattern '{pattern}': {reason}")]
    InvalidGlob { pattern: String, reason: String },

    #[error("'{src}' and '{dest}' are the same file")]
    SameFile { src: PathBuf, dest: PathBuf },

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl SynthError {
    /// Stable small code for structured logs.
    pub fn code(&self) -> u8 {
        match self {
            SynthError::InvalidPattern(_) => 2,
            SynthError::InvalidGlob { .. } => 3,
            SynthError::SameFile { .. } => 4,
            SynthError::Io(_) => 5,
        }
    }

    /// The underlying I/O error, if this is one.
    pub fn as_io(&self) -> Option<&io::Error> {
        match self {
            SynthError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<walkdir::Error> for SynthError {
    fn from(e: walkdir::Error) -> Self {
        SynthError::Io(e.into())
    }
}

impl From<glob::GlobError> for SynthError {
    fn from(e: glob::GlobError) -> Self {
        SynthError::Io(e.into())
    }
}

pub type Result<T> = std::result::Result<T, SynthError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_kind_is_preserved() {
        let err: SynthError = io::Error::new(io::ErrorKind::PermissionDenied, "nope").into();
        assert_eq!(err.as_io().map(|e| e.kind()), Some(io::ErrorKind::PermissionDenied));
        assert_eq!(err.to_string(), "nope");
    }

    #[test]
    fn codes_are_distinct() {
        let same = SynthError::SameFile {
            src: "a".into(),
            dest: "a".into(),
        };
        let glob = SynthError::InvalidGlob {
            pattern: "[".into(),
            reason: "x".into(),
        };
        assert_ne!(same.code(), glob.code());
    }

    #[cfg(unix)]
    #[test]
    fn unreadable_glob_dir_maps_to_io_error() {
        use std::os::unix::fs::PermissionsExt;

        if unsafe { libc::geteuid() } == 0 {
            return;
        }
        let td = tempfile::tempdir().unwrap();
        let locked = td.path().join("locked");
        std::fs::create_dir(&locked).unwrap();
        std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o000)).unwrap();

        let pattern = format!("{}/*", glob::Pattern::escape(locked.to_str().unwrap()));
        let first = glob::glob(&pattern).unwrap().find_map(|r| r.err());
        std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o755)).unwrap();

        let err: SynthError = first.expect("glob reports unreadable dir").into();
        assert_eq!(err.as_io().map(|e| e.kind()), Some(io::ErrorKind::PermissionDenied));
    }
}
