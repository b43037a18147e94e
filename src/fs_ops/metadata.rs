//! Metadata preservation.
//! - Copies timestamps (atime, mtime) and, on Unix, permission bits from source->dest.
//! - Best-effort: failures to set times/perms are logged and ignored.
//! - With the `xattrs` feature, extended attributes are copied too (also best-effort).

use filetime::{set_file_times, FileTime};
use std::fs;
use std::path::Path;
use tracing::{trace, warn};

/// Preserve metadata on `dest` using already-fetched `src_meta`.
pub(super) fn preserve_metadata(dest: &Path, src_meta: &fs::Metadata) {
    // 1) Timestamps
    let at = FileTime::from_last_access_time(src_meta);
    let mt = FileTime::from_last_modification_time(src_meta);
    if let Err(e) = set_file_times(dest, at, mt) {
        warn!(path = %dest.display(), error = %e, "failed to set atime/mtime on destination");
    } else {
        trace!(path = %dest.display(), "set atime/mtime on destination");
    }

    // 2) Permissions (Unix mode bits)
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let src_mode = src_meta.permissions().mode() & 0o7777;
        let perms = fs::Permissions::from_mode(src_mode);
        if let Err(e) = fs::set_permissions(dest, perms) {
            warn!(path = %dest.display(), mode = format!("{:o}", src_mode), error = %e, "failed to set permissions on destination");
        } else {
            trace!(path = %dest.display(), mode = format!("{:o}", src_mode), "set permissions on destination");
        }
    }

    // 3) Windows: mirror the readonly attribute
    #[cfg(windows)]
    {
        let ro = src_meta.permissions().readonly();
        match fs::metadata(dest) {
            Ok(meta) => {
                let mut perms = meta.permissions();
                perms.set_readonly(ro);
                if let Err(e) = fs::set_permissions(dest, perms) {
                    warn!(path = %dest.display(), readonly = ro, error = %e, "failed to set readonly attribute on destination");
                }
            }
            Err(e) => {
                warn!(path = %dest.display(), error = %e, "failed to stat destination for readonly preservation");
            }
        }
    }
}

/// Copy extended attributes from `src` to `dest`. No-op without the `xattrs` feature.
pub(super) fn preserve_xattrs(src: &Path, dest: &Path) {
    #[cfg(feature = "xattrs")]
    {
        let names = match xattr::list(src) {
            Ok(names) => names,
            Err(e) => {
                warn!(src = %src.display(), error = %e, "failed to list xattrs; continuing");
                return;
            }
        };
        for name in names {
            let name_disp = name.to_string_lossy().into_owned();
            match xattr::get(src, &name) {
                Ok(value) => {
                    let value = value.unwrap_or_default();
                    if let Err(e) = xattr::set(dest, &name, &value) {
                        warn!(dest = %dest.display(), xattr = %name_disp, error = %e, "failed to set xattr on destination");
                    } else {
                        trace!(dest = %dest.display(), xattr = %name_disp, size = value.len(), "preserved xattr");
                    }
                }
                Err(e) => {
                    warn!(src = %src.display(), xattr = %name_disp, error = %e, "failed to read xattr value from source");
                }
            }
        }
    }
    #[cfg(not(feature = "xattrs"))]
    {
        let _ = (src, dest);
    }
}
