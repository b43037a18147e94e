//! Regex substitution across files.
//!
//! The pattern is compiled once, the sources are expanded to regular files,
//! and each file is rewritten only when at least one match was replaced, so
//! untouched files keep their modification time.

mod flags;
mod rule;

pub use flags::RegexFlags;
pub use rule::ReplaceRule;

use std::fs::OpenOptions;
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::config::Config;
use crate::errors::Result;
use crate::paths::{expand_paths, filter_files, PathSpecs};

/// One rewritten file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReplacement {
    pub path: PathBuf,
    /// Number of matches replaced in this file.
    pub count: usize,
}

/// Outcome of a [`replace`] call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplaceSummary {
    /// Pattern as given by the caller.
    pub pattern: String,
    /// Regular files that were read.
    pub scanned: usize,
    /// Files that were rewritten, in processing order.
    pub modified: Vec<FileReplacement>,
}

impl ReplaceSummary {
    /// One human-readable line per modified file.
    pub fn notifications(&self) -> impl Iterator<Item = String> + '_ {
        self.modified
            .iter()
            .map(|m| notification(&self.pattern, &m.path))
    }

    /// The pattern in single quotes, as it appears in notifications.
    pub fn quoted_pattern(&self) -> String {
        quote(&self.pattern)
    }
}

fn notification(pattern: &str, path: &Path) -> String {
    format!("Replaced {} in {}.", quote(pattern), path.display())
}

/// Single-quoted, with `'`, `\\` and control characters escaped.
fn quote(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('\'');
    for c in text.chars() {
        match c {
            '\'' => out.push_str("\\'"),
            '"' => out.push('"'),
            c => out.extend(c.escape_debug()),
        }
    }
    out.push('\'');
    out
}

/// Replace every match of `before` with `after` in all files matched by
/// `sources` (expanded against `config.root`).
///
/// A malformed pattern fails before any file is opened. Processing stops at
/// the first file that cannot be opened, read or written; files rewritten
/// before that stay rewritten.
pub fn replace(
    config: &Config,
    sources: impl Into<PathSpecs>,
    before: &str,
    after: &str,
    flags: RegexFlags,
) -> Result<ReplaceSummary> {
    let rule = ReplaceRule::new(before, after, flags)?;
    replace_with_rule(config, sources, &rule)
}

/// Same as [`replace`] with an already compiled rule.
pub fn replace_with_rule(
    config: &Config,
    sources: impl Into<PathSpecs>,
    rule: &ReplaceRule,
) -> Result<ReplaceSummary> {
    let mut summary = ReplaceSummary {
        pattern: rule.pattern().to_string(),
        ..Default::default()
    };

    for path in filter_files(expand_paths(sources, &config.root)) {
        let path = path?;
        summary.scanned += 1;

        let count = replace_in_file(&path, rule)?;
        if count == 0 {
            debug!(path = %path.display(), "no match; left untouched");
            continue;
        }

        info!(path = %path.display(), count, "{}", notification(rule.pattern(), &path));
        summary.modified.push(FileReplacement { path, count });
    }

    Ok(summary)
}

/// Apply `rule` to a single file. The file is opened read+write up front and
/// only written when something matched; returns the number of replacements.
pub fn replace_in_file(path: &Path, rule: &ReplaceRule) -> Result<usize> {
    let mut fh = OpenOptions::new().read(true).write(true).open(path)?;
    let mut content = String::new();
    fh.read_to_string(&mut content)?;

    let (updated, count) = rule.apply(&content);
    if count == 0 {
        return Ok(0);
    }

    fh.seek(SeekFrom::Start(0))?;
    fh.write_all(updated.as_bytes())?;
    fh.set_len(updated.len() as u64)?;
    fh.flush()?;
    Ok(count)
}
