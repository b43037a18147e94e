//! Lazy expansion of specifiers.
//!
//! Rules per specifier:
//! - absolute literal: the anchor (prefix + root) is escaped and the rest is
//!   globbed against it, so `/tmp/gen/*.py` works as a literal path too;
//! - relative literal: yielded as-is, without an existence check;
//! - glob: matched against the root directory.
//!
//! A trailing `**` also matches zero directories, so `src/**` yields `src`
//! itself before its subdirectories.
//!
//! Glob matches always exist at the time they are produced. Directories are
//! included; use [`filter_files`] to keep only regular files.

use glob::{MatchOptions, Paths, Pattern};
use std::collections::VecDeque;
use std::path::{Component, Path, PathBuf};
use std::vec;
use tracing::trace;

use super::specifier::{PathSpec, PathSpecs};
use crate::errors::{Result, SynthError};

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// Expand `specs` against `root`. Nothing touches the filesystem until the
/// returned iterator is advanced.
pub fn expand_paths(specs: impl Into<PathSpecs>, root: impl Into<PathBuf>) -> Expansion {
    Expansion {
        specs: specs.into().into_iter(),
        root: root.into(),
        current: VecDeque::new(),
    }
}

/// Keep only entries that are regular files (following symlinks). Errors pass
/// through so the caller still sees them.
pub fn filter_files<I>(paths: I) -> impl Iterator<Item = Result<PathBuf>>
where
    I: IntoIterator<Item = Result<PathBuf>>,
{
    paths.into_iter().filter(|entry| match entry {
        Ok(p) => p.is_file(),
        Err(_) => true,
    })
}

/// Finite iterator over the paths produced by a set of specifiers.
/// Re-run [`expand_paths`] to walk them again.
pub struct Expansion {
    specs: vec::IntoIter<PathSpec>,
    root: PathBuf,
    current: VecDeque<Matches>,
}

enum Step {
    Yield(PathBuf),
    Glob(VecDeque<Matches>),
}

/// A pending source of matches for the specifier being expanded.
enum Matches {
    /// Base directory of a trailing `**`, yielded once.
    Dir(Option<PathBuf>),
    Glob { paths: Paths, dirs_only: bool },
}

impl Matches {
    fn next(&mut self) -> Option<Result<PathBuf>> {
        match self {
            Matches::Dir(dir) => dir.take().map(Ok),
            Matches::Glob { paths, dirs_only } => loop {
                match paths.next()? {
                    Ok(p) if *dirs_only && !p.is_dir() => continue,
                    entry => return Some(entry.map_err(SynthError::from)),
                }
            },
        }
    }
}

impl Expansion {
    fn start(&self, spec: PathSpec) -> Result<Step> {
        match spec {
            PathSpec::Literal(path) if path.is_absolute() => {
                let (anchor, rest) = split_anchor(&path);
                if rest.as_os_str().is_empty() {
                    return Ok(Step::Yield(anchor));
                }
                let anchor = utf8(&anchor, &path)?;
                let rest = utf8(&rest, &path)?;
                let pattern = format!("{}{}", Pattern::escape(anchor), rest);
                glob_matches(&pattern).map(Step::Glob)
            }
            PathSpec::Literal(path) => Ok(Step::Yield(path)),
            PathSpec::Glob(pattern) => {
                let full = self.rooted(&pattern)?;
                glob_matches(&full).map(Step::Glob)
            }
        }
    }

    /// Join a glob pattern onto the root, escaping only the root part.
    fn rooted(&self, pattern: &str) -> Result<String> {
        if pattern.is_empty() {
            return Err(SynthError::InvalidGlob {
                pattern: String::new(),
                reason: "empty pattern".into(),
            });
        }
        if Path::new(pattern).is_absolute() {
            return Ok(pattern.to_string());
        }
        let root = self.root.as_path();
        if root.as_os_str().is_empty() || root == Path::new(".") {
            return Ok(pattern.to_string());
        }
        let root = utf8(root, root)?;
        let sep = if root.ends_with(std::path::MAIN_SEPARATOR) || root.ends_with('/') {
            ""
        } else {
            "/"
        };
        Ok(format!("{}{}{}", Pattern::escape(root), sep, pattern))
    }
}

impl Iterator for Expansion {
    type Item = Result<PathBuf>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            while let Some(matches) = self.current.front_mut() {
                match matches.next() {
                    Some(entry) => return Some(entry),
                    None => {
                        self.current.pop_front();
                    }
                }
            }

            let spec = self.specs.next()?;
            trace!(spec = %spec, root = %self.root.display(), "expanding");
            match self.start(spec) {
                Ok(Step::Yield(path)) => return Some(Ok(path)),
                Ok(Step::Glob(paths)) => self.current = paths,
                Err(e) => return Some(Err(e)),
            }
        }
    }
}

/// Match sources for a full pattern, base directory first for a trailing `**`.
fn glob_matches(pattern: &str) -> Result<VecDeque<Matches>> {
    let mut queue = VecDeque::new();
    if let Some(base) = recursive_base(pattern) {
        if base.contains(['*', '?', '[']) {
            queue.push_back(Matches::Glob {
                paths: run_glob(base)?,
                dirs_only: true,
            });
        } else {
            let dir = Path::new(base);
            queue.push_back(Matches::Dir(dir.is_dir().then(|| dir.to_path_buf())));
        }
    }
    queue.push_back(Matches::Glob {
        paths: run_glob(pattern)?,
        dirs_only: false,
    });
    Ok(queue)
}

/// For `base/**`, the pattern naming `base`. A bare `**` names the current
/// directory.
fn recursive_base(pattern: &str) -> Option<&str> {
    let base = pattern.strip_suffix("**")?;
    if base.is_empty() {
        return Some(".");
    }
    let base = base
        .strip_suffix('/')
        .or_else(|| base.strip_suffix(std::path::MAIN_SEPARATOR))?;
    if base.is_empty() {
        Some("/")
    } else {
        Some(base)
    }
}

fn run_glob(pattern: &str) -> Result<Paths> {
    glob::glob_with(pattern, MATCH_OPTIONS).map_err(|e| SynthError::InvalidGlob {
        pattern: pattern.to_string(),
        reason: e.to_string(),
    })
}

/// Split an absolute path into its anchor (`/`, `C:\`, `\\server\share\`) and
/// the remaining relative part.
fn split_anchor(path: &Path) -> (PathBuf, PathBuf) {
    let mut anchor = PathBuf::new();
    let mut rest = PathBuf::new();
    for comp in path.components() {
        match comp {
            Component::Prefix(_) | Component::RootDir => anchor.push(comp),
            other => rest.push(other),
        }
    }
    (anchor, rest)
}

fn utf8<'a>(part: &'a Path, whole: &Path) -> Result<&'a str> {
    part.to_str().ok_or_else(|| SynthError::InvalidGlob {
        pattern: whole.display().to_string(),
        reason: "path is not valid UTF-8".into(),
    })
}
