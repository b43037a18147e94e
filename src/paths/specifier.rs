use std::fmt;
use std::path::{Path, PathBuf};

/// One source specifier.
///
/// Strings convert into [`PathSpec::Glob`], paths into [`PathSpec::Literal`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSpec {
    /// A filesystem path. Absolute literals are still glob-expanded against
    /// their anchor; relative literals are passed through untouched.
    Literal(PathBuf),
    /// A glob pattern resolved against the configured root.
    Glob(String),
}

impl PathSpec {
    pub fn literal(path: impl Into<PathBuf>) -> Self {
        PathSpec::Literal(path.into())
    }

    pub fn glob(pattern: impl Into<String>) -> Self {
        PathSpec::Glob(pattern.into())
    }
}

impl fmt::Display for PathSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSpec::Literal(p) => write!(f, "{}", p.display()),
            PathSpec::Glob(g) => f.write_str(g),
        }
    }
}

impl From<&str> for PathSpec {
    fn from(s: &str) -> Self {
        PathSpec::Glob(s.to_string())
    }
}

impl From<String> for PathSpec {
    fn from(s: String) -> Self {
        PathSpec::Glob(s)
    }
}

impl From<&String> for PathSpec {
    fn from(s: &String) -> Self {
        PathSpec::Glob(s.clone())
    }
}

impl From<&Path> for PathSpec {
    fn from(p: &Path) -> Self {
        PathSpec::Literal(p.to_path_buf())
    }
}

impl From<PathBuf> for PathSpec {
    fn from(p: PathBuf) -> Self {
        PathSpec::Literal(p)
    }
}

impl From<&PathBuf> for PathSpec {
    fn from(p: &PathBuf) -> Self {
        PathSpec::Literal(p.clone())
    }
}

/// An ordered collection of specifiers.
///
/// Every single-specifier input converts into a one-element collection, so
/// APIs taking `impl Into<PathSpecs>` accept `"src/*.rs"`, a `PathBuf`, or a
/// `Vec`/array of either.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathSpecs(Vec<PathSpec>);

impl PathSpecs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, spec: impl Into<PathSpec>) {
        self.0.push(spec.into());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PathSpec> {
        self.0.iter()
    }
}

impl IntoIterator for PathSpecs {
    type Item = PathSpec;
    type IntoIter = std::vec::IntoIter<PathSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<T: Into<PathSpec>> FromIterator<T> for PathSpecs {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        PathSpecs(iter.into_iter().map(Into::into).collect())
    }
}

impl From<PathSpec> for PathSpecs {
    fn from(spec: PathSpec) -> Self {
        PathSpecs(vec![spec])
    }
}

impl From<&str> for PathSpecs {
    fn from(s: &str) -> Self {
        PathSpec::from(s).into()
    }
}

impl From<String> for PathSpecs {
    fn from(s: String) -> Self {
        PathSpec::from(s).into()
    }
}

impl From<&Path> for PathSpecs {
    fn from(p: &Path) -> Self {
        PathSpec::from(p).into()
    }
}

impl From<PathBuf> for PathSpecs {
    fn from(p: PathBuf) -> Self {
        PathSpec::from(p).into()
    }
}

impl<T: Into<PathSpec>> From<Vec<T>> for PathSpecs {
    fn from(v: Vec<T>) -> Self {
        v.into_iter().collect()
    }
}

impl<T: Into<PathSpec>, const N: usize> From<[T; N]> for PathSpecs {
    fn from(a: [T; N]) -> Self {
        a.into_iter().collect()
    }
}
