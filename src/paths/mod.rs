//! Path specifiers and their expansion into concrete paths.
//!
//! A [`PathSpec`] is either a literal path or a glob pattern; callers pick
//! explicitly. [`expand_paths`] turns any number of them into a lazy
//! [`Expansion`], and [`filter_files`] narrows that down to regular files.

mod expand;
mod specifier;

pub use expand::{expand_paths, filter_files, Expansion};
pub use specifier::{PathSpec, PathSpecs};
