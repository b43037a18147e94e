//! Core library for `synth_fs`.
//!
//! File helpers for code-generation post-processing:
//! - [`expand_paths`] / [`filter_files`]: turn literal paths and glob patterns
//!   into concrete paths;
//! - [`move_into`]: copy files and directory trees into a destination,
//!   overwriting what is already there;
//! - [`replace`]: regex substitution across a set of files.
//!
//! Everything is synchronous and stops at the first error.

pub mod config;
pub mod errors;
pub mod fs_ops;
pub mod output;
pub mod paths;
pub mod replace;

pub use config::{Config, LogLevel};
pub use errors::{Result, SynthError};
pub use fs_ops::{move_into, CopySummary};
pub use paths::{expand_paths, filter_files, Expansion, PathSpec, PathSpecs};
pub use replace::{
    replace, replace_in_file, replace_with_rule, FileReplacement, RegexFlags, ReplaceRule,
    ReplaceSummary,
};
