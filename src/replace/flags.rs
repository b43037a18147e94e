use regex::RegexBuilder;
use std::fmt;
use std::str::FromStr;

/// Regex compile flags.
///
/// The default enables multi-line mode only, so `^`/`$` match at line
/// boundaries. [`RegexFlags::empty`] turns everything off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegexFlags {
    /// `m`: `^` and `$` match at line starts/ends.
    pub multi_line: bool,
    /// `i`: case-insensitive matching.
    pub case_insensitive: bool,
    /// `s`: `.` also matches `\n`.
    pub dot_matches_new_line: bool,
    /// `x`: whitespace and `#` comments in the pattern are ignored.
    pub ignore_whitespace: bool,
    /// `U`: swap the meaning of greedy and lazy repetition.
    pub swap_greed: bool,
}

impl Default for RegexFlags {
    fn default() -> Self {
        Self {
            multi_line: true,
            ..Self::empty()
        }
    }
}

impl RegexFlags {
    pub const fn empty() -> Self {
        Self {
            multi_line: false,
            case_insensitive: false,
            dot_matches_new_line: false,
            ignore_whitespace: false,
            swap_greed: false,
        }
    }

    /// Parse a letter set such as `"m"`, `"ims"` or `""` (no flags).
    pub fn parse(s: &str) -> Option<Self> {
        let mut flags = Self::empty();
        for c in s.trim().chars() {
            match c {
                'i' => flags.case_insensitive = true,
                'm' => flags.multi_line = true,
                's' => flags.dot_matches_new_line = true,
                'x' => flags.ignore_whitespace = true,
                'U' => flags.swap_greed = true,
                _ => return None,
            }
        }
        Some(flags)
    }

    pub(super) fn apply<'b>(&self, builder: &'b mut RegexBuilder) -> &'b mut RegexBuilder {
        builder
            .multi_line(self.multi_line)
            .case_insensitive(self.case_insensitive)
            .dot_matches_new_line(self.dot_matches_new_line)
            .ignore_whitespace(self.ignore_whitespace)
            .swap_greed(self.swap_greed)
    }
}

impl fmt::Display for RegexFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (on, c) in [
            (self.case_insensitive, 'i'),
            (self.multi_line, 'm'),
            (self.dot_matches_new_line, 's'),
            (self.ignore_whitespace, 'x'),
            (self.swap_greed, 'U'),
        ] {
            if on {
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}

impl FromStr for RegexFlags {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid regex flags: '{s}' (expected letters from 'imsxU')"))
    }
}
