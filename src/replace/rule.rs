use regex::{Regex, RegexBuilder};
use std::borrow::Cow;

use super::flags::RegexFlags;
use crate::errors::Result;

/// A compiled pattern plus its replacement text.
///
/// The replacement uses the `regex` crate's expansion syntax: `$1`, `${name}`,
/// and `$$` for a literal dollar sign.
#[derive(Debug, Clone)]
pub struct ReplaceRule {
    regex: Regex,
    replacement: String,
}

impl ReplaceRule {
    /// Compile `before`. Fails with `InvalidPattern` on malformed syntax.
    pub fn new(before: &str, after: impl Into<String>, flags: RegexFlags) -> Result<Self> {
        let regex = flags.apply(&mut RegexBuilder::new(before)).build()?;
        Ok(Self {
            regex,
            replacement: after.into(),
        })
    }

    /// The pattern as written by the caller.
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    /// Replace every match in `text`; returns the new text and the match count.
    /// Text without matches comes back borrowed.
    pub fn apply<'t>(&self, text: &'t str) -> (Cow<'t, str>, usize) {
        let mut out = String::new();
        let mut last = 0;
        let mut count = 0;

        for caps in self.regex.captures_iter(text) {
            let Some(m) = caps.get(0) else { continue };
            out.push_str(&text[last..m.start()]);
            caps.expand(&self.replacement, &mut out);
            last = m.end();
            count += 1;
        }

        if count == 0 {
            return (Cow::Borrowed(text), 0);
        }
        out.push_str(&text[last..]);
        (Cow::Owned(out), count)
    }
}
