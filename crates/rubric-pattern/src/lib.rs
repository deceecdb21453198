//! Wildcard and regular expression patterns for text answers.
//!
//! A wildcard is literal text where `*` stands for one or more of any
//! character and `\*` for a literal star. It compiles to a regex anchored at
//! both ends, so the whole candidate has to match.
//!
//! # Example
//!
//! ```
//! use rubric_pattern::Pattern;
//!
//! let pattern = Pattern::wildcard("test*").unwrap();
//! assert!(pattern.is_match("  TEST anything ", true));
//! assert!(!pattern.is_match("test", true));
//! assert!(!pattern.is_match("xtest", true));
//! ```

use regex::{Regex, RegexBuilder};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PatternError {
    #[error("invalid pattern '{pattern}': {source}")]
    Invalid {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Translates a wildcard into an anchored regex.
///
/// Every `.` is escaped first; a `*` not immediately preceded by a backslash
/// becomes `.+`. Other characters pass through unchanged, inside a group
/// so that alternation cannot escape the anchors.
pub fn wildcard_to_regex(wildcard: &str) -> String {
    let escaped = wildcard.replace('.', r"\.");

    let mut regex_str = String::with_capacity(escaped.len() + 8);
    regex_str.push_str("^(?:");
    let mut previous = None;
    for c in escaped.chars() {
        if c == '*' && previous != Some('\\') {
            regex_str.push_str(".+");
        } else {
            regex_str.push(c);
        }
        previous = Some(c);
    }
    regex_str.push_str(")$");

    regex_str
}

/// A pattern compiled up front in both case modes.
#[derive(Debug, Clone)]
pub struct Pattern {
    source: String,
    sensitive: Regex,
    insensitive: Regex,
}

impl Pattern {
    /// Compiles a wildcard (see [`wildcard_to_regex`]).
    pub fn wildcard(wildcard: &str) -> Result<Self, PatternError> {
        Self::compile(wildcard_to_regex(wildcard))
    }

    /// Compiles a user-supplied regex. It is anchored at the start of the
    /// candidate only; add `$` to anchor the end.
    pub fn regex(regex: &str) -> Result<Self, PatternError> {
        Self::compile(format!("^(?:{})", regex))
    }

    fn compile(source: String) -> Result<Self, PatternError> {
        let build = |case_insensitive: bool| {
            RegexBuilder::new(&source)
                .case_insensitive(case_insensitive)
                .build()
                .map_err(|e| PatternError::Invalid {
                    pattern: source.clone(),
                    source: e,
                })
        };
        let sensitive = build(false)?;
        let insensitive = build(true)?;
        Ok(Self {
            source,
            sensitive,
            insensitive,
        })
    }

    /// The regex source this pattern was compiled from.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Matches the whitespace-trimmed candidate.
    pub fn is_match(&self, candidate: &str, ignore_case: bool) -> bool {
        let regex = if ignore_case {
            &self.insensitive
        } else {
            &self.sensitive
        };
        regex.is_match(candidate.trim())
    }
}
