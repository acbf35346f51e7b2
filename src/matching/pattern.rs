//! Wildcard pattern matching.
//!
//! Patterns support `*` (any run of characters, including none) and `?`
//! (exactly one character) and are anchored at both ends. `\*`, `\?` and `\\`
//! match the literal character; a backslash before anything else is itself
//! literal. Patterns are translated to [`Regex`] once and cached.

use crate::error::PatternError;
use regex::{Regex, RegexBuilder};
use std::collections::HashMap;

/// Glob matcher with a per-instance cache of compiled patterns.
#[derive(Debug, Default)]
pub struct PatternMatcher {
    cache: HashMap<String, Regex>,
}

impl PatternMatcher {
    /// Create a matcher with an empty cache
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Test whether `value` matches `pattern` in full.
    pub fn matches(&mut self, pattern: &str, value: &str) -> Result<bool, PatternError> {
        if pattern == "*" {
            return Ok(true);
        }
        Ok(self.compiled(pattern)?.is_match(value))
    }

    /// Compile `pattern` into the cache without matching anything.
    pub fn check(&mut self, pattern: &str) -> Result<(), PatternError> {
        if pattern != "*" {
            self.compiled(pattern)?;
        }
        Ok(())
    }

    fn compiled(&mut self, pattern: &str) -> Result<&Regex, PatternError> {
        if !self.cache.contains_key(pattern) {
            let re = compile_glob(pattern)?;
            self.cache.insert(pattern.to_string(), re);
        }
        Ok(&self.cache[pattern])
    }
}

/// One-shot glob match without caching.
pub fn glob_matches(pattern: &str, value: &str) -> Result<bool, PatternError> {
    compile_glob(pattern).map(|re| re.is_match(value))
}

/// Translate a glob into an anchored regex.
pub fn compile_glob(pattern: &str) -> Result<Regex, PatternError> {
    let mut regex_pattern = String::with_capacity(pattern.len() + 8);
    regex_pattern.push_str(r"\A(?s:");

    let mut chars = pattern.chars();
    while let Some(c) = chars.next() {
        match c {
            '*' => regex_pattern.push_str(".*"),
            '?' => regex_pattern.push('.'),
            '\\' => match chars.next() {
                Some(next @ ('*' | '?' | '\\')) => push_literal(&mut regex_pattern, next),
                Some(next) => {
                    push_literal(&mut regex_pattern, '\\');
                    push_literal(&mut regex_pattern, next);
                }
                None => {
                    return Err(PatternError::TrailingEscape {
                        pattern: pattern.to_string(),
                    })
                }
            },
            other => push_literal(&mut regex_pattern, other),
        }
    }
    regex_pattern.push_str(r")\z");

    RegexBuilder::new(&regex_pattern)
        .build()
        .map_err(|e| PatternError::Compile {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })
}

fn push_literal(out: &mut String, c: char) {
    let mut buf = [0u8; 4];
    out.push_str(&regex::escape(c.encode_utf8(&mut buf)));
}
