//! Regex matching (§4.1 rule 3). `^`/`$` anchor to the logical line
//! (the `regex` crate's default, non-multi-line mode already treats the
//! whole input as one line since newlines are stripped before this
//! point — §4.5 step 4c).

use crate::error::GrepError;
use regex::Regex;

use super::byte_to_char_index;

pub struct RegexMatcher {
    re: Regex,
}

impl RegexMatcher {
    pub fn new(pattern: &str, ignore_case: bool) -> Result<Self, GrepError> {
        if pattern.is_empty() {
            return Err(GrepError::PatternError("pattern must not be empty".into()));
        }
        let mut builder = regex::RegexBuilder::new(pattern);
        builder.case_insensitive(ignore_case);
        let re = builder
            .build()
            .map_err(|e| GrepError::PatternError(format!("{pattern}: {e}")))?;
        Ok(Self { re })
    }

    /// Non-overlapping matches, advancing past zero-width matches by at
    /// least one char per §4.1's "`max(end, start+1)`" rule — `find_iter`
    /// already does this internally, so this is a straight translation
    /// from byte to char spans.
    pub fn find(&self, line: &str) -> Vec<(usize, usize)> {
        self.re
            .find_iter(line)
            .map(|m| (byte_to_char_index(line, m.start()), byte_to_char_index(line, m.end())))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_simple_pattern() {
        let matcher = RegexMatcher::new("h.llo", false).unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(matcher.find("hello world"), vec![(0, 5)]);
    }

    #[test]
    fn rejects_empty_pattern() {
        assert!(RegexMatcher::new("", false).is_err());
    }

    #[test]
    fn rejects_malformed_pattern() {
        assert!(RegexMatcher::new("[a-", false).is_err(), "unterminated class must fail to compile");
    }

    #[test]
    fn anchors_bind_to_the_whole_line() {
        let matcher = RegexMatcher::new("^foo$", false).unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(matcher.find("foo"), vec![(0, 3)]);
        assert!(matcher.find("foobar").is_empty());
    }

    #[test]
    fn case_insensitive_flag_applies() {
        let matcher = RegexMatcher::new("hello", true).unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(matcher.find("HELLO"), vec![(0, 5)]);
    }
}
