//! Literal (substring) matching, with and without case folding.
//!
//! The spec names `Literal` and `LiteralCI` as two strategy variants; we
//! model them as one type with an `ignore_case` flag rather than two,
//! since every other behavior (span computation, advance-past-match)
//! is identical between them — only the comparison function differs.

use super::byte_to_char_index;

pub struct LiteralMatcher {
    needle: String,
    ignore_case: bool,
}

impl LiteralMatcher {
    pub fn new(pattern: &str, ignore_case: bool) -> Self {
        Self {
            needle: pattern.to_string(),
            ignore_case,
        }
    }

    /// Non-overlapping char spans, earliest-first, per §4.1's "advance
    /// past `end`" rule.
    pub fn find(&self, line: &str) -> Vec<(usize, usize)> {
        if self.ignore_case {
            self.find_case_insensitive(line)
        } else {
            self.find_case_sensitive(line)
        }
    }

    /// Byte-accelerated substring scan (§4.1 rule 2: "byte-level
    /// accelerated substring search").
    fn find_case_sensitive(&self, line: &str) -> Vec<(usize, usize)> {
        if self.needle.is_empty() {
            return Vec::new();
        }
        let finder = memchr::memmem::Finder::new(self.needle.as_bytes());
        let haystack = line.as_bytes();
        let mut spans = Vec::new();
        let mut search_from = 0usize;
        while search_from <= haystack.len() {
            match finder.find(&haystack[search_from..]) {
                Some(rel) => {
                    let byte_start = search_from + rel;
                    let byte_end = byte_start + self.needle.len();
                    spans.push((byte_to_char_index(line, byte_start), byte_to_char_index(line, byte_end)));
                    search_from = byte_end.max(byte_start + 1);
                }
                None => break,
            }
        }
        spans
    }

    /// Unicode-simple-case-folded scan, char by char (documented
    /// simplification: correctness over raw throughput, per §9's note
    /// that SIMD scanning is an optional optimization only for the
    /// case-sensitive path).
    fn find_case_insensitive(&self, line: &str) -> Vec<(usize, usize)> {
        let needle_chars: Vec<char> = self.needle.chars().flat_map(char::to_lowercase).collect();
        if needle_chars.is_empty() {
            return Vec::new();
        }
        let haystack_chars: Vec<char> = line.chars().collect();
        let mut spans = Vec::new();
        let mut i = 0usize;
        while i + needle_chars.len() <= haystack_chars.len() {
            let window_matches = haystack_chars[i..i + needle_chars.len()]
                .iter()
                .flat_map(|c| c.to_lowercase())
                .eq(needle_chars.iter().copied());
            if window_matches {
                let end = i + needle_chars.len();
                spans.push((i, end));
                i = end.max(i + 1);
            } else {
                i += 1;
            }
        }
        spans
    }
}
