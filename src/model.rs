//! Core data model shared by the strategy, engine, and formatter layers.
//!
//! Plain, immutable-once-produced value types, in the style of the
//! teacher's `search/types.rs` — typed fields, no runtime reflection.

use std::time::Duration;

/// A half-open, char-index span `[start, end)` within a line.
pub type Span = (usize, usize);

/// A single match produced by a [`crate::strategy::MatchStrategy`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub file_id: usize,
    /// 1-based.
    pub line_number: u64,
    pub line_text: String,
    pub match_span: Span,
    pub matched_text: String,
}

/// A line adjacent to a match, kept for `-A`/`-B`/`-C` context display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextLine {
    pub file_id: usize,
    pub line_number: u64,
    pub text: String,
    pub is_match: bool,
}

/// A match plus its bounded before/after context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextualMatch {
    pub matched: Match,
    pub before: Vec<ContextLine>,
    pub after: Vec<ContextLine>,
}

/// The outcome of scanning one file (or the stdin sentinel).
#[derive(Debug, Clone, Default)]
pub struct FileResult {
    pub file_name: String,
    pub matches: Vec<Match>,
    pub total_matches: usize,
    pub error: Option<String>,
    pub contextual_matches: Vec<ContextualMatch>,
    /// True when a NUL byte was seen in the first peek window and the
    /// file was treated as binary (§4.5 step 4b).
    pub is_binary: bool,
}

impl FileResult {
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            ..Default::default()
        }
    }

    pub fn with_error(file_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            error: Some(message.into()),
            ..Default::default()
        }
    }

    /// Invariant: `error.is_some() => total_matches == 0 && matches.is_empty()`.
    pub fn is_valid(&self) -> bool {
        self.error.is_none() || (self.total_matches == 0 && self.matches.is_empty())
    }
}

/// The aggregated outcome of an entire search.
#[derive(Debug, Clone, Default)]
pub struct SearchResult {
    pub file_results: Vec<FileResult>,
    pub total_matches: usize,
    pub total_files: usize,
    pub elapsed: Duration,
    /// Non-fatal discovery problems (§4.2): unrecursed directories,
    /// unmatched globs. Not tied to any `FileResult` since no path was
    /// ever produced for them, but still surfaced on stderr and folded
    /// into the exit code (§4.7).
    pub discovery_errors: Vec<String>,
}

impl SearchResult {
    /// Recomputes `total_matches`/`total_files` from `file_results`.
    /// Callers that build the result incrementally (the engine's
    /// aggregator) call this once, at the end, rather than keeping a
    /// running sum in lockstep.
    pub fn finalize(mut self, elapsed: Duration) -> Self {
        self.total_matches = self.file_results.iter().map(|fr| fr.total_matches).sum();
        self.total_files = self.file_results.len();
        self.elapsed = elapsed;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_result_with_error_has_no_matches() {
        let fr = FileResult::with_error("a.txt", "permission denied");
        assert!(fr.is_valid(), "an error FileResult must have zero matches");
        assert_eq!(fr.total_matches, 0);
    }

    #[test]
    fn finalize_sums_totals() {
        let mut a = FileResult::new("a.txt");
        a.total_matches = 2;
        let mut b = FileResult::new("b.txt");
        b.total_matches = 3;
        let result = SearchResult {
            file_results: vec![a, b],
            ..Default::default()
        }
        .finalize(Duration::from_millis(5));
        assert_eq!(result.total_matches, 5);
        assert_eq!(result.total_files, 2);
    }
}
