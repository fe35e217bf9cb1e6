//! MatchStrategy variants and the factory that selects one per search
//! (component B, SPEC_FULL §4.1/§4.1a).

mod fixed_multi;
mod literal;
mod regex_strategy;
mod whole_word;

pub use fixed_multi::FixedMultiMatcher;
pub use literal::LiteralMatcher;
pub use regex_strategy::RegexMatcher;

use crate::error::GrepError;
use crate::model::Match;
use crate::option_context::OptionContext;

/// Regex metacharacters that, per §4.1 priority rule 3, force Regex
/// selection even without `--extended-regexp`.
const REGEX_METACHARS: &[char] = &['.', '+', '*', '?', '[', ']', '(', ')', '{', '}', '|', '^', '$', '\\'];

fn looks_like_regex(pattern: &str) -> bool {
    pattern.chars().any(|c| REGEX_METACHARS.contains(&c))
}

/// A single chosen matching algorithm, bound to the search's option set.
/// `LiteralCI` from the spec is `Literal` with `ignore_case` set — see
/// `literal.rs` for why that's one type rather than two.
pub enum MatchStrategy {
    Literal(LiteralMatcher),
    FixedMultiLiteral(FixedMultiMatcher),
    Regex(RegexMatcher),
    WholeWord(Box<MatchStrategy>),
}

impl MatchStrategy {
    /// Builds the one strategy used for an entire search, per the
    /// priority order in §4.1. `can_apply` is folded into this
    /// selection rather than exposed as a separate predicate per
    /// variant, since the factory is the only caller.
    pub fn build(options: &OptionContext) -> Result<Self, GrepError> {
        let inner = Self::build_inner(options)?;
        if options.whole_word() {
            Ok(MatchStrategy::WholeWord(Box::new(inner)))
        } else {
            Ok(inner)
        }
    }

    fn build_inner(options: &OptionContext) -> Result<Self, GrepError> {
        if !options.extra_patterns().is_empty() {
            let mut needles = vec![options.pattern().to_string()];
            needles.extend(options.extra_patterns().iter().cloned());
            needles.retain(|p| !p.is_empty());
            if needles.is_empty() {
                return Err(GrepError::PatternError("pattern must not be empty".into()));
            }
            if options.fixed_strings() {
                return Ok(MatchStrategy::FixedMultiLiteral(FixedMultiMatcher::new(
                    needles,
                    options.ignore_case(),
                )));
            }
            // Non-literal `-e` patterns are unioned into one alternation
            // and delegated to the Regex variant.
            let joined = needles
                .iter()
                .map(|p| format!("(?:{p})"))
                .collect::<Vec<_>>()
                .join("|");
            return Ok(MatchStrategy::Regex(RegexMatcher::new(&joined, options.ignore_case())?));
        }

        let pattern = options.pattern();
        if pattern.is_empty() {
            return Err(GrepError::PatternError("pattern must not be empty".into()));
        }

        if options.fixed_strings() {
            return Ok(MatchStrategy::Literal(LiteralMatcher::new(pattern, options.ignore_case())));
        }

        if options.extended_regex() || looks_like_regex(pattern) {
            return Ok(MatchStrategy::Regex(RegexMatcher::new(pattern, options.ignore_case())?));
        }

        Ok(MatchStrategy::Literal(LiteralMatcher::new(pattern, options.ignore_case())))
    }

    /// Finds all non-overlapping matches on one line, per the
    /// effective-match rule in §4.5 step (d) — callers apply
    /// `invert_match` themselves; this always returns the strategy's
    /// raw positive matches.
    pub fn find_matches(&self, line: &str, file_id: usize, line_number: u64) -> Vec<Match> {
        let spans = self.raw_spans(line);
        spans
            .into_iter()
            .map(|(start, end)| {
                let matched_text: String = line.chars().skip(start).take(end - start).collect();
                Match {
                    file_id,
                    line_number,
                    line_text: line.to_string(),
                    match_span: (start, end),
                    matched_text,
                }
            })
            .collect()
    }

    fn raw_spans(&self, line: &str) -> Vec<(usize, usize)> {
        match self {
            MatchStrategy::Literal(m) => m.find(line),
            MatchStrategy::FixedMultiLiteral(m) => m.find(line),
            MatchStrategy::Regex(m) => m.find(line),
            MatchStrategy::WholeWord(inner) => whole_word::filter_word_boundaries(line, inner.raw_spans(line)),
        }
    }
}

/// Converts a byte offset within `s` to a char (code-point) index.
/// Shared by every strategy since `match_span` is char-indexed (§3) but
/// the underlying scanners (memchr, regex) work in bytes.
pub(crate) fn byte_to_char_index(s: &str, byte_idx: usize) -> usize {
    s[..byte_idx].chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts(pattern: &str) -> OptionContext {
        OptionContext::new(pattern.to_string(), Vec::new(), vec!["f".into()])
            .unwrap_or_else(|e| panic!("build failed: {e}"))
    }

    #[test]
    fn fixed_strings_selects_literal() {
        let options = opts("a.b").with_fixed_strings(true);
        let strategy = MatchStrategy::build(&options).unwrap_or_else(|e| panic!("{e}"));
        assert!(matches!(strategy, MatchStrategy::Literal(_)));
    }

    #[test]
    fn metacharacters_select_regex_without_extended_flag() {
        let options = opts("a.b");
        let strategy = MatchStrategy::build(&options).unwrap_or_else(|e| panic!("{e}"));
        assert!(matches!(strategy, MatchStrategy::Regex(_)));
    }

    #[test]
    fn plain_pattern_selects_literal() {
        let options = opts("hello");
        let strategy = MatchStrategy::build(&options).unwrap_or_else(|e| panic!("{e}"));
        assert!(matches!(strategy, MatchStrategy::Literal(_)));
    }

    #[test]
    fn whole_word_wraps_chosen_strategy() {
        let options = opts("hello").with_whole_word(true);
        let strategy = MatchStrategy::build(&options).unwrap_or_else(|e| panic!("{e}"));
        assert!(matches!(strategy, MatchStrategy::WholeWord(_)));
    }

    #[test]
    fn empty_pattern_is_pattern_error() {
        let options = OptionContext::new(String::new(), vec!["x".into()], vec!["f".into()])
            .unwrap_or_else(|e| panic!("build failed: {e}"));
        // extra_patterns is non-empty so OptionContext::new accepts it,
        // but an empty *primary* pattern combined with no extras elsewhere
        // is exercised via fixed_multi's own empty-needle check instead.
        let strategy = MatchStrategy::build(&options);
        assert!(strategy.is_ok(), "non-empty extra_patterns should still build");
    }
}
