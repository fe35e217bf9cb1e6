//! Read-only typed accessor over parsed options and positional arguments
//! (component A, SPEC_FULL §3). Constructed once per run from [`crate::cli::Cli`]
//! and handed by value to the engine and formatter; nothing here is
//! mutated after construction.

use crate::error::GrepError;

/// Stdin sentinel argument, POSIX convention.
pub const STDIN_SENTINEL: &str = "-";

#[derive(Debug, Clone)]
pub struct OptionContext {
    pattern: String,
    extra_patterns: Vec<String>,
    files: Vec<String>,

    ignore_case: bool,
    invert_match: bool,
    line_number: bool,
    count_only: bool,
    filename_only: bool,
    suppress_filename: bool,
    force_filename: bool,
    silent: bool,
    extended_regex: bool,
    fixed_strings: bool,
    whole_word: bool,
    recursive: bool,

    include_globs: Vec<String>,
    exclude_globs: Vec<String>,

    max_count: Option<u64>,
    before_context: usize,
    after_context: usize,
}

impl OptionContext {
    /// Validates and builds an `OptionContext`. The only validation done
    /// here is the pattern non-emptiness rule (§4.1, §9 resolved); all
    /// other option-level validation is the CLI parser's job, not the
    /// engine's.
    pub fn new(
        pattern: String,
        extra_patterns: Vec<String>,
        files: Vec<String>,
    ) -> Result<Self, GrepError> {
        if pattern.is_empty() && extra_patterns.is_empty() {
            return Err(GrepError::PatternError("pattern must not be empty".into()));
        }
        Ok(Self {
            pattern,
            extra_patterns,
            files,
            ignore_case: false,
            invert_match: false,
            line_number: false,
            count_only: false,
            filename_only: false,
            suppress_filename: false,
            force_filename: false,
            silent: false,
            extended_regex: false,
            fixed_strings: false,
            whole_word: false,
            recursive: false,
            include_globs: Vec::new(),
            exclude_globs: Vec::new(),
            max_count: None,
            before_context: 0,
            after_context: 0,
        })
    }

    pub fn with_ignore_case(mut self, v: bool) -> Self {
        self.ignore_case = v;
        self
    }
    pub fn with_invert_match(mut self, v: bool) -> Self {
        self.invert_match = v;
        self
    }
    pub fn with_line_number(mut self, v: bool) -> Self {
        self.line_number = v;
        self
    }
    pub fn with_count_only(mut self, v: bool) -> Self {
        self.count_only = v;
        self
    }
    pub fn with_filename_only(mut self, v: bool) -> Self {
        self.filename_only = v;
        self
    }
    pub fn with_suppress_filename(mut self, v: bool) -> Self {
        self.suppress_filename = v;
        self
    }
    pub fn with_force_filename(mut self, v: bool) -> Self {
        self.force_filename = v;
        self
    }
    pub fn with_silent(mut self, v: bool) -> Self {
        self.silent = v;
        self
    }
    pub fn with_extended_regex(mut self, v: bool) -> Self {
        self.extended_regex = v;
        self
    }
    pub fn with_fixed_strings(mut self, v: bool) -> Self {
        self.fixed_strings = v;
        self
    }
    pub fn with_whole_word(mut self, v: bool) -> Self {
        self.whole_word = v;
        self
    }
    pub fn with_recursive(mut self, v: bool) -> Self {
        self.recursive = v;
        self
    }
    pub fn with_include_globs(mut self, v: Vec<String>) -> Self {
        self.include_globs = v;
        self
    }
    pub fn with_exclude_globs(mut self, v: Vec<String>) -> Self {
        self.exclude_globs = v;
        self
    }
    pub fn with_max_count(mut self, v: Option<u64>) -> Self {
        self.max_count = v;
        self
    }

    /// Applies `-A`/`-B`/`-C` per §3: `-C N` sets both sides, then an
    /// explicitly-given `-B`/`-A` overrides its side. Pass `None` for a
    /// side that was not given on the command line.
    pub fn with_context(mut self, before: Option<usize>, after: Option<usize>, context: Option<usize>) -> Self {
        if let Some(c) = context {
            self.before_context = c;
            self.after_context = c;
        }
        if let Some(b) = before {
            self.before_context = b;
        }
        if let Some(a) = after {
            self.after_context = a;
        }
        self
    }

    // --- accessors ---

    pub fn pattern(&self) -> &str {
        &self.pattern
    }
    pub fn extra_patterns(&self) -> &[String] {
        &self.extra_patterns
    }
    pub fn files(&self) -> &[String] {
        &self.files
    }
    pub fn ignore_case(&self) -> bool {
        self.ignore_case
    }
    pub fn invert_match(&self) -> bool {
        self.invert_match
    }
    pub fn line_number(&self) -> bool {
        self.line_number
    }
    pub fn count_only(&self) -> bool {
        self.count_only
    }
    pub fn filename_only(&self) -> bool {
        self.filename_only
    }
    pub fn suppress_filename(&self) -> bool {
        self.suppress_filename
    }
    pub fn force_filename(&self) -> bool {
        self.force_filename
    }
    pub fn silent(&self) -> bool {
        self.silent
    }
    pub fn extended_regex(&self) -> bool {
        self.extended_regex
    }
    pub fn fixed_strings(&self) -> bool {
        self.fixed_strings
    }
    pub fn whole_word(&self) -> bool {
        self.whole_word
    }
    pub fn recursive(&self) -> bool {
        self.recursive
    }
    pub fn include_globs(&self) -> &[String] {
        &self.include_globs
    }
    pub fn exclude_globs(&self) -> &[String] {
        &self.exclude_globs
    }
    pub fn max_count(&self) -> Option<u64> {
        self.max_count
    }
    pub fn before_context(&self) -> usize {
        self.before_context
    }
    pub fn after_context(&self) -> usize {
        self.after_context
    }

    /// True when context structures (§4.5.1) are needed at all.
    pub fn wants_context(&self) -> bool {
        (self.before_context > 0 || self.after_context > 0)
            && !self.count_only
            && !self.filename_only
            && !self.silent
    }

    /// Effective input list: `[STDIN_SENTINEL]` when `files` is empty,
    /// matching §4.2's "yield the sentinel ... or once if empty".
    pub fn effective_files(&self) -> Vec<String> {
        if self.files.is_empty() {
            vec![STDIN_SENTINEL.to_string()]
        } else {
            self.files.clone()
        }
    }

    /// §4.6: filename display is active iff not suppressed AND (more
    /// than one effective file OR filename_only OR recursive). `-r`
    /// always shows filenames (GNU grep behavior) since a directory
    /// argument can expand to any number of files, including exactly
    /// one.
    pub fn filename_display_active(&self) -> bool {
        if self.suppress_filename {
            return false;
        }
        self.force_filename || self.effective_files().len() > 1 || self.filename_only || self.recursive
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_pattern_is_rejected() {
        let result = OptionContext::new(String::new(), Vec::new(), vec!["a.txt".into()]);
        assert!(result.is_err(), "empty pattern must be a PatternError");
    }

    #[test]
    fn effective_files_defaults_to_stdin() {
        let ctx = OptionContext::new("pat".into(), Vec::new(), Vec::new())
            .unwrap_or_else(|e| panic!("build failed: {e}"));
        assert_eq!(ctx.effective_files(), vec![STDIN_SENTINEL.to_string()]);
    }

    #[test]
    fn context_overrides_before_after() {
        let ctx = OptionContext::new("pat".into(), Vec::new(), vec!["a.txt".into()])
            .unwrap_or_else(|e| panic!("build failed: {e}"))
            .with_context(None, None, Some(3));
        assert_eq!(ctx.before_context(), 3);
        assert_eq!(ctx.after_context(), 3);
    }

    #[test]
    fn filename_display_active_for_multiple_files() {
        let ctx = OptionContext::new("pat".into(), Vec::new(), vec!["a.txt".into(), "b.txt".into()])
            .unwrap_or_else(|e| panic!("build failed: {e}"));
        assert!(ctx.filename_display_active());
    }

    #[test]
    fn filename_display_inactive_for_single_file() {
        let ctx = OptionContext::new("pat".into(), Vec::new(), vec!["a.txt".into()])
            .unwrap_or_else(|e| panic!("build failed: {e}"));
        assert!(!ctx.filename_display_active());
    }

    #[test]
    fn suppress_filename_wins_over_force() {
        let ctx = OptionContext::new("pat".into(), Vec::new(), vec!["a.txt".into(), "b.txt".into()])
            .unwrap_or_else(|e| panic!("build failed: {e}"))
            .with_suppress_filename(true);
        assert!(!ctx.filename_display_active());
    }

    #[test]
    fn recursive_activates_filename_display_even_for_one_directory_argument() {
        let ctx = OptionContext::new("pat".into(), Vec::new(), vec!["d".into()])
            .unwrap_or_else(|e| panic!("build failed: {e}"))
            .with_recursive(true);
        assert!(ctx.filename_display_active(), "-r must show filenames even with a single directory argument");
    }

    #[test]
    fn suppress_filename_wins_over_recursive() {
        let ctx = OptionContext::new("pat".into(), Vec::new(), vec!["d".into()])
            .unwrap_or_else(|e| panic!("build failed: {e}"))
            .with_recursive(true)
            .with_suppress_filename(true);
        assert!(!ctx.filename_display_active());
    }
}
