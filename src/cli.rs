//! Command-line argument parsing, kept as a thin adapter into
//! `OptionContext` — parsing itself is out of scope (§1); this module's
//! only contract is the `TryFrom<Cli> for OptionContext` conversion.

use clap::Parser;

use crate::error::GrepError;
use crate::option_context::OptionContext;

/// A POSIX-compatible `grep` with a parallel, worker-pool search engine.
#[derive(Debug, Parser)]
#[command(name = "grep", version, about)]
pub struct Cli {
    /// Pattern to search for. Optional when one or more `-e` is given.
    pub pattern: Option<String>,

    /// Files to search; omitted or `-` reads standard input.
    pub files: Vec<String>,

    #[arg(short = 'e', long = "pattern", value_name = "PATTERN")]
    pub extra_patterns: Vec<String>,

    #[arg(short = 'i', long = "ignore-case")]
    pub ignore_case: bool,

    #[arg(short = 'v', long = "invert-match")]
    pub invert_match: bool,

    #[arg(short = 'n', long = "line-number")]
    pub line_number: bool,

    #[arg(short = 'c', long = "count")]
    pub count: bool,

    #[arg(short = 'l', long = "files-with-matches")]
    pub files_with_matches: bool,

    #[arg(short = 'H', long = "with-filename")]
    pub with_filename: bool,

    #[arg(short = 'h', long = "no-filename")]
    pub no_filename: bool,

    #[arg(short = 'q', long = "quiet", visible_alias = "silent")]
    pub quiet: bool,

    #[arg(short = 'E', long = "extended-regexp")]
    pub extended_regexp: bool,

    #[arg(short = 'F', long = "fixed-strings")]
    pub fixed_strings: bool,

    #[arg(short = 'w', long = "word-regexp")]
    pub word_regexp: bool,

    #[arg(short = 'r', long = "recursive")]
    pub recursive: bool,

    #[arg(short = 'm', long = "max-count", value_name = "NUM")]
    pub max_count: Option<u64>,

    #[arg(short = 'A', long = "after-context", value_name = "NUM")]
    pub after_context: Option<usize>,

    #[arg(short = 'B', long = "before-context", value_name = "NUM")]
    pub before_context: Option<usize>,

    #[arg(short = 'C', long = "context", value_name = "NUM")]
    pub context: Option<usize>,

    #[arg(long = "include", value_name = "GLOB")]
    pub include: Vec<String>,

    #[arg(long = "exclude", value_name = "GLOB")]
    pub exclude: Vec<String>,
}

impl TryFrom<Cli> for OptionContext {
    type Error = GrepError;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        let pattern = cli.pattern.unwrap_or_default();
        let ctx = OptionContext::new(pattern, cli.extra_patterns, cli.files)?
            .with_ignore_case(cli.ignore_case)
            .with_invert_match(cli.invert_match)
            .with_line_number(cli.line_number)
            .with_count_only(cli.count)
            .with_filename_only(cli.files_with_matches)
            .with_suppress_filename(cli.no_filename)
            .with_force_filename(cli.with_filename)
            .with_silent(cli.quiet)
            .with_extended_regex(cli.extended_regexp)
            .with_fixed_strings(cli.fixed_strings)
            .with_whole_word(cli.word_regexp)
            .with_recursive(cli.recursive)
            .with_include_globs(cli.include)
            .with_exclude_globs(cli.exclude)
            .with_max_count(cli.max_count)
            .with_context(cli.before_context, cli.after_context, cli.context);
        Ok(ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_basic_flags() {
        let cli = Cli {
            pattern: Some("foo".into()),
            files: vec!["a.txt".into()],
            extra_patterns: Vec::new(),
            ignore_case: true,
            invert_match: false,
            line_number: true,
            count: false,
            files_with_matches: false,
            with_filename: false,
            no_filename: false,
            quiet: false,
            extended_regexp: false,
            fixed_strings: false,
            word_regexp: false,
            recursive: false,
            max_count: None,
            after_context: None,
            before_context: None,
            context: None,
            include: Vec::new(),
            exclude: Vec::new(),
        };
        let ctx = OptionContext::try_from(cli).unwrap_or_else(|e| panic!("{e}"));
        assert!(ctx.ignore_case());
        assert!(ctx.line_number());
        assert_eq!(ctx.pattern(), "foo");
    }

    #[test]
    fn rejects_empty_pattern_with_no_extra_patterns() {
        let cli = Cli {
            pattern: None,
            files: vec!["a.txt".into()],
            extra_patterns: Vec::new(),
            ignore_case: false,
            invert_match: false,
            line_number: false,
            count: false,
            files_with_matches: false,
            with_filename: false,
            no_filename: false,
            quiet: false,
            extended_regexp: false,
            fixed_strings: false,
            word_regexp: false,
            recursive: false,
            max_count: None,
            after_context: None,
            before_context: None,
            context: None,
            include: Vec::new(),
            exclude: Vec::new(),
        };
        assert!(OptionContext::try_from(cli).is_err());
    }
}
