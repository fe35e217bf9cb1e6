//! Orchestration glue (component H, SPEC_FULL §4.7): wires
//! `Cli -> OptionContext -> ParallelEngine -> OutputFormatter` and maps
//! the outcome to a process exit code. Kept thin, as the rest of the
//! pipeline carries the actual behavior.

use std::io;

use clap::Parser;

use crate::cancel::CancelToken;
use crate::cli::Cli;
use crate::engine::ParallelEngine;
use crate::formatter::OutputFormatter;
use crate::model::SearchResult;
use crate::option_context::OptionContext;

pub struct Application;

impl Application {
    /// Parses arguments from the process environment and runs the
    /// search to completion, returning the process exit code.
    pub fn run() -> i32 {
        let cli = Cli::parse();
        Self::run_with_cli(cli)
    }

    fn run_with_cli(cli: Cli) -> i32 {
        let options = match OptionContext::try_from(cli) {
            Ok(options) => options,
            Err(e) => {
                eprintln!("{}", e.stderr_line());
                return 2;
            }
        };

        let cancel = CancelToken::new();
        let result = match ParallelEngine::search(&options, &cancel) {
            Ok(result) => result,
            Err(e) => {
                log::error!("{e}");
                eprintln!("{}", e.stderr_line());
                return 2;
            }
        };

        let stdout = io::stdout();
        let stderr = io::stderr();
        let mut out = stdout.lock();
        let mut err = stderr.lock();
        if let Err(io_err) = OutputFormatter::write(&result, &options, &mut out, &mut err) {
            log::error!("failed writing output: {io_err}");
            return 2;
        }

        Self::exit_code(&result)
    }

    /// §4.7: errors dominate matches; otherwise 0 for at least one
    /// match, 1 for none.
    fn exit_code(result: &SearchResult) -> i32 {
        let has_errors = !result.discovery_errors.is_empty() || result.file_results.iter().any(|fr| fr.error.is_some());
        if has_errors {
            2
        } else if result.total_matches > 0 {
            0
        } else {
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FileResult;

    #[test]
    fn exit_code_zero_when_matches_found() {
        let mut fr = FileResult::new("a.txt");
        fr.total_matches = 1;
        let result = SearchResult {
            file_results: vec![fr],
            total_matches: 1,
            ..SearchResult::default()
        };
        assert_eq!(Application::exit_code(&result), 0);
    }

    #[test]
    fn exit_code_one_when_no_matches_and_no_errors() {
        let result = SearchResult::default();
        assert_eq!(Application::exit_code(&result), 1);
    }

    #[test]
    fn exit_code_two_when_errors_present_even_with_matches() {
        let mut fr = FileResult::new("a.txt");
        fr.total_matches = 1;
        let errored = FileResult::with_error("b.txt", "permission denied");
        let result = SearchResult {
            file_results: vec![fr, errored],
            total_matches: 1,
            ..SearchResult::default()
        };
        assert_eq!(Application::exit_code(&result), 2);
    }

    #[test]
    fn exit_code_two_for_discovery_errors_alone() {
        let result = SearchResult {
            discovery_errors: vec!["d: is a directory".into()],
            ..SearchResult::default()
        };
        assert_eq!(Application::exit_code(&result), 2);
    }
}
