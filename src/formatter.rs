//! Renders a `SearchResult` to stdout in POSIX-compatible form (component
//! G, SPEC_FULL §4.6). Per-file discovery/read errors go to stderr.

use std::io::{self, Write};

use crate::model::{ContextualMatch, SearchResult};
use crate::option_context::OptionContext;

pub struct OutputFormatter;

impl OutputFormatter {
    /// Writes `result` to `out`/`err`, buffering within the call and
    /// flushing once before returning (§4.6's "writes are buffered;
    /// flush before process exit").
    pub fn write(result: &SearchResult, options: &OptionContext, out: &mut impl Write, err: &mut impl Write) -> io::Result<()> {
        let mut out = io::BufWriter::new(out);

        if !options.silent() {
            if options.count_only() {
                Self::write_counts(result, options, &mut out)?;
            } else if options.filename_only() {
                Self::write_filenames_only(result, &mut out)?;
            } else if options.wants_context() {
                Self::write_contextual(result, options, &mut out)?;
            } else {
                Self::write_plain(result, options, &mut out)?;
            }
        }
        out.flush()?;

        for discovery_error in &result.discovery_errors {
            writeln!(err, "grep: {discovery_error}")?;
        }
        for file_result in &result.file_results {
            if let Some(message) = &file_result.error {
                writeln!(err, "grep: {}: {message}", file_result.file_name)?;
            }
        }
        err.flush()?;
        Ok(())
    }

    fn write_counts(result: &SearchResult, options: &OptionContext, out: &mut impl Write) -> io::Result<()> {
        let show_name = options.filename_display_active();
        for fr in &result.file_results {
            if fr.error.is_some() {
                continue;
            }
            if show_name {
                writeln!(out, "{}:{}", fr.file_name, fr.total_matches)?;
            } else {
                writeln!(out, "{}", fr.total_matches)?;
            }
        }
        Ok(())
    }

    fn write_filenames_only(result: &SearchResult, out: &mut impl Write) -> io::Result<()> {
        for fr in &result.file_results {
            if fr.total_matches > 0 {
                writeln!(out, "{}", fr.file_name)?;
            }
        }
        Ok(())
    }

    fn write_plain(result: &SearchResult, options: &OptionContext, out: &mut impl Write) -> io::Result<()> {
        let show_name = options.filename_display_active();
        for fr in &result.file_results {
            if fr.is_binary {
                if fr.total_matches > 0 {
                    writeln!(out, "binary file {} matches", fr.file_name)?;
                }
                continue;
            }
            for m in &fr.matches {
                Self::write_line(out, &fr.file_name, show_name, options.line_number(), m.line_number, &m.line_text, true)?;
            }
        }
        Ok(())
    }

    /// Context mode (§4.5.1/§4.6): a `--` separator marks a gap between
    /// non-adjacent match blocks, within a file or across files. Two
    /// blocks are adjacent when the second's first displayed line
    /// immediately follows the first's last displayed line within the
    /// same file; a file change is always a gap.
    fn write_contextual(result: &SearchResult, options: &OptionContext, out: &mut impl Write) -> io::Result<()> {
        let show_name = options.filename_display_active();
        let mut last: Option<(String, u64)> = None;

        for fr in &result.file_results {
            if fr.is_binary {
                if fr.total_matches > 0 {
                    writeln!(out, "binary file {} matches", fr.file_name)?;
                }
                continue;
            }
            for cm in &fr.contextual_matches {
                let first_line = cm.before.first().map(|l| l.line_number).unwrap_or(cm.matched.line_number);
                let last_line = cm.after.last().map(|l| l.line_number).unwrap_or(cm.matched.line_number);
                let adjacent = matches!(&last, Some((name, n)) if name == &fr.file_name && first_line <= n + 1);
                if last.is_some() && !adjacent {
                    writeln!(out, "--")?;
                }
                Self::write_contextual_match(out, &fr.file_name, show_name, options.line_number(), cm)?;
                last = Some((fr.file_name.clone(), last_line));
            }
        }
        Ok(())
    }

    fn write_contextual_match(out: &mut impl Write, file_name: &str, show_name: bool, show_line_number: bool, cm: &ContextualMatch) -> io::Result<()> {
        for before in &cm.before {
            Self::write_line(out, file_name, show_name, show_line_number, before.line_number, &before.text, false)?;
        }
        Self::write_line(out, file_name, show_name, show_line_number, cm.matched.line_number, &cm.matched.line_text, true)?;
        for after in &cm.after {
            Self::write_line(out, file_name, show_name, show_line_number, after.line_number, &after.text, false)?;
        }
        Ok(())
    }

    #[allow(clippy::too_many_arguments)]
    fn write_line(
        out: &mut impl Write,
        file_name: &str,
        show_name: bool,
        show_line_number: bool,
        line_number: u64,
        text: &str,
        is_match: bool,
    ) -> io::Result<()> {
        let sep = if is_match { ':' } else { '-' };
        if show_name {
            write!(out, "{file_name}{sep}")?;
        }
        if show_line_number {
            write!(out, "{line_number}{sep}")?;
        }
        writeln!(out, "{text}")
    }
}
