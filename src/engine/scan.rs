//! Per-file scan loop (§4.5 steps 4a-4f): open, binary short-circuit,
//! line-by-line matching, context tracking, max-count early exit.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::cancel::CancelToken;
use crate::config;
use crate::discovery::DiscoveredPath;
use crate::model::{FileResult, Match};
use crate::option_context::OptionContext;
use crate::pool::ResultPool;
use crate::strategy::MatchStrategy;
use crate::tuner::PerformanceTuner;

use super::context_ring::ContextRing;

/// Display name used for the stdin sentinel, matching GNU grep.
pub const STDIN_DISPLAY_NAME: &str = "(standard input)";

pub fn scan_one(
    file_id: usize,
    discovered: &DiscoveredPath,
    strategy: &MatchStrategy,
    options: &OptionContext,
    pool: &ResultPool,
    cancel: &CancelToken,
) -> FileResult {
    match discovered {
        DiscoveredPath::Stdin => scan_reader(
            file_id,
            STDIN_DISPLAY_NAME,
            Box::new(BufReader::new(io::stdin().lock())),
            false,
            strategy,
            options,
            pool,
            cancel,
        ),
        DiscoveredPath::File(path) => scan_path(file_id, path, strategy, options, pool, cancel),
    }
}

fn scan_path(file_id: usize, path: &Path, strategy: &MatchStrategy, options: &OptionContext, pool: &ResultPool, cancel: &CancelToken) -> FileResult {
    let file_name = path.display().to_string();
    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) => {
            log::warn!("failed to open {}: {e}", path.display());
            return FileResult::with_error(file_name, e.to_string());
        }
    };
    let size_hint = file.metadata().map(|m| m.len()).unwrap_or(0);
    let buffer_size = PerformanceTuner::optimal_buffer_size(size_hint);
    let reader: Box<dyn BufRead> = Box::new(BufReader::with_capacity(buffer_size, file));
    scan_reader(file_id, &file_name, reader, true, strategy, options, pool, cancel)
}

fn scan_reader(
    file_id: usize,
    file_name: &str,
    mut reader: Box<dyn BufRead>,
    binary_check: bool,
    strategy: &MatchStrategy,
    options: &OptionContext,
    pool: &ResultPool,
    cancel: &CancelToken,
) -> FileResult {
    let is_binary = binary_check && peek_is_binary(&mut reader);

    let mut result = FileResult::new(file_name);
    result.is_binary = is_binary;

    let wants_context = options.wants_context();
    let mut ring = ContextRing::new(options.before_context(), options.after_context());
    let mut binary_already_reported = false;
    let mut buffer = pool.rent();

    let mut line_number: u64 = 0;
    let mut raw = Vec::new();
    loop {
        if cancel.is_cancelled() {
            break;
        }
        raw.clear();
        let read = match reader.read_until(b'\n', &mut raw) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) => {
                log::warn!("{file_name}: read error: {e}");
                return FileResult::with_error(file_name, e.to_string());
            }
        };
        let _ = read;
        line_number += 1;
        let line = strip_terminator(&raw);
        let text = String::from_utf8_lossy(line);

        let spans = strategy.find_matches(&text, file_id, line_number);
        let effective_match = if options.invert_match() { spans.is_empty() } else { !spans.is_empty() };

        if !effective_match {
            if wants_context {
                ring.record_non_match(file_id, line_number, &text, &mut result.contextual_matches);
            }
            continue;
        }

        if is_binary {
            if !binary_already_reported {
                result.total_matches = 1;
                binary_already_reported = true;
            }
            break;
        }

        let matches_for_line = if options.invert_match() {
            vec![Match {
                file_id,
                line_number,
                line_text: text.to_string(),
                match_span: (0, 0),
                matched_text: String::new(),
            }]
        } else {
            spans
        };

        for m in matches_for_line {
            if let Some(max) = options.max_count() {
                if result.total_matches as u64 >= max {
                    break;
                }
            }
            result.total_matches += 1;
            if wants_context {
                ring.record_match(m.clone(), &mut result.contextual_matches);
            } else {
                buffer.add_match(m);
            }
        }

        if let Some(max) = options.max_count() {
            if result.total_matches as u64 >= max {
                break;
            }
        }
    }

    result.matches = buffer.finish();
    result
}

/// Peeks up to `BINARY_PEEK_BYTES` into the stream without losing those
/// bytes for the subsequent line scan: `BufReader::fill_buf` exposes the
/// internal buffer without consuming it (§4.5 step 4b).
fn peek_is_binary(reader: &mut Box<dyn BufRead>) -> bool {
    match reader.fill_buf() {
        Ok(buf) => {
            let limit = buf.len().min(config::BINARY_PEEK_BYTES);
            buf[..limit].contains(&0)
        }
        Err(_) => false,
    }
}

fn strip_terminator(raw: &[u8]) -> &[u8] {
    let mut end = raw.len();
    if end > 0 && raw[end - 1] == b'\n' {
        end -= 1;
        if end > 0 && raw[end - 1] == b'\r' {
            end -= 1;
        }
    }
    &raw[..end]
}
