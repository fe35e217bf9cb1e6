//! The scheduler (component F, SPEC_FULL §4.5): expands inputs, spawns
//! a bounded worker pool over OS threads, and aggregates per-file
//! results back into path-production order regardless of completion
//! order — the teacher's `ignore::WalkParallel` gives no such ordering
//! guarantee, so this reimplements dispatch with a
//! `std::sync::mpsc::sync_channel` and a position-indexed slot array
//! instead of delegating to `ignore`'s own parallel walker.

mod context_ring;
mod scan;

use std::sync::Arc;
use std::sync::mpsc;
use std::thread;
use std::time::Instant;

use crate::cancel::CancelToken;
use crate::discovery::{DiscoveredPath, FileDiscovery};
use crate::error::GrepError;
use crate::model::{FileResult, SearchResult};
use crate::option_context::OptionContext;
use crate::pool::ResultPool;
use crate::strategy::MatchStrategy;
use crate::tuner::PerformanceTuner;

pub struct ParallelEngine;

impl ParallelEngine {
    /// Entry point (§4.5). Aborts before any file is touched on a
    /// `PatternError` (§4.5.3); every other failure is recovered at the
    /// per-file boundary and folded into the returned `SearchResult`.
    pub fn search(options: &OptionContext, cancel: &CancelToken) -> Result<SearchResult, GrepError> {
        let started = Instant::now();
        let strategy = Arc::new(MatchStrategy::build(options)?);

        let discovery = FileDiscovery::expand(options, cancel);
        let paths = discovery.paths;
        let discovery_errors: Vec<String> = discovery
            .errors
            .into_iter()
            .map(|e| format!("{}: {}", e.argument, e.message))
            .collect();

        if paths.is_empty() {
            return Ok(SearchResult {
                discovery_errors,
                ..SearchResult::default()
            }
            .finalize(started.elapsed()));
        }

        let workers = PerformanceTuner::optimal_parallelism(paths.len()).min(paths.len());
        let file_results = Self::dispatch(paths, workers, strategy, options, cancel);

        Ok(SearchResult {
            file_results,
            discovery_errors,
            ..SearchResult::default()
        }
        .finalize(started.elapsed()))
    }

    /// Bounded channel of capacity `2 * workers` (§4.5 step 3) carrying
    /// `(seq_index, path)`; workers write into a dense slot array so the
    /// aggregator can restore path order irrespective of which worker
    /// finished first.
    fn dispatch(
        paths: Vec<DiscoveredPath>,
        workers: usize,
        strategy: Arc<MatchStrategy>,
        options: &OptionContext,
        cancel: &CancelToken,
    ) -> Vec<FileResult> {
        let total = paths.len();
        let channel_capacity = (2 * workers).max(1);
        let (path_tx, path_rx) = mpsc::sync_channel::<(usize, DiscoveredPath)>(channel_capacity);
        let (result_tx, result_rx) = mpsc::channel::<(usize, FileResult)>();

        let path_rx = Arc::new(std::sync::Mutex::new(path_rx));
        let options_owned = options.clone();
        let pool = ResultPool::new();

        thread::scope(|scope| {
            for _ in 0..workers {
                let path_rx = Arc::clone(&path_rx);
                let result_tx = result_tx.clone();
                let strategy = Arc::clone(&strategy);
                let options = &options_owned;
                let pool = &pool;
                let cancel = cancel.clone();
                scope.spawn(move || {
                    loop {
                        if cancel.is_cancelled() {
                            break;
                        }
                        let next = {
                            let rx = path_rx.lock().unwrap_or_else(|e| e.into_inner());
                            rx.recv()
                        };
                        let Ok((idx, path)) = next else { break };
                        let file_result = scan::scan_one(idx, &path, &strategy, options, pool, &cancel);
                        if result_tx.send((idx, file_result)).is_err() {
                            break;
                        }
                    }
                });
            }
            drop(result_tx);

            for (idx, path) in paths.into_iter().enumerate() {
                if cancel.is_cancelled() {
                    break;
                }
                if path_tx.send((idx, path)).is_err() {
                    break;
                }
            }
            drop(path_tx);

            let mut slots: Vec<Option<FileResult>> = (0..total).map(|_| None).collect();
            for (idx, file_result) in result_rx {
                slots[idx] = Some(file_result);
            }
            slots.into_iter().flatten().collect()
        })
    }
}
