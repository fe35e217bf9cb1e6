//! Expands file arguments into a deterministic, ordered sequence of
//! paths to scan (component C, SPEC_FULL §4.2).
//!
//! Unlike the teacher's `ignore::WalkBuilder::build_parallel()` (which
//! has no ordering guarantee), discovery here runs single-threaded and
//! sorts explicitly, so `ParallelEngine` can hand out `(seq_index, path)`
//! pairs whose completion order the aggregator can later restore.

use std::path::{Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;

use crate::cancel::CancelToken;
use crate::option_context::{OptionContext, STDIN_SENTINEL};

/// One discovered input: either a real path or the stdin sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiscoveredPath {
    File(PathBuf),
    Stdin,
}

/// A non-fatal problem encountered while discovering inputs (e.g. a
/// non-recursive directory argument, an unmatched glob). Surfaced to the
/// formatter as a stderr line; contributes to the final exit code per
/// §4.7.
#[derive(Debug, Clone)]
pub struct DiscoveryError {
    pub argument: String,
    pub message: String,
}

#[derive(Debug, Default)]
pub struct DiscoveryResult {
    pub paths: Vec<DiscoveredPath>,
    pub errors: Vec<DiscoveryError>,
}

/// Builds the include/exclude glob sets once per search, then exposes
/// the pure `should_include` predicate (§4.2) for reuse by discovery and
/// by tests.
pub struct IncludeExcludeFilter {
    include: Option<GlobSet>,
    exclude: Option<GlobSet>,
}

impl IncludeExcludeFilter {
    pub fn build(include_globs: &[String], exclude_globs: &[String]) -> Self {
        let to_set = |patterns: &[String]| -> Option<GlobSet> {
            if patterns.is_empty() {
                return None;
            }
            let mut builder = GlobSetBuilder::new();
            for pattern in patterns {
                if let Ok(glob) = Glob::new(pattern) {
                    builder.add(glob);
                }
            }
            builder.build().ok()
        };
        Self {
            include: to_set(include_globs),
            exclude: to_set(exclude_globs),
        }
    }

    /// `should_include(path) => bool` per §4.2: filters by filename
    /// only, not the full path.
    pub fn should_include(&self, path: &Path) -> bool {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            return true;
        };
        let included = self.include.as_ref().is_none_or(|set| set.is_match(name));
        let excluded = self.exclude.as_ref().is_some_and(|set| set.is_match(name));
        included && !excluded
    }
}

pub struct FileDiscovery;

impl FileDiscovery {
    /// Expands `options.effective_files()` into an ordered list of
    /// [`DiscoveredPath`]s, per the rules in §4.2. Recursion is ignored
    /// when `-` is the only positional input (§9 resolved).
    pub fn expand(options: &OptionContext, cancel: &CancelToken) -> DiscoveryResult {
        let files = options.effective_files();
        let filter = IncludeExcludeFilter::build(options.include_globs(), options.exclude_globs());
        let mut result = DiscoveryResult::default();

        if files.len() == 1 && files[0] == STDIN_SENTINEL {
            result.paths.push(DiscoveredPath::Stdin);
            return result;
        }

        for arg in &files {
            if cancel.is_cancelled() {
                break;
            }
            if arg == STDIN_SENTINEL {
                result.paths.push(DiscoveredPath::Stdin);
                continue;
            }
            Self::expand_one(arg, options, &filter, &mut result, cancel);
        }
        result
    }

    fn expand_one(
        arg: &str,
        options: &OptionContext,
        filter: &IncludeExcludeFilter,
        result: &mut DiscoveryResult,
        cancel: &CancelToken,
    ) {
        let path = Path::new(arg);

        if path.is_dir() {
            if !options.recursive() {
                result.errors.push(DiscoveryError {
                    argument: arg.to_string(),
                    message: "is a directory".to_string(),
                });
                return;
            }
            Self::walk_directory(path, filter, result, cancel);
            return;
        }

        if path.exists() {
            if filter.should_include(path) {
                result.paths.push(DiscoveredPath::File(path.to_path_buf()));
            }
            return;
        }

        // Not an existing plain path: try glob expansion (§4.2).
        match glob_expand(arg) {
            Some(mut matches) if !matches.is_empty() => {
                matches.sort();
                for m in matches {
                    if filter.should_include(&m) {
                        result.paths.push(DiscoveredPath::File(m));
                    }
                }
            }
            _ => {
                // Existence is otherwise verified at open time (§4.2);
                // still yield the path as-is so the engine reports the
                // proper FileAccessError rather than silently dropping it.
                result.paths.push(DiscoveredPath::File(path.to_path_buf()));
            }
        }
    }

    /// Depth-first, directories and files each sorted lexicographically,
    /// regular files only, symlinks not followed (§4.2).
    fn walk_directory(root: &Path, filter: &IncludeExcludeFilter, result: &mut DiscoveryResult, cancel: &CancelToken) {
        let mut walker = WalkBuilder::new(root);
        walker
            .standard_filters(false)
            .follow_links(false)
            .sort_by_file_name(|a, b| a.cmp(b));

        for entry in walker.build() {
            if cancel.is_cancelled() {
                break;
            }
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    result.errors.push(DiscoveryError {
                        argument: root.display().to_string(),
                        message: e.to_string(),
                    });
                    continue;
                }
            };
            let is_file = entry.file_type().is_some_and(|ft| ft.is_file());
            if !is_file {
                continue;
            }
            if filter.should_include(entry.path()) {
                result.paths.push(DiscoveredPath::File(entry.into_path()));
            }
        }
    }
}

/// Expands a glob argument (`*`, `?`, `[...]`) against the filesystem,
/// lexicographically sorted, per §4.2.
fn glob_expand(pattern: &str) -> Option<Vec<PathBuf>> {
    if !pattern.contains(['*', '?', '[']) {
        return None;
    }
    let glob = Glob::new(pattern).ok()?.compile_matcher();
    let (dir, _) = split_glob_dir(pattern);
    let mut matches = Vec::new();
    let search_root = if dir.is_empty() { Path::new(".") } else { Path::new(&dir) };
    if let Ok(entries) = std::fs::read_dir(search_root) {
        for entry in entries.flatten() {
            let path = entry.path();
            if glob.is_match(&path) || path.file_name().is_some_and(|n| glob.is_match(n)) {
                matches.push(path);
            }
        }
    }
    Some(matches)
}

fn split_glob_dir(pattern: &str) -> (String, String) {
    match pattern.rfind('/') {
        Some(idx) => (pattern[..idx].to_string(), pattern[idx + 1..].to_string()),
        None => (String::new(), pattern.to_string()),
    }
}
