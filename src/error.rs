//! Error taxonomy for the search pipeline.
//!
//! Recovery happens at the per-file boundary: a `FileAccessError` or
//! `ReadError` becomes part of a `FileResult` and the search continues.
//! `UserError`/`PatternError` abort the whole search before any file is
//! touched.

use std::path::PathBuf;

/// Errors produced anywhere in the search pipeline.
#[derive(Debug, thiserror::Error)]
pub enum GrepError {
    /// Bad option or missing pattern. Detected before scanning starts.
    #[error("{0}")]
    UserError(String),

    /// Pattern failed to compile, or was empty.
    #[error("invalid pattern: {0}")]
    PatternError(String),

    /// A file argument could not be opened (not found, permission,
    /// is-a-directory without `-r`).
    #[error("{path}: {message}")]
    FileAccessError { path: PathBuf, message: String },

    /// A file was opened but reading failed partway through.
    #[error("{path}: {message}")]
    ReadError { path: PathBuf, message: String },

    /// Invariant violation inside the engine (e.g. pool misuse). Not a
    /// recoverable condition; callers should treat this as a bug.
    #[error("internal error: {0}")]
    Internal(String),

    /// The search was cancelled before completion. Never surfaced on
    /// stderr (§7: "no error emission; caller decides exit") — kept in
    /// the taxonomy for callers that want to distinguish "cancelled"
    /// from "failed" programmatically.
    #[error("search cancelled")]
    Cancelled,
}

impl GrepError {
    /// Render the stderr line for a per-file error per SPEC_FULL §6:
    /// `grep: <path>: <reason>`.
    pub fn stderr_line(&self) -> String {
        match self {
            GrepError::FileAccessError { path, message } | GrepError::ReadError { path, message } => {
                format!("grep: {}: {message}", path.display())
            }
            other => format!("grep: {other}"),
        }
    }
}

pub type Result<T> = std::result::Result<T, GrepError>;
