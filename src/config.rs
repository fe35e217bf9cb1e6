//! Tuning constants for search performance and buffering.
//!
//! Mirrors the teacher's `search/manager/config.rs`: a small constants
//! module, no runtime configuration file, one environment override.

/// Upper bound on workers regardless of core count (§4.4).
pub const MAX_WORKERS: usize = 16;

/// `optimal_buffer_size` thresholds and sizes (§4.4).
pub const SMALL_FILE_THRESHOLD: u64 = 64 * 1024;
pub const SMALL_FILE_BUFFER: usize = 4 * 1024;
pub const MEDIUM_FILE_THRESHOLD: u64 = 1024 * 1024;
pub const MEDIUM_FILE_BUFFER: usize = 64 * 1024;
pub const LARGE_FILE_THRESHOLD: u64 = 32 * 1024 * 1024;
pub const LARGE_FILE_BUFFER: usize = 256 * 1024;
pub const HUGE_FILE_BUFFER: usize = 1024 * 1024;

/// How many leading bytes to peek when checking for NUL-byte binary content.
pub const BINARY_PEEK_BYTES: usize = 8 * 1024;

/// Environment variable that overrides the detected CPU count used by
/// `PerformanceTuner::optimal_parallelism` (SPEC_FULL §6).
pub const THREADS_ENV_VAR: &str = "GREP_THREADS";

/// Reads [`THREADS_ENV_VAR`], returning `Some(n)` for a valid positive
/// integer and `None` otherwise (unset, unparsable, or zero).
pub fn thread_override() -> Option<usize> {
    std::env::var(THREADS_ENV_VAR)
        .ok()
        .and_then(|v| v.parse::<usize>().ok())
        .filter(|&n| n > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thread_override_ignores_garbage() {
        // SAFETY: single-threaded test, no concurrent env access.
        unsafe { std::env::set_var(THREADS_ENV_VAR, "not-a-number") };
        assert_eq!(thread_override(), None, "garbage value should be ignored");
        unsafe { std::env::remove_var(THREADS_ENV_VAR) };
    }

    #[test]
    fn thread_override_ignores_zero() {
        unsafe { std::env::set_var(THREADS_ENV_VAR, "0") };
        assert_eq!(thread_override(), None, "zero is not a valid worker count");
        unsafe { std::env::remove_var(THREADS_ENV_VAR) };
    }

    #[test]
    fn thread_override_accepts_positive() {
        unsafe { std::env::set_var(THREADS_ENV_VAR, "4") };
        assert_eq!(thread_override(), Some(4));
        unsafe { std::env::remove_var(THREADS_ENV_VAR) };
    }
}
