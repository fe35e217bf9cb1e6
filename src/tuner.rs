//! Pure sizing functions the engine consults before dispatching work
//! (§4.4): worker count and per-file read-buffer size. Grounded on the
//! `num_cpus`-based parallelism detection used across the pack's CLI
//! tools (e.g. ripgrep's and fnr's manifests) and the teacher's own
//! tiered buffer-size constants in its config module.

use crate::config;

pub struct PerformanceTuner;

impl PerformanceTuner {
    /// Clamped to `[1, min(available_parallelism, MAX_WORKERS)]`, unless
    /// overridden by `GREP_THREADS` (§4.4).
    pub fn optimal_parallelism(file_count: usize) -> usize {
        if let Some(forced) = config::thread_override() {
            return forced.min(config::MAX_WORKERS).max(1);
        }
        let cores = num_cpus::get().max(1);
        let cap = cores.min(config::MAX_WORKERS);
        file_count.clamp(1, cap)
    }

    /// Tiered buffer size by file size (§4.4), matching the teacher's
    /// small/medium/large/huge thresholds.
    pub fn optimal_buffer_size(file_size_bytes: u64) -> usize {
        if file_size_bytes < config::SMALL_FILE_THRESHOLD {
            config::SMALL_FILE_BUFFER
        } else if file_size_bytes < config::MEDIUM_FILE_THRESHOLD {
            config::MEDIUM_FILE_BUFFER
        } else if file_size_bytes < config::LARGE_FILE_THRESHOLD {
            config::LARGE_FILE_BUFFER
        } else {
            config::HUGE_FILE_BUFFER
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parallelism_is_never_zero() {
        assert!(PerformanceTuner::optimal_parallelism(0) >= 1);
    }

    #[test]
    fn parallelism_does_not_exceed_file_count() {
        assert!(PerformanceTuner::optimal_parallelism(1) <= 1);
    }

    #[test]
    fn parallelism_respects_thread_override() {
        unsafe {
            std::env::set_var(config::THREADS_ENV_VAR, "3");
        }
        assert_eq!(PerformanceTuner::optimal_parallelism(100), 3);
        unsafe {
            std::env::remove_var(config::THREADS_ENV_VAR);
        }
    }

    #[test]
    fn buffer_size_tiers() {
        assert_eq!(PerformanceTuner::optimal_buffer_size(1024), config::SMALL_FILE_BUFFER);
        assert_eq!(PerformanceTuner::optimal_buffer_size(500 * 1024), config::MEDIUM_FILE_BUFFER);
        assert_eq!(PerformanceTuner::optimal_buffer_size(10 * 1024 * 1024), config::LARGE_FILE_BUFFER);
        assert_eq!(PerformanceTuner::optimal_buffer_size(100 * 1024 * 1024), config::HUGE_FILE_BUFFER);
    }

    #[test]
    fn buffer_size_tier_boundaries_are_exclusive_upper() {
        assert_eq!(
            PerformanceTuner::optimal_buffer_size(config::SMALL_FILE_THRESHOLD),
            config::MEDIUM_FILE_BUFFER,
            "a file exactly at the small threshold belongs to the next tier"
        );
        assert_eq!(
            PerformanceTuner::optimal_buffer_size(config::MEDIUM_FILE_THRESHOLD),
            config::LARGE_FILE_BUFFER
        );
        assert_eq!(
            PerformanceTuner::optimal_buffer_size(config::LARGE_FILE_THRESHOLD),
            config::HUGE_FILE_BUFFER
        );
    }
}
