//! Cooperative cancellation token.
//!
//! A plain atomic flag rather than the teacher's `tokio::sync::watch`
//! channel: this engine's workers are OS threads, not tokio tasks, so a
//! synchronous `Arc<AtomicBool>` is the whole contract (§5, §9).

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Cheaply cloneable handle shared between the engine, its workers, and
/// `FileDiscovery`. Firing it once is equivalent to firing it twice
/// (SPEC_FULL invariant 7).
#[derive(Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(false)))
    }

    /// Requests cancellation. Idempotent.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    /// True once `cancel()` has been called at least once.
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_uncancelled() {
        let token = CancelToken::new();
        assert!(!token.is_cancelled());
    }

    #[test]
    fn cancel_is_idempotent() {
        let token = CancelToken::new();
        token.cancel();
        token.cancel();
        assert!(token.is_cancelled(), "cancelling twice should still read as cancelled");
    }

    #[test]
    fn clones_share_state() {
        let token = CancelToken::new();
        let clone = token.clone();
        clone.cancel();
        assert!(token.is_cancelled(), "cancellation must be visible through any clone");
    }
}
