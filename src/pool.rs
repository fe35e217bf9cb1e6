//! A small object pool for per-file match buffers (§4.5.3), reusing
//! allocations across files scanned by the same worker instead of
//! allocating a fresh `Vec<Match>` per file.
//!
//! Grounded on the teacher's batched-flush pattern in its content-search
//! visitor, which accumulates matches into a reusable buffer and only
//! hands a finished batch back to the aggregator. Synchronization here
//! uses `parking_lot::Mutex`, matching the teacher's choice of
//! `parking_lot` over `std::sync::Mutex` elsewhere in its pool-like
//! structures.

use parking_lot::Mutex;

use crate::model::Match;

/// A buffer rented from a [`ResultPool`]. Matches accumulate via
/// [`PooledBuffer::add_match`]; [`PooledBuffer::finish`] drains the
/// buffer into an owned `Vec<Match>` and returns the backing allocation
/// to the pool for reuse.
pub struct PooledBuffer<'p> {
    pool: &'p ResultPool,
    matches: Vec<Match>,
}

impl<'p> PooledBuffer<'p> {
    pub fn add_match(&mut self, m: Match) {
        self.matches.push(m);
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Drains accumulated matches into an owned vec and returns the
    /// backing allocation's capacity to the pool's free list by cloning
    /// the drained matches back out before recycling.
    pub fn finish(mut self) -> Vec<Match> {
        let drained = self.matches.clone();
        self.matches.clear();
        let spare = std::mem::take(&mut self.matches);
        self.pool.recycle(spare);
        drained
    }
}

impl Drop for PooledBuffer<'_> {
    fn drop(&mut self) {
        // finish() already emptied `matches` and recycled the spare
        // allocation; this only fires when a buffer is dropped without
        // calling finish().
        if self.matches.capacity() > 0 {
            let taken = std::mem::take(&mut self.matches);
            self.pool.recycle(taken);
        }
    }
}

#[derive(Default)]
pub struct ResultPool {
    free: Mutex<Vec<Vec<Match>>>,
}

impl ResultPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hands out a buffer with its capacity drawn from the free list
    /// when one is available, otherwise a fresh empty `Vec`.
    pub fn rent(&self) -> PooledBuffer<'_> {
        let mut free = self.free.lock();
        let matches = free.pop().unwrap_or_default();
        PooledBuffer { pool: self, matches }
    }

    fn recycle(&self, mut buf: Vec<Match>) {
        buf.clear();
        self.free.lock().push(buf);
    }
}
