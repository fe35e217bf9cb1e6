//! Per-file context tracking (§4.5.1): a bounded before-ring plus an
//! after-countdown, producing `ContextualMatch` values without
//! duplicating any line across the output stream.

use std::collections::VecDeque;

use crate::model::{ContextLine, ContextualMatch, Match};

pub struct ContextRing {
    before_capacity: usize,
    after_capacity: usize,
    before_ring: VecDeque<ContextLine>,
    /// Index into `contextual` of the match currently accepting `after`
    /// lines, and how many more it still wants.
    pending: Option<(usize, usize)>,
}

impl ContextRing {
    pub fn new(before_capacity: usize, after_capacity: usize) -> Self {
        Self {
            before_capacity,
            after_capacity,
            before_ring: VecDeque::with_capacity(before_capacity),
            pending: None,
        }
    }

    /// Records a non-match line: either consumed as trailing context for
    /// the most recent match (if it still wants `after` lines) or pushed
    /// into the before-ring for a future match.
    pub fn record_non_match(&mut self, file_id: usize, line_number: u64, text: &str, contextual: &mut [ContextualMatch]) {
        if let Some((idx, remaining)) = self.pending {
            if remaining > 0 {
                contextual[idx].after.push(ContextLine {
                    file_id,
                    line_number,
                    text: text.to_string(),
                    is_match: false,
                });
                let remaining = remaining - 1;
                self.pending = if remaining == 0 { None } else { Some((idx, remaining)) };
                return;
            }
        }
        if self.before_capacity > 0 {
            if self.before_ring.len() == self.before_capacity {
                self.before_ring.pop_front();
            }
            self.before_ring.push_back(ContextLine {
                file_id,
                line_number,
                text: text.to_string(),
                is_match: false,
            });
        }
    }

    /// Records a matching line, draining the before-ring into its
    /// `before` list and arming the after-countdown. Returns the new
    /// entry's index within `contextual` for `record_non_match` to
    /// target next.
    pub fn record_match(&mut self, m: Match, contextual: &mut Vec<ContextualMatch>) {
        let before: Vec<ContextLine> = self.before_ring.drain(..).collect();
        contextual.push(ContextualMatch {
            matched: m,
            before,
            after: Vec::new(),
        });
        let idx = contextual.len() - 1;
        self.pending = if self.after_capacity > 0 {
            Some((idx, self.after_capacity))
        } else {
            None
        };
    }
}
