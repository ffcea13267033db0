//! `TrafficQueue` — pending arrivals, drained by the tick pipeline.
//!
//! The pattern is sorted once at load time, so the queue is a plain
//! `VecDeque`: each tick the pipeline pops every entry whose tick has come
//! due.  O(popped) per tick, no per-tick scan of the remaining schedule.

use std::collections::VecDeque;

use lift_core::Tick;

use crate::{TrafficEntry, TrafficPattern};

/// Arrivals not yet materialized into passengers, in `(tick, id)` order.
#[derive(Clone, Debug, Default)]
pub struct TrafficQueue {
    pending: VecDeque<TrafficEntry>,
}

impl TrafficQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fill the queue from a pattern's (already sorted) entries.
    pub fn from_pattern(pattern: &TrafficPattern) -> Self {
        Self {
            pending: pattern.entries().iter().copied().collect(),
        }
    }

    /// Remove and return every entry scheduled at or before `now`.
    ///
    /// Entries whose tick lies in the past (possible after a traffic
    /// rotation without reset) are released immediately rather than lost.
    pub fn pop_due(&mut self, now: Tick) -> Vec<TrafficEntry> {
        let mut due = Vec::new();
        while let Some(head) = self.pending.front().copied() {
            if head.tick > now {
                break;
            }
            self.pending.pop_front();
            due.push(head);
        }
        due
    }

    /// Tick of the next pending entry, or `None` when drained.
    pub fn next_tick(&self) -> Option<Tick> {
        self.pending.front().map(|e| e.tick)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
