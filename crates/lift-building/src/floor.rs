//! A floor's hall queues.
//!
//! Waiting passengers stand in exactly one of two FIFO queues, keyed by the
//! direction they want to travel.  `VecDeque` keeps both ends O(1): arrivals
//! push at the back, boarding pops from the front.

use std::collections::VecDeque;

use lift_core::{Direction, PassengerId};

/// One floor: its number and the two hall queues.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Floor {
    pub floor_number: i32,
    pub up_queue:     VecDeque<PassengerId>,
    pub down_queue:   VecDeque<PassengerId>,
}

impl Floor {
    pub fn new(floor_number: i32) -> Self {
        Self {
            floor_number,
            up_queue:   VecDeque::new(),
            down_queue: VecDeque::new(),
        }
    }

    /// Append `passenger` to the queue for `direction`.
    ///
    /// `direction` must be `Up` or `Down`; hall calls have no third state.
    pub fn enqueue(&mut self, direction: Direction, passenger: PassengerId) {
        debug_assert!(direction.is_moving(), "hall calls are Up or Down");
        match direction {
            Direction::Down => self.down_queue.push_back(passenger),
            _               => self.up_queue.push_back(passenger),
        }
    }

    /// Pop the longest-waiting passenger for `direction`, if any.
    pub fn pop_front(&mut self, direction: Direction) -> Option<PassengerId> {
        match direction {
            Direction::Up      => self.up_queue.pop_front(),
            Direction::Down    => self.down_queue.pop_front(),
            Direction::Stopped => None,
        }
    }

    /// Head of the queue for `direction` without removing it.
    pub fn peek_front(&self, direction: Direction) -> Option<PassengerId> {
        match direction {
            Direction::Up      => self.up_queue.front().copied(),
            Direction::Down    => self.down_queue.front().copied(),
            Direction::Stopped => None,
        }
    }

    /// Total passengers waiting on this floor, both directions.
    pub fn waiting_count(&self) -> usize {
        self.up_queue.len() + self.down_queue.len()
    }

    /// `true` if `passenger` stands in either queue.
    pub fn contains(&self, passenger: PassengerId) -> bool {
        self.up_queue.contains(&passenger) || self.down_queue.contains(&passenger)
    }

    /// Empty both queues (forced completion).  Returns the evicted
    /// passengers, up queue first, FIFO order within each.
    pub fn clear(&mut self) -> Vec<PassengerId> {
        let mut evicted: Vec<PassengerId> = self.up_queue.drain(..).collect();
        evicted.extend(self.down_queue.drain(..));
        evicted
    }
}
