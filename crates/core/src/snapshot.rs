//! Session snapshot - a copyable view of both containers
//!
//! The renderer and the tests read session state through this instead of
//! poking at the containers, keeping display order (front-to-back,
//! top-to-base) in one place.

use arrayvec::ArrayVec;
use tetris_stack_types::{Challenge, Piece, PILE_CAPACITY, QUEUE_CAPACITY};

/// Point-in-time copy of the session state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub challenge: Challenge,
    /// Queue contents, front to back
    pub queue: ArrayVec<Piece, QUEUE_CAPACITY>,
    /// Pile contents, top to base
    pub pile: ArrayVec<Piece, PILE_CAPACITY>,
}

impl SessionSnapshot {
    /// Queue ids front to back, handy in assertions
    pub fn queue_ids(&self) -> Vec<u32> {
        self.queue.iter().map(|p| p.id).collect()
    }

    /// Pile ids top to base
    pub fn pile_ids(&self) -> Vec<u32> {
        self.pile.iter().map(|p| p.id).collect()
    }
}
