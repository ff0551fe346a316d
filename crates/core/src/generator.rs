//! Piece generation - random kinds paired with unique ids
//!
//! The id allocator is an explicit value owned by the generator rather
//! than process-global state, so a session carries exactly one id stream
//! and tests can run any number of sessions side by side.

use tetris_stack_types::{Piece, PieceId, PieceKind};

use crate::rng::SimpleRng;

/// Hands out strictly increasing piece ids, starting at 0
///
/// Ids are never reused or reset for the lifetime of the allocator.
#[derive(Debug, Clone, Default)]
pub struct IdAllocator {
    next: PieceId,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the next id
    pub fn allocate(&mut self) -> PieceId {
        let id = self.next;
        self.next += 1;
        id
    }

    /// The id the next `allocate` call will return
    pub fn peek(&self) -> PieceId {
        self.next
    }
}

/// Produces pieces with uniformly random kinds and fresh ids
#[derive(Debug, Clone)]
pub struct PieceGenerator {
    rng: SimpleRng,
    ids: IdAllocator,
}

impl PieceGenerator {
    /// Create a generator seeded once; the seed fixes the kind sequence
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
            ids: IdAllocator::new(),
        }
    }

    /// Generate one piece: a uniform draw over the four kinds plus the
    /// next id from the allocator
    pub fn generate(&mut self) -> Piece {
        let kind = PieceKind::ALL[self.rng.next_range(PieceKind::ALL.len() as u32) as usize];
        Piece::new(kind, self.ids.allocate())
    }

    /// Id the next generated piece will carry
    pub fn next_id(&self) -> PieceId {
        self.ids.peek()
    }
}
