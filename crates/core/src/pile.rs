//! ReservePile - fixed-capacity stack of reserved pieces
//!
//! LIFO over an `ArrayVec`: the top of the pile is the last element, so
//! there is no sentinel index to keep in sync.

use arrayvec::ArrayVec;
use tetris_stack_types::{Piece, PileError, PILE_CAPACITY};

/// Bounded LIFO of reserved pieces
#[derive(Debug, Clone, Default)]
pub struct ReservePile {
    slots: ArrayVec<Piece, PILE_CAPACITY>,
}

impl ReservePile {
    /// Create an empty pile
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.slots.is_full()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Put a piece on top
    pub fn push(&mut self, piece: Piece) -> Result<(), PileError> {
        if self.is_full() {
            return Err(PileError::Full);
        }
        self.slots.push(piece);
        Ok(())
    }

    /// Remove and return the top piece
    pub fn pop(&mut self) -> Result<Piece, PileError> {
        self.slots.pop().ok_or(PileError::Empty)
    }

    /// Peek at the top piece without removing it
    pub fn top(&self) -> Option<&Piece> {
        self.slots.last()
    }

    /// Mutable top piece, for in-place swaps
    pub fn top_mut(&mut self) -> Option<&mut Piece> {
        self.slots.last_mut()
    }

    /// Iterate pieces top to base
    pub fn iter_top_down(&self) -> impl Iterator<Item = &Piece> {
        self.slots.iter().rev()
    }

    /// Mutable view of the slots, base to top
    ///
    /// The bulk swap rewrites the whole pile through this; the length does
    /// not change.
    pub fn as_mut_slice(&mut self) -> &mut [Piece] {
        &mut self.slots
    }
}
