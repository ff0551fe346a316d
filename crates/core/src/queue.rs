//! PieceQueue - fixed-capacity circular buffer of upcoming pieces
//!
//! FIFO over a fixed backing array. The front index advances modulo the
//! capacity and the length is tracked independently, so an empty queue and
//! a full queue are never confused even when the indices coincide.

use tetris_stack_types::{Piece, QueueError, QUEUE_CAPACITY};

/// Bounded FIFO of upcoming pieces
///
/// Failed operations never mutate the queue: `enqueue` on a full queue and
/// `dequeue` on an empty queue return an error and leave every slot as it
/// was.
#[derive(Debug, Clone, Default)]
pub struct PieceQueue {
    slots: [Option<Piece>; QUEUE_CAPACITY],
    front: usize,
    len: usize,
}

impl PieceQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == QUEUE_CAPACITY
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Physical slot index of the logical position `i` (0 = front)
    fn slot(&self, i: usize) -> usize {
        (self.front + i) % QUEUE_CAPACITY
    }

    /// Append a piece at the back
    pub fn enqueue(&mut self, piece: Piece) -> Result<(), QueueError> {
        if self.is_full() {
            return Err(QueueError::Full);
        }
        let back = self.slot(self.len);
        self.slots[back] = Some(piece);
        self.len += 1;
        Ok(())
    }

    /// Remove and return the front piece
    pub fn dequeue(&mut self) -> Result<Piece, QueueError> {
        if self.is_empty() {
            return Err(QueueError::Empty);
        }
        // The slot is always occupied while it is inside the live window.
        let piece = self.slots[self.front]
            .take()
            .ok_or(QueueError::Empty)?;
        self.front = (self.front + 1) % QUEUE_CAPACITY;
        self.len -= 1;
        Ok(piece)
    }

    /// Peek at the front piece without removing it
    pub fn front(&self) -> Option<&Piece> {
        self.get(0)
    }

    /// Piece at logical position `i` from the front
    pub fn get(&self, i: usize) -> Option<&Piece> {
        if i >= self.len {
            return None;
        }
        self.slots[self.slot(i)].as_ref()
    }

    /// Mutable piece at logical position `i` from the front
    ///
    /// Used by the swap operations, which exchange piece values in place
    /// without touching indices or length.
    pub fn get_mut(&mut self, i: usize) -> Option<&mut Piece> {
        if i >= self.len {
            return None;
        }
        let slot = self.slot(i);
        self.slots[slot].as_mut()
    }

    /// Iterate pieces front to back
    pub fn iter(&self) -> impl Iterator<Item = &Piece> {
        (0..self.len).filter_map(move |i| self.get(i))
    }
}
