//! Transfer and swap operations between the queue and the reserve pile
//!
//! Every operation checks all of its preconditions before touching either
//! container, so a returned error means nothing moved. Successful transfers
//! move pieces by value; ids travel with the piece.

use arrayvec::ArrayVec;
use tetris_stack_types::{ActionError, Piece, BULK_SWAP_COUNT};

use crate::generator::PieceGenerator;
use crate::pile::ReservePile;
use crate::queue::PieceQueue;

/// Result of playing the front piece
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Played {
    /// The piece removed from the front of the queue
    pub played: Piece,
    /// The freshly generated piece enqueued to keep the queue full
    pub refill: Piece,
}

/// Result of reserving the front piece
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reserved {
    /// The piece moved from the queue front onto the pile top
    pub reserved: Piece,
    /// The freshly generated piece enqueued to keep the queue full
    pub refill: Piece,
}

/// Play the front piece and refill the queue with a fresh one
pub fn play(queue: &mut PieceQueue, gen: &mut PieceGenerator) -> Result<Played, ActionError> {
    let played = queue.dequeue()?;
    let refill = gen.generate();
    // Cannot fail: the dequeue above freed a slot.
    queue.enqueue(refill)?;
    Ok(Played { played, refill })
}

/// Move the queue front onto the pile top, then refill the queue
///
/// Checked in order: queue non-empty, pile non-full. The dequeue, push and
/// refill then form one logical transaction; no partial state is visible to
/// the caller on failure.
pub fn reserve(
    queue: &mut PieceQueue,
    pile: &mut ReservePile,
    gen: &mut PieceGenerator,
) -> Result<Reserved, ActionError> {
    if queue.is_empty() {
        return Err(ActionError::QueueEmpty);
    }
    if pile.is_full() {
        return Err(ActionError::PileFull);
    }
    let reserved = queue.dequeue()?;
    pile.push(reserved)?;
    let refill = gen.generate();
    queue.enqueue(refill)?;
    Ok(Reserved { reserved, refill })
}

/// Pop the top of the reserve pile
///
/// The pile is allowed to shrink for good through this path; nothing is
/// generated to replace the used piece.
pub fn use_reserved(pile: &mut ReservePile) -> Result<Piece, ActionError> {
    Ok(pile.pop()?)
}

/// Exchange the queue front piece with the pile top piece in place
///
/// Sizes and indices of both containers are unchanged; only the two piece
/// values swap slots. Returns the pieces now sitting at (queue front,
/// pile top).
pub fn swap_front_top(
    queue: &mut PieceQueue,
    pile: &mut ReservePile,
) -> Result<(Piece, Piece), ActionError> {
    if queue.is_empty() {
        return Err(ActionError::QueueEmpty);
    }
    if pile.is_empty() {
        return Err(ActionError::PileEmpty);
    }
    let front = queue.get_mut(0).ok_or(ActionError::QueueEmpty)?;
    let new_front = *pile.top().ok_or(ActionError::PileEmpty)?;
    let new_top = std::mem::replace(front, new_front);
    *pile.top_mut().ok_or(ActionError::PileEmpty)? = new_top;
    Ok((new_front, new_top))
}

/// Exchange the 3 front queue pieces with the 3 pile pieces
///
/// Requires at least 3 pieces in the queue and an exactly-full pile. The
/// queue's front slots take the pile pieces top-first (the old pile top
/// becomes the new queue front). The pile is rewritten so that the queue's
/// old front piece becomes the new top: popping the pile afterwards yields
/// the three pieces in their original front-to-back queue order. Applying
/// the operation twice restores both containers.
pub fn bulk_swap(queue: &mut PieceQueue, pile: &mut ReservePile) -> Result<(), ActionError> {
    if queue.len() < BULK_SWAP_COUNT {
        return Err(ActionError::QueueTooShort);
    }
    if !pile.is_full() {
        return Err(ActionError::PileNotFull);
    }

    let mut from_queue: ArrayVec<Piece, BULK_SWAP_COUNT> = ArrayVec::new();
    for i in 0..BULK_SWAP_COUNT {
        from_queue.push(*queue.get(i).ok_or(ActionError::QueueTooShort)?);
    }
    let from_pile: ArrayVec<Piece, BULK_SWAP_COUNT> = pile.iter_top_down().copied().collect();

    for (i, piece) in from_pile.iter().enumerate() {
        *queue.get_mut(i).ok_or(ActionError::QueueTooShort)? = *piece;
    }

    // Reversed into the slots so the old queue front ends up on top.
    let slots = pile.as_mut_slice();
    for (i, piece) in from_queue.iter().enumerate() {
        slots[BULK_SWAP_COUNT - 1 - i] = *piece;
    }

    Ok(())
}
