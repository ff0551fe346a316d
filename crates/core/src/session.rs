//! GameSession - the controller driving the queue and the pile
//!
//! One session owns both containers plus the generator, starts the queue
//! full, and dispatches menu actions. The challenge tier decides which
//! actions are on offer; everything else is delegated to [`crate::ops`].

use tetris_stack_types::{ActionError, Challenge, MenuAction, Piece};

use crate::generator::PieceGenerator;
use crate::ops;
use crate::pile::ReservePile;
use crate::queue::PieceQueue;
use crate::snapshot::SessionSnapshot;

/// What a successful menu action did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Front piece removed; `refill` is `None` on the novice tier, which
    /// does not top the queue back up
    Played {
        piece: Piece,
        refill: Option<Piece>,
    },
    /// Fresh piece enqueued by hand (novice tier)
    Inserted(Piece),
    /// Front piece moved onto the pile, queue refilled
    Reserved(Piece),
    /// Top piece popped off the pile
    Used(Piece),
    /// Front and top exchanged in place; fields are the pieces now there
    Swapped { front: Piece, top: Piece },
    /// Front three queue pieces exchanged with the full pile
    BulkSwapped,
    /// Nothing to do; the caller ends the loop
    Quit,
}

/// A complete piece-manager session
#[derive(Debug, Clone)]
pub struct GameSession {
    queue: PieceQueue,
    pile: ReservePile,
    gen: PieceGenerator,
    challenge: Challenge,
}

impl GameSession {
    /// Start a session: full queue, empty pile, ids from 0
    pub fn new(challenge: Challenge, seed: u32) -> Self {
        let mut session = Self {
            queue: PieceQueue::new(),
            pile: ReservePile::new(),
            gen: PieceGenerator::new(seed),
            challenge,
        };
        while !session.queue.is_full() {
            let piece = session.gen.generate();
            // Cannot fail: the loop stops at capacity.
            let _ = session.queue.enqueue(piece);
        }
        session
    }

    pub fn challenge(&self) -> Challenge {
        self.challenge
    }

    pub fn queue(&self) -> &PieceQueue {
        &self.queue
    }

    pub fn pile(&self) -> &ReservePile {
        &self.pile
    }

    /// Dispatch one menu action
    ///
    /// Rejects actions the active tier does not offer before any other
    /// check, so a novice session never mutates the pile.
    pub fn apply(&mut self, action: MenuAction) -> Result<ActionOutcome, ActionError> {
        if !self.challenge.allows(action) {
            return Err(ActionError::NotAvailable);
        }

        match action {
            MenuAction::Play => {
                if self.challenge == Challenge::Novice {
                    let piece = self.queue.dequeue()?;
                    Ok(ActionOutcome::Played {
                        piece,
                        refill: None,
                    })
                } else {
                    let outcome = ops::play(&mut self.queue, &mut self.gen)?;
                    Ok(ActionOutcome::Played {
                        piece: outcome.played,
                        refill: Some(outcome.refill),
                    })
                }
            }
            MenuAction::Insert => {
                // Check before generating so a full queue burns no id.
                if self.queue.is_full() {
                    return Err(ActionError::QueueFull);
                }
                let piece = self.gen.generate();
                self.queue.enqueue(piece)?;
                Ok(ActionOutcome::Inserted(piece))
            }
            MenuAction::Reserve => {
                let outcome = ops::reserve(&mut self.queue, &mut self.pile, &mut self.gen)?;
                Ok(ActionOutcome::Reserved(outcome.reserved))
            }
            MenuAction::UseReserved => {
                let piece = ops::use_reserved(&mut self.pile)?;
                Ok(ActionOutcome::Used(piece))
            }
            MenuAction::SwapFrontTop => {
                let (front, top) = ops::swap_front_top(&mut self.queue, &mut self.pile)?;
                Ok(ActionOutcome::Swapped { front, top })
            }
            MenuAction::BulkSwap => {
                ops::bulk_swap(&mut self.queue, &mut self.pile)?;
                Ok(ActionOutcome::BulkSwapped)
            }
            MenuAction::Quit => Ok(ActionOutcome::Quit),
        }
    }

    /// Copy out the current state for rendering or assertions
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            challenge: self.challenge,
            queue: self.queue.iter().copied().collect(),
            pile: self.pile.iter_top_down().copied().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tetris_stack_types::QUEUE_CAPACITY;

    #[test]
    fn new_session_has_full_queue_and_empty_pile() {
        let session = GameSession::new(Challenge::Master, 1);
        let snap = session.snapshot();
        assert_eq!(snap.queue.len(), QUEUE_CAPACITY);
        assert!(snap.pile.is_empty());
        assert_eq!(snap.queue_ids(), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn novice_play_does_not_refill() {
        let mut session = GameSession::new(Challenge::Novice, 1);
        let outcome = session.apply(MenuAction::Play).unwrap();
        assert!(matches!(
            outcome,
            ActionOutcome::Played { refill: None, .. }
        ));
        assert_eq!(session.queue().len(), QUEUE_CAPACITY - 1);
    }

    #[test]
    fn master_play_refills() {
        let mut session = GameSession::new(Challenge::Master, 1);
        let outcome = session.apply(MenuAction::Play).unwrap();
        assert!(matches!(
            outcome,
            ActionOutcome::Played {
                refill: Some(_),
                ..
            }
        ));
        assert!(session.queue().is_full());
    }

    #[test]
    fn tier_gating_is_checked_first() {
        let mut session = GameSession::new(Challenge::Novice, 1);
        assert_eq!(
            session.apply(MenuAction::Reserve),
            Err(ActionError::NotAvailable)
        );
        assert_eq!(
            session.apply(MenuAction::BulkSwap),
            Err(ActionError::NotAvailable)
        );
        // Containers untouched by the rejections.
        assert!(session.queue().is_full());
        assert!(session.pile().is_empty());
    }

    #[test]
    fn insert_on_full_queue_burns_no_id() {
        let mut session = GameSession::new(Challenge::Novice, 1);
        assert_eq!(
            session.apply(MenuAction::Insert),
            Err(ActionError::QueueFull)
        );
        // Next play still sees the original front piece with id 0.
        match session.apply(MenuAction::Play).unwrap() {
            ActionOutcome::Played { piece, .. } => assert_eq!(piece.id, 0),
            other => panic!("unexpected outcome {other:?}"),
        }
    }

    #[test]
    fn quit_is_a_no_op() {
        let mut session = GameSession::new(Challenge::Adventurer, 1);
        let before = session.snapshot();
        assert_eq!(session.apply(MenuAction::Quit), Ok(ActionOutcome::Quit));
        assert_eq!(session.snapshot(), before);
    }
}
