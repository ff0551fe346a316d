//! Transfer and swap operation tests - the worked examples
//!
//! These pin down the exact exchange semantics, in particular the bulk
//! swap's order handling: after a swap, popping the pile must replay the
//! pieces in the order they sat in the queue.

use tetris_stack::core::{ops, PieceGenerator, PieceQueue, ReservePile};
use tetris_stack::types::{ActionError, Piece, PieceKind};

fn queue_of(ids: &[u32]) -> PieceQueue {
    let mut queue = PieceQueue::new();
    for id in ids {
        queue.enqueue(Piece::new(PieceKind::I, *id)).unwrap();
    }
    queue
}

fn pile_of(base_to_top: &[u32]) -> ReservePile {
    let mut pile = ReservePile::new();
    for id in base_to_top {
        pile.push(Piece::new(PieceKind::T, *id)).unwrap();
    }
    pile
}

fn queue_ids(queue: &PieceQueue) -> Vec<u32> {
    queue.iter().map(|p| p.id).collect()
}

fn pile_ids_top_down(pile: &ReservePile) -> Vec<u32> {
    pile.iter_top_down().map(|p| p.id).collect()
}

// ============== Reserve ==============

#[test]
fn test_reserve_keeps_queue_size_constant() {
    let mut queue = queue_of(&[0, 1, 2, 3, 4]);
    let mut pile = ReservePile::new();
    let mut gen = PieceGenerator::new(9);

    let before = queue.len();
    ops::reserve(&mut queue, &mut pile, &mut gen).unwrap();

    assert_eq!(queue.len(), before);
    assert_eq!(pile.top().unwrap().id, 0);
    assert_eq!(queue.front().unwrap().id, 1);
}

#[test]
fn test_reserve_preserves_piece_identity() {
    let mut queue = PieceQueue::new();
    queue.enqueue(Piece::new(PieceKind::L, 31)).unwrap();
    let mut pile = ReservePile::new();
    let mut gen = PieceGenerator::new(9);

    let outcome = ops::reserve(&mut queue, &mut pile, &mut gen).unwrap();
    assert_eq!(outcome.reserved, Piece::new(PieceKind::L, 31));
    assert_eq!(*pile.top().unwrap(), Piece::new(PieceKind::L, 31));
}

#[test]
fn test_reserve_checks_queue_before_pile() {
    let mut queue = PieceQueue::new();
    let mut pile = pile_of(&[5, 6, 7]);
    let mut gen = PieceGenerator::new(9);

    // Both preconditions fail; the queue check wins.
    assert_eq!(
        ops::reserve(&mut queue, &mut pile, &mut gen),
        Err(ActionError::QueueEmpty)
    );
    assert_eq!(pile_ids_top_down(&pile), vec![7, 6, 5]);
}

// ============== Swap front/top ==============

#[test]
fn test_swap_front_top_worked_example() {
    // Queue front (I, 0), pile top (O, 1).
    let mut queue = PieceQueue::new();
    queue.enqueue(Piece::new(PieceKind::I, 0)).unwrap();
    let mut pile = ReservePile::new();
    pile.push(Piece::new(PieceKind::O, 1)).unwrap();

    ops::swap_front_top(&mut queue, &mut pile).unwrap();

    assert_eq!(*queue.front().unwrap(), Piece::new(PieceKind::O, 1));
    assert_eq!(*pile.top().unwrap(), Piece::new(PieceKind::I, 0));
    assert_eq!(queue.len(), 1);
    assert_eq!(pile.len(), 1);
}

#[test]
fn test_swap_front_top_twice_restores() {
    let mut queue = queue_of(&[0, 1, 2, 3, 4]);
    let mut pile = pile_of(&[5]);

    ops::swap_front_top(&mut queue, &mut pile).unwrap();
    ops::swap_front_top(&mut queue, &mut pile).unwrap();

    assert_eq!(queue_ids(&queue), vec![0, 1, 2, 3, 4]);
    assert_eq!(pile_ids_top_down(&pile), vec![5]);
}

// ============== Bulk swap ==============

#[test]
fn test_bulk_swap_worked_example() {
    // Queue ids [0,1,2,3,4] front to back, pile ids 5,6,7 with 7 on top.
    let mut queue = queue_of(&[0, 1, 2, 3, 4]);
    let mut pile = pile_of(&[5, 6, 7]);

    ops::bulk_swap(&mut queue, &mut pile).unwrap();

    // The old pile top leads the queue.
    assert_eq!(queue_ids(&queue), vec![7, 6, 5, 3, 4]);

    // Popping the pile replays the old queue order: 0, then 1, then 2.
    assert_eq!(pile.pop().unwrap().id, 0);
    assert_eq!(pile.pop().unwrap().id, 1);
    assert_eq!(pile.pop().unwrap().id, 2);
}

#[test]
fn test_bulk_swap_is_its_own_inverse() {
    let mut queue = queue_of(&[0, 1, 2, 3, 4]);
    let mut pile = pile_of(&[5, 6, 7]);

    ops::bulk_swap(&mut queue, &mut pile).unwrap();
    ops::bulk_swap(&mut queue, &mut pile).unwrap();

    assert_eq!(queue_ids(&queue), vec![0, 1, 2, 3, 4]);
    assert_eq!(pile_ids_top_down(&pile), vec![7, 6, 5]);
}

#[test]
fn test_bulk_swap_works_on_a_wrapped_queue() {
    // Rotate the ring so the front three slots straddle the array end.
    let mut queue = queue_of(&[90, 91, 92, 0, 1]);
    queue.dequeue().unwrap();
    queue.dequeue().unwrap();
    queue.dequeue().unwrap();
    for id in [2, 3, 4] {
        queue.enqueue(Piece::new(PieceKind::I, id)).unwrap();
    }
    assert_eq!(queue_ids(&queue), vec![0, 1, 2, 3, 4]);

    let mut pile = pile_of(&[5, 6, 7]);
    ops::bulk_swap(&mut queue, &mut pile).unwrap();

    assert_eq!(queue_ids(&queue), vec![7, 6, 5, 3, 4]);
    assert_eq!(pile_ids_top_down(&pile), vec![0, 1, 2]);
}

#[test]
fn test_bulk_swap_rejects_partial_pile() {
    let mut queue = queue_of(&[0, 1, 2, 3, 4]);
    for pile_ids in [&[][..], &[5][..], &[5, 6][..]] {
        let mut pile = pile_of(pile_ids);
        assert_eq!(
            ops::bulk_swap(&mut queue, &mut pile),
            Err(ActionError::PileNotFull)
        );
        assert_eq!(queue_ids(&queue), vec![0, 1, 2, 3, 4]);
    }
}

#[test]
fn test_bulk_swap_rejects_short_queue() {
    let mut queue = queue_of(&[0, 1]);
    let mut pile = pile_of(&[5, 6, 7]);

    assert_eq!(
        ops::bulk_swap(&mut queue, &mut pile),
        Err(ActionError::QueueTooShort)
    );
    assert_eq!(queue_ids(&queue), vec![0, 1]);
    assert_eq!(pile_ids_top_down(&pile), vec![7, 6, 5]);
}

// ============== Id discipline ==============

#[test]
fn test_generated_ids_strictly_increase_across_ops() {
    let mut queue = queue_of(&[0, 1, 2, 3, 4]);
    let mut pile = ReservePile::new();
    let mut gen = PieceGenerator::new(3);
    // Container was hand-built; align the allocator past the seeded ids.
    for _ in 0..5 {
        gen.generate();
    }

    let mut seen = Vec::new();
    for _ in 0..3 {
        seen.push(ops::play(&mut queue, &mut gen).unwrap().refill.id);
        seen.push(ops::reserve(&mut queue, &mut pile, &mut gen).unwrap().refill.id);
    }

    for pair in seen.windows(2) {
        assert!(pair[0] < pair[1]);
    }
}
