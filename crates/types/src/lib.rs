//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (session logic, console rendering, tests).
//!
//! # Capacities
//!
//! - **Queue**: 5 upcoming pieces, kept full by the session
//! - **Reserve pile**: up to 3 pieces, allowed to drain
//! - **Bulk swap**: exchanges exactly 3 pieces each way
//!
//! # Examples
//!
//! ```
//! use tetris_stack_types::{Piece, PieceKind, QUEUE_CAPACITY};
//!
//! let piece = Piece::new(PieceKind::T, 0);
//! assert_eq!(piece.to_string(), "[T 0]");
//! assert_eq!(QUEUE_CAPACITY, 5);
//! ```

use std::fmt;

/// Number of slots in the upcoming-piece queue
pub const QUEUE_CAPACITY: usize = 5;

/// Number of slots in the reserve pile
pub const PILE_CAPACITY: usize = 3;

/// Number of pieces exchanged each way by a bulk swap
pub const BULK_SWAP_COUNT: usize = 3;

/// Unique, monotonically increasing piece identifier
///
/// Ids start at 0 for the first generated piece and are never reused or
/// reset within a session.
pub type PieceId = u32;

/// The four piece kinds handled by the piece manager
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    L,
}

impl PieceKind {
    /// All kinds, in the order used by the generator
    pub const ALL: [PieceKind; 4] = [PieceKind::I, PieceKind::O, PieceKind::T, PieceKind::L];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_stack_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("L"), Some(PieceKind::L));
    /// assert_eq!(PieceKind::from_str("x"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Single-letter display form
    pub fn as_char(&self) -> char {
        match self {
            PieceKind::I => 'I',
            PieceKind::O => 'O',
            PieceKind::T => 'T',
            PieceKind::L => 'L',
        }
    }

    /// Lowercase string form
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::L => "l",
        }
    }
}

/// A single piece: a kind plus a unique id assigned at generation time
///
/// Pieces are immutable values. They move between containers by value and
/// keep their id through every transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    pub id: PieceId,
}

impl Piece {
    pub fn new(kind: PieceKind, id: PieceId) -> Self {
        Self { kind, id }
    }
}

impl fmt::Display for Piece {
    /// Bracketed token form used everywhere a piece is shown: `[T 12]`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} {}]", self.kind.as_char(), self.id)
    }
}

/// Capability tiers, one per original challenge level
///
/// The three tiers are one system with growing capability; the session
/// rejects actions the active tier does not offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Challenge {
    /// Queue only: play and insert by hand, no auto-refill
    Novice,
    /// Queue + reserve pile, queue kept full automatically
    Adventurer,
    /// Adventurer plus the two swap operations
    Master,
}

impl Challenge {
    /// Parse from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "novice" => Some(Challenge::Novice),
            "adventurer" => Some(Challenge::Adventurer),
            "master" => Some(Challenge::Master),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Challenge::Novice => "novice",
            Challenge::Adventurer => "adventurer",
            Challenge::Master => "master",
        }
    }

    /// Whether this tier offers the given menu action
    pub fn allows(&self, action: MenuAction) -> bool {
        match action {
            MenuAction::Quit => true,
            MenuAction::Play => true,
            MenuAction::Insert => *self == Challenge::Novice,
            MenuAction::Reserve | MenuAction::UseReserved => *self != Challenge::Novice,
            MenuAction::SwapFrontTop | MenuAction::BulkSwap => *self == Challenge::Master,
        }
    }

    /// Menu actions for this tier, in menu order (quit excluded)
    pub fn menu(&self) -> &'static [MenuAction] {
        match self {
            Challenge::Novice => &[MenuAction::Play, MenuAction::Insert],
            Challenge::Adventurer => &[
                MenuAction::Play,
                MenuAction::Reserve,
                MenuAction::UseReserved,
            ],
            Challenge::Master => &[
                MenuAction::Play,
                MenuAction::Reserve,
                MenuAction::UseReserved,
                MenuAction::SwapFrontTop,
                MenuAction::BulkSwap,
            ],
        }
    }

    /// Map a menu selection (1-based; 0 = quit) to an action
    pub fn select(&self, choice: u32) -> Option<MenuAction> {
        if choice == 0 {
            return Some(MenuAction::Quit);
        }
        self.menu().get(choice as usize - 1).copied()
    }
}

/// User-selectable operations on the piece manager
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Remove the front piece from the queue
    Play,
    /// Enqueue one freshly generated piece (novice tier only)
    Insert,
    /// Move the front piece onto the reserve pile, refill the queue
    Reserve,
    /// Pop the top of the reserve pile
    UseReserved,
    /// Exchange queue front with pile top in place
    SwapFrontTop,
    /// Exchange the 3 front queue pieces with the 3 pile pieces
    BulkSwap,
    /// Leave the program
    Quit,
}

impl MenuAction {
    /// Parse action from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "play" => Some(MenuAction::Play),
            "insert" => Some(MenuAction::Insert),
            "reserve" => Some(MenuAction::Reserve),
            "usereserved" => Some(MenuAction::UseReserved),
            "swapfronttop" => Some(MenuAction::SwapFrontTop),
            "bulkswap" => Some(MenuAction::BulkSwap),
            "quit" => Some(MenuAction::Quit),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            MenuAction::Play => "play",
            MenuAction::Insert => "insert",
            MenuAction::Reserve => "reserve",
            MenuAction::UseReserved => "useReserved",
            MenuAction::SwapFrontTop => "swapFrontTop",
            MenuAction::BulkSwap => "bulkSwap",
            MenuAction::Quit => "quit",
        }
    }

    /// Human-readable menu label
    pub fn label(&self) -> &'static str {
        match self {
            MenuAction::Play => "Play the piece at the front of the queue",
            MenuAction::Insert => "Insert a new piece at the back of the queue",
            MenuAction::Reserve => "Send the front piece to the reserve pile",
            MenuAction::UseReserved => "Use a piece from the reserve pile",
            MenuAction::SwapFrontTop => "Swap the queue front with the pile top",
            MenuAction::BulkSwap => "Swap the first 3 queue pieces with the 3 pile pieces",
            MenuAction::Quit => "Quit",
        }
    }
}

/// Queue-local failure signals
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    Empty,
    Full,
}

impl fmt::Display for QueueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueueError::Empty => write!(f, "the piece queue is empty"),
            QueueError::Full => write!(f, "the piece queue is full"),
        }
    }
}

impl std::error::Error for QueueError {}

/// Pile-local failure signals
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PileError {
    Empty,
    Full,
}

impl fmt::Display for PileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PileError::Empty => write!(f, "the reserve pile is empty"),
            PileError::Full => write!(f, "the reserve pile is full"),
        }
    }
}

impl std::error::Error for PileError {}

/// Failure signals for session-level operations
///
/// Every variant is a precondition violation. Operations check all of their
/// preconditions before mutating anything, so a returned error guarantees
/// both containers are untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionError {
    /// The queue has no piece to play, reserve or swap
    QueueEmpty,
    /// The queue has no free slot for an insert
    QueueFull,
    /// The reserve pile has no piece to use or swap
    PileEmpty,
    /// The reserve pile cannot take another piece
    PileFull,
    /// Bulk swap needs at least 3 pieces in the queue
    QueueTooShort,
    /// Bulk swap needs the pile to hold exactly 3 pieces
    PileNotFull,
    /// The active challenge tier does not offer this action
    NotAvailable,
}

impl fmt::Display for ActionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionError::QueueEmpty => write!(f, "the piece queue is empty"),
            ActionError::QueueFull => write!(f, "the piece queue is full"),
            ActionError::PileEmpty => write!(f, "the reserve pile is empty"),
            ActionError::PileFull => write!(f, "the reserve pile is full"),
            ActionError::QueueTooShort => {
                write!(f, "the queue must hold at least 3 pieces for a bulk swap")
            }
            ActionError::PileNotFull => {
                write!(f, "the pile must hold exactly 3 pieces for a bulk swap")
            }
            ActionError::NotAvailable => {
                write!(f, "that action is not available in this challenge")
            }
        }
    }
}

impl std::error::Error for ActionError {}

impl From<QueueError> for ActionError {
    fn from(err: QueueError) -> Self {
        match err {
            QueueError::Empty => ActionError::QueueEmpty,
            QueueError::Full => ActionError::QueueFull,
        }
    }
}

impl From<PileError> for ActionError {
    fn from(err: PileError) -> Self {
        match err {
            PileError::Empty => ActionError::PileEmpty,
            PileError::Full => ActionError::PileFull,
        }
    }
}
