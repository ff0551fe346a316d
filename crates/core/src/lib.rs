//! Core session logic - pure, deterministic, and testable
//!
//! This crate holds the whole piece-manager behind the console menu. It has
//! **zero dependencies** on rendering or I/O, making it:
//!
//! - **Deterministic**: same seed, same session (piece kinds and ids)
//! - **Testable**: every operation is a plain function over two containers
//! - **Portable**: usable from any front end
//!
//! # Module structure
//!
//! - [`queue`]: fixed-capacity circular queue of upcoming pieces (FIFO)
//! - [`pile`]: fixed-capacity reserve stack (LIFO)
//! - [`rng`]: small LCG random source
//! - [`generator`]: random piece kinds paired with unique monotonic ids
//! - [`ops`]: transfer and swap operations between queue and pile
//! - [`session`]: the controller tying it all together, gated by challenge tier
//! - [`snapshot`]: copyable state view for rendering and assertions
//!
//! # Example
//!
//! ```
//! use tetris_stack_core::GameSession;
//! use tetris_stack_types::{Challenge, MenuAction};
//!
//! let mut session = GameSession::new(Challenge::Master, 12345);
//! session.apply(MenuAction::Reserve).unwrap();
//! session.apply(MenuAction::SwapFrontTop).unwrap();
//!
//! // The queue is kept full through it all.
//! assert!(session.queue().is_full());
//! ```

pub mod generator;
pub mod ops;
pub mod pile;
pub mod queue;
pub mod rng;
pub mod session;
pub mod snapshot;

pub use tetris_stack_types as types;

// Re-export commonly used types for convenience
pub use generator::{IdAllocator, PieceGenerator};
pub use pile::ReservePile;
pub use queue::PieceQueue;
pub use rng::SimpleRng;
pub use session::{ActionOutcome, GameSession};
pub use snapshot::SessionSnapshot;
