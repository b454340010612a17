//! Core logic module - pure, deterministic, and testable
//!
//! This module contains the next-pieces bookkeeping: the circular queue of
//! upcoming pieces, the reserve stack, the piece generator, and the five menu
//! operations that move pieces between them.
//! It has **zero dependencies** on the console, making it:
//!
//! - **Deterministic**: Same seed produces identical runs
//! - **Testable**: Every operation returns an [`Outcome`] instead of printing
//! - **Allocation-free**: Both collections live inline in fixed-size storage
//!
//! # Module Structure
//!
//! - [`queue`]: circular FIFO of upcoming pieces (capacity 5)
//! - [`reserve`]: LIFO of reserved pieces (capacity 3)
//! - [`rng`]: LCG and the piece generator with its id counter
//! - [`game_state`]: the run state and the five operations
//! - [`outcome`]: operation results and rejection reasons
//! - [`snapshot`]: owned copy of both collections for rendering and logging
//!
//! # Rules
//!
//! - Play and reserve refill the queue immediately, so a non-empty queue keeps its length
//! - Use discards the reserve top without generating a replacement
//! - Swaps only exchange positions: no lengths change, no pieces are created or dropped
//! - Invalid conditions are rejected as no-ops; nothing here can fail
//!
//! # Example
//!
//! ```
//! use tetris_stack_core::{GameState, Outcome};
//! use tetris_stack_types::MenuChoice;
//!
//! let mut game = GameState::new(12345);
//! assert_eq!(game.queue().len(), 5);
//!
//! assert!(matches!(game.apply(Some(MenuChoice::Reserve)), Outcome::Reserved(_)));
//! assert_eq!(game.reserve().len(), 1);
//! assert_eq!(game.queue().len(), 5);
//! assert_eq!(game.next_id(), 6);
//! ```

pub mod game_state;
pub mod outcome;
pub mod queue;
pub mod reserve;
pub mod rng;
pub mod snapshot;

pub use tetris_stack_types as types;

// Re-export commonly used types for convenience
pub use game_state::GameState;
pub use outcome::{Outcome, Rejection};
pub use queue::PieceQueue;
pub use reserve::ReserveStack;
pub use rng::{PieceGenerator, SimpleRng};
pub use snapshot::StackSnapshot;
