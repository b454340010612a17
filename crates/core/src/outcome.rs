//! Operation results reported back to the session loop.
//!
//! Nothing here is fatal. A rejected operation leaves both collections exactly
//! as they were and carries the reason so the caller can print it.

use std::fmt;

use crate::types::Piece;

/// Why an operation did nothing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rejection {
    /// Play with an empty queue
    NothingToPlay,
    /// Reserve with a full stack
    ReserveFull,
    /// Use with an empty stack
    NothingToUse,
    /// Single swap with either collection empty
    InsufficientPieces,
    /// Multi-swap without three pieces on both sides
    InsufficientForMultiSwap,
    /// Menu value outside the known choices
    InvalidSelection,
}

impl Rejection {
    /// Stable snake_case name for the session journal
    pub fn as_str(&self) -> &'static str {
        match self {
            Rejection::NothingToPlay => "nothing_to_play",
            Rejection::ReserveFull => "reserve_full",
            Rejection::NothingToUse => "nothing_to_use",
            Rejection::InsufficientPieces => "insufficient_pieces",
            Rejection::InsufficientForMultiSwap => "insufficient_for_multi_swap",
            Rejection::InvalidSelection => "invalid_selection",
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Rejection::NothingToPlay => "Queue empty! Nothing to play.",
            Rejection::ReserveFull => "Stack full! Cannot reserve more pieces.",
            Rejection::NothingToUse => "Stack empty! Nothing to use.",
            Rejection::InsufficientPieces => "Insufficient pieces to swap.",
            Rejection::InsufficientForMultiSwap => "Insufficient pieces for multi-swap.",
            Rejection::InvalidSelection => "Invalid option!",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for Rejection {}

/// Result of dispatching one menu choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Front piece left the queue; a replacement was enqueued
    Played(Piece),
    /// Front piece moved onto the stack; a replacement was enqueued
    Reserved(Piece),
    /// Top of the stack was discarded
    Used(Piece),
    /// Queue front and stack top traded places
    SwappedOne { from_queue: Piece, from_reserve: Piece },
    /// Three front queue pieces traded places with the three top stack pieces
    SwappedThree,
    /// Reserve requested with an empty queue: nothing happened, nothing to report
    Idle,
    /// Exit requested
    Exit,
    Rejected(Rejection),
}

impl Outcome {
    /// Human-readable status line, if the outcome has one
    pub fn status_line(&self) -> Option<String> {
        match self {
            Outcome::Played(piece) => Some(format!("Playing piece: {}", piece)),
            Outcome::Reserved(piece) => Some(format!("Reserving piece: {}", piece)),
            Outcome::Used(piece) => Some(format!("Using reserved piece: {}", piece)),
            Outcome::SwappedOne { .. } => {
                Some("Swapped front of queue with top of stack.".to_string())
            }
            Outcome::SwappedThree => Some(
                "Multi-swap done between the first 3 of the queue and the 3 of the stack."
                    .to_string(),
            ),
            Outcome::Idle => None,
            Outcome::Exit => Some("Shutting down Tetris Stack...".to_string()),
            Outcome::Rejected(reason) => Some(reason.to_string()),
        }
    }

    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            Outcome::Rejected(reason) => Some(*reason),
            _ => None,
        }
    }

    pub fn is_rejected(&self) -> bool {
        self.rejection().is_some()
    }

    /// Stable snake_case name for the session journal
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Played(_) => "played",
            Outcome::Reserved(_) => "reserved",
            Outcome::Used(_) => "used",
            Outcome::SwappedOne { .. } => "swapped_one",
            Outcome::SwappedThree => "swapped_three",
            Outcome::Idle => "idle",
            Outcome::Exit => "exit",
            Outcome::Rejected(reason) => reason.as_str(),
        }
    }
}
