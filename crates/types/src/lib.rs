//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, console rendering, session journal).
//!
//! # Capacities
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `QUEUE_CAPACITY` | 5 | Upcoming pieces held by the circular queue |
//! | `RESERVE_CAPACITY` | 3 | Pieces the player may set aside |
//! | `MULTI_SWAP_DEPTH` | 3 | Elements exchanged by the multi-swap |
//!
//! # Examples
//!
//! ```
//! use tetris_stack_types::{MenuChoice, Piece, Shape, QUEUE_CAPACITY};
//!
//! let piece = Piece::new(Shape::T, 7);
//! assert_eq!(piece.to_string(), "[T 7]");
//!
//! // Parse from string (case-insensitive)
//! assert_eq!(Shape::from_str("l"), Some(Shape::L));
//!
//! // Menu codes form a closed set
//! assert_eq!(MenuChoice::from_code(2), Some(MenuChoice::Reserve));
//! assert_eq!(MenuChoice::from_code(9), None);
//!
//! assert_eq!(QUEUE_CAPACITY, 5);
//! ```

use std::fmt;

/// Number of upcoming pieces the queue holds (5)
pub const QUEUE_CAPACITY: usize = 5;

/// Number of pieces the reserve stack holds (3)
pub const RESERVE_CAPACITY: usize = 3;

/// Number of queue/reserve pairs exchanged by the multi-swap (3)
pub const MULTI_SWAP_DEPTH: usize = 3;

/// Identifier assigned to each generated piece.
///
/// Strictly increasing in generation order and unique for the lifetime of a run.
pub type PieceId = u32;

/// The shape labels a generated piece can carry
///
/// - **I**: horizontal bar
/// - **O**: 2x2 square
/// - **T**: T-shaped
/// - **L**: L-shaped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    I,
    O,
    T,
    L,
}

impl Shape {
    /// Every shape, in generation-table order.
    pub const ALL: [Shape; 4] = [Shape::I, Shape::O, Shape::T, Shape::L];

    /// Parse shape from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_stack_types::Shape;
    ///
    /// assert_eq!(Shape::from_str("i"), Some(Shape::I));
    /// assert_eq!(Shape::from_str("O"), Some(Shape::O));
    /// assert_eq!(Shape::from_str("s"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "i" => Some(Shape::I),
            "o" => Some(Shape::O),
            "t" => Some(Shape::T),
            "l" => Some(Shape::L),
            _ => None,
        }
    }

    /// Uppercase label used in the `[S id]` display tokens
    pub fn as_char(&self) -> char {
        match self {
            Shape::I => 'I',
            Shape::O => 'O',
            Shape::T => 'T',
            Shape::L => 'L',
        }
    }

    /// Convert to uppercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Shape::I => "I",
            Shape::O => "O",
            Shape::T => "T",
            Shape::L => "L",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A generated piece: a shape label paired with its id.
///
/// Pieces are never mutated after creation; they move by value between the
/// queue and the reserve stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    shape: Shape,
    id: PieceId,
}

impl Piece {
    pub fn new(shape: Shape, id: PieceId) -> Self {
        Self { shape, id }
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn id(&self) -> PieceId {
        self.id
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} {}]", self.shape.as_char(), self.id)
    }
}

/// Menu selections offered every turn
///
/// The numeric codes are the ones typed at the prompt. Any other value is an
/// invalid selection and is handled by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuChoice {
    /// Leave the loop (code 0)
    Exit,
    /// Play the front piece of the queue (code 1)
    Play,
    /// Move the front piece onto the reserve stack (code 2)
    Reserve,
    /// Discard the top of the reserve stack (code 3)
    UseReserved,
    /// Exchange queue front with reserve top (code 4)
    SwapOne,
    /// Exchange the three front queue pieces with the three top reserve pieces (code 5)
    SwapThree,
}

impl MenuChoice {
    /// Order in which entries are printed in the menu.
    pub const MENU_ORDER: [MenuChoice; 6] = [
        MenuChoice::Play,
        MenuChoice::Reserve,
        MenuChoice::UseReserved,
        MenuChoice::SwapOne,
        MenuChoice::SwapThree,
        MenuChoice::Exit,
    ];

    /// Map a typed menu code to a choice
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_stack_types::MenuChoice;
    ///
    /// assert_eq!(MenuChoice::from_code(0), Some(MenuChoice::Exit));
    /// assert_eq!(MenuChoice::from_code(5), Some(MenuChoice::SwapThree));
    /// assert_eq!(MenuChoice::from_code(-1), None);
    /// ```
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(MenuChoice::Exit),
            1 => Some(MenuChoice::Play),
            2 => Some(MenuChoice::Reserve),
            3 => Some(MenuChoice::UseReserved),
            4 => Some(MenuChoice::SwapOne),
            5 => Some(MenuChoice::SwapThree),
            _ => None,
        }
    }

    pub fn code(&self) -> u8 {
        match self {
            MenuChoice::Exit => 0,
            MenuChoice::Play => 1,
            MenuChoice::Reserve => 2,
            MenuChoice::UseReserved => 3,
            MenuChoice::SwapOne => 4,
            MenuChoice::SwapThree => 5,
        }
    }

    /// Menu text shown next to the code
    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::Exit => "exit",
            MenuChoice::Play => "play front piece",
            MenuChoice::Reserve => "reserve piece (queue -> stack)",
            MenuChoice::UseReserved => "use reserved piece (stack -> discard)",
            MenuChoice::SwapOne => "swap front-of-queue with top-of-stack",
            MenuChoice::SwapThree => "swap 3 front queue elements with 3 stack elements",
        }
    }

    /// Convert to snake_case string for the session journal
    pub fn as_str(&self) -> &'static str {
        match self {
            MenuChoice::Exit => "exit",
            MenuChoice::Play => "play",
            MenuChoice::Reserve => "reserve",
            MenuChoice::UseReserved => "use_reserved",
            MenuChoice::SwapOne => "swap_one",
            MenuChoice::SwapThree => "swap_three",
        }
    }
}
