//! Console rendering module.
//!
//! This is a small, line-oriented output layer for the interactive menu.
//! Building the text is kept apart from writing it:
//!
//! - [`state_view`] turns a snapshot into styled lines (pure, testable)
//! - [`renderer`] encodes those lines as crossterm commands and flushes them
//!
//! Goals:
//! - Keep `core` free of any I/O
//! - Color each `[S id]` token by shape when the console supports it
//! - Write the same text without escape sequences when color is off

pub mod renderer;
pub mod state_view;
pub mod style;

pub use tetris_stack_core as core;
pub use tetris_stack_types as types;

pub use renderer::{encode_line_into, ConsoleRenderer};
pub use state_view::{piece_span, StateView, EMPTY_PLACEHOLDER, PROMPT};
pub use style::{line_text, shape_color, Rgb, Span, SpanStyle, ViewLine};
