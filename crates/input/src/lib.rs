//! Console input module.
//!
//! Reads one menu selection per line from any `BufRead` source and maps it to a
//! [`crate::types::MenuChoice`]. Anything that is not one of the menu codes
//! (out-of-range numbers, words, blank lines) becomes [`Selection::Invalid`].

pub mod map;
pub mod reader;

pub use tetris_stack_types as types;

pub use map::{parse_selection, Selection};
pub use reader::MenuReader;
