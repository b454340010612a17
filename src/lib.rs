//! Tetris Stack (workspace facade crate).
//!
//! This package exposes the `tetris_stack::{core,input,journal,term,types}` public
//! API while the implementation lives in dedicated crates under `crates/`.
//! The interactive loop and its configuration live here.

pub mod config;
pub mod session;

pub use tetris_stack_core as core;
pub use tetris_stack_input as input;
pub use tetris_stack_journal as journal;
pub use tetris_stack_term as term;
pub use tetris_stack_types as types;

pub use config::AppConfig;
pub use session::Session;
