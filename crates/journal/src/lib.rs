//! Session journal - optional JSON-lines record of a run
//!
//! When enabled, every turn appends one JSON object per line to a file:
//!
//! ```text
//! {"type":"start","ts":1760000000000,"seed":42,"queue":[{"shape":"I","id":0},...],"reserve":[],"next_id":5}
//! {"type":"turn","seq":1,"ts":1760000000500,"input":"2","code":2,"choice":"reserve","outcome":"reserved","message":"Reserving piece: [I 0]","queue":[...],"reserve":[{"shape":"I","id":0}],"next_id":6}
//! {"type":"exit","seq":2,"ts":1760000001000,"turns":2}
//! ```
//!
//! The journal never interrupts a session: if the file cannot be written, the
//! failure is reported once on stderr and the journal turns itself off.
//!
//! # Environment Variables
//!
//! - `TETRIS_STACK_LOG_PATH`: journal file (appended to); unset or empty disables it

pub mod record;
pub mod writer;

pub use tetris_stack_core as core;
pub use tetris_stack_types as types;

pub use record::{JournalRecord, PieceRecord};
pub use writer::Journal;
