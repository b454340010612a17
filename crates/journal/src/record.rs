//! Record types written to the journal, one per line.

use serde::{Deserialize, Serialize};

use crate::core::{Outcome, StackSnapshot};
use crate::types::{MenuChoice, Piece, PieceId};

/// A piece as it appears in the journal: `{"shape":"T","id":3}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceRecord {
    pub shape: String,
    pub id: PieceId,
}

impl From<&Piece> for PieceRecord {
    fn from(piece: &Piece) -> Self {
        Self {
            shape: piece.shape().as_str().to_string(),
            id: piece.id(),
        }
    }
}

fn pieces(list: &[Piece]) -> Vec<PieceRecord> {
    list.iter().map(PieceRecord::from).collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum JournalRecord {
    /// Initial arrangement, written once when the session opens
    Start {
        ts: u64,
        seed: u32,
        queue: Vec<PieceRecord>,
        reserve: Vec<PieceRecord>,
        next_id: PieceId,
    },
    /// One dispatched menu selection and the arrangement it left behind
    Turn {
        seq: u64,
        ts: u64,
        /// Line as typed (trimmed)
        input: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        code: Option<i64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        choice: Option<String>,
        outcome: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        message: Option<String>,
        /// Front-to-back
        queue: Vec<PieceRecord>,
        /// Top-to-base
        reserve: Vec<PieceRecord>,
        next_id: PieceId,
    },
    /// Session end
    Exit { seq: u64, ts: u64, turns: u32 },
}

impl JournalRecord {
    pub fn start(ts: u64, seed: u32, snap: &StackSnapshot) -> Self {
        JournalRecord::Start {
            ts,
            seed,
            queue: pieces(&snap.queue),
            reserve: pieces(&snap.reserve),
            next_id: snap.next_id,
        }
    }

    pub fn turn(
        seq: u64,
        ts: u64,
        input: &str,
        code: Option<i64>,
        choice: Option<MenuChoice>,
        outcome: &Outcome,
        snap: &StackSnapshot,
    ) -> Self {
        JournalRecord::Turn {
            seq,
            ts,
            input: input.to_string(),
            code,
            choice: choice.map(|c| c.as_str().to_string()),
            outcome: outcome.as_str().to_string(),
            message: outcome.status_line(),
            queue: pieces(&snap.queue),
            reserve: pieces(&snap.reserve),
            next_id: snap.next_id,
        }
    }

    pub fn exit(seq: u64, ts: u64, turns: u32) -> Self {
        JournalRecord::Exit { seq, ts, turns }
    }
}
