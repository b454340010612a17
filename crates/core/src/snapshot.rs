use arrayvec::ArrayVec;

use crate::types::{Piece, PieceId, QUEUE_CAPACITY, RESERVE_CAPACITY};

/// Owned copy of both collections at one point in time.
///
/// `queue` is front-to-back, `reserve` is top-to-base.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct StackSnapshot {
    pub queue: ArrayVec<Piece, QUEUE_CAPACITY>,
    pub reserve: ArrayVec<Piece, RESERVE_CAPACITY>,
    pub next_id: PieceId,
}

impl StackSnapshot {
    pub fn clear(&mut self) {
        self.queue.clear();
        self.reserve.clear();
        self.next_id = 0;
    }

    /// Total pieces held across both collections
    pub fn piece_count(&self) -> usize {
        self.queue.len() + self.reserve.len()
    }
}
