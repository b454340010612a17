//! Reserve module - pieces set aside by the player
//!
//! A bounded LIFO of `RESERVE_CAPACITY` pieces stored inline (no allocation).
//! Depth is counted from the top: depth 0 is the most recently reserved piece.

use arrayvec::ArrayVec;

use crate::types::{Piece, RESERVE_CAPACITY};

/// Fixed-capacity reserve stack
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReserveStack {
    /// Base at index 0, top at the end
    pieces: ArrayVec<Piece, RESERVE_CAPACITY>,
}

impl ReserveStack {
    pub fn new() -> Self {
        Self {
            pieces: ArrayVec::new(),
        }
    }

    /// Push a piece on top.
    ///
    /// Returns false (and leaves the stack untouched) when already full.
    pub fn push(&mut self, piece: Piece) -> bool {
        self.pieces.try_push(piece).is_ok()
    }

    pub fn pop(&mut self) -> Option<Piece> {
        self.pieces.pop()
    }

    pub fn top(&self) -> Option<&Piece> {
        self.pieces.last()
    }

    pub fn top_mut(&mut self) -> Option<&mut Piece> {
        self.pieces.last_mut()
    }

    #[inline(always)]
    fn index_from_top(&self, depth: usize) -> Option<usize> {
        self.pieces.len().checked_sub(depth + 1)
    }

    /// Piece at `depth` below the top (0 = top)
    pub fn get_from_top(&self, depth: usize) -> Option<&Piece> {
        self.index_from_top(depth).map(|idx| &self.pieces[idx])
    }

    pub fn get_from_top_mut(&mut self, depth: usize) -> Option<&mut Piece> {
        let idx = self.index_from_top(depth)?;
        Some(&mut self.pieces[idx])
    }

    /// Iterate top-to-base
    pub fn iter(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.pieces.iter().rev()
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn capacity(&self) -> usize {
        RESERVE_CAPACITY
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.pieces.is_full()
    }
}
