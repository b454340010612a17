//! Queue module - the upcoming pieces
//!
//! A fixed-capacity circular buffer of `QUEUE_CAPACITY` slots.
//! Storage is a flat array plus explicit `head`, `tail` and `len`, so an empty
//! queue and a full queue are never confused when `head == tail`.
//! Positions used by the public accessors are logical: 0 is the front (the next
//! piece to play), `len - 1` is the most recently enqueued piece.

use crate::types::{Piece, QUEUE_CAPACITY};

/// Circular FIFO of upcoming pieces
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceQueue {
    slots: [Option<Piece>; QUEUE_CAPACITY],
    /// Physical index of the front piece
    head: usize,
    /// Physical index where the next enqueue lands
    tail: usize,
    len: usize,
}

impl PieceQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self {
            slots: [None; QUEUE_CAPACITY],
            head: 0,
            tail: 0,
            len: 0,
        }
    }

    #[inline(always)]
    fn physical(&self, pos: usize) -> usize {
        (self.head + pos) % QUEUE_CAPACITY
    }

    /// Append a piece at the back.
    ///
    /// Returns false (and leaves the queue untouched) when already full.
    pub fn enqueue(&mut self, piece: Piece) -> bool {
        if self.is_full() {
            return false;
        }
        self.slots[self.tail] = Some(piece);
        self.tail = (self.tail + 1) % QUEUE_CAPACITY;
        self.len += 1;
        true
    }

    /// Remove and return the front piece
    pub fn dequeue(&mut self) -> Option<Piece> {
        if self.is_empty() {
            return None;
        }
        let piece = self.slots[self.head].take();
        self.head = (self.head + 1) % QUEUE_CAPACITY;
        self.len -= 1;
        piece
    }

    /// Peek at the front piece
    pub fn front(&self) -> Option<&Piece> {
        self.get(0)
    }

    pub fn front_mut(&mut self) -> Option<&mut Piece> {
        self.get_mut(0)
    }

    /// Piece at logical position `pos` counted from the front
    pub fn get(&self, pos: usize) -> Option<&Piece> {
        if pos >= self.len {
            return None;
        }
        self.slots[self.physical(pos)].as_ref()
    }

    pub fn get_mut(&mut self, pos: usize) -> Option<&mut Piece> {
        if pos >= self.len {
            return None;
        }
        let idx = self.physical(pos);
        self.slots[idx].as_mut()
    }

    /// Iterate front-to-back.
    ///
    /// Each call starts a fresh pass over the current contents.
    pub fn iter(&self) -> impl Iterator<Item = &Piece> + '_ {
        (0..self.len).filter_map(move |pos| self.slots[self.physical(pos)].as_ref())
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn capacity(&self) -> usize {
        QUEUE_CAPACITY
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == QUEUE_CAPACITY
    }
}

impl Default for PieceQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Shape;

    fn piece(id: u32) -> Piece {
        Piece::new(Shape::ALL[id as usize % Shape::ALL.len()], id)
    }

    fn ids(queue: &PieceQueue) -> Vec<u32> {
        queue.iter().map(|p| p.id()).collect()
    }

    #[test]
    fn test_new_queue_is_empty() {
        let queue = PieceQueue::new();
        assert!(queue.is_empty());
        assert!(!queue.is_full());
        assert_eq!(queue.len(), 0);
        assert_eq!(queue.capacity(), 5);
        assert!(queue.front().is_none());
        assert_eq!(queue.iter().count(), 0);
    }

    #[test]
    fn test_fifo_order() {
        let mut queue = PieceQueue::new();
        for id in 0..3 {
            assert!(queue.enqueue(piece(id)));
        }
        assert_eq!(queue.dequeue().map(|p| p.id()), Some(0));
        assert_eq!(queue.dequeue().map(|p| p.id()), Some(1));
        assert_eq!(queue.dequeue().map(|p| p.id()), Some(2));
        assert_eq!(queue.dequeue(), None);
    }

    #[test]
    fn test_enqueue_when_full_is_ignored() {
        let mut queue = PieceQueue::new();
        for id in 0..5 {
            assert!(queue.enqueue(piece(id)));
        }
        assert!(queue.is_full());

        let before = queue.clone();
        assert!(!queue.enqueue(piece(99)));
        assert_eq!(queue, before);
        assert_eq!(ids(&queue), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_dequeue_empty_leaves_state() {
        let mut queue = PieceQueue::new();
        assert_eq!(queue.dequeue(), None);
        assert_eq!(queue.len(), 0);

        // Indices must not drift on failed dequeue.
        queue.enqueue(piece(7));
        assert_eq!(queue.front().map(|p| p.id()), Some(7));
    }

    #[test]
    fn test_wraparound_keeps_logical_order() {
        let mut queue = PieceQueue::new();
        for id in 0..5 {
            queue.enqueue(piece(id));
        }
        // Rotate through the buffer several times.
        for id in 5..17 {
            let front = queue.dequeue().unwrap();
            assert_eq!(front.id(), id - 5);
            assert!(queue.enqueue(piece(id)));
            assert!(queue.is_full());
        }
        assert_eq!(ids(&queue), vec![12, 13, 14, 15, 16]);
        assert_eq!(queue.get(4).map(|p| p.id()), Some(16));
        assert!(queue.get(5).is_none());
    }

    #[test]
    fn test_full_and_empty_distinguished_when_head_meets_tail() {
        let mut queue = PieceQueue::new();
        for id in 0..5 {
            queue.enqueue(piece(id));
        }
        assert_eq!(queue.head, queue.tail);
        assert!(queue.is_full());

        for _ in 0..5 {
            queue.dequeue();
        }
        assert_eq!(queue.head, queue.tail);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_iter_is_restartable() {
        let mut queue = PieceQueue::new();
        for id in 0..4 {
            queue.enqueue(piece(id));
        }
        queue.dequeue();
        assert_eq!(ids(&queue), vec![1, 2, 3]);
        assert_eq!(ids(&queue), vec![1, 2, 3]);
    }

    #[test]
    fn test_get_mut_targets_logical_position() {
        let mut queue = PieceQueue::new();
        for id in 0..5 {
            queue.enqueue(piece(id));
        }
        queue.dequeue();
        queue.dequeue();
        queue.enqueue(piece(5));

        *queue.get_mut(3).unwrap() = piece(50);
        assert_eq!(ids(&queue), vec![2, 3, 4, 50]);

        *queue.front_mut().unwrap() = piece(20);
        assert_eq!(ids(&queue), vec![20, 3, 4, 50]);
    }
}
