//! Game state module - the next-pieces bookkeeping
//!
//! This module ties together the queue, the reserve stack and the generator.
//! It implements the five menu operations and keeps the refill policy: every
//! piece that leaves the queue through play or reserve is immediately replaced
//! by a freshly generated one, so the queue length never changes on success.

use std::mem;

use crate::outcome::{Outcome, Rejection};
use crate::snapshot::StackSnapshot;
use crate::types::*;
use crate::{PieceGenerator, PieceQueue, ReserveStack};

/// Complete run state
#[derive(Debug, Clone)]
pub struct GameState {
    queue: PieceQueue,
    reserve: ReserveStack,
    generator: PieceGenerator,
    /// Number of menu choices dispatched so far (exit and invalid included)
    turns: u32,
}

impl GameState {
    /// Create a new run: queue filled to capacity, reserve empty, counter at 5
    pub fn new(seed: u32) -> Self {
        let mut generator = PieceGenerator::new(seed);
        let mut queue = PieceQueue::new();
        while !queue.is_full() {
            queue.enqueue(generator.generate());
        }

        Self::from_parts(queue, ReserveStack::new(), generator)
    }

    /// Build a state from explicit collections.
    ///
    /// Used to set up arrangements the menu alone cannot reach (e.g. a short queue).
    pub fn from_parts(queue: PieceQueue, reserve: ReserveStack, generator: PieceGenerator) -> Self {
        Self {
            queue,
            reserve,
            generator,
            turns: 0,
        }
    }

    pub fn queue(&self) -> &PieceQueue {
        &self.queue
    }

    pub fn reserve(&self) -> &ReserveStack {
        &self.reserve
    }

    /// Id the next generated piece will carry
    pub fn next_id(&self) -> PieceId {
        self.generator.next_id()
    }

    pub fn seed(&self) -> u32 {
        self.generator.seed()
    }

    pub fn turns(&self) -> u32 {
        self.turns
    }

    pub fn snapshot_into(&self, out: &mut StackSnapshot) {
        out.clear();
        out.queue.extend(self.queue.iter().copied());
        out.reserve.extend(self.reserve.iter().copied());
        out.next_id = self.generator.next_id();
    }

    pub fn snapshot(&self) -> StackSnapshot {
        let mut s = StackSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Generate one piece and append it to the queue.
    ///
    /// Only called right after a successful dequeue, so there is always room.
    fn refill(&mut self) {
        let piece = self.generator.generate();
        let accepted = self.queue.enqueue(piece);
        debug_assert!(accepted, "refill called on a full queue");
    }

    /// Play the front piece and refill the queue
    pub fn play_front(&mut self) -> Outcome {
        let Some(piece) = self.queue.dequeue() else {
            return Outcome::Rejected(Rejection::NothingToPlay);
        };
        self.refill();
        Outcome::Played(piece)
    }

    /// Move the front piece onto the reserve stack and refill the queue.
    ///
    /// The full-stack check comes first and does not look at the queue.
    pub fn reserve_front(&mut self) -> Outcome {
        if self.reserve.is_full() {
            return Outcome::Rejected(Rejection::ReserveFull);
        }
        let Some(piece) = self.queue.dequeue() else {
            return Outcome::Idle;
        };
        let pushed = self.reserve.push(piece);
        debug_assert!(pushed, "reserve checked for room above");
        self.refill();
        Outcome::Reserved(piece)
    }

    /// Discard the top of the reserve stack (no replacement is generated)
    pub fn use_reserved(&mut self) -> Outcome {
        match self.reserve.pop() {
            Some(piece) => Outcome::Used(piece),
            None => Outcome::Rejected(Rejection::NothingToUse),
        }
    }

    /// Exchange the queue front with the reserve top in place
    pub fn swap_one(&mut self) -> Outcome {
        match (self.queue.front_mut(), self.reserve.top_mut()) {
            (Some(front), Some(top)) => {
                mem::swap(front, top);
                Outcome::SwappedOne {
                    from_queue: *top,
                    from_reserve: *front,
                }
            }
            _ => Outcome::Rejected(Rejection::InsufficientPieces),
        }
    }

    /// Exchange the first three queue pieces with the three top reserve pieces.
    ///
    /// Queue position `i` trades with reserve depth `i`. Both sides need at
    /// least `MULTI_SWAP_DEPTH` pieces.
    pub fn swap_three(&mut self) -> Outcome {
        if self.queue.len() < MULTI_SWAP_DEPTH || self.reserve.len() < MULTI_SWAP_DEPTH {
            return Outcome::Rejected(Rejection::InsufficientForMultiSwap);
        }

        for depth in 0..MULTI_SWAP_DEPTH {
            if let (Some(q), Some(r)) = (
                self.queue.get_mut(depth),
                self.reserve.get_from_top_mut(depth),
            ) {
                mem::swap(q, r);
            }
        }
        Outcome::SwappedThree
    }

    /// Dispatch one menu selection.
    ///
    /// `None` stands for any value outside the menu and is rejected without
    /// touching the collections. `Exit` performs no mutation either.
    pub fn apply(&mut self, choice: Option<MenuChoice>) -> Outcome {
        self.turns = self.turns.wrapping_add(1);
        match choice {
            Some(MenuChoice::Play) => self.play_front(),
            Some(MenuChoice::Reserve) => self.reserve_front(),
            Some(MenuChoice::UseReserved) => self.use_reserved(),
            Some(MenuChoice::SwapOne) => self.swap_one(),
            Some(MenuChoice::SwapThree) => self.swap_three(),
            Some(MenuChoice::Exit) => Outcome::Exit,
            None => Outcome::Rejected(Rejection::InvalidSelection),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
