//! RNG module - 7-bag piece generation with a fixed-length preview queue
//!
//! Each bag holds one of each kind (I, O, T, S, Z, J, L) in shuffled order and
//! is consumed without replacement. An empty bag is refilled with a fresh
//! shuffled set right before the next draw, so every run of 7 draws between
//! refills is a permutation of all kinds.
//!
//! The preview queue sits in front of the bag: it is seeded with 7 draws and
//! every time its front is taken, one new draw is appended at the back.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::types::{PieceKind, KIND_COUNT, PREVIEW_LEN};

/// Shuffled bag of the seven kinds
#[derive(Debug, Clone)]
pub struct Bag {
    pieces: [PieceKind; KIND_COUNT],
    /// Index of the next piece to hand out; `KIND_COUNT` means empty
    next: usize,
    refills: u64,
    rng: StdRng,
}

impl Bag {
    /// An empty bag; the first draw triggers the first refill
    pub fn new(seed: u64) -> Self {
        Self {
            pieces: PieceKind::ALL,
            next: KIND_COUNT,
            refills: 0,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn refill(&mut self) {
        self.pieces = PieceKind::ALL;
        self.pieces.shuffle(&mut self.rng);
        self.next = 0;
        self.refills += 1;
    }

    /// Take one piece, refilling first if the bag is empty
    pub fn draw(&mut self) -> PieceKind {
        if self.next >= KIND_COUNT {
            self.refill();
        }
        let kind = self.pieces[self.next];
        self.next += 1;
        kind
    }

    /// Pieces left before the next refill
    pub fn remaining(&self) -> &[PieceKind] {
        &self.pieces[self.next..]
    }

    /// How many times the bag has been filled
    pub fn refills(&self) -> u64 {
        self.refills
    }
}

/// Upcoming pieces, always exactly [`PREVIEW_LEN`] long
#[derive(Debug, Clone)]
pub struct PieceQueue {
    preview: [PieceKind; PREVIEW_LEN],
    bag: Bag,
    seed: u64,
}

impl PieceQueue {
    /// Create a queue and pre-seed the preview with 7 draws
    pub fn new(seed: u64) -> Self {
        let mut bag = Bag::new(seed);
        let preview = std::array::from_fn(|_| bag.draw());
        Self { preview, bag, seed }
    }

    /// Next piece to spawn, without consuming it
    pub fn peek(&self) -> PieceKind {
        self.preview[0]
    }

    /// Take the front of the preview and append one fresh draw at the back
    pub fn next(&mut self) -> PieceKind {
        let kind = self.preview[0];
        self.preview.rotate_left(1);
        self.preview[PREVIEW_LEN - 1] = self.bag.draw();
        kind
    }

    /// Preview contents, front first
    pub fn preview(&self) -> &[PieceKind; PREVIEW_LEN] {
        &self.preview
    }

    pub fn bag(&self) -> &Bag {
        &self.bag
    }

    /// Seed the queue was created with
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Default for PieceQueue {
    fn default() -> Self {
        Self::new(1)
    }
}
