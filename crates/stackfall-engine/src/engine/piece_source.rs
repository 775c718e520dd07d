use std::collections::VecDeque;

use rand::{Rng as _, SeedableRng as _, seq::SliceRandom};
use rand_pcg::Pcg32;

use crate::core::PieceKind;

/// Copies of each kind per bag refill; one bag holds 28 pieces.
const COPIES_PER_KIND: usize = 4;

/// Bag-based random piece generator.
///
/// The bag starts with four copies of each of the seven kinds and pieces are
/// drawn from it without replacement; when it runs empty it is refilled. Any
/// single kind therefore appears exactly four times per 28-draw cycle, so
/// long droughts of a kind are impossible.
///
/// Seeding the generator makes the piece sequence reproducible, which
/// enables deterministic testing and replayable sessions.
#[derive(Debug, Clone)]
pub struct PieceSource {
    rng: Pcg32,
    bag: VecDeque<PieceKind>,
}

impl Default for PieceSource {
    fn default() -> Self {
        Self::new()
    }
}

impl PieceSource {
    /// Creates a piece source with a random seed.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(rand::rng().random())
    }

    /// Like [`Self::new`], but with a specific seed for a deterministic
    /// piece sequence.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            bag: VecDeque::new(),
        }
    }

    /// Refills the bag with a shuffled set of four copies of each kind.
    fn fill_bag(&mut self) {
        let mut new_bag = [PieceKind::I; PieceKind::LEN * COPIES_PER_KIND];
        for (i, slot) in new_bag.iter_mut().enumerate() {
            *slot = PieceKind::ALL[i / COPIES_PER_KIND];
        }
        new_bag.shuffle(&mut self.rng);
        self.bag.extend(new_bag);
    }

    /// Draws the next piece kind from the bag.
    ///
    /// # Panics
    ///
    /// Panics if the bag is empty after a refill (cannot happen).
    pub fn next_kind(&mut self) -> PieceKind {
        if self.bag.is_empty() {
            self.fill_bag();
        }
        self.bag
            .pop_front()
            .expect("refilled piece bag is never empty")
    }
}
