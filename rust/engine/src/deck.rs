use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use tracing::warn;

use crate::cards::{full_deck, Card};

/// A shuffled 52-card deck dealt from the tail.
///
/// Cards at `cards[..remaining]` are still in the deck; dealing only moves
/// the `remaining` marker down, so the count is always available in O(1).
#[derive(Debug, Clone)]
pub struct Deck {
    cards: [Card; 52],
    remaining: usize,
}

impl Deck {
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cards = full_deck();
        cards.shuffle(rng);
        Self {
            cards,
            remaining: cards.len(),
        }
    }

    pub fn new_with_seed(seed: u64) -> Self {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        Self::shuffled(&mut rng)
    }

    /// Removes and returns up to `n` cards from the tail.
    ///
    /// Asking for more than remain returns what is left instead of failing.
    pub fn deal(&mut self, n: usize) -> Vec<Card> {
        if n > self.remaining {
            warn!(requested = n, remaining = self.remaining, "deck exhausted");
        }
        let take = n.min(self.remaining);
        let mut dealt = Vec::with_capacity(take);
        for _ in 0..take {
            self.remaining -= 1;
            dealt.push(self.cards[self.remaining]);
        }
        dealt
    }

    pub fn remaining(&self) -> usize {
        self.remaining
    }
}
