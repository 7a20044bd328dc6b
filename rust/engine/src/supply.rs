use std::collections::VecDeque;

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{standard_set, Card};
use crate::errors::EngineError;
use crate::hand::Hand;

/// Number of replicated 52-card sets in a freshly built supply.
pub const DEFAULT_SETS: usize = 4;

/// Undealt count below which a round begins with a full rebuild-and-shuffle.
pub const RESHUFFLE_FLOOR: usize = 60;

/// The finite, recyclable card pool: an ordered undealt sequence drawn from
/// the front, plus an unordered receptacle of spent cards. Cards only
/// re-enter play when an empty draw recycles the receptacle.
#[derive(Debug)]
pub struct Supply {
    undealt: VecDeque<Card>,
    discard: Vec<Card>,
    rng: ChaCha20Rng,
    sets: usize,
}

impl Supply {
    /// A supply of `sets` replicated 52-card sets, seeded from process
    /// entropy. Unshuffled until [`shuffle`](Self::shuffle) is called.
    pub fn new(sets: usize) -> Self {
        Self::new_with_seed(sets, rand::random())
    }

    /// Same as [`new`](Self::new) with a fixed RNG seed, for reproducible
    /// shuffles.
    ///
    /// ```
    /// use ventuno_engine::supply::Supply;
    ///
    /// let mut a = Supply::new_with_seed(4, 42);
    /// let mut b = Supply::new_with_seed(4, 42);
    /// a.shuffle();
    /// b.shuffle();
    /// assert_eq!(a.draw().unwrap(), b.draw().unwrap());
    /// ```
    pub fn new_with_seed(sets: usize, seed: u64) -> Self {
        let mut s = Self {
            undealt: VecDeque::new(),
            discard: Vec::new(),
            rng: ChaCha20Rng::seed_from_u64(seed),
            sets,
        };
        s.build(sets);
        s
    }

    /// A supply with a fixed draw order and no replicated sets, for scripted
    /// scenarios. Never triggers the low-water rebuild, so the given order is
    /// preserved exactly.
    pub fn stacked(cards: Vec<Card>) -> Self {
        Self {
            undealt: cards.into(),
            discard: Vec::new(),
            rng: ChaCha20Rng::seed_from_u64(0),
            sets: 0,
        }
    }

    /// Clears both containers and repopulates the undealt sequence with
    /// `sets` replicas of the canonical 52-card set.
    pub fn build(&mut self, sets: usize) {
        self.sets = sets;
        self.undealt.clear();
        self.discard.clear();
        for _ in 0..sets {
            self.undealt.extend(standard_set());
        }
    }

    /// Rebuilds to the configured set count; used by the round engine when
    /// the undealt count falls below [`RESHUFFLE_FLOOR`].
    pub fn rebuild(&mut self) {
        self.build(self.sets);
    }

    /// Uniform random permutation of the undealt sequence. No-op when empty.
    pub fn shuffle(&mut self) {
        if self.undealt.is_empty() {
            return;
        }
        self.undealt.make_contiguous().shuffle(&mut self.rng);
    }

    /// Removes and returns the front card. An empty sequence first recycles
    /// the discard receptacle and reshuffles; if the supply is still empty
    /// after that, the round cannot continue.
    pub fn draw(&mut self) -> Result<Card, EngineError> {
        if self.undealt.is_empty() {
            self.undealt.extend(self.discard.drain(..));
            self.shuffle();
        }
        self.undealt.pop_front().ok_or(EngineError::SupplyExhausted)
    }

    pub fn discard_card(&mut self, card: Card) {
        self.discard.push(card);
    }

    /// Moves all of a hand's cards into the receptacle, clearing the hand and
    /// resetting its wager to 0.
    pub fn discard_hand(&mut self, hand: &mut Hand) {
        self.discard.extend(hand.clear());
    }

    /// True when a round should begin with a full rebuild-and-shuffle.
    /// Stacked supplies (no replicated sets) are exempt.
    pub fn needs_reshuffle(&self) -> bool {
        self.sets > 0 && self.undealt.len() < RESHUFFLE_FLOOR
    }

    pub fn sets(&self) -> usize {
        self.sets
    }

    pub fn undealt_len(&self) -> usize {
        self.undealt.len()
    }

    pub fn discard_len(&self) -> usize {
        self.discard.len()
    }

    /// Cards currently held by the supply itself. With every hand discarded,
    /// this equals 52 × sets (conservation invariant).
    pub fn card_count(&self) -> usize {
        self.undealt.len() + self.discard.len()
    }
}
