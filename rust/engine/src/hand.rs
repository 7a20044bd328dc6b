use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank};
use crate::rules::BLACKJACK;

/// Lifecycle of a hand during the decision phase. `Active` is the only state
/// that accepts further choices.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum HandState {
    Active,
    Standing,
    Busted,
    DoubledComplete,
}

impl HandState {
    pub fn is_terminal(self) -> bool {
        !matches!(self, HandState::Active)
    }
}

/// An ordered sequence of cards plus the wager backing it. Order matters only
/// for display; scoring is order-independent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hand {
    cards: Vec<Card>,
    wager: u32,
    from_split: bool,
    doubled: bool,
    state: HandState,
}

impl Default for Hand {
    fn default() -> Self {
        Self::new()
    }
}

impl Hand {
    pub fn new() -> Self {
        Self {
            cards: Vec::new(),
            wager: 0,
            from_split: false,
            doubled: false,
            state: HandState::Active,
        }
    }

    /// A fresh hand backed by a wager, as created when a participant enters a
    /// round.
    pub fn staked(wager: u32) -> Self {
        let mut h = Self::new();
        h.wager = wager;
        h
    }

    /// The second hand produced by a split. Carries the same wager and the
    /// split marker that disqualifies it from being a natural.
    pub fn split_from(wager: u32) -> Self {
        let mut h = Self::staked(wager);
        h.from_split = true;
        h
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Removes and returns the last card; used when a split moves the second
    /// card of a pair into the new hand.
    pub fn pop(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn wager(&self) -> u32 {
        self.wager
    }

    pub fn from_split(&self) -> bool {
        self.from_split
    }

    pub fn doubled(&self) -> bool {
        self.doubled
    }

    pub fn state(&self) -> HandState {
        self.state
    }

    pub fn set_state(&mut self, state: HandState) {
        self.state = state;
    }

    /// Doubles the wager and marks the hand; the caller owes the hand exactly
    /// one more card before it becomes `DoubledComplete`.
    pub fn double_wager(&mut self) {
        self.wager *= 2;
        self.doubled = true;
    }

    /// Best blackjack score for the hand. Aces count 11, then are softened to
    /// 1 one at a time while the total exceeds 21. Greedy softening is exact
    /// here since every ace is worth the same. An empty hand scores 0.
    ///
    /// ```
    /// use ventuno_engine::cards::{Card, Rank, Suit};
    /// use ventuno_engine::hand::Hand;
    ///
    /// let mut h = Hand::new();
    /// h.push(Card { rank: Rank::Ace, suit: Suit::Spades });
    /// h.push(Card { rank: Rank::Ace, suit: Suit::Hearts });
    /// h.push(Card { rank: Rank::Nine, suit: Suit::Clubs });
    /// assert_eq!(h.score(), 21);
    /// ```
    pub fn score(&self) -> u32 {
        let mut score = 0;
        let mut aces = 0;
        for c in &self.cards {
            if c.rank == Rank::Ace {
                aces += 1;
            }
            score += c.rank.value();
        }
        while score > BLACKJACK && aces > 0 {
            score -= 10;
            aces -= 1;
        }
        score
    }

    pub fn is_busted(&self) -> bool {
        self.score() > BLACKJACK
    }

    /// True only for an untouched two-card 21. A split hand reaching 21 with
    /// two cards is a strong hand, not a natural, by house rule.
    pub fn is_natural(&self) -> bool {
        self.cards.len() == 2 && !self.from_split && self.score() == BLACKJACK
    }

    /// Two cards of the same rank. Rank, not value: {10♠, J♥} both count 10
    /// but are not a pair.
    pub fn is_pair(&self) -> bool {
        self.cards.len() == 2 && self.cards[0].rank == self.cards[1].rank
    }

    /// Empties the hand for discarding, resetting wager, flags and state so a
    /// reused slot starts the next round clean. Returns the spent cards.
    pub fn clear(&mut self) -> Vec<Card> {
        self.wager = 0;
        self.from_split = false;
        self.doubled = false;
        self.state = HandState::Active;
        std::mem::take(&mut self.cards)
    }
}
