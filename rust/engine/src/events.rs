use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::rules::PlayerAction;
use crate::settlement::Outcome;

/// Where a card or score belongs. Player seats are indices into the round's
/// seating order.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Seat {
    Player(usize),
    Dealer,
}

/// Structured record of something the round engine did. Events carry content
/// only (cards, scores, wager deltas, outcome categories, balances); how they
/// are phrased on screen is the presentation layer's business.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RoundEvent {
    RoundStarted {
        round: u32,
    },
    SupplyReshuffled {
        undealt: usize,
    },
    WagerPlaced {
        seat: usize,
        wager: u32,
        chips: u32,
    },
    CardDealt {
        seat: Seat,
        hand: usize,
        card: Card,
        /// The dealer's hole card is dealt face down.
        hidden: bool,
    },
    HandScored {
        seat: Seat,
        hand: usize,
        cards: Vec<Card>,
        score: u32,
    },
    ActionTaken {
        seat: usize,
        hand: usize,
        action: PlayerAction,
    },
    /// An ineligible or unaffordable request; the hand is re-prompted with no
    /// state change.
    ActionRejected {
        seat: usize,
        hand: usize,
        reason: String,
    },
    HandBusted {
        seat: usize,
        hand: usize,
        score: u32,
    },
    HandStands {
        seat: usize,
        hand: usize,
        score: u32,
    },
    /// Both halves of a split ace pair stand after their single replacement
    /// card.
    SplitAcesStand {
        seat: usize,
    },
    DealerUpcard {
        card: Card,
    },
    DealerNatural,
    DealerRevealed {
        cards: Vec<Card>,
        score: u32,
    },
    DealerStands {
        score: u32,
    },
    HandSettled {
        seat: usize,
        hand: usize,
        outcome: Outcome,
        wager: u32,
        credit: u32,
        score: u32,
    },
    RoundComplete {
        balances: Vec<(String, u32)>,
    },
}

/// Receiver for the engine's event stream.
pub trait EventSink {
    fn on_event(&mut self, event: &RoundEvent);
}

/// Sink that drops every event, for headless runs and tests.
#[derive(Debug, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn on_event(&mut self, _event: &RoundEvent) {}
}
