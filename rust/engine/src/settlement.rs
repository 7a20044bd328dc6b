use serde::{Deserialize, Serialize};

use crate::hand::Hand;
use crate::rules::BLACKJACK;

/// How a settled hand fared against the dealer.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Player over 21; wager lost
    Bust,
    /// Both hold naturals; wager returned
    NaturalPush,
    /// Player natural against a non-natural dealer; pays 3:2
    NaturalWin,
    /// Dealer over 21 with the player still standing
    DealerBust,
    /// Dealer natural against a non-natural player; wager lost
    DealerNatural,
    /// Higher score than the dealer
    Win,
    /// Lower score than the dealer
    Loss,
    /// Equal scores; wager returned
    Push,
}

impl Outcome {
    pub fn is_win(self) -> bool {
        matches!(self, Outcome::NaturalWin | Outcome::DealerBust | Outcome::Win)
    }
}

/// Compares a wagered hand against the dealer's final hand. The eight rules
/// apply in strict precedence and the first match wins; in particular a
/// split-derived 21 is never a natural, so against a dealer 21 it falls
/// through to the plain equal-score push.
pub fn judge(hand: &Hand, dealer: &Hand) -> Outcome {
    let player_score = hand.score();
    let dealer_score = dealer.score();
    if player_score > BLACKJACK {
        Outcome::Bust
    } else if hand.is_natural() && dealer.is_natural() {
        Outcome::NaturalPush
    } else if hand.is_natural() {
        Outcome::NaturalWin
    } else if dealer_score > BLACKJACK {
        Outcome::DealerBust
    } else if dealer.is_natural() {
        Outcome::DealerNatural
    } else if player_score > dealer_score {
        Outcome::Win
    } else if player_score < dealer_score {
        Outcome::Loss
    } else {
        Outcome::Push
    }
}

/// Amount credited back to the balance for a settled wager. Losses credit
/// nothing since the wager left the balance when it was staked. The natural
/// bonus is floor(1.5 × wager) on top of the returned wager.
pub fn payout(outcome: Outcome, wager: u32) -> u32 {
    match outcome {
        Outcome::Bust | Outcome::DealerNatural | Outcome::Loss => 0,
        Outcome::NaturalPush | Outcome::Push => wager,
        Outcome::NaturalWin => wager + wager * 3 / 2,
        Outcome::DealerBust | Outcome::Win => wager * 2,
    }
}
