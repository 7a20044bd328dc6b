use serde::{Deserialize, Serialize};

use crate::errors::EngineError;
use crate::hand::Hand;

/// The target score; anything above it busts.
pub const BLACKJACK: u32 = 21;

/// Dealer draws while strictly below this, by the softened score.
pub const DEALER_STAND: u32 = 17;

/// A choice offered to a participant while a hand is active.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum PlayerAction {
    /// Take one more card from the supply
    Hit,
    /// Stop drawing; the hand is final
    Stand,
    /// Divide a same-rank pair into two independently wagered hands
    Split,
    /// Double the wager in exchange for exactly one more card
    DoubleDown,
}

/// Split needs an untouched same-rank pair and enough chips to back the
/// second wager.
pub fn can_split(hand: &Hand, chips: u32) -> bool {
    hand.is_pair() && !hand.from_split() && chips >= hand.wager()
}

/// Double is offered on any first two cards the balance can match.
pub fn can_double(hand: &Hand, chips: u32) -> bool {
    hand.len() == 2 && chips >= hand.wager()
}

/// The action set offered for an active hand, in display order. Hit and
/// Stand are always present; Split and Double are filtered by eligibility.
pub fn available_actions(hand: &Hand, chips: u32) -> Vec<PlayerAction> {
    let mut actions = vec![PlayerAction::Hit, PlayerAction::Stand];
    if can_split(hand, chips) {
        actions.push(PlayerAction::Split);
    }
    if can_double(hand, chips) {
        actions.push(PlayerAction::DoubleDown);
    }
    actions
}

/// Checks a requested action against the current hand and balance.
///
/// Ineligible requests come back as [`EngineError::InvalidAction`]; requests
/// that fail only on funds come back as [`EngineError::InsufficientChips`].
/// Both are recovered by re-prompting, with no state change.
///
/// ```
/// use ventuno_engine::cards::{Card, Rank, Suit};
/// use ventuno_engine::errors::EngineError;
/// use ventuno_engine::hand::Hand;
/// use ventuno_engine::rules::{validate_action, PlayerAction};
///
/// let mut pair = Hand::staked(10);
/// pair.push(Card { rank: Rank::Eight, suit: Suit::Spades });
/// pair.push(Card { rank: Rank::Eight, suit: Suit::Hearts });
///
/// assert!(validate_action(&pair, 100, PlayerAction::Split).is_ok());
/// assert_eq!(
///     validate_action(&pair, 5, PlayerAction::Split),
///     Err(EngineError::InsufficientChips)
/// );
///
/// let mut mixed = Hand::staked(10);
/// mixed.push(Card { rank: Rank::Ten, suit: Suit::Spades });
/// mixed.push(Card { rank: Rank::Jack, suit: Suit::Hearts });
/// assert!(matches!(
///     validate_action(&mixed, 100, PlayerAction::Split),
///     Err(EngineError::InvalidAction { .. })
/// ));
/// ```
pub fn validate_action(
    hand: &Hand,
    chips: u32,
    action: PlayerAction,
) -> Result<PlayerAction, EngineError> {
    match action {
        PlayerAction::Hit | PlayerAction::Stand => Ok(action),
        PlayerAction::Split => {
            if !hand.is_pair() || hand.from_split() {
                Err(EngineError::InvalidAction {
                    reason: "cannot split this hand".to_string(),
                })
            } else if chips < hand.wager() {
                Err(EngineError::InsufficientChips)
            } else {
                Ok(action)
            }
        }
        PlayerAction::DoubleDown => {
            if hand.len() != 2 {
                Err(EngineError::InvalidAction {
                    reason: "double down is only allowed on the first two cards".to_string(),
                })
            } else if chips < hand.wager() {
                Err(EngineError::InsufficientChips)
            } else {
                Ok(action)
            }
        }
    }
}

/// Dealer policy: draw below 17, stop at 17 or more. The softened score is
/// used directly; there is no separate soft-17 rule.
pub fn dealer_should_draw(score: u32) -> bool {
    score < DEALER_STAND
}
