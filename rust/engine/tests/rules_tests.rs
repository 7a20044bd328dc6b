use ventuno_engine::cards::{Card, Rank, Suit};
use ventuno_engine::errors::EngineError;
use ventuno_engine::hand::Hand;
use ventuno_engine::rules::{
    available_actions, can_double, can_split, dealer_should_draw, validate_action, PlayerAction,
};

fn two_cards(a: Rank, b: Rank, wager: u32) -> Hand {
    let mut h = Hand::staked(wager);
    h.push(Card {
        rank: a,
        suit: Suit::Spades,
    });
    h.push(Card {
        rank: b,
        suit: Suit::Hearts,
    });
    h
}

#[test]
fn hit_and_stand_are_always_offered() {
    let h = two_cards(Rank::Ten, Rank::Nine, 10);
    let actions = available_actions(&h, 0);
    assert_eq!(actions, vec![PlayerAction::Hit, PlayerAction::Stand]);
}

#[test]
fn pair_with_funds_offers_split_and_double() {
    let h = two_cards(Rank::Eight, Rank::Eight, 10);
    let actions = available_actions(&h, 100);
    assert_eq!(
        actions,
        vec![
            PlayerAction::Hit,
            PlayerAction::Stand,
            PlayerAction::Split,
            PlayerAction::DoubleDown,
        ]
    );
}

#[test]
fn same_value_different_rank_is_not_splittable() {
    // Ten and Jack both count 10; still not a pair.
    let h = two_cards(Rank::Ten, Rank::Jack, 10);
    assert!(!can_split(&h, 100));
    assert!(can_double(&h, 100));
}

#[test]
fn split_hand_cannot_resplit() {
    let mut h = Hand::split_from(10);
    h.push(Card {
        rank: Rank::Eight,
        suit: Suit::Spades,
    });
    h.push(Card {
        rank: Rank::Eight,
        suit: Suit::Hearts,
    });
    assert!(!can_split(&h, 100));
    // doubling a split hand stays legal
    assert!(can_double(&h, 100));
}

#[test]
fn short_balance_blocks_wager_increases() {
    let h = two_cards(Rank::Eight, Rank::Eight, 10);
    assert!(!can_split(&h, 9));
    assert!(!can_double(&h, 9));
    assert_eq!(available_actions(&h, 9).len(), 2);
}

#[test]
fn three_cards_cannot_double() {
    let mut h = two_cards(Rank::Two, Rank::Three, 10);
    h.push(Card {
        rank: Rank::Four,
        suit: Suit::Clubs,
    });
    assert!(!can_double(&h, 100));
    assert!(matches!(
        validate_action(&h, 100, PlayerAction::DoubleDown),
        Err(EngineError::InvalidAction { .. })
    ));
}

#[test]
fn validate_distinguishes_invalid_from_unaffordable() {
    let pair = two_cards(Rank::Eight, Rank::Eight, 10);
    assert_eq!(
        validate_action(&pair, 100, PlayerAction::Split),
        Ok(PlayerAction::Split)
    );
    assert_eq!(
        validate_action(&pair, 5, PlayerAction::Split),
        Err(EngineError::InsufficientChips)
    );

    let mixed = two_cards(Rank::Ten, Rank::Jack, 10);
    assert!(matches!(
        validate_action(&mixed, 100, PlayerAction::Split),
        Err(EngineError::InvalidAction { .. })
    ));
}

#[test]
fn hit_and_stand_always_validate() {
    let h = two_cards(Rank::Ten, Rank::Nine, 10);
    assert_eq!(validate_action(&h, 0, PlayerAction::Hit), Ok(PlayerAction::Hit));
    assert_eq!(
        validate_action(&h, 0, PlayerAction::Stand),
        Ok(PlayerAction::Stand)
    );
}

#[test]
fn dealer_draws_below_seventeen_only() {
    assert!(dealer_should_draw(16));
    assert!(!dealer_should_draw(17));
    assert!(!dealer_should_draw(21));
    assert!(dealer_should_draw(0));
}
