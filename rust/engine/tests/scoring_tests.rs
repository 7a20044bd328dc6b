use ventuno_engine::cards::{Card, Rank, Suit};
use ventuno_engine::hand::Hand;

fn card(rank: Rank, suit: Suit) -> Card {
    Card { rank, suit }
}

fn hand_of(ranks: &[Rank]) -> Hand {
    let mut h = Hand::new();
    for (i, &r) in ranks.iter().enumerate() {
        let suit = ventuno_engine::cards::all_suits()[i % 4];
        h.push(card(r, suit));
    }
    h
}

#[test]
fn empty_hand_scores_zero() {
    assert_eq!(Hand::new().score(), 0);
}

#[test]
fn non_ace_hands_sum_exactly() {
    assert_eq!(hand_of(&[Rank::Ten, Rank::Nine]).score(), 19);
    assert_eq!(hand_of(&[Rank::Two, Rank::Three, Rank::Four]).score(), 9);
    assert_eq!(hand_of(&[Rank::Jack, Rank::Queen, Rank::King]).score(), 30);
}

#[test]
fn face_cards_count_ten() {
    assert_eq!(hand_of(&[Rank::Jack, Rank::Ten]).score(), 20);
    assert_eq!(hand_of(&[Rank::Queen, Rank::King]).score(), 20);
}

#[test]
fn aces_soften_one_at_a_time() {
    assert_eq!(hand_of(&[Rank::Ace, Rank::Ace]).score(), 12);
    assert_eq!(hand_of(&[Rank::Ace, Rank::Ace, Rank::Nine]).score(), 21);
    // 11+11+11+9 = 42, softened three times down to 12
    assert_eq!(
        hand_of(&[Rank::Ace, Rank::Ace, Rank::Ace, Rank::Nine]).score(),
        12
    );
    assert_eq!(hand_of(&[Rank::Ace, Rank::Five]).score(), 16);
    assert_eq!(hand_of(&[Rank::Ace, Rank::Five, Rank::Ten]).score(), 16);
}

#[test]
fn ace_stays_high_when_it_fits() {
    assert_eq!(hand_of(&[Rank::Ace, Rank::King]).score(), 21);
    assert_eq!(hand_of(&[Rank::Ace, Rank::Eight]).score(), 19);
}

#[test]
fn natural_requires_two_cards_and_no_split() {
    assert!(hand_of(&[Rank::Ace, Rank::King]).is_natural());
    assert!(!hand_of(&[Rank::Seven, Rank::Seven, Rank::Seven]).is_natural());
    assert!(!hand_of(&[Rank::Ten, Rank::Nine]).is_natural());

    // Same two cards dealt into a split hand are not a natural.
    let mut split = Hand::split_from(10);
    split.push(card(Rank::Ace, Suit::Spades));
    split.push(card(Rank::King, Suit::Hearts));
    assert_eq!(split.score(), 21);
    assert!(!split.is_natural());
}

#[test]
fn pair_is_by_rank_not_value() {
    assert!(hand_of(&[Rank::Ten, Rank::Ten]).is_pair());
    // Ten and Jack both score 10 but do not form a pair.
    assert!(!hand_of(&[Rank::Ten, Rank::Jack]).is_pair());
    assert!(!hand_of(&[Rank::Ten]).is_pair());
    assert!(!hand_of(&[Rank::Ten, Rank::Ten, Rank::Ten]).is_pair());
}

#[test]
fn clear_resets_wager_flags_and_state() {
    let mut h = Hand::split_from(25);
    h.push(card(Rank::Five, Suit::Clubs));
    h.push(card(Rank::Six, Suit::Hearts));
    h.double_wager();
    let cards = h.clear();
    assert_eq!(cards.len(), 2);
    assert!(h.is_empty());
    assert_eq!(h.wager(), 0);
    assert!(!h.from_split());
    assert!(!h.doubled());
}

#[test]
fn double_wager_doubles_and_marks() {
    let mut h = Hand::staked(15);
    h.push(card(Rank::Five, Suit::Clubs));
    h.push(card(Rank::Six, Suit::Hearts));
    h.double_wager();
    assert_eq!(h.wager(), 30);
    assert!(h.doubled());
}
