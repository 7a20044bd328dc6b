use ventuno_engine::cards::{Card, Rank, Suit};
use ventuno_engine::hand::Hand;
use ventuno_engine::settlement::{judge, payout, Outcome};

fn hand_of(ranks: &[Rank]) -> Hand {
    let mut h = Hand::staked(10);
    for (i, &r) in ranks.iter().enumerate() {
        h.push(Card {
            rank: r,
            suit: ventuno_engine::cards::all_suits()[i % 4],
        });
    }
    h
}

fn split_hand_of(ranks: &[Rank]) -> Hand {
    let mut h = Hand::split_from(10);
    for (i, &r) in ranks.iter().enumerate() {
        h.push(Card {
            rank: r,
            suit: ventuno_engine::cards::all_suits()[i % 4],
        });
    }
    h
}

#[test]
fn higher_score_wins_double_the_wager() {
    let player = hand_of(&[Rank::Ten, Rank::Nine]);
    let dealer = hand_of(&[Rank::Ten, Rank::Eight]);
    let outcome = judge(&player, &dealer);
    assert_eq!(outcome, Outcome::Win);
    assert_eq!(payout(outcome, 10), 20);
}

#[test]
fn lower_score_loses_the_wager() {
    let player = hand_of(&[Rank::Ten, Rank::Seven]);
    let dealer = hand_of(&[Rank::Ten, Rank::Nine]);
    let outcome = judge(&player, &dealer);
    assert_eq!(outcome, Outcome::Loss);
    assert_eq!(payout(outcome, 10), 0);
}

#[test]
fn equal_scores_push() {
    let player = hand_of(&[Rank::Ten, Rank::Eight]);
    let dealer = hand_of(&[Rank::Nine, Rank::Nine]);
    let outcome = judge(&player, &dealer);
    assert_eq!(outcome, Outcome::Push);
    assert_eq!(payout(outcome, 10), 10);
}

#[test]
fn natural_pays_three_to_two() {
    let player = hand_of(&[Rank::Ace, Rank::King]);
    let dealer = hand_of(&[Rank::Nine, Rank::Nine, Rank::King]);
    let outcome = judge(&player, &dealer);
    assert_eq!(outcome, Outcome::NaturalWin);
    assert_eq!(payout(outcome, 10), 25);
}

#[test]
fn natural_bonus_floors_on_odd_wagers() {
    assert_eq!(payout(Outcome::NaturalWin, 5), 12);
    assert_eq!(payout(Outcome::NaturalWin, 1), 2);
}

#[test]
fn both_naturals_push() {
    let player = hand_of(&[Rank::Ace, Rank::King]);
    let dealer = hand_of(&[Rank::Ace, Rank::Queen]);
    let outcome = judge(&player, &dealer);
    assert_eq!(outcome, Outcome::NaturalPush);
    assert_eq!(payout(outcome, 10), 10);
}

#[test]
fn player_bust_loses_even_against_dealer_bust() {
    let player = hand_of(&[Rank::Ten, Rank::Five, Rank::Eight]);
    let dealer = hand_of(&[Rank::Ten, Rank::Six, Rank::King]);
    let outcome = judge(&player, &dealer);
    assert_eq!(outcome, Outcome::Bust);
    assert_eq!(payout(outcome, 10), 0);
}

#[test]
fn dealer_bust_pays_standing_player() {
    let player = hand_of(&[Rank::Ten, Rank::Two]);
    let dealer = hand_of(&[Rank::Ten, Rank::Six, Rank::King]);
    let outcome = judge(&player, &dealer);
    assert_eq!(outcome, Outcome::DealerBust);
    assert_eq!(payout(outcome, 10), 20);
}

#[test]
fn dealer_natural_beats_a_plain_twenty_one() {
    let player = hand_of(&[Rank::Seven, Rank::Seven, Rank::Seven]);
    let dealer = hand_of(&[Rank::Ace, Rank::King]);
    let outcome = judge(&player, &dealer);
    assert_eq!(outcome, Outcome::DealerNatural);
    assert_eq!(payout(outcome, 10), 0);
}

#[test]
fn split_twenty_one_is_not_a_natural_at_settlement() {
    // Against a dealer natural the split hand loses outright.
    let player = split_hand_of(&[Rank::Ace, Rank::King]);
    let dealer = hand_of(&[Rank::Ace, Rank::Queen]);
    assert_eq!(judge(&player, &dealer), Outcome::DealerNatural);

    // Against a plain dealer 21 it settles through the equal-score push.
    let dealer_plain = hand_of(&[Rank::Seven, Rank::Seven, Rank::Seven]);
    assert_eq!(judge(&player, &dealer_plain), Outcome::Push);
}

#[test]
fn player_natural_still_beats_a_dealer_bust_first() {
    // Rule order: the natural branch fires before the dealer-bust branch,
    // and the credit is the same 3:2 either way.
    let player = hand_of(&[Rank::Ace, Rank::King]);
    let dealer = hand_of(&[Rank::Ten, Rank::Six, Rank::King]);
    assert_eq!(judge(&player, &dealer), Outcome::NaturalWin);
}
