use ventuno_cli::formatters::{
    format_action, format_card, format_hand, format_outcome, format_rank,
};
use ventuno_engine::cards::{Card, Rank, Suit};
use ventuno_engine::rules::PlayerAction;
use ventuno_engine::settlement::Outcome;

fn card(rank: Rank, suit: Suit) -> Card {
    Card { rank, suit }
}

#[test]
fn ranks_render_as_table_symbols() {
    assert_eq!(format_rank(Rank::Ace), "A");
    assert_eq!(format_rank(Rank::Ten), "10");
    assert_eq!(format_rank(Rank::Jack), "J");
    assert_eq!(format_rank(Rank::Two), "2");
}

#[test]
fn cards_render_rank_then_suit() {
    let c = card(Rank::Ace, Suit::Spades);
    let rendered = format_card(&c);
    assert!(rendered == "A♠" || rendered == "As");

    let c = card(Rank::Ten, Suit::Hearts);
    let rendered = format_card(&c);
    assert!(rendered == "10♥" || rendered == "10h");
}

#[test]
fn hands_render_bracketed() {
    let cards = vec![card(Rank::Ace, Suit::Spades), card(Rank::King, Suit::Hearts)];
    let rendered = format_hand(&cards, false);
    assert!(rendered.starts_with("[ A"));
    assert!(rendered.ends_with(" ]"));
}

#[test]
fn hole_card_is_masked() {
    let cards = vec![card(Rank::Ace, Suit::Spades), card(Rank::King, Suit::Hearts)];
    let rendered = format_hand(&cards, true);
    assert!(rendered.contains("XX"));
    assert!(!rendered.contains('K'));
}

#[test]
fn empty_hand_renders_as_empty_brackets() {
    assert_eq!(format_hand(&[], false), "[  ]");
}

#[test]
fn actions_and_outcomes_have_labels() {
    assert_eq!(format_action(PlayerAction::Hit), "hits");
    assert_eq!(format_action(PlayerAction::Split), "splits the pair");
    assert_eq!(format_outcome(Outcome::Win), "WIN");
    assert!(format_outcome(Outcome::NaturalWin).contains("3:2"));
    assert!(format_outcome(Outcome::DealerBust).contains("dealer busts"));
}
