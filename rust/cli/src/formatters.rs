//! Card, hand, and outcome formatters for terminal display.
//!
//! This module provides pure functions for formatting game elements for
//! terminal output. It supports Unicode suit symbols with ASCII fallback for
//! terminal environments that don't support Unicode rendering.
//!
//! ## Unicode vs ASCII Fallback
//!
//! The module automatically detects whether the terminal supports Unicode
//! symbols by checking environment variables on Windows (WT_SESSION,
//! TERM_PROGRAM, VSCODE_INJECTION) and assumes Unicode support on Unix-like
//! systems.
//!
//! - **Unicode mode**: Uses ♥ ♦ ♣ ♠ symbols
//! - **ASCII mode**: Uses h d c s letters
//!
//! ## Example
//!
//! ```rust
//! use ventuno_engine::cards::{Card, Rank, Suit};
//! use ventuno_cli::formatters::format_card;
//!
//! let ace_spades = Card { rank: Rank::Ace, suit: Suit::Spades };
//! assert!(format_card(&ace_spades) == "A♠" || format_card(&ace_spades) == "As");
//! ```

use ventuno_engine::cards::{Card, Rank, Suit};
use ventuno_engine::rules::PlayerAction;
use ventuno_engine::settlement::Outcome;

/// Check if the terminal supports Unicode card symbols by detecting modern
/// terminal environments.
///
/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals
/// (TERM_PROGRAM), or VS Code (VSCODE_INJECTION). On Unix-like systems,
/// assumes Unicode support.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

/// Format a Suit using Unicode symbols with ASCII fallback.
pub fn format_suit(suit: Suit) -> &'static str {
    if supports_unicode() {
        match suit {
            Suit::Clubs => "♣",
            Suit::Diamonds => "♦",
            Suit::Hearts => "♥",
            Suit::Spades => "♠",
        }
    } else {
        match suit {
            Suit::Clubs => "c",
            Suit::Diamonds => "d",
            Suit::Hearts => "h",
            Suit::Spades => "s",
        }
    }
}

pub fn format_rank(rank: Rank) -> &'static str {
    match rank {
        Rank::Two => "2",
        Rank::Three => "3",
        Rank::Four => "4",
        Rank::Five => "5",
        Rank::Six => "6",
        Rank::Seven => "7",
        Rank::Eight => "8",
        Rank::Nine => "9",
        Rank::Ten => "10",
        Rank::Jack => "J",
        Rank::Queen => "Q",
        Rank::King => "K",
        Rank::Ace => "A",
    }
}

/// Format a card as rank followed by suit, e.g. "A♠" or "10h".
pub fn format_card(card: &Card) -> String {
    format!("{}{}", format_rank(card.rank), format_suit(card.suit))
}

/// Format a card sequence as a bracketed row, optionally hiding the second
/// card (the dealer's hole card before the reveal).
///
/// ```rust
/// use ventuno_engine::cards::{Card, Rank, Suit};
/// use ventuno_cli::formatters::format_hand;
///
/// let cards = vec![
///     Card { rank: Rank::Ace, suit: Suit::Spades },
///     Card { rank: Rank::King, suit: Suit::Hearts },
/// ];
/// assert!(format_hand(&cards, true).contains("XX"));
/// ```
pub fn format_hand(cards: &[Card], hide_hole: bool) -> String {
    let mut parts = Vec::with_capacity(cards.len());
    for (i, card) in cards.iter().enumerate() {
        if hide_hole && i == 1 {
            parts.push("XX".to_string());
        } else {
            parts.push(format_card(card));
        }
    }
    format!("[ {} ]", parts.join(" "))
}

pub fn format_action(action: PlayerAction) -> &'static str {
    match action {
        PlayerAction::Hit => "hits",
        PlayerAction::Stand => "stands",
        PlayerAction::Split => "splits the pair",
        PlayerAction::DoubleDown => "doubles down",
    }
}

pub fn format_outcome(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Bust => "BUST",
        Outcome::NaturalPush => "PUSH (natural vs. natural)",
        Outcome::NaturalWin => "NATURAL BLACKJACK, pays 3:2",
        Outcome::DealerBust => "WIN (dealer busts)",
        Outcome::DealerNatural => "LOSS (dealer natural)",
        Outcome::Win => "WIN",
        Outcome::Loss => "LOSS",
        Outcome::Push => "PUSH",
    }
}
