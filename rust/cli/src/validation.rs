//! Input parsing and validation for interactive play.
//!
//! This module turns raw prompt responses into structured values: table
//! actions (hit, stand, split, double down), and yes/no answers for the
//! play-again loop. All parsing is case-insensitive.

use ventuno_engine::rules::PlayerAction;

/// Result type for parsing user input into table actions.
///
/// - Valid action (hit, stand, split, double down)
/// - Quit command (user wants to leave the table)
/// - Invalid input with error message
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    /// Valid action parsed from input
    Action(PlayerAction),
    /// User entered quit command (q or quit)
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

/// Parse user input into a [`PlayerAction`] or special commands.
///
/// Accepts the following input formats (case-insensitive):
/// - "h" or "hit" → Hit
/// - "s" or "stand" → Stand
/// - "p" or "split" → Split
/// - "d", "double", or "dd" → DoubleDown
/// - "q" or "quit" → Quit command
///
/// # Example
///
/// ```rust
/// # use ventuno_cli::validation::{parse_action, ParseResult};
/// use ventuno_engine::rules::PlayerAction;
///
/// assert_eq!(parse_action("hit"), ParseResult::Action(PlayerAction::Hit));
/// assert_eq!(parse_action("P"), ParseResult::Action(PlayerAction::Split));
/// assert_eq!(parse_action("q"), ParseResult::Quit);
///
/// match parse_action("banana") {
///     ParseResult::Invalid(msg) => assert!(msg.contains("Unrecognized")),
///     _ => panic!("Expected Invalid"),
/// }
/// ```
pub fn parse_action(input: &str) -> ParseResult {
    let input = input.trim().to_lowercase();
    match input.as_str() {
        "h" | "hit" => ParseResult::Action(PlayerAction::Hit),
        "s" | "stand" => ParseResult::Action(PlayerAction::Stand),
        "p" | "split" => ParseResult::Action(PlayerAction::Split),
        "d" | "double" | "dd" => ParseResult::Action(PlayerAction::DoubleDown),
        "q" | "quit" => ParseResult::Quit,
        "" => ParseResult::Invalid("Empty input".to_string()),
        other => ParseResult::Invalid(format!("Unrecognized action: {}", other)),
    }
}

/// Parse a yes/no answer. `None` means the input was neither.
pub fn parse_yes_no(input: &str) -> Option<bool> {
    match input.trim().to_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}
