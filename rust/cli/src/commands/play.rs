//! # Play Command
//!
//! Interactive blackjack at a terminal table.
//!
//! This module provides the `handle_play_command` function, which seats the
//! players, builds the card supply, and runs the round loop until the table
//! quits or goes broke. It implements the round engine's two collaborator
//! traits over stdin/stdout:
//!
//! - [`ventuno_engine::round::Decisions`] - wager and action prompts, re-asked
//!   until valid so the engine never sees a malformed value
//! - [`ventuno_engine::events::EventSink`] - renders the engine's structured
//!   events as table chatter
//!
//! ## Features
//!
//! - Player count and names prompted when not configured
//! - Graceful quit handling (user can exit with 'q' or 'quit')
//! - Broke players leave the table between rounds
//! - Optional JSONL round history via `--log`
//!
//! A closed input stream ends the session after the current round rather than
//! looping on a dead prompt.

use crate::config::{self, ValueSource};
use crate::error::CliError;
use crate::formatters::{format_action, format_card, format_hand, format_outcome};
use crate::io_utils::{prompt_choice, prompt_int, prompt_line, read_stdin_line};
use crate::ui;
use crate::validation::{parse_action, ParseResult};
use std::io::{BufRead, Write};
use ventuno_engine::events::{EventSink, RoundEvent, Seat};
use ventuno_engine::hand::Hand;
use ventuno_engine::logger::{RoundLogger, RoundRecord};
use ventuno_engine::player::Player;
use ventuno_engine::round::{Decisions, Engine};
use ventuno_engine::rules::{PlayerAction, BLACKJACK};
use ventuno_engine::supply::Supply;

/// Terminal implementation of the engine's collaborator traits. Holds the
/// streams for one round; `quit` and `eof` carry the user's exit intent back
/// to the session loop, which only acts on it between rounds.
struct TermTable<'a> {
    stdin: &'a mut dyn BufRead,
    out: &'a mut dyn Write,
    names: &'a [String],
    quit: bool,
    eof: bool,
}

impl TermTable<'_> {
    fn name(&self, seat: usize) -> &str {
        self.names.get(seat).map(String::as_str).unwrap_or("?")
    }

    fn render(&mut self, event: &RoundEvent) -> std::io::Result<()> {
        match event {
            RoundEvent::RoundStarted { round } => {
                writeln!(self.out)?;
                ui::banner(self.out, &format!("ROUND {}", round))
            }
            RoundEvent::SupplyReshuffled { undealt } => writeln!(
                self.out,
                "Supply is low. Full reshuffle: {} cards ready.",
                undealt
            ),
            RoundEvent::WagerPlaced { seat, wager, chips } => {
                let name = self.name(*seat).to_string();
                writeln!(
                    self.out,
                    "{} wagers ${} (${} remaining).",
                    name, wager, chips
                )
            }
            RoundEvent::CardDealt {
                seat: Seat::Dealer,
                hidden: true,
                ..
            } => writeln!(self.out, "Dealer takes the hole card face down."),
            RoundEvent::CardDealt {
                seat: Seat::Dealer,
                card,
                ..
            } => writeln!(self.out, "Dealer draws {}.", format_card(card)),
            RoundEvent::CardDealt {
                seat: Seat::Player(seat),
                card,
                ..
            } => {
                let name = self.name(*seat).to_string();
                writeln!(self.out, "{} is dealt {}.", name, format_card(card))
            }
            RoundEvent::HandScored {
                seat: Seat::Player(seat),
                hand,
                cards,
                score,
            } => {
                let name = self.name(*seat).to_string();
                writeln!(
                    self.out,
                    "{} hand {} ({}): {}",
                    name,
                    hand + 1,
                    score,
                    format_hand(cards, false)
                )
            }
            RoundEvent::HandScored {
                seat: Seat::Dealer,
                cards,
                score,
                ..
            } => writeln!(
                self.out,
                "Dealer's hand ({}): {}",
                score,
                format_hand(cards, false)
            ),
            RoundEvent::ActionTaken { seat, action, .. } => {
                let name = self.name(*seat).to_string();
                writeln!(self.out, "{} {}.", name, format_action(*action))
            }
            RoundEvent::ActionRejected { reason, .. } => {
                writeln!(self.out, "Invalid or unavailable action ({}).", reason)
            }
            RoundEvent::HandBusted { score, .. } => {
                writeln!(self.out, "Hand busts at {}!", score)
            }
            RoundEvent::HandStands { score, .. } => {
                writeln!(self.out, "Hand is {}. Standing.", score)
            }
            RoundEvent::SplitAcesStand { .. } => {
                writeln!(self.out, "Split aces: one card each, both stand.")
            }
            RoundEvent::DealerUpcard { card } => {
                writeln!(self.out, "Dealer's upcard: {}", format_card(card))
            }
            RoundEvent::DealerNatural => {
                writeln!(self.out, "** DEALER NATURAL BLACKJACK **")
            }
            RoundEvent::DealerRevealed { cards, score } => {
                writeln!(self.out)?;
                ui::divider(self.out, "DEALER'S PLAY")?;
                writeln!(
                    self.out,
                    "Dealer reveals {} ({}).",
                    format_hand(cards, false),
                    score
                )
            }
            RoundEvent::DealerStands { score } => {
                if *score > BLACKJACK {
                    writeln!(self.out, "Dealer busts at {}.", score)
                } else {
                    writeln!(self.out, "Dealer stands at {}.", score)
                }
            }
            RoundEvent::HandSettled {
                seat,
                hand,
                outcome,
                wager,
                credit,
                score,
            } => {
                let name = self.name(*seat).to_string();
                writeln!(
                    self.out,
                    "{} hand {} scores {}: {}. Wager ${}, returns ${}.",
                    name,
                    hand + 1,
                    score,
                    format_outcome(*outcome),
                    wager,
                    credit
                )
            }
            RoundEvent::RoundComplete { balances } => {
                writeln!(self.out)?;
                ui::divider(self.out, "BALANCES")?;
                for (name, chips) in balances {
                    writeln!(self.out, "  {}: ${}", name, chips)?;
                }
                Ok(())
            }
        }
    }
}

impl EventSink for TermTable<'_> {
    fn on_event(&mut self, event: &RoundEvent) {
        // terminal write failures never interrupt a round in progress
        let _ = self.render(event);
    }
}

impl Decisions for TermTable<'_> {
    fn wager(&mut self, player: &Player, min: u32, max: u32) -> u32 {
        let prompt = format!(
            "{} (Chips: ${}), place your wager [{}-{}]:",
            player.name(),
            player.chips(),
            min,
            max
        );
        match prompt_int(self.stdin, self.out, &prompt, min, max) {
            Ok(Some(v)) => v,
            Ok(None) | Err(_) => {
                self.eof = true;
                min
            }
        }
    }

    fn action(&mut self, _player: &Player, _hand: &Hand, options: &[PlayerAction]) -> PlayerAction {
        let mut menu = String::from("Actions: (H)it / (S)tand");
        if options.contains(&PlayerAction::Split) {
            menu.push_str(" / s(P)lit");
        }
        if options.contains(&PlayerAction::DoubleDown) {
            menu.push_str(" / (D)ouble Down");
        }
        loop {
            let _ = writeln!(self.out, "{}", menu);
            let _ = write!(self.out, "Choose action: > ");
            let _ = self.out.flush();
            let Some(line) = read_stdin_line(self.stdin) else {
                self.eof = true;
                return PlayerAction::Stand;
            };
            match parse_action(&line) {
                ParseResult::Action(action) if options.contains(&action) => return action,
                ParseResult::Action(_) => {
                    let _ = writeln!(self.out, "Invalid or unavailable action.");
                }
                ParseResult::Quit => {
                    self.quit = true;
                    return PlayerAction::Stand;
                }
                ParseResult::Invalid(msg) => {
                    let _ = writeln!(self.out, "{}", msg);
                }
            }
        }
    }
}

/// Handle the play command: interactive blackjack rounds.
///
/// # Arguments
///
/// * `players` - Number of seated players (1-3); prompted when omitted and
///   not configured
/// * `sets` - Replicated 52-card sets in the supply
/// * `chips` - Starting chip balance per player
/// * `seed` - RNG seed for reproducibility (default: random)
/// * `log` - Optional JSONL round history path
/// * `out` - Output stream for table display
/// * `err` - Error stream for warnings and errors
/// * `stdin` - Input stream for wagers and actions
///
/// # Returns
///
/// * `Ok(())` when the session ends normally (quit, EOF, or table broke)
/// * `Err(CliError)` on invalid arguments, I/O failure, or an exhausted card
///   supply (fatal; no partial settlement is attempted)
pub fn handle_play_command(
    players: Option<usize>,
    sets: Option<usize>,
    chips: Option<u32>,
    seed: Option<u64>,
    log: Option<String>,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let resolved = config::load_with_sources().map_err(|e| {
        let _ = ui::write_error(err, &format!("Invalid configuration: {}", e));
        CliError::Config(format!("Invalid configuration: {}", e))
    })?;
    let cfg = resolved.config;

    let sets = sets.unwrap_or(cfg.sets);
    if sets < 1 {
        ui::write_error(err, "sets must be >= 1")?;
        return Err(CliError::InvalidInput("sets must be >= 1".to_string()));
    }
    let chips = chips.unwrap_or(cfg.starting_chips);
    if chips < 1 {
        ui::write_error(err, "chips must be >= 1")?;
        return Err(CliError::InvalidInput("chips must be >= 1".to_string()));
    }
    let seed = seed.or(cfg.seed).unwrap_or_else(rand::random);

    ui::banner(out, "VENTUNO BLACKJACK")?;

    // flag wins, then an explicit config value; otherwise ask at the table
    let player_count = match players {
        Some(n) => n,
        None if !matches!(resolved.sources.players, ValueSource::Default) => cfg.players,
        None => match prompt_int(stdin, out, "Enter number of players (1-3):", 1, 3)? {
            Some(n) => n as usize,
            None => {
                ui::write_error(err, "player setup aborted")?;
                return Err(CliError::InvalidInput("player setup aborted".to_string()));
            }
        },
    };
    if !(1..=3).contains(&player_count) {
        ui::write_error(err, "players must be between 1 and 3")?;
        return Err(CliError::InvalidInput(
            "players must be between 1 and 3".to_string(),
        ));
    }

    let mut names = Vec::with_capacity(player_count);
    for i in 1..=player_count {
        let prompt = format!("Enter name for Player {}:", i);
        let name = match prompt_line(stdin, out, &prompt)? {
            Some(line) if !line.is_empty() => line,
            _ => format!("Player {}", i),
        };
        names.push(name);
    }

    writeln!(out, "ventuno: players={} sets={} seed={}", player_count, sets, seed)?;

    let mut supply = Supply::new_with_seed(sets, seed);
    supply.shuffle();
    let seated = names
        .iter()
        .enumerate()
        .map(|(i, name)| Player::new(i + 1, name.clone(), chips))
        .collect();
    let mut engine = Engine::new(supply, seated);

    let mut logger = match log {
        Some(path) => Some(RoundLogger::create(path)?),
        None => None,
    };

    loop {
        for gone in engine.remove_broke_players() {
            writeln!(out, "{} is out of chips and leaves the table.", gone.name())?;
        }
        if !engine.has_players() {
            writeln!(out, "All players are out of chips. Game over.")?;
            break;
        }

        // seat indices shift when someone leaves, so the render table is
        // rebuilt from the current seating every round
        let round_names: Vec<String> = engine
            .players()
            .iter()
            .map(|p| p.name().to_string())
            .collect();

        let (summary, quit, eof) = {
            let mut table = TermTable {
                stdin: &mut *stdin,
                out: &mut *out,
                names: &round_names,
                quit: false,
                eof: false,
            };
            match engine.play_round(&mut table) {
                Ok(summary) => (summary, table.quit, table.eof),
                Err(e) => {
                    ui::write_error(err, &e.to_string())?;
                    return Err(e.into());
                }
            }
        };

        if let Some(lg) = logger.as_mut() {
            let record = RoundRecord::from_summary(lg.next_id(), &summary);
            lg.write(&record)?;
        }

        if eof {
            ui::display_warning(err, "input stream closed; ending session")?;
            break;
        }
        if quit {
            break;
        }
        match prompt_choice(stdin, out, "Play another round? (Y/N):", &["Y", "N"])? {
            Some(answer) if answer == "Y" => continue,
            _ => break,
        }
    }

    writeln!(out, "\nThanks for playing. Final chip counts:")?;
    for p in engine.players() {
        writeln!(out, "  {}: ${}", p.name(), p.chips())?;
    }
    Ok(())
}
