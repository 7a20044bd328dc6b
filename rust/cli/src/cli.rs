//! Command-line argument definitions for the `ventuno` binary.

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "ventuno", version, about = "Ventuno Blackjack CLI")]
pub struct VentunoCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Play blackjack rounds at an interactive table
    Play {
        /// Number of seated players (1-3); prompted when omitted
        #[arg(long)]
        players: Option<usize>,
        /// Replicated 52-card sets in the supply
        #[arg(long)]
        sets: Option<usize>,
        /// Starting chip balance per player
        #[arg(long)]
        chips: Option<u32>,
        /// RNG seed for reproducible shuffles (default: random)
        #[arg(long)]
        seed: Option<u64>,
        /// Append JSONL round records to this file
        #[arg(long)]
        log: Option<String>,
    },
    /// Show the resolved configuration and its sources
    Cfg,
}
