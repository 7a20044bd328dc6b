//! Subcommand handlers for the Ventuno CLI.

mod cfg;
mod play;

pub use cfg::handle_cfg_command;
pub use play::handle_play_command;
