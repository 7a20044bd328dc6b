//! Configuration command handler.
//!
//! This module implements the `cfg` command, which displays the current
//! Ventuno configuration settings with their sources (default, environment,
//! or configuration file).
//!
//! # Example Output
//!
//! ```json
//! {
//!   "players": {
//!     "value": 1,
//!     "source": "default"
//!   },
//!   "sets": {
//!     "value": 4,
//!     "source": "env"
//!   },
//!   ...
//! }
//! ```

use crate::config;
use crate::error::CliError;
use crate::ui;
use std::io::Write;

/// Handle the cfg command.
///
/// Loads the current configuration with source tracking and displays it
/// as formatted JSON to the output stream.
///
/// # Errors
///
/// Returns `CliError::Config` if configuration loading fails.
/// Returns `CliError::Io` if writing to the output stream fails.
pub fn handle_cfg_command(out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    let resolved = match config::load_with_sources() {
        Ok(r) => r,
        Err(e) => {
            ui::write_error(err, &format!("Invalid configuration: {}", e))?;
            return Err(CliError::Config(format!("Invalid configuration: {}", e)));
        }
    };

    let config::ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "players": {
            "value": config.players,
            "source": sources.players,
        },
        "sets": {
            "value": config.sets,
            "source": sources.sets,
        },
        "starting_chips": {
            "value": config.starting_chips,
            "source": sources.starting_chips,
        },
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
    });
    let rendered = serde_json::to_string_pretty(&display)
        .map_err(|e| CliError::Config(format!("serialize configuration: {}", e)))?;
    writeln!(out, "{}", rendered)?;
    Ok(())
}
