//! Interactive input helpers.
//!
//! This module implements the prompt contract the round engine relies on:
//! every prompt re-asks until it holds a valid value, so the engine never
//! receives a malformed input. EOF is surfaced as `None` so callers can wind
//! the session down instead of looping forever on a closed stream.

use std::io::{BufRead, Write};

/// Reads a line of input from a buffered reader, blocking until available.
///
/// Trims whitespace from the input and returns `None` on EOF or read errors.
///
/// # Example
///
/// ```rust,no_run
/// use std::io::{self, BufRead};
/// # use ventuno_cli::io_utils::read_stdin_line;
///
/// let stdin = io::stdin();
/// let mut handle = stdin.lock();
/// if let Some(line) = read_stdin_line(&mut handle) {
///     println!("You entered: {}", line);
/// }
/// ```
pub fn read_stdin_line(stdin: &mut dyn BufRead) -> Option<String> {
    let mut line = String::new();
    match stdin.read_line(&mut line) {
        Ok(0) => None, // EOF
        Ok(_) => {
            let trimmed = line.trim();
            Some(trimmed.to_string())
        }
        Err(_) => None, // Read error
    }
}

/// Prompts for an integer in `min..=max`, re-asking until one arrives.
/// Returns `None` on EOF.
pub fn prompt_int(
    stdin: &mut dyn BufRead,
    out: &mut dyn Write,
    prompt: &str,
    min: u32,
    max: u32,
) -> std::io::Result<Option<u32>> {
    loop {
        write!(out, "{} ", prompt)?;
        out.flush()?;
        let Some(line) = read_stdin_line(stdin) else {
            return Ok(None);
        };
        match line.parse::<u32>() {
            Ok(v) if (min..=max).contains(&v) => return Ok(Some(v)),
            _ => writeln!(out, "Invalid entry. Must be between {} and {}.", min, max)?,
        }
    }
}

/// Prompts for one of `valid` (case-insensitive), re-asking until a match
/// arrives. The returned choice is upper-cased. Returns `None` on EOF.
pub fn prompt_choice(
    stdin: &mut dyn BufRead,
    out: &mut dyn Write,
    prompt: &str,
    valid: &[&str],
) -> std::io::Result<Option<String>> {
    loop {
        write!(out, "{} ", prompt)?;
        out.flush()?;
        let Some(line) = read_stdin_line(stdin) else {
            return Ok(None);
        };
        let choice = line.to_uppercase();
        if valid.iter().any(|v| v.eq_ignore_ascii_case(&choice)) {
            return Ok(Some(choice));
        }
        writeln!(out, "Invalid choice.")?;
    }
}

/// Prompts for a free-form line. Returns `None` on EOF.
pub fn prompt_line(
    stdin: &mut dyn BufRead,
    out: &mut dyn Write,
    prompt: &str,
) -> std::io::Result<Option<String>> {
    write!(out, "{} ", prompt)?;
    out.flush()?;
    Ok(read_stdin_line(stdin))
}
