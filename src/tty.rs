//! Terminal I/O utilities for CLI.
//!
//! Provides the stdin-backed line source and status output.

use drillbox::prompt::{strip_line_terminator, LineSource};
use std::io::{self, BufRead, IsTerminal, Write};

/// Reads operator answers from stdin, writing prompts to stderr so stdout
/// only carries results.
pub struct StdinLines;

impl LineSource for StdinLines {
    fn read_line(&mut self, prompt: &str) -> drillbox::Result<Option<String>> {
        eprint!("{}", prompt);
        io::stderr().flush().ok();

        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line).map_err(|e| {
            drillbox::Error::internal_io(e.to_string(), Some("read stdin".to_string()))
        })?;

        if read == 0 {
            // Keep the next prompt or result off the prompt line.
            if io::stderr().is_terminal() {
                eprintln!();
            }
            return Ok(None);
        }

        Ok(Some(strip_line_terminator(&line).to_string()))
    }
}

/// Print status message to stderr if running in a terminal.
pub fn status(message: &str) {
    if io::stderr().is_terminal() {
        eprintln!("{}", message);
    }
}

// log_status! macro is defined in lib.rs (#[macro_export]) and available crate-wide.
