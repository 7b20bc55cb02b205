//! Terminal implementation of the platform dialogs.

use std::io::{self, BufRead, Write};

use haven_core::{CoreError, Platform};
use tracing::warn;

/// Asks on stdout, reads answers from stdin.
///
/// EOF or a read error counts as a cancelled dialog.
pub struct TerminalPlatform<R> {
    input: R,
}

impl TerminalPlatform<io::StdinLock<'static>> {
    pub fn stdin() -> Self {
        Self {
            input: io::stdin().lock(),
        }
    }
}

impl<R: BufRead> TerminalPlatform<R> {
    fn read_line(&mut self, message: &str) -> Option<String> {
        print!("{message} ");
        if let Err(e) = io::stdout().flush() {
            warn!(error = %e, "could not flush prompt");
        }
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
            Err(e) => {
                warn!(error = %e, "could not read answer");
                None
            }
        }
    }
}

impl<R: BufRead> Platform for TerminalPlatform<R> {
    fn confirm(&mut self, message: &str) -> bool {
        matches!(
            self.read_line(&format!("{message} [y/N]"))
                .map(|a| a.trim().to_ascii_lowercase())
                .as_deref(),
            Some("y" | "yes")
        )
    }

    fn prompt_text(&mut self, message: &str) -> Option<String> {
        self.read_line(message)
    }

    fn notify(&mut self, message: &str) {
        println!("{message}");
    }

    fn place_call(&mut self, number: &str) -> Result<(), CoreError> {
        println!("Calling {number}...");
        open::that(format!("tel:{number}"))?;
        Ok(())
    }
}
