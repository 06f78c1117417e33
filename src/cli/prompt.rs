//! Terminal confirmation.

use std::io::{self, IsTerminal, Write};

use dialoguer::Confirm as Dialog;

use crate::core::prompt::{is_affirmative, Confirm};
use crate::error::Result;

/// Asks on the terminal, defaulting to no.
///
/// With a piped stdin the question goes to stderr and one line is read.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalPrompt;

impl Confirm for TerminalPrompt {
    fn confirm(&self, question: &str) -> Result<bool> {
        if io::stdin().is_terminal() {
            return Dialog::new()
                .with_prompt(question)
                .default(false)
                .interact()
                .map_err(Into::into);
        }

        eprint!("{} [y/N] ", question);
        io::stderr().flush()?;
        let mut answer = String::new();
        io::stdin().read_line(&mut answer)?;
        Ok(is_affirmative(&answer))
    }
}
