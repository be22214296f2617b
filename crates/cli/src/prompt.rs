//! Overwrite confirmation for the terminal.
//!
//! Uses a dialoguer prompt when stdin is a terminal and falls back to reading
//! a plain line otherwise, so `echo y | tidyt new` works in scripts.

use dialoguer::{Input, theme::ColorfulTheme};
use std::io::{self, IsTerminal};
use tidytemplate_core::confirm::{Confirm, LineConfirm};

pub struct TerminalConfirm;

impl Confirm for TerminalConfirm {
    fn ask(&mut self, prompt: &str) -> io::Result<String> {
        if !io::stdin().is_terminal() {
            return LineConfirm::stdio().ask(prompt);
        }

        let theme = ColorfulTheme::default();
        Input::<String>::with_theme(&theme)
            .with_prompt(dialoguer_prompt(prompt))
            .allow_empty(true)
            .interact_text()
            .or_else(dialoguer_error_to_response)
    }
}

/// dialoguer appends its own separator after the prompt text.
fn dialoguer_prompt(prompt: &str) -> &str {
    prompt.trim_end().trim_end_matches(':')
}

/// Ctrl-D at the prompt counts as "no" rather than an error.
fn dialoguer_error_to_response(e: dialoguer::Error) -> io::Result<String> {
    match e {
        dialoguer::Error::IO(io_err) if io_err.kind() == io::ErrorKind::UnexpectedEof => {
            Ok(String::new())
        }
        dialoguer::Error::IO(io_err) => Err(io_err),
    }
}
