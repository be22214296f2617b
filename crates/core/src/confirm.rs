//! Overwrite confirmation.
//!
//! The materializer never reads the terminal directly; it asks a [`Confirm`]
//! implementation, so callers decide whether that is stdin, a dialoguer
//! prompt, or a canned answer.

use std::io::{self, BufRead, Write};

pub trait Confirm {
    /// Show `prompt` and return the raw response. EOF yields an empty string.
    fn ask(&mut self, prompt: &str) -> io::Result<String>;
}

/// Only a lone `y`, in either case, is a yes. The line ending is dropped but
/// any other whitespace makes the answer a decline.
pub fn is_affirmative(response: &str) -> bool {
    let answer = response.strip_suffix('\n').unwrap_or(response);
    let answer = answer.strip_suffix('\r').unwrap_or(answer);
    answer.eq_ignore_ascii_case("y")
}

/// Writes the prompt to `output` and reads one line from `input`.
pub struct LineConfirm<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LineConfirm<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl LineConfirm<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Confirm for LineConfirm<R, W> {
    fn ask(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(line)
    }
}

/// Always answers with the same response.
#[derive(Debug, Clone)]
pub struct FixedConfirm {
    response: String,
    asked: Vec<String>,
}

impl FixedConfirm {
    pub fn new(response: impl Into<String>) -> Self {
        Self { response: response.into(), asked: Vec::new() }
    }

    pub fn yes() -> Self {
        Self::new("y")
    }

    pub fn no() -> Self {
        Self::new("n")
    }

    /// Prompts received so far.
    pub fn asked(&self) -> &[String] {
        &self.asked
    }
}

impl Confirm for FixedConfirm {
    fn ask(&mut self, prompt: &str) -> io::Result<String> {
        self.asked.push(prompt.to_string());
        Ok(self.response.clone())
    }
}
