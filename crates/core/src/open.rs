//! Best-effort launching of an editor or viewer for a freshly written notebook.
//!
//! Candidates are tried in order, in argument-vector form with the file path
//! appended, until one exits successfully.

use std::fmt;
use std::path::Path;
use std::process::Command;

use tracing::debug;

/// A single opener invocation: `program args... <path>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenerCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl OpenerCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self { program: program.into(), args: Vec::new() }
    }

    pub fn with_args<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { program: program.into(), args: args.into_iter().map(Into::into).collect() }
    }

    /// Build from `[program, args...]`; `None` when the vector is empty.
    pub fn from_argv(argv: &[String]) -> Option<Self> {
        let (program, args) = argv.split_first()?;
        if program.trim().is_empty() {
            return None;
        }
        Some(Self { program: program.clone(), args: args.to_vec() })
    }

    /// Editor, then the macOS `open`, then the platform "start" equivalent.
    ///
    /// The editor is `$VISUAL`, then `$EDITOR`, falling back to `code`.
    pub fn platform_defaults() -> Vec<Self> {
        let editor = std::env::var("VISUAL")
            .or_else(|_| std::env::var("EDITOR"))
            .ok()
            .filter(|e| !e.trim().is_empty())
            .unwrap_or_else(|| "code".to_string());
        let editor_argv: Vec<String> = editor.split_whitespace().map(String::from).collect();
        let editor = Self::from_argv(&editor_argv).unwrap_or_else(|| Self::new("code"));

        let start = if cfg!(windows) {
            Self::with_args("cmd", ["/C", "start", ""])
        } else {
            Self::new("xdg-open")
        };

        vec![editor, Self::new("open"), start]
    }
}

impl fmt::Display for OpenerCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Something that can try to open a file.
pub trait Opener {
    /// Returns the command that succeeded, or `None` when every candidate failed.
    fn open(&mut self, path: &Path) -> Option<OpenerCommand>;
}

/// Opener backed by real processes.
#[derive(Debug, Clone)]
pub struct CommandOpener {
    candidates: Vec<OpenerCommand>,
}

impl CommandOpener {
    pub fn new(candidates: Vec<OpenerCommand>) -> Self {
        Self { candidates }
    }
}

impl Opener for CommandOpener {
    fn open(&mut self, path: &Path) -> Option<OpenerCommand> {
        open_with_fallback(&self.candidates, path)
    }
}

/// Try each candidate in order; return the first that exits successfully.
pub fn open_with_fallback(candidates: &[OpenerCommand], path: &Path) -> Option<OpenerCommand> {
    for candidate in candidates {
        let status = Command::new(&candidate.program)
            .args(&candidate.args)
            .arg(path)
            .status();

        match status {
            Ok(s) if s.success() => {
                debug!("Opened {} with '{}'", path.display(), candidate);
                return Some(candidate.clone());
            }
            Ok(s) => debug!("Opener '{}' exited with status: {}", candidate, s),
            Err(e) => debug!("Opener '{}' failed to start: {}", candidate, e),
        }
    }

    debug!("No opener succeeded for {}", path.display());
    None
}
