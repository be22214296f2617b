//! Subscriber setup for `tidyt`.
//!
//! Diagnostics go to stderr so they never interleave with the overwrite prompt
//! or the `Created` line on stdout. The optional log file is appended to, so it
//! keeps a history of every week's run.

use std::io::IsTerminal;
use std::path::Path;

use tidytemplate_core::config::LoggingConfig;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

/// Quietest first; `-v` moves one step to the right.
const LADDER: [LevelFilter; 6] = [
    LevelFilter::OFF,
    LevelFilter::ERROR,
    LevelFilter::WARN,
    LevelFilter::INFO,
    LevelFilter::DEBUG,
    LevelFilter::TRACE,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Levels {
    pub stderr: LevelFilter,
    pub file: LevelFilter,
}

/// Stderr uses `[logging] level` raised by `verbose` steps. The file uses
/// `file_level` when set, otherwise at least INFO so every write is recorded.
pub fn resolve_levels(cfg: &LoggingConfig, verbose: u8) -> Levels {
    let configured = parse_level(&cfg.level).unwrap_or(LevelFilter::WARN);
    let stderr = raise(configured, verbose);
    let file = match cfg.file_level.as_deref() {
        Some(level) => parse_level(level).unwrap_or(LevelFilter::DEBUG),
        None => stderr.max(LevelFilter::INFO),
    };
    Levels { stderr, file }
}

/// Install the global subscriber. `RUST_LOG` overrides both computed levels.
pub fn init(cfg: &LoggingConfig, verbose: u8) {
    let levels = resolve_levels(cfg, verbose);

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(stderr_wants_color())
        .with_target(false)
        .without_time()
        .with_filter(env_filter(levels.stderr));

    let file_layer = cfg.file.as_deref().and_then(open_log_file).map(|appender| {
        fmt::layer()
            .with_writer(appender)
            .with_ansi(false)
            .with_line_number(true)
            .with_filter(env_filter(levels.file))
    });

    tracing_subscriber::registry().with(stderr_layer).with(file_layer).init();
}

fn env_filter(level: LevelFilter) -> EnvFilter {
    EnvFilter::builder().with_default_directive(level.into()).from_env_lossy()
}

fn stderr_wants_color() -> bool {
    std::io::stderr().is_terminal() && std::env::var_os("NO_COLOR").is_none()
}

/// Append-mode writer for `path`, creating missing directories. A log file
/// that cannot be opened disables file logging rather than the command.
fn open_log_file(path: &Path) -> Option<RollingFileAppender> {
    let Some(name) = path.file_name() else {
        eprintln!("Ignoring log file {}: not a file path", path.display());
        return None;
    };
    let dir = path.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or(Path::new("."));

    match RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(name.to_string_lossy())
        .build(dir)
    {
        Ok(appender) => Some(appender),
        Err(e) => {
            eprintln!("Logging to {} disabled: {e}", path.display());
            None
        }
    }
}

fn raise(level: LevelFilter, steps: u8) -> LevelFilter {
    let start = LADDER.iter().position(|l| *l == level).unwrap_or(2);
    let index = (start + usize::from(steps)).min(LADDER.len() - 1);
    LADDER[index]
}

fn parse_level(s: &str) -> Option<LevelFilter> {
    match s.to_lowercase().as_str() {
        "off" => Some(LevelFilter::OFF),
        "error" => Some(LevelFilter::ERROR),
        "warn" => Some(LevelFilter::WARN),
        "info" => Some(LevelFilter::INFO),
        "debug" => Some(LevelFilter::DEBUG),
        "trace" => Some(LevelFilter::TRACE),
        _ => None,
    }
}
