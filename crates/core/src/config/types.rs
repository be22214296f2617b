use std::collections::HashMap;
use std::path::PathBuf;

use serde::Deserialize;

use crate::open::OpenerCommand;

#[derive(Debug, Deserialize)]
pub struct ConfigFile {
    pub version: u32,
    pub profile: Option<String>,
    #[serde(default)]
    pub profiles: HashMap<String, Profile>,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Default)]
pub struct Profile {
    /// Directory new notebooks are written to (defaults to the working directory).
    pub output_dir: Option<String>,
    /// Value substituted for `{{author}}` in the front-matter.
    pub author: Option<String>,
    /// File extension for derived names, without the leading dot.
    pub extension: Option<String>,
    /// Path to a user template replacing the built-in notebook body.
    pub template: Option<String>,
    /// Opener commands tried in order, each as an argument vector.
    pub openers: Option<Vec<Vec<String>>>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub file_level: Option<String>,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), file_level: None, file: None }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

pub const DEFAULT_AUTHOR: &str = "Your Name";
pub const DEFAULT_EXTENSION: &str = "qmd";

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub active_profile: String,
    /// Where the config was read from; `None` when built-in defaults are in use.
    pub source: Option<PathBuf>,
    pub output_dir: PathBuf,
    pub author: String,
    pub extension: String,
    pub template: Option<PathBuf>,
    pub openers: Vec<OpenerCommand>,
    pub logging: LoggingConfig,
}

impl ResolvedConfig {
    /// Configuration used when no config file exists.
    pub fn builtin() -> Self {
        Self {
            active_profile: "default".to_string(),
            source: None,
            output_dir: PathBuf::from("."),
            author: DEFAULT_AUTHOR.to_string(),
            extension: DEFAULT_EXTENSION.to_string(),
            template: None,
            openers: OpenerCommand::platform_defaults(),
            logging: LoggingConfig::default(),
        }
    }
}
