use crate::config::types::{
    ConfigFile, DEFAULT_AUTHOR, DEFAULT_EXTENSION, LoggingConfig, Profile,
    ResolvedConfig,
};
use crate::open::OpenerCommand;
use shellexpand::full;
use std::path::{Path, PathBuf};
use std::{env, fs};

use dirs::home_dir;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found at {0}")]
    NotFound(String),

    #[error("failed to read config file {0}: {1}")]
    ReadError(String, #[source] std::io::Error),

    #[error("failed to parse TOML in {0}: {1}")]
    ParseError(String, #[source] toml::de::Error),

    #[error("profile '{0}' not found")]
    ProfileNotFound(String),

    #[error("version {0} is unsupported (expected 1)")]
    BadVersion(u32),

    #[error("opener #{0} in profile '{1}' has an empty command")]
    EmptyOpener(usize, String),

    #[error("home directory not available to expand '~'")]
    NoHome,
}

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from `config_path`, or from the default location.
    ///
    /// An explicit path must exist. When no path is given and the default file
    /// is absent, built-in defaults are returned.
    pub fn load(
        config_path: Option<&Path>,
        profile_override: Option<&str>,
    ) -> Result<ResolvedConfig, ConfigError> {
        let path = match config_path {
            Some(p) => {
                if !p.exists() {
                    return Err(ConfigError::NotFound(p.display().to_string()));
                }
                p.to_path_buf()
            }
            None => {
                let p = default_config_path();
                if !p.exists() {
                    debug!("No config at {}, using built-in defaults", p.display());
                    return Self::builtin_for(profile_override);
                }
                p
            }
        };

        let s = fs::read_to_string(&path)
            .map_err(|e| ConfigError::ReadError(path.display().to_string(), e))?;

        let cf: ConfigFile = toml::from_str(&s)
            .map_err(|e| ConfigError::ParseError(path.display().to_string(), e))?;

        if cf.version != 1 {
            return Err(ConfigError::BadVersion(cf.version));
        }

        let active = profile_override
            .map(ToOwned::to_owned)
            .or(cf.profile.clone())
            .unwrap_or_else(|| "default".to_string());

        let fallback = Profile::default();
        let prof = match cf.profiles.get(&active) {
            Some(p) => p,
            None if active == "default" => &fallback,
            None => return Err(ConfigError::ProfileNotFound(active)),
        };

        let mut resolved = Self::resolve_profile(&active, prof, &cf.logging)?;
        resolved.source = Some(path);
        Ok(resolved)
    }

    fn builtin_for(profile: Option<&str>) -> Result<ResolvedConfig, ConfigError> {
        match profile {
            Some(name) if name != "default" => {
                Err(ConfigError::ProfileNotFound(name.to_string()))
            }
            _ => Ok(ResolvedConfig::builtin()),
        }
    }

    fn resolve_profile(
        active: &str,
        prof: &Profile,
        log_cfg: &LoggingConfig,
    ) -> Result<ResolvedConfig, ConfigError> {
        let output_dir = match &prof.output_dir {
            Some(dir) => expand_path(dir)?,
            None => PathBuf::from("."),
        };

        let template = prof.template.as_deref().map(expand_path).transpose()?;

        let openers = match &prof.openers {
            Some(list) => list
                .iter()
                .enumerate()
                .map(|(i, argv)| {
                    OpenerCommand::from_argv(argv)
                        .ok_or_else(|| ConfigError::EmptyOpener(i, active.to_string()))
                })
                .collect::<Result<Vec<_>, _>>()?,
            None => OpenerCommand::platform_defaults(),
        };

        // Resolve log file path if present
        let logging = if let Some(ref file) = log_cfg.file {
            LoggingConfig {
                level: log_cfg.level.clone(),
                file_level: log_cfg.file_level.clone(),
                file: Some(expand_path(&file.to_string_lossy())?),
            }
        } else {
            log_cfg.clone()
        };

        Ok(ResolvedConfig {
            active_profile: active.to_string(),
            source: None,
            output_dir,
            author: prof.author.clone().unwrap_or_else(|| DEFAULT_AUTHOR.to_string()),
            extension: prof
                .extension
                .as_deref()
                .map(|e| e.trim_start_matches('.').to_string())
                .unwrap_or_else(|| DEFAULT_EXTENSION.to_string()),
            template,
            openers,
            logging,
        })
    }
}

pub fn default_config_path() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        return Path::new(&xdg).join("tidytemplate").join("config.toml");
    }
    let home = home_dir().unwrap_or_else(|| PathBuf::from("~"));
    home.join(".config").join("tidytemplate").join("config.toml")
}

fn expand_path(input: &str) -> Result<PathBuf, ConfigError> {
    let expanded = full(input).map_err(|_| ConfigError::NoHome)?;
    Ok(PathBuf::from(expanded.to_string()))
}
