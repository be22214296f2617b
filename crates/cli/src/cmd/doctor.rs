use std::path::Path;
use std::process;
use tidytemplate_core::config::{ConfigError, ResolvedConfig, default_config_path};

pub fn run(loaded: Result<ResolvedConfig, ConfigError>, cfg_path: Option<&Path>) {
    match loaded {
        Ok(rc) => {
            println!("OK   tidyt doctor");
            println!(
                "path: {}",
                rc.source.as_ref().map_or_else(
                    || format!(
                        "(none, built-in defaults; looked for {})",
                        default_config_path().display()
                    ),
                    |p| p.display().to_string()
                )
            );
            println!("profile: {}", rc.active_profile);
            println!("output_dir: {}", rc.output_dir.display());
            println!("author: {}", rc.author);
            println!("extension: {}", rc.extension);
            println!(
                "template: {}",
                rc.template
                    .as_ref()
                    .map_or_else(|| "(built-in)".to_string(), |p| p.display().to_string())
            );
            let openers: Vec<String> = rc.openers.iter().map(ToString::to_string).collect();
            println!("openers: {}", openers.join(" | "));
            println!("logging.level: {}", rc.logging.level);
        }
        Err(e) => {
            println!("FAIL tidyt doctor");
            println!("{e}");
            if cfg_path.is_none() {
                println!("looked for: {}", default_config_path().display());
            }
            process::exit(1);
        }
    }
}
