//! `tidyt new`: write this week's notebook.

use chrono::Local;
use std::process;
use tidytemplate_core::config::{ConfigError, ResolvedConfig};
use tidytemplate_core::materialize::{MaterializeOutcome, OpenStatus, materialize_with};
use tidytemplate_core::open::CommandOpener;
use tidytemplate_core::templates::LoadedTemplate;
use tidytemplate_core::weekly::{Reference, WeeklyOptions, plan_weekly};
use tracing::debug;

use crate::NewArgs;
use crate::prompt::TerminalConfirm;

pub fn run(loaded: Result<ResolvedConfig, ConfigError>, args: &NewArgs) {
    let cfg = match loaded {
        Ok(rc) => rc,
        Err(e) => {
            eprintln!("Failed to load config: {e}");
            process::exit(1);
        }
    };

    let template_path = args.template.as_deref().or(cfg.template.as_deref());
    let template = match LoadedTemplate::resolve(template_path) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Failed to load template: {e}");
            process::exit(1);
        }
    };

    let options = build_options(&cfg, args);
    let today = Local::now().date_naive();
    let mut opener = CommandOpener::new(cfg.openers.clone());

    let outcome = plan_weekly(&options, today).and_then(|plan| {
        // Report the write before an editor takes over the terminal
        materialize_with(
            &plan.request,
            &template,
            &mut TerminalConfirm,
            &mut opener,
            &mut |path| println!("Created {}", path.display()),
        )
    });

    match outcome {
        Ok(MaterializeOutcome::Created { path, open }) => {
            if open == OpenStatus::Unavailable {
                println!("File created: {}", path.display());
            }
        }
        Ok(MaterializeOutcome::Declined { path }) => {
            debug!("Left {} unchanged", path.display());
        }
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}

fn build_options(cfg: &ResolvedConfig, args: &NewArgs) -> WeeklyOptions {
    let mut options = WeeklyOptions::from_config(cfg);
    options.name = args.name.clone();
    options.reference = args.date.clone().map(Reference::Expr);
    options.overwrite = args.force;
    options.open_after_write = !args.no_open;
    if let Some(dir) = &args.output_dir {
        options.output_dir = dir.clone();
    }
    options
}
