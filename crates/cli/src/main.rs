mod cmd;
mod completions;
mod logging;
mod prompt;

use clap::{ArgAction, Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;
use tidytemplate_core::config::{ConfigLoader, LoggingConfig};

#[derive(Debug, Parser)]
#[command(
    name = "tidyt",
    version,
    about = "Scaffold this week's Tidy Tuesday Quarto notebook"
)]
pub struct Cli {
    /// Path to config file (defaults to ~/.config/tidytemplate/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Config profile to use
    #[arg(long, global = true)]
    profile: Option<String>,

    /// More diagnostics on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Create the notebook for the Tuesday of the current (or given) week
    New(NewArgs),

    /// Print the Tuesday of the current (or given) week
    Tuesday(TuesdayArgs),

    /// Validate configuration and print resolved settings
    Doctor,

    /// Print shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Debug, Args)]
pub struct NewArgs {
    /// Output file name (default: YYYY_MM_DD_tidy_tuesday.<ext>)
    #[arg(long, short)]
    pub name: Option<PathBuf>,

    /// Reference date: YYYY-MM-DD, a datetime, or "today - 1w"
    #[arg(long, short)]
    pub date: Option<String>,

    /// Overwrite an existing file without asking
    #[arg(long, short)]
    pub force: bool,

    /// Do not open the file after writing it
    #[arg(long)]
    pub no_open: bool,

    /// Directory to write into (overrides the profile's output_dir)
    #[arg(long, short)]
    pub output_dir: Option<PathBuf>,

    /// Template file to render instead of the configured one
    #[arg(long)]
    pub template: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct TuesdayArgs {
    /// Reference date: YYYY-MM-DD, a datetime, or "today - 1w"
    #[arg(long, short)]
    pub date: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    let loaded = ConfigLoader::load(cli.config.as_deref(), cli.profile.as_deref());
    let default_logging = LoggingConfig::default();
    logging::init(
        loaded.as_ref().map(|c| &c.logging).unwrap_or(&default_logging),
        cli.verbose,
    );

    match cli.command {
        Commands::Doctor => cmd::doctor::run(loaded, cli.config.as_deref()),
        Commands::New(args) => cmd::new::run(loaded, &args),
        Commands::Tuesday(args) => cmd::tuesday::run(&args),
        Commands::Completions { shell } => completions::print(shell),
    }
}
