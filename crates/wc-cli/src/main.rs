//! Terminal frontend for Wasteland Chronicles.

mod commands;
mod settings;
mod store;

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "wasteland",
    about = "Fallout: Wasteland Chronicles, a text adventure in the Capital Wasteland",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Log engine diagnostics to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the game (the default)
    Play(PlayArgs),

    /// Validate a world file and report content problems
    Check {
        /// World JSON file (default: the bundled Capital Wasteland)
        #[arg(short, long)]
        world: Option<PathBuf>,
    },
}

/// Options for a game session. Flags override the config file.
#[derive(Args, Debug, Default)]
pub struct PlayArgs {
    /// TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// World JSON file (default: the bundled Capital Wasteland)
    #[arg(short, long)]
    pub world: Option<PathBuf>,

    /// RNG seed for reproducible combat
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Directory save files are written to
    #[arg(long)]
    pub save_dir: Option<PathBuf>,

    /// Name of your character
    #[arg(short, long)]
    pub name: Option<String>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command.unwrap_or(Commands::Play(PlayArgs::default())) {
        Commands::Play(args) => commands::play::run(&args),
        Commands::Check { world } => commands::check::run(world.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

/// Diagnostics go to stderr so they never interleave with narration.
fn init_tracing(verbose: bool) {
    use tracing_subscriber::{EnvFilter, prelude::*};

    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
