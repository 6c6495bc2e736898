mod commands;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "dimmer",
    about = "Generate reduced-brightness copies of the built-in display color profile"
)]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(flatten)]
    generate: commands::generate::GenerateArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the name and channel maxima stored in a profile
    Info(commands::info::InfoArgs),
    /// Print or save the default batch config as TOML
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Some(Commands::Info(args)) => commands::info::run(args),
        Some(Commands::Config(args)) => commands::config::run(args),
        None => commands::generate::run(&cli.generate),
    }
}
