use clap::{Parser, Subcommand};
use colored::Colorize;

use crate::{
    error::StatusError,
    subcommands::{Completions, Config, Setup, Status},
};

mod error;
mod format;
mod game;
mod network;
mod provider;
mod settings;
mod subcommands;
mod verbosity;

#[derive(Debug, Parser)]
#[clap(author, version, about)]
struct Cli {
    #[clap(subcommand)]
    command: Subcommands,
}

#[derive(Debug, Subcommand)]
enum Subcommands {
    #[clap(about = "Get the status of the current game")]
    Status(Status),
    #[clap(about = "Show the current settings")]
    Config(Config),
    #[clap(about = "Write new settings, replacing the current ones")]
    Setup(Setup),
    #[clap(about = "Generate shell completions script")]
    Completions(Completions),
}

#[tokio::main]
async fn main() {
    verbosity::setup_logging();

    if let Err(err) = run_command(Cli::parse()).await {
        match err.downcast_ref::<StatusError>() {
            Some(status_err) => {
                // Nowhere left to report a broken stderr to.
                status_err.report(&mut std::io::stderr()).ok();
            }
            None => eprintln!("{}", format!("Error: {err:?}").red()),
        }
        std::process::exit(1);
    }
}

async fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Subcommands::Status(cmd) => cmd.run().await,
        Subcommands::Config(cmd) => cmd.run().await,
        Subcommands::Setup(cmd) => cmd.run().await,
        Subcommands::Completions(cmd) => cmd.run(),
    }
}
