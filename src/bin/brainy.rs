//! brainy - tic-tac-toe against an agent that learns while you play
//!
//! Running without a subcommand starts an interactive game, the same as
//! `brainy play`.

use std::path::PathBuf;

use anyhow::Result;
use brainy::cli::commands::{
    inspect::{self, InspectArgs},
    play::{self, PlayArgs},
    train::{self, TrainArgs},
};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "brainy")]
#[command(version, about = "Tic-tac-toe against a Q-learning agent", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    /// Write debug diagnostics to this file
    #[arg(long, global = true)]
    diagnostics: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    play: PlayArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactive games (default)
    Play(PlayArgs),

    /// Warm up the table against a scripted opponent
    Train(TrainArgs),

    /// Summarize the learned table
    Inspect(InspectArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    brainy::cli::logging::init(cli.diagnostics.as_deref())?;

    match cli.command {
        Some(Commands::Play(args)) => play::execute(args),
        Some(Commands::Train(args)) => train::execute(args),
        Some(Commands::Inspect(args)) => inspect::execute(args),
        None => play::execute(cli.play),
    }
}
