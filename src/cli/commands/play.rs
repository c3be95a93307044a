//! Play command - interactive games against the learning agent

use std::{path::PathBuf, time::Duration};

use anyhow::{Context, Result};
use clap::Parser;

use super::TableArgs;
use crate::{
    adapters::{ConsoleInput, ConsoleRenderer},
    app::{App, GameConfig, config::DEFAULT_BRAIN_LOG_PATH},
    cli::output::{format_number, format_percent, print_kv, print_section},
    game::GameLoop,
};

#[derive(Parser, Debug, Clone)]
#[command(about = "Play against the agent; it learns from every game")]
pub struct PlayArgs {
    #[command(flatten)]
    pub table: TableArgs,

    /// Append-only log of the agent's reasoning
    #[arg(long, default_value = DEFAULT_BRAIN_LOG_PATH)]
    pub brain_log: PathBuf,

    /// Milliseconds the agent pauses before consulting its table
    #[arg(long, default_value_t = 200)]
    pub think_ms: u64,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,
}

impl PlayArgs {
    pub fn config(&self) -> GameConfig {
        let mut config = GameConfig::default()
            .with_q_table_path(&self.table.q_table)
            .with_brain_log_path(&self.brain_log)
            .with_think_delay(Duration::from_millis(self.think_ms));
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        config
    }
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let app = App::new(args.config())?;
    let mut saved = app.load_table().context("Failed to load learned table")?;
    let mut log = app.open_event_log()?;
    let mut agent = app.create_agent();
    let mut input = ConsoleInput::new();
    let mut renderer = ConsoleRenderer::new();

    loop {
        GameLoop::new(&mut saved, &mut agent, &mut log)
            .persist_with(&app)
            .play_episode(&mut input, &mut renderer)?;
        if !input.play_again()? {
            break;
        }
    }

    let record = &saved.record;
    print_section("Session Over");
    print_kv("Games played", &format_number(record.games_played));
    print_kv("You won", &format_number(record.player_wins));
    print_kv("AI won", &format_number(record.agent_wins));
    print_kv("Draws", &format_number(record.draws));
    print_kv("AI non-loss rate", &format_percent(record.non_loss_rate()));
    print_kv("States learned", &format_number(saved.table.len() as u64));

    Ok(())
}
