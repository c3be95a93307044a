//! Inspect command - summarize a saved table

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use super::TableArgs;
use crate::{
    app::{App, GameConfig},
    cli::output::{format_number, format_percent, print_kv, print_section},
    q_learning::{ActionValues, PlayRecord, QTable, SavedQTable, epsilon, first_best},
    types::StateKey,
};

#[derive(Parser, Debug, Clone)]
#[command(about = "Show what the agent has learned so far")]
pub struct InspectArgs {
    #[command(flatten)]
    pub table: TableArgs,

    /// Print the nine Q-values of one state (e.g. "X...O....")
    #[arg(long)]
    pub state: Option<String>,

    /// Emit JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct StateSummary {
    key: StateKey,
    known: bool,
    values: ActionValues,
    best_move: Option<usize>,
}

impl StateSummary {
    fn new(key: StateKey, table: &QTable) -> Self {
        let values = table.values(&key).copied().unwrap_or_default();
        let best_move = if table.contains(&key) {
            let candidates: Vec<(usize, f64)> = key
                .to_board()
                .available_moves()
                .into_iter()
                .map(|action| (action, values[action]))
                .collect();
            first_best(&candidates)
        } else {
            None
        };
        Self {
            known: table.contains(&key),
            key,
            values,
            best_move,
        }
    }
}

#[derive(Debug, Serialize)]
struct TableSummary<'a> {
    path: PathBuf,
    version: u32,
    learning_rate: f64,
    discount_factor: f64,
    states: usize,
    epsilon: f64,
    record: &'a PlayRecord,
    state: Option<StateSummary>,
}

fn print_text(summary: &TableSummary<'_>) {
    print_section(&format!("Q-table {}", summary.path.display()));
    print_kv("Format version", &summary.version.to_string());
    print_kv("Learning rate α", &summary.learning_rate.to_string());
    print_kv("Discount γ", &summary.discount_factor.to_string());
    print_kv("States", &format_number(summary.states as u64));
    print_kv("Exploration ε", &format!("{:.3}", summary.epsilon));
    print_kv("Games played", &format_number(summary.record.games_played));
    print_kv("AI wins", &format_number(summary.record.agent_wins));
    print_kv("Player wins", &format_number(summary.record.player_wins));
    print_kv("Draws", &format_number(summary.record.draws));
    print_kv(
        "AI non-loss rate",
        &format_percent(summary.record.non_loss_rate()),
    );

    if let Some(state) = &summary.state {
        println!("\nState {}:", state.key);
        if !state.known {
            println!("  (never visited, all values 0)");
        }
        for row in state.values.chunks(3) {
            println!("  {:>8.3} {:>8.3} {:>8.3}", row[0], row[1], row[2]);
        }
        if let Some(best) = state.best_move {
            print_kv("Best learned move", &(best + 1).to_string());
        }
    }
}

pub fn execute(args: InspectArgs) -> Result<()> {
    let app = App::new(GameConfig::default().with_q_table_path(&args.table.q_table))?;
    let saved: SavedQTable = app.load_table()?;

    let state = args
        .state
        .as_deref()
        .map(StateKey::parse)
        .transpose()
        .context("Invalid --state")?
        .map(|key| StateSummary::new(key, &saved.table));

    let summary = TableSummary {
        path: args.table.q_table.clone(),
        version: saved.version,
        learning_rate: saved.table.learning_rate(),
        discount_factor: saved.table.discount_factor(),
        states: saved.table.len(),
        epsilon: epsilon(saved.table.len()),
        record: &saved.record,
        state,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_text(&summary);
    }

    Ok(())
}
