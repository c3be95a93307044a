//! Train command - headless warm-up games against a scripted opponent

use std::time::Duration;

use anyhow::{Result, bail};
use clap::{Parser, ValueEnum};

use super::TableArgs;
use crate::{
    adapters::{RandomOpponent, SilentRenderer, TacticalOpponent},
    app::{App, GameConfig},
    cli::output::{
        create_training_progress, format_number, format_percent, print_kv, print_section,
    },
    game::GameLoop,
    ports::MoveSource,
    q_learning::{PlayRecord, epsilon},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OpponentKind {
    /// Uniformly random legal moves
    Random,
    /// Wins or blocks when it can, random otherwise
    Tactical,
}

#[derive(Parser, Debug, Clone)]
#[command(about = "Warm up the table with headless games")]
pub struct TrainArgs {
    #[command(flatten)]
    pub table: TableArgs,

    /// Number of training games
    #[arg(long, short = 'g', default_value_t = 500)]
    pub games: u64,

    /// Opponent standing in for the human
    #[arg(long, short = 'o', value_enum, default_value_t = OpponentKind::Random)]
    pub opponent: OpponentKind,

    /// Save the table every N games (0 saves only at the end)
    #[arg(long, default_value_t = 100)]
    pub checkpoint_every: u64,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Hide the progress bar
    #[arg(long)]
    pub no_progress: bool,
}

fn build_opponent(kind: OpponentKind, app: &App) -> Box<dyn MoveSource> {
    // Keep the opponent's stream apart from the agent's
    let seed = app.config().seed.map(|seed| seed.wrapping_add(1));
    match kind {
        OpponentKind::Random => Box::new(RandomOpponent::new(seed)),
        OpponentKind::Tactical => Box::new(TacticalOpponent::new(app.config().human, seed)),
    }
}

pub fn execute(args: TrainArgs) -> Result<()> {
    if args.games == 0 {
        bail!("--games must be at least 1");
    }

    let mut config = GameConfig::default()
        .with_q_table_path(&args.table.q_table)
        .with_think_delay(Duration::ZERO);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    let app = App::new(config)?;

    let mut saved = app.load_table()?;
    let mut log = app.detached_event_log();
    let mut agent = app.create_agent();
    let mut opponent = build_opponent(args.opponent, &app);
    let mut renderer = SilentRenderer;

    let progress = if args.no_progress {
        None
    } else {
        Some(create_training_progress(args.games)?)
    };

    log::info!(
        "training {} games against {} opponent from {} known states",
        args.games,
        opponent.name(),
        saved.table.len()
    );

    let mut tally = PlayRecord::default();
    let mut saved_at = 0;
    let mut failed_saves = 0;
    for game in 1..=args.games {
        let report = GameLoop::new(&mut saved, &mut agent, &mut log)
            .play_episode(opponent.as_mut(), &mut renderer)?;
        tally.record(report.outcome);

        if args.checkpoint_every > 0 && game % args.checkpoint_every == 0 {
            if !app.persist(&saved, &mut log) {
                failed_saves += 1;
            }
            saved_at = game;
        }
        if let Some(pb) = &progress {
            pb.inc(1);
            pb.set_message(format!("{} states", saved.table.len()));
        }
    }
    if saved_at != args.games && !app.persist(&saved, &mut log) {
        failed_saves += 1;
    }
    if let Some(pb) = progress {
        pb.finish_with_message(format!("{} states", saved.table.len()));
    }

    print_section("Training Complete");
    print_kv("Games", &format_number(tally.games_played));
    print_kv("AI wins", &format_number(tally.agent_wins));
    print_kv("Opponent wins", &format_number(tally.player_wins));
    print_kv("Draws", &format_number(tally.draws));
    print_kv("AI non-loss rate", &format_percent(tally.non_loss_rate()));
    print_kv("States learned", &format_number(saved.table.len() as u64));
    print_kv("Exploration ε", &format!("{:.3}", epsilon(saved.table.len())));
    print_kv("Lifetime games", &format_number(saved.record.games_played));
    if failed_saves > 0 {
        print_kv("Failed saves", &failed_saves.to_string());
    }

    Ok(())
}
