//! Subcommands of the `brainy` binary

use std::path::PathBuf;

use clap::Args;

use crate::app::config::DEFAULT_Q_TABLE_PATH;

pub mod inspect;
pub mod play;
pub mod train;

/// Location of the learned table, shared by every command
#[derive(Args, Debug, Clone)]
pub struct TableArgs {
    /// Q-table file to load at start and save after each game
    #[arg(long, default_value = DEFAULT_Q_TABLE_PATH)]
    pub q_table: PathBuf,
}
