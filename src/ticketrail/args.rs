use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ticketrail")]
#[command(about = "A terminal kanban board for restaurant order tickets", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Seed the board with demo orders
    #[arg(long, global = true, value_name = "N")]
    pub demo: Option<usize>,

    /// Run keyboard-only (no mouse capture)
    #[arg(long, global = true)]
    pub no_mouse: bool,

    /// Use an alternate config file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print a plain-text snapshot of the board and exit
    #[command(alias = "ls")]
    Snapshot {
        /// Emit the orders as JSON instead
        #[arg(long)]
        json: bool,
    },
}
