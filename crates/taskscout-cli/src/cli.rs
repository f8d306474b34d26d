use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Watch the bounty marketplace for tasks an agent can take on.
#[derive(Debug, Parser)]
#[command(name = "taskscout", version, about)]
pub struct Cli {
    /// Wallet address used to submit work and look up the profile.
    #[arg(long, global = true, env = "TASKSCOUT_WALLET")]
    pub wallet: Option<String>,

    /// Config file (defaults to ./taskscout.toml).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Debug logging.
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Errors only.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Fetch from the marketplace but keep submissions in memory.
    #[arg(long, global = true)]
    pub dry_run: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run a single scan and print the ranked tasks.
    Scan(ScanArgs),
    /// Scan every `check_interval` seconds until ctrl-c, then print a report.
    Watch,
    /// Submit completed work for a task.
    Submit(SubmitArgs),
    /// Show the wallet's marketplace profile.
    Profile,
}

#[derive(Debug, Args)]
pub struct ScanArgs {
    /// Print JSON instead of a table.
    #[arg(long)]
    pub json: bool,

    /// How many tasks to print (all with --json).
    #[arg(long, default_value_t = taskscout_core::app::TOP_N)]
    pub limit: usize,
}

#[derive(Debug, Args)]
pub struct SubmitArgs {
    pub task_id: String,

    #[arg(long, short)]
    pub message: String,

    #[arg(long)]
    pub proof_url: String,
}
