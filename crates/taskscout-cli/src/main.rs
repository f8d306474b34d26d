use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use taskscout_core::app::ScoutBot;
use taskscout_core::impls::{InMemoryMarketplace, MarketplaceClient};
use taskscout_core::ports::{ProfileLookup, WorkSubmitter};
use taskscout_core::{ScoutConfig, TaskId};
use tokio::sync::watch;

mod cli;
mod output;

use cli::{Cli, Commands, ScanArgs, SubmitArgs};

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("taskscout error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let config = ScoutConfig::load(cli.config.as_deref()).context("failed to load configuration")?;
    let client = Arc::new(
        MarketplaceClient::new(&config.marketplace).context("failed to build marketplace client")?,
    );
    tracing::debug!(?config, "configuration loaded");

    // dry-run: 取得は本物、提出はメモリに記録するだけ
    let submitter: Arc<dyn WorkSubmitter> = if cli.dry_run {
        tracing::info!("dry run: submissions stay in memory");
        Arc::new(InMemoryMarketplace::new())
    } else {
        client.clone()
    };

    match cli.command {
        Commands::Scan(args) => {
            // 提出しないスキャンだけなら wallet は不要
            let wallet = if config.auto_submit {
                require_wallet(cli.wallet)?
            } else {
                cli.wallet.unwrap_or_default()
            };
            scan(ScoutBot::new(wallet, config, client, submitter), &args).await
        }
        Commands::Watch => {
            let wallet = require_wallet(cli.wallet)?;
            watch_until_ctrl_c(ScoutBot::new(wallet, config, client, submitter)).await
        }
        Commands::Submit(args) => {
            let wallet = require_wallet(cli.wallet)?;
            submit(ScoutBot::new(wallet, config, client, submitter), args).await
        }
        Commands::Profile => {
            let wallet = require_wallet(cli.wallet)?;
            let profile = client
                .profile(&wallet)
                .await
                .with_context(|| format!("failed to fetch profile for {wallet}"))?;
            println!("{}", serde_json::to_string_pretty(&profile)?);
            Ok(())
        }
    }
}

fn require_wallet(wallet: Option<String>) -> anyhow::Result<String> {
    wallet
        .filter(|w| !w.is_empty())
        .context("a wallet address is required (--wallet or TASKSCOUT_WALLET)")
}

async fn scan(mut bot: ScoutBot, args: &ScanArgs) -> anyhow::Result<()> {
    let selected = bot.run_once().await;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&selected)?);
    } else {
        print!("{}", output::render_tasks(&selected, args.limit));
    }
    Ok(())
}

async fn watch_until_ctrl_c(mut bot: ScoutBot) -> anyhow::Result<()> {
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    // ctrl-c で shutdown を通知（進行中のサイクルは最後まで走らせる）
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = shutdown_tx.send(true);
        }
    });

    let report = bot.run_continuous(shutdown_rx).await;
    print!("{}", output::render_report(bot.wallet(), &report));
    Ok(())
}

async fn submit(bot: ScoutBot, args: SubmitArgs) -> anyhow::Result<()> {
    let task_id = TaskId::new(args.task_id);
    if !bot.submit_work(&task_id, &args.message, &args.proof_url).await {
        anyhow::bail!("submission for task {task_id} failed");
    }
    println!("Work submitted for task {task_id}");
    Ok(())
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "info"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("TASKSCOUT_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
