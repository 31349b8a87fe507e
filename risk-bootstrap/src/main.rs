use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use risk_bootstrap::{init_logging, run_standalone, score_file, AppContext};
use risk_infrastructure::AppConfig;

#[derive(Parser, Debug)]
#[command(name = "risk-engine")]
#[command(about = "Transaction risk scoring engine", long_about = None)]
struct Args {
    /// Path to config file
    #[arg(short, long)]
    config: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP service (default)
    Serve,
    /// Score a JSON array of transactions and print one result per line
    Score {
        #[arg(short, long)]
        input: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    if let Some(config) = &args.config {
        std::env::set_var("RISK_CONFIG", config);
    }

    let config = AppConfig::load().await?;
    let _log_guard = init_logging(config.log_dir.as_deref())?;
    let context = AppContext::new(&config).await?;

    match args.command.unwrap_or(Command::Serve) {
        Command::Serve => run_standalone(context.state).await,
        Command::Score { input } => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            let rejected = score_file(&context.state, &input, &mut out).await?;
            if rejected > 0 {
                anyhow::bail!("{} transactions were rejected", rejected);
            }
            Ok(())
        }
    }
}
