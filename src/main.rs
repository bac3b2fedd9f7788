use std::sync::Once;

use anyhow::Result;
use chrono::Local;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use pocketflow::cli::{self, Command};
use pocketflow::models::Money;
use pocketflow::session::Session;

/// Personal expense and subscription tracker
#[derive(Debug, Parser)]
#[command(name = "pocketflow", version, about)]
struct Cli {
    /// Monthly spending limit (e.g. "1500")
    #[arg(long, env = "POCKETFLOW_LIMIT", global = true)]
    limit: Option<String>,

    /// Start with demo data loaded
    #[arg(long, global = true)]
    demo: bool,

    /// Command to run; omit for the interactive shell
    #[command(subcommand)]
    command: Option<Command>,
}

static INIT_TRACING: Once = Once::new();

fn init_tracing() {
    INIT_TRACING.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("pocketflow=info"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    });
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let now = Local::now().naive_local();
    let mut session = if cli.demo {
        Session::with_demo_data(now)
    } else {
        Session::new()
    };

    if let Some(raw) = cli.limit {
        let limit = Money::parse(&raw)?;
        if !limit.is_positive() {
            anyhow::bail!("Monthly limit must be positive");
        }
        session.monthly_limit = Some(limit);
    }

    match cli.command {
        Some(command) => {
            cli::dispatch(&mut session, command, now)?;
        }
        None => {
            cli::run_shell(&mut session)?;
        }
    }

    Ok(())
}
