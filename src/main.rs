use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tokio::io::BufReader;

use haepari::app::AppContext;
use haepari::config::AppConfig;
use haepari::logging::init_tracing;
use haepari::ui::runtime::{self, ExitReason};

/// Splash → login → home flow backed by a local preferences store.
#[derive(Debug, Parser)]
#[command(name = "haepari", version, about)]
struct Cli {
    /// Config file (default: platform config dir).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory of the preferences store.
    #[arg(long)]
    store_dir: Option<PathBuf>,

    /// Log filter, e.g. "debug" or "haepari=trace".
    #[arg(long)]
    log_level: Option<String>,
}

impl Cli {
    fn load_config(&self) -> anyhow::Result<AppConfig> {
        let path = self.config.clone().unwrap_or_else(AppConfig::config_path);
        let mut config = AppConfig::load_from(&path)
            .with_context(|| format!("loading config from {}", path.display()))?;

        if let Some(dir) = &self.store_dir {
            config.store.dir = Some(dir.clone());
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
        config.validate()?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.load_config()?;
    init_tracing(&config.logging);

    let ctx = AppContext::open(&config).context("opening preferences store")?;

    let input = BufReader::new(tokio::io::stdin());
    let mut output = tokio::io::stdout();

    tokio::select! {
        outcome = runtime::run(&ctx, input, &mut output) => {
            let outcome = outcome?;
            tracing::debug!(route = %outcome.route, visited = ?outcome.visited, "Run finished");
            if outcome.reason == ExitReason::EndOfInput {
                println!();
            }
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Interrupted");
            println!();
            // A pending stdin read would keep the runtime alive.
            std::process::exit(130);
        }
    }

    Ok(())
}
