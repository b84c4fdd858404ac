use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use segment_snake::{GameConfig, event_loop, log};

#[derive(Parser, Debug)]
#[command(name = "segment-snake", about = "Snake with a line-segment body")]
struct Cli {
    /// JSON config file; missing keys use defaults.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Seed for apple placement.
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long)]
    width: Option<u32>,
    #[arg(long)]
    height: Option<u32>,
    /// Milliseconds between ticks.
    #[arg(long)]
    tick_ms: Option<u64>,
    /// Print the effective config as JSON and exit.
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    log::init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => GameConfig::default(),
    };
    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }
    if let Some(width) = cli.width {
        config.width = width;
    }
    if let Some(height) = cli.height {
        config.height = height;
    }
    if let Some(tick_ms) = cli.tick_ms {
        config.tick_ms = tick_ms;
    }
    config.validate().context("invalid configuration")?;

    if cli.print_config {
        println!("{}", config.to_json()?);
        return Ok(());
    }

    info!("Starting segment snake");
    event_loop::run(config).context("running game window")?;
    Ok(())
}
