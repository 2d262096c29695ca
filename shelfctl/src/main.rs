use std::io::{self, IsTerminal};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use shelfctl::{ConfigLoader, Shell};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "shelfctl",
    version,
    about = "Interactive media catalog shell",
    long_about = "Reads one command per line from stdin. Type `help` inside the shell for the command list."
)]
struct Cli {
    /// TOML config file (defaults to shelf.toml or config/shelf.toml)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Env file loaded before reading SHELF_* variables (ignored if missing)
    #[arg(long)]
    env_file: Option<PathBuf>,
    /// Seed for CD shuffles
    #[arg(long)]
    seed: Option<u64>,
    /// Prompt text shown before each command
    #[arg(long)]
    prompt: Option<String>,
    /// Never print a prompt, even on a terminal
    #[arg(long)]
    no_prompt: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }
    if let Some(path) = &cli.env_file {
        loader = loader.with_env_file(path);
    }
    let mut config = loader.load().context("failed to load configuration")?;

    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }
    if let Some(prompt) = cli.prompt {
        config.prompt = prompt;
    }
    if cli.no_prompt {
        config.show_prompt = Some(false);
    }
    tracing::info!(?config, "starting shell");

    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let mut shell = Shell::new(&config, interactive);
    let mut stdout = io::stdout().lock();
    shell.run(stdin.lock(), &mut stdout)?;

    Ok(())
}
