use clap::Parser;
use eyre::Result;
use tracing_subscriber::EnvFilter;

use enmg_cli::cli::{Cli, Command, ConfigCommand};
use enmg_cli::{commands, config};

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    // Logs go to stderr; stdout carries only command output.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if cli.log_json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }

    let config_path = match cli.config {
        Some(path) => path,
        None => config::default_config_path()?,
    };
    let loaded = config::load_config(&config_path)?;
    if loaded.is_none() {
        tracing::debug!(path = %config_path.display(), "no config file, using defaults");
    }
    let config = loaded.unwrap_or_default();

    let output = match &cli.command {
        Command::Analyze(args) => commands::analyze(args, &config)?,
        Command::Patterns(args) => commands::patterns(args, &config)?,
        Command::Interpret(args) => commands::interpret(args)?,
        Command::CombinedIndex(args) => commands::combined_index(args)?,
        Command::Config(ConfigCommand::Show) => commands::show_config(&config)?,
        Command::Config(ConfigCommand::Init) => commands::init_config(&config_path)?,
    };

    println!("{output}");
    Ok(())
}
