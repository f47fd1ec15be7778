use std::path::PathBuf;

use clap::Parser;

pub mod commands;
pub mod logging;
pub mod settings;
pub mod state;

use self::commands::{Command, handle_command};
use self::state::AppState;

/// Shown when the translator cannot start without a dictionary
const MISSING_DICTIONARY: &str = "ERREUR: Dictionnaire non chargé";

#[derive(Parser)]
#[command(name = "kreol", version)]
#[command(about = "Réunion Creole <-> French dictionary translator")]
struct Cli {
    /// JSON config file (default: $KREOL_CONFIG or ./kreol.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Dictionary file replacing the embedded one
    #[arg(long, global = true)]
    dictionary: Option<String>,
    #[command(subcommand)]
    command: Option<Command>,
}

fn main() -> anyhow::Result<()> {
    // .env is optional
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let mut config = settings::load_config(cli.config.as_deref())?;
    if let Some(path) = cli.dictionary {
        config.dictionary.path = Some(path);
    }

    logging::init(&config.log);
    tracing::debug!("Config: {:?}", config);

    let state = AppState::new(config).map_err(|e| {
        tracing::error!("Translator initialization failed: {e}");
        eprintln!("{MISSING_DICTIONARY}");
        e
    })?;

    handle_command(&state, cli.command)
}

#[cfg(test)]
mod tests {
    mod command_tests;
}
