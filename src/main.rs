use std::path::PathBuf;

use anyhow::Context;
use boardkit::replay::{self, Script};
use boardkit::{init_logging, Config, FileViewStore, MemoryViewStore, ViewStateStore};
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "boardkit", version, about = "Headless BoardKit driver")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay a JSON input script and print the resulting board as JSON
    Replay {
        /// Script file
        script: PathBuf,
        /// Configuration file (.json or .toml)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Document id whose viewport is restored and saved
        #[arg(long)]
        document: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    init_logging()?;

    let cli = Cli::parse();
    match cli.command {
        Command::Replay {
            script,
            config,
            document,
        } => {
            let config = match config {
                Some(path) => Config::load_from_file(&path)
                    .with_context(|| format!("loading config {}", path.display()))?,
                None => Config::default(),
            };
            let script = Script::from_file(&script)?;
            let store = match &document {
                Some(_) => Some(view_store(&config)?),
                None => None,
            };
            let report = replay::run(&script, &config, store.zip(document))?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}

fn view_store(config: &Config) -> anyhow::Result<Box<dyn ViewStateStore>> {
    if !config.persistence.enabled {
        return Ok(Box::new(MemoryViewStore::new()));
    }
    let store = match &config.persistence.directory {
        Some(directory) => FileViewStore::new(directory),
        None => FileViewStore::in_data_dir()?,
    };
    tracing::info!("Persisting views in {}", store.directory().display());
    Ok(Box::new(store))
}
