use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;

use commander::config::Config;
use commander::dtos::{CommandCreateDto, CommandUpdateDto};
use commander::logger;
use commander::service::CommandService;
use commander::storage::Storage;

#[derive(Debug, Parser)]
#[command(name = "commander")]
#[command(about = "Commander - catalogue of command-line snippets", long_about = None)]
struct Cli {
    /// Configuration file (defaults to ./commander.toml, then the user config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Use a throwaway in-memory database
    #[arg(long, global = true)]
    memory: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List every command
    List,
    /// Show one command
    Get { id: i32 },
    /// Add a command
    Add(CommandFields),
    /// Replace the fields of a command
    Update {
        id: i32,
        #[command(flatten)]
        fields: CommandFields,
    },
    /// Remove a command
    Remove { id: i32 },
    /// Write a default configuration file
    InitConfig {
        /// Destination (defaults to the user config directory)
        path: Option<PathBuf>,
    },
}

#[derive(Debug, Args)]
struct CommandFields {
    #[arg(long)]
    title: String,
    #[arg(long)]
    platform: String,
    #[arg(long)]
    description: Option<String>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("❌ Error: {:#}", e);
            std::process::exit(1);
        }
    }
}

/// Returns `false` when the requested command does not exist
async fn run(cli: Cli) -> Result<bool> {
    if let Commands::InitConfig { path } = &cli.command {
        let path = match path {
            Some(path) => path.clone(),
            None => Config::default_config_path().context("Could not determine the user config directory")?,
        };
        Config::generate_default_config(&path)?;
        println!("✅ Wrote {}", path.display());
        return Ok(true);
    }

    let config = Config::load_from(cli.config.as_deref())?;
    logger::init(&config)?;

    let storage = if cli.memory {
        Storage::in_memory().await?
    } else {
        Storage::connect(&config.database).await?
    };
    let service = CommandService::new(storage.command_repo());

    let found = match cli.command {
        Commands::List => print_json(&service.list().await?)?,
        Commands::Get { id } => print_found(id, service.get(id).await?)?,
        Commands::Add(fields) => {
            let dto = CommandCreateDto {
                title: fields.title,
                description: fields.description,
                platform: fields.platform,
            };
            print_json(&service.create(dto).await?)?
        }
        Commands::Update { id, fields } => {
            let dto = CommandUpdateDto {
                title: fields.title,
                description: fields.description,
                platform: fields.platform,
            };
            print_found(id, service.update(id, dto).await?)?
        }
        Commands::Remove { id } => {
            let removed = service.delete(id).await?;
            if removed {
                println!("✅ Removed command {}", id);
            } else {
                eprintln!("Command {} not found", id);
            }
            removed
        }
        Commands::InitConfig { .. } => true,
    };

    storage.close().await?;
    Ok(found)
}

fn print_json<T: Serialize>(value: &T) -> Result<bool> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(true)
}

fn print_found<T: Serialize>(id: i32, value: Option<T>) -> Result<bool> {
    match value {
        Some(value) => print_json(&value),
        None => {
            eprintln!("Command {} not found", id);
            Ok(false)
        }
    }
}
