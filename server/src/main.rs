use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs::File;
use std::path::PathBuf;
use tracing::{info, warn};

use server::api::{ApiState, run_api_server};
use server::config::{ServerConfig, connect_stores};
use server::decoder::{ContainerReader, decode_replay};

#[derive(Parser, Debug)]
#[command(
    name = "secretshop",
    about = "Ingest replays and serve the item purchases recorded in them"
)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP server (default)
    Serve,
    /// Decode a replay file offline and print it as JSON
    Decode {
        /// Path to the replay container
        file: PathBuf,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if exists
    dotenv::dotenv().ok();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .init();

    let args = Args::parse();
    match args.command.unwrap_or(Command::Serve) {
        Command::Serve => serve().await,
        Command::Decode { file, pretty } => decode(file, pretty),
    }
}

async fn serve() -> Result<()> {
    let config = ServerConfig::from_env()?;
    info!(
        "Starting secretshop on {} with stores [{}]",
        config.bind_addr,
        config
            .stores
            .iter()
            .map(|s| s.name())
            .collect::<Vec<_>>()
            .join(", ")
    );

    if config.auth_key.is_none() {
        warn!("SECRETSHOP_AUTH is not set, upload and friendly name routes are open to anyone");
    }

    let stores = connect_stores(&config.stores)
        .await
        .context("Failed to connect stores")?;

    run_api_server(&config.bind_addr, ApiState::new(stores, config.auth_key)).await
}

fn decode(file: PathBuf, pretty: bool) -> Result<()> {
    let mut reader = ContainerReader::<File>::open_path(&file)
        .with_context(|| format!("Failed to open replay {}", file.display()))?;
    let mut replay = decode_replay(&mut reader)
        .with_context(|| format!("Failed to decode replay {}", file.display()))?;
    replay.resolve_purchases();

    if replay.unresolved_purchases() > 0 {
        warn!(
            "{} purchases could not be matched to a player",
            replay.unresolved_purchases()
        );
    }

    let json = if pretty {
        serde_json::to_string_pretty(&replay)?
    } else {
        serde_json::to_string(&replay)?
    };
    println!("{}", json);
    Ok(())
}
