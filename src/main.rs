//! CLI entry point for the wykop API client.

use std::sync::Arc;

use anyhow::{Context, Result, bail};
use clap::Parser;
use serde::Serialize;
use tracing::{debug, info};
use wykop_api::{ApiEndpoint, Client, HttpTimeouts, ReqwestTransport};

mod app_config;
mod cli;

use app_config::{FileConfig, load_default_file_config};
use cli::{Args, Command};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments first (before tracing, so --help works without logs)
    let args = Args::parse();

    // Priority: RUST_LOG env var > quiet flag > verbose flag > default (info)
    let default_level = if args.quiet {
        "error"
    } else {
        match args.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    debug!(command = ?args.command, "CLI arguments parsed");

    let file_config = load_default_file_config()?;
    let client = build_client(&args, file_config)?;

    match args.command {
        Command::Promoted { page, sort } => {
            let links = client.links().promoted(page, sort).await?;
            info!(count = links.len(), "Fetched promoted links");
            print_json(&links)
        }
        Command::Upcoming { page, sort } => {
            let links = client.links().upcoming(page, sort).await?;
            info!(count = links.len(), "Fetched upcoming links");
            print_json(&links)
        }
        Command::Link { id } => {
            let link = client.link().index(id).await?;
            print_json(&link)
        }
        Command::Digs { id } => {
            let digs = client.link().digs(id).await?;
            info!(count = digs.len(), "Fetched digs");
            print_json(&digs)
        }
    }
}

/// Merges CLI flags over file config and builds the API client.
fn build_client(args: &Args, file_config: FileConfig) -> Result<Client> {
    let Some(app_key) = args.app_key.clone().or(file_config.app_key) else {
        bail!(
            "No application key configured.\n  Suggestion: pass --app-key or set `app_key` in the config file"
        );
    };
    let user_key = args
        .user_key
        .clone()
        .or(file_config.user_key)
        .unwrap_or_default();

    let defaults = HttpTimeouts::default();
    let timeouts = HttpTimeouts {
        connect_secs: file_config
            .connect_timeout_secs
            .unwrap_or(defaults.connect_secs),
        read_secs: file_config.read_timeout_secs.unwrap_or(defaults.read_secs),
    };
    let transport =
        ReqwestTransport::with_timeouts(timeouts).context("Failed to build HTTP client")?;

    let endpoint = match args.scheme.clone().or(file_config.scheme) {
        Some(scheme) => ApiEndpoint::with_scheme(scheme),
        None => ApiEndpoint::default(),
    };
    debug!(scheme = endpoint.scheme(), ?timeouts, "Client configured");

    Ok(Client::with_transport(app_key, user_key, Arc::new(transport)).with_endpoint(endpoint))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("Failed to render JSON output")?;
    println!("{rendered}");
    Ok(())
}
