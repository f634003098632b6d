// ABOUTME: Stride CLI - command-line access to the dashboard backend
// ABOUTME: Lists activities, shows aggregates, and uploads raw device files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness
//!
//! Usage:
//! ```bash
//! # List the latest running activities
//! stride-cli activities list --sport running --limit 10
//!
//! # Show one activity
//! stride-cli activities show 886313e1-3b8a-5372-9b90-0c9aee199e5d
//!
//! # Upload a raw device file as a race
//! stride-cli activities upload ride.fit --title "Sunday Race" --race
//!
//! # Aggregates
//! stride-cli profile
//! stride-cli fitness
//! stride-cli weeks
//! stride-cli best --sport cycling --time 1200
//! ```
//!
//! The backend origin comes from `STRIDE_API_BASE_URL` (or `--base-url`)
//! and the bearer token from `STRIDE_ACCESS_TOKEN`.

use std::env;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use uuid::Uuid;

use stride_client::auth::StaticToken;
use stride_client::client::{ActivityUpload, ApiClient, ProgressCallback};
use stride_client::config::ClientConfig;
use stride_client::logging::{self, LoggingConfig};
use stride_client::models::Sport;
use stride_client::params::{
    ActivityListParams, BestPerformanceParams, DistanceRange, SortOrder,
};

#[derive(Parser)]
#[command(
    name = "stride-cli",
    about = "Stride dashboard command-line client",
    long_about = "Command-line access to the Stride fitness dashboard backend: \
                  activities, aggregates, and uploads."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Backend origin override
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Activity commands
    Activities {
        #[command(subcommand)]
        action: ActivitiesCommand,
    },

    /// Show the aggregate profile
    Profile,

    /// Show the fitness trend series
    Fitness,

    /// Show the weekly training summaries
    Weeks,

    /// Show the best-performance ranking for a sport
    Best {
        /// Sport to rank within
        #[arg(long)]
        sport: Sport,
        /// Distance selector in meters, for distance efforts
        #[arg(long)]
        distance: Option<String>,
        /// Duration selector in seconds, for power efforts
        #[arg(long)]
        time: Option<String>,
    },

    /// Show the heatmap polylines
    Heatmap,
}

#[derive(Subcommand)]
enum ActivitiesCommand {
    /// List activities with optional filters
    List {
        /// Restrict to one sport
        #[arg(long)]
        sport: Option<Sport>,
        /// Page number, 1-based
        #[arg(long)]
        page: Option<u32>,
        /// Page size
        #[arg(long)]
        limit: Option<u32>,
        /// Only race-flagged activities
        #[arg(long)]
        race: bool,
        /// Minimum distance in kilometers
        #[arg(long)]
        min_distance: Option<f64>,
        /// Maximum distance in kilometers
        #[arg(long)]
        max_distance: Option<f64>,
        /// Sort direction
        #[arg(long)]
        order: Option<SortOrder>,
        /// Field to sort by
        #[arg(long)]
        order_by: Option<String>,
    },

    /// Show one activity with its full trace
    Show {
        /// Activity identifier
        id: Uuid,
    },

    /// Upload a raw device file as a new activity
    Upload {
        /// Path to the device file
        file: std::path::PathBuf,
        /// Title for the created activity
        #[arg(long)]
        title: String,
        /// Flag the created activity as a race
        #[arg(long)]
        race: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let logging_config = LoggingConfig {
        level: if cli.verbose {
            "debug".to_owned()
        } else {
            "info".to_owned()
        },
        ..LoggingConfig::default()
    };
    let _ = logging::init(&logging_config);

    let mut config = ClientConfig::from_env();
    if let Some(base_url) = cli.base_url {
        config = config.with_base_url(base_url);
    }

    let token = env::var("STRIDE_ACCESS_TOKEN")
        .context("STRIDE_ACCESS_TOKEN must be set to a valid bearer token")?;
    let client = ApiClient::new(&config, Arc::new(StaticToken::new(token)))?;

    match cli.command {
        Command::Activities { action } => run_activities(&client, action).await,
        Command::Profile => print_json(&client.fetch_profile().await?),
        Command::Fitness => print_json(&client.fetch_fitness().await?),
        Command::Weeks => print_json(&client.fetch_weeks().await?),
        Command::Best {
            sport,
            distance,
            time,
        } => {
            let params = BestPerformanceParams {
                sport,
                distance,
                time,
            };
            print_json(&client.best_performances(&params).await?)
        }
        Command::Heatmap => print_json(&client.fetch_heatmap().await?),
    }
}

async fn run_activities(client: &ApiClient, action: ActivitiesCommand) -> Result<()> {
    match action {
        ActivitiesCommand::List {
            sport,
            page,
            limit,
            race,
            min_distance,
            max_distance,
            order,
            order_by,
        } => {
            let distance = match (min_distance, max_distance) {
                (None, None) => None,
                (min, max) => {
                    let defaults = DistanceRange::default();
                    Some(DistanceRange {
                        min: min.unwrap_or(defaults.min),
                        max: max.unwrap_or(defaults.max),
                    })
                }
            };
            let params = ActivityListParams {
                sport,
                distance,
                fetch_map: false,
                race,
                page,
                limit,
                order,
                order_by,
            };
            print_json(&client.list_activities(&params).await?)
        }
        ActivitiesCommand::Show { id } => print_json(&client.get_activity(id).await?),
        ActivitiesCommand::Upload { file, title, race } => {
            let bytes = tokio::fs::read(&file)
                .await
                .with_context(|| format!("reading {}", file.display()))?;
            let file_name = file
                .file_name()
                .map_or_else(|| "activity.fit".to_owned(), |n| n.to_string_lossy().into_owned());

            let progress: ProgressCallback = Arc::new(|p| {
                tracing::info!(
                    "upload progress: {}/{} bytes",
                    p.bytes_sent,
                    p.total_bytes
                );
            });
            let upload = ActivityUpload {
                file_name,
                bytes: bytes.into(),
                title,
                race,
            };
            let activity = client.upload_activity(upload, Some(progress)).await?;
            tracing::info!("created activity {}", activity.id);
            print_json(&activity)
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
