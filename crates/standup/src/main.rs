// SPDX-FileCopyrightText: 2026 Standup Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Standup - a scrum session coordinator.
//!
//! This is the binary entry point for driving sessions from a shell:
//! start a run, record statuses, end it, and inspect summaries.

mod config_cmd;
mod render;
mod sessions;
mod summary;

use std::sync::Arc;

use clap::{Parser, Subcommand};
use standup_coordinator::SessionCoordinator;
use standup_core::StandupError;
use standup_storage::{Database, SqliteRepository};
use tracing_subscriber::EnvFilter;

use crate::render::ConsoleSink;

/// Standup - a scrum session coordinator.
#[derive(Parser, Debug)]
#[command(name = "standup", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Start a scrum session for an organizer.
    Start {
        /// Organizer whose active configuration supplies the roster.
        organizer: String,
        /// Message handle anchoring this run. Generated when omitted;
        /// printed on success for use with submit/end/summary.
        #[arg(long)]
        anchor: Option<String>,
        /// Render surface handle to keep updated. Generated when omitted.
        #[arg(long)]
        summary_ref: Option<String>,
    },
    /// Record a participant's status for a running session.
    Submit {
        /// Anchor reference of the session.
        anchor: String,
        /// Participant recording their status.
        participant: String,
        #[arg(long)]
        yesterday: String,
        #[arg(long)]
        today: String,
        #[arg(long)]
        blockers: Option<String>,
    },
    /// End a running session.
    End {
        /// Anchor reference of the session.
        anchor: String,
        /// Participant ending the session.
        participant: String,
        /// Conversation handle for the summary thread. Generated when
        /// omitted.
        #[arg(long)]
        thread: Option<String>,
    },
    /// Show the summary for a session.
    Summary {
        /// Anchor reference of the session.
        anchor: String,
        #[arg(long)]
        json: bool,
    },
    /// List stored sessions, newest first.
    Sessions {
        /// Only sessions started by this organizer.
        #[arg(long)]
        organizer: Option<String>,
        #[arg(long)]
        json: bool,
    },
    /// Manage organizer configurations.
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommands {
    /// Create or replace an organizer's configuration.
    Set {
        organizer: String,
        #[arg(long)]
        team: String,
        #[arg(long)]
        channel: String,
        /// Comma-separated participant ids.
        #[arg(long)]
        roster: String,
        /// Defaults to the configured scrum time zone.
        #[arg(long)]
        time_zone: Option<String>,
    },
    /// Show an organizer's configuration.
    Show {
        organizer: String,
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Load and validate configuration at startup
    let config = match standup_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            standup_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.service.log_level.clone()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli.command, &config).await {
        eprintln!("standup: {e}");
        std::process::exit(1);
    }
}

async fn run(
    command: Commands,
    service_config: &standup_config::StandupConfig,
) -> Result<(), StandupError> {
    let db = Database::open(&service_config.storage.database_path).await?;
    let repository = Arc::new(SqliteRepository::new(db.clone()));
    let coordinator = SessionCoordinator::new(repository, Arc::new(ConsoleSink));

    match command {
        Commands::Start {
            organizer,
            anchor,
            summary_ref,
        } => {
            // Anchor refs are unique per session, so each run needs a
            // fresh one unless the caller brings their own.
            let anchor = anchor.unwrap_or_else(new_ref);
            let summary_ref = summary_ref.unwrap_or_else(new_ref);
            let session = coordinator
                .start_session(&organizer, &anchor, &summary_ref)
                .await?;
            println!(
                "started session {} for {} (anchor {})",
                session.id, session.organizer_id, session.anchor_ref
            );
        }
        Commands::Submit {
            anchor,
            participant,
            yesterday,
            today,
            blockers,
        } => {
            coordinator
                .submit_status(&anchor, &participant, &yesterday, &today, blockers.as_deref())
                .await?;
        }
        Commands::End {
            anchor,
            participant,
            thread,
        } => {
            let thread = thread.unwrap_or_else(new_ref);
            let session = coordinator.end_session(&anchor, &participant, &thread).await?;
            println!("ended session {}", session.id);
        }
        Commands::Summary { anchor, json } => {
            summary::run_summary(&coordinator, &anchor, json).await?;
        }
        Commands::Sessions { organizer, json } => {
            sessions::run_sessions(&db, organizer.as_deref(), json).await?;
        }
        Commands::Config { command } => match command {
            ConfigCommands::Set {
                organizer,
                team,
                channel,
                roster,
                time_zone,
            } => {
                config_cmd::run_config_set(
                    &db,
                    service_config,
                    &organizer,
                    &team,
                    &channel,
                    &roster,
                    time_zone.as_deref(),
                )
                .await?;
            }
            ConfigCommands::Show { organizer, json } => {
                config_cmd::run_config_show(&db, &organizer, json).await?;
            }
        },
    }

    db.close().await
}

/// Fresh opaque handle for anchors, render surfaces, and threads.
fn new_ref() -> String {
    uuid::Uuid::new_v4().to_string()
}
