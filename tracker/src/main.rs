//! `checkin` command line entry point
//!
//! Loads the saved state from the data directory, applies one command and
//! writes the state back.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use shared::{ProcessId, STORAGE_KEY, logging, process_debug};

use tracker::core::messages;
use tracker::services::RealFileStore;
use tracker::{CheckInEngine, DashboardView, StateStore};

/// Attendee check-in tracker
#[derive(Parser, Debug)]
#[command(name = "checkin")]
#[command(about = "Check attendees in to teams and track progress toward the attendance goal")]
struct Args {
    /// Directory holding the saved state
    #[arg(long, env = "CHECKIN_DATA_DIR", default_value = "./data", global = true)]
    data_dir: PathBuf,

    /// Key the state is saved under
    #[arg(long, env = "CHECKIN_STORAGE_KEY", default_value = STORAGE_KEY, global = true)]
    storage_key: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "CHECKIN_LOG_LEVEL", default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check in one attendee
    Add {
        /// Attendee name, any casing or spacing
        #[arg(long)]
        name: String,

        /// Team key: water, zero or power
        #[arg(long)]
        team: String,
    },
    /// Show totals, team counts and goal progress
    Status,
    /// List attendees in check-in order
    List,
}

fn main() -> anyhow::Result<ExitCode> {
    dotenv::dotenv().ok();
    let args = Args::parse();

    ProcessId::init_cli();
    logging::init_tracing_with_level(Some(&args.log_level));
    process_debug!(ProcessId::current(), "Using data dir {}", args.data_dir.display());

    let medium = RealFileStore::with_base_dir(&args.data_dir);
    let mut engine = CheckInEngine::new(StateStore::new(medium, args.storage_key));
    engine.load();

    match args.command {
        Command::Add { name, team } => match engine.check_in(&name, &team) {
            Ok(receipt) => {
                println!("{}", messages::welcome(&receipt.attendee.name, receipt.attendee.team));
                if !receipt.persisted {
                    eprintln!("warning: check-in was not saved to {}", args.data_dir.display());
                }
                if let Some(outcome) = &receipt.goal {
                    println!("{}", messages::celebration(outcome));
                }
            }
            Err(e) => {
                eprintln!("{}", messages::rejection(&e));
                return Ok(ExitCode::from(2));
            }
        },
        Command::Status => {
            let view = DashboardView::from_state(engine.state(), engine.goal());
            println!("Attendees: {} / {}", view.total, view.goal);
            for row in &view.teams {
                println!("  {:<18} {}", row.label, row.count);
            }
            println!("Progress: {:.0}%", view.progress_percent);
        }
        Command::List => {
            let view = DashboardView::from_state(engine.state(), engine.goal());
            if let Some(empty) = view.empty_message {
                println!("{empty}");
            }
            for row in &view.attendees {
                println!("{:<30} {}", row.name, row.team_label);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
