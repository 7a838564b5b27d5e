//! # Drone CLI Module
//!
//! This module implements the CLI interface for the drone demonstrations.
//!
//! ## Available Commands
//!
//! - `run` - Fly a single scenario
//! - `all` - Fly every scenario in order (also used when no command is given)
//! - `list` - List scenarios and the principle each demonstrates

mod commands;

use clap::{Parser, Subcommand};
use drone_core::DroneError;
use std::path::PathBuf;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// Drone - SOLID design, one drone at a time
///
/// Each scenario assembles drones from independent capabilities and
/// prints the status line of every step they take.
#[derive(Parser, Debug)]
#[command(name = "drone")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress banner output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to a TOML fleet configuration (falls back to $DRONE_CONFIG)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fly one scenario
    Run {
        /// Scenario key (single-responsibility, open-closed,
        /// interface-segregation, dependency-inversion) or its initial
        scenario: String,
    },

    /// Fly every scenario in order
    All,

    /// List available scenarios
    List,
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// The command to run; no subcommand means [`Commands::All`].
pub fn command_or_default(command: Option<Commands>) -> Commands {
    command.unwrap_or(Commands::All)
}

/// Execute the CLI with parsed arguments.
pub fn execute(cli: Cli) -> Result<(), DroneError> {
    let json_mode = cli.json_mode;

    match command_or_default(cli.command) {
        Commands::List => cmd_list(json_mode),
        command => {
            let fleet = crate::config::load_or_default(cli.config.as_deref())?;
            cmd_fly(&fleet, &command, json_mode)
        }
    }
}
