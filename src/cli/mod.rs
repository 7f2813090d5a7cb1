//! CLI argument parsing types.
//!
//! This module provides the command-line interface structure for the roster binary.

use clap::{Parser, Subcommand};

/// Source used when neither `--url` nor `ROSTER_API_URL` is given.
pub const DEFAULT_API_URL: &str = "https://randomuser.me/api/?results=10";

/// Random-user profile browser.
#[derive(Parser, Debug)]
#[command(name = "roster", about = "Fetch and browse random-user profiles", version)]
pub struct Cli {
    /// Output results as JSON instead of a table.
    #[arg(long, global = true, default_value = "false")]
    pub json: bool,

    /// Fully-formed source URL for profile data.
    #[arg(long, global = true, env = "ROSTER_API_URL", default_value = DEFAULT_API_URL)]
    pub url: String,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Navigate to a path and render the view it resolves to.
    Open {
        /// Application path (e.g. "/").
        #[arg(default_value = "/")]
        path: String,
    },

    /// Show a single record from the envelope.
    Record {
        /// Zero-based position in the envelope.
        index: usize,
    },

    /// List the route table.
    Routes,
}
