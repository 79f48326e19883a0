//! CLI module for the student roster service
//!
//! Provides subcommands for running the roster:
//! - `serve`: HTTP API server (default)

pub mod serve;

use clap::{Parser, Subcommand};

/// Student roster service - student records behind token-protected HTTP endpoints
#[derive(Parser)]
#[command(name = "student-roster")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API server (default mode)
    Serve(serve::ServeArgs),
}

impl Cli {
    /// The selected command, `serve` with defaults when none is given
    pub fn command(self) -> Command {
        self.command
            .unwrap_or_else(|| Command::Serve(serve::ServeArgs::default()))
    }
}
