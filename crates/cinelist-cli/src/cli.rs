/*
[INPUT]:  Command-line arguments
[OUTPUT]: Parsed CLI flags and subcommands
[POS]:    CLI layer - argument definitions
[UPDATE]: When adding commands or flags
*/

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "cinelist", version, about = "Command-line client for the CineList backend")]
pub struct Cli {
    /// YAML config file (defaults to <config dir>/cinelist/config.yaml if present)
    #[arg(long = "config", value_name = "PATH")]
    pub config_path: Option<PathBuf>,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    pub log_level: String,
    /// Session cookie (`name=value`) attached to movie requests
    #[arg(long = "session-cookie", value_name = "COOKIE")]
    pub session_cookie: Option<String>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Authenticate with email and password
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Register a new account
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long = "tax-id")]
        tax_id: String,
        #[arg(long)]
        password: String,
    },
    /// Set a new password using a reset token
    ResetPassword {
        #[arg(long)]
        token: String,
        #[arg(long = "new-password")]
        new_password: String,
    },
    /// Movie operations
    #[command(subcommand)]
    Movies(MoviesCommand),
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum MoviesCommand {
    List,
    Get {
        id: String,
    },
    Create {
        /// Movie attributes as JSON text, or @path to a JSON file
        #[arg(long, value_name = "JSON")]
        data: String,
    },
    Update {
        id: String,
        /// Movie attributes as JSON text, or @path to a JSON file
        #[arg(long, value_name = "JSON")]
        data: String,
    },
    Delete {
        id: String,
    },
}
