pub mod commands;
pub mod context;
pub mod output;

use clap::{Parser, Subcommand};

use crate::adapters::probe::http_probe::DEFAULT_TIMEOUT;

/// Typed, layered environment configuration for web front-ends.
#[derive(Parser, Debug)]
#[command(name = "frontenv", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the project file
    #[arg(long, global = true, env = "FRONTENV_CONFIG", default_value = "frontenv.toml")]
    pub config: String,

    /// Target environment (default: [frontenv].default_env)
    #[arg(long, global = true)]
    pub env: Option<String>,

    /// Dotenv-style file whose values override every resolved environment
    #[arg(long, global = true)]
    pub overrides: Option<String>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode: only show errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a starter frontenv.toml
    Init,

    /// Validate the resolved environment
    Check {
        /// Check every leaf environment (one no other environment inherits from)
        #[arg(long)]
        all: bool,
    },

    /// Print the resolved environment and its layers
    Show,

    /// Render the environment file consumed by the front-end build
    Export {
        /// Output format: ts, json or toml
        #[arg(long)]
        format: Option<String>,
        /// Destination path (default: the environment's `output`)
        #[arg(long)]
        out: Option<String>,
        /// Write to stdout even if an output path is configured
        #[arg(long)]
        stdout: bool,
    },

    /// Compare two resolved environments
    Diff {
        /// First environment
        left: String,
        /// Second environment
        right: String,
    },

    /// Print identity-provider URLs derived from the auth0 settings
    Endpoints,

    /// Show every environment and whether rendered files are current
    Status,

    /// Check that the API server and JWKS endpoint answer
    Probe {
        /// Per-request timeout in seconds (at least 1)
        #[arg(
            long,
            default_value_t = DEFAULT_TIMEOUT.as_secs(),
            value_parser = clap::value_parser!(u64).range(1..)
        )]
        timeout: u64,
    },
}
