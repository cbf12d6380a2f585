//! Command-line argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use folio::{Section, Theme};

/// Terminal front-end for a GitHub-backed portfolio.
#[derive(Debug, Parser)]
#[command(name = "folio")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Args {
    /// Path to configuration file
    ///
    /// If not specified, searches $FOLIO_CONFIG, ./folio.toml and the
    /// user config directory, then falls back to built-in content.
    #[arg(short, long, value_name = "FILE", env = "FOLIO_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// GitHub account to show, overriding the configured one
    #[arg(short, long, env = "FOLIO_USERNAME", global = true)]
    pub username: Option<String>,

    /// Logging level
    #[arg(short, long, default_value = "warn", env = "FOLIO_LOG", global = true)]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render the portfolio page
    Show {
        /// Only render this section
        #[arg(short, long)]
        section: Option<Section>,

        #[arg(long, default_value = "dark")]
        theme: Theme,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,

        /// Re-render every N seconds until interrupted
        #[arg(long, value_name = "SECS")]
        refresh: Option<u64>,
    },

    /// Print the curated project list
    Projects {
        #[arg(long)]
        json: bool,
    },

    /// Print recently updated repositories
    Recent {
        #[arg(short = 'n', long, default_value_t = 10)]
        limit: usize,
    },

    /// Open a featured project in the browser
    Open {
        /// Repository name, case-insensitive
        name: String,
    },

    /// Write the built-in configuration to a file
    InitConfig {
        /// Destination; defaults to the user config directory
        path: Option<PathBuf>,
    },
}

impl Default for Command {
    fn default() -> Self {
        Self::Show {
            section: None,
            theme: Theme::default(),
            json: false,
            refresh: None,
        }
    }
}
