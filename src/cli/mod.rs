// CLI module for command-line interface

use clap::{Parser, Subcommand};
use clap_complete::Shell;
pub mod commands;
pub mod output;

const CARGO_PKG_VERSION: &str = env!("CARGO_PKG_VERSION");
const GIT_HASH: &str = git_version::git_version!(fallback = "unknown");
const VERSION: &str = const_str::concat!(CARGO_PKG_VERSION, " ", GIT_HASH);

/// Main CLI structure
#[derive(Parser, Clone, Debug)]
#[command(name = "valuebid", version = VERSION)]
#[command(about = "ValueBid marketplace utilities and search proxy", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands
#[derive(Subcommand, Clone, Debug)]
pub enum Commands {
    /// Run the shopping/video search proxy server
    Serve {
        /// Override the configured listen port
        #[arg(short, long)]
        port: Option<u16>,

        /// Override the configured listen host
        #[arg(long)]
        host: Option<String>,
    },

    /// Print the pager markers for a page
    Pages {
        /// Current page (clamped into 1..=total)
        current: u32,

        /// Total number of pages
        total: u32,

        /// Print as a JSON array
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Print the time left until an auction ends
    Countdown {
        /// End instant in RFC 3339, e.g. 2025-03-01T21:00:00+09:00
        end: String,

        /// Treat the countdown as disabled
        #[arg(short, long, default_value_t = false)]
        disabled: bool,

        /// Keep printing once per second until the end
        #[arg(short, long, default_value_t = false)]
        watch: bool,
    },

    /// Show service status
    Status,

    /// Print the configuration file
    Config,

    /// Generate shell completion scripts
    Completions {
        /// Shell type (bash, zsh, fish, powershell, elvish)
        #[arg(ignore_case = true)]
        shell: Shell,
    },
}
