// CLI module
// Command-line arguments, subcommands and the interactive front-end

pub mod commands;
pub mod tui;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::catalog::CategoryFilter;
use crate::config::Config;

#[derive(Parser, Debug)]
#[command(
    name = "teachterm",
    version,
    about = "Teaching terminal - a live shell with contextual command help and danger ratings",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config file path (default: ~/.teachterm/config.toml)
    #[arg(short, long, global = true, env = "TEACHTERM_CONFIG")]
    pub config: Option<PathBuf>,

    /// Start without a shell: browse commands only
    #[arg(long)]
    pub demo: bool,

    /// Shell program to spawn (overrides the config file)
    #[arg(long)]
    pub shell: Option<String>,

    /// Log file (default: ~/.teachterm/teachterm.log)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Debug-level logging
    #[arg(long)]
    pub debug: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Print the command catalog
    List {
        /// Only one category: query, file, permission, system, network
        #[arg(short = 'C', long)]
        category: Option<CategoryFilter>,

        /// Machine-readable output
        #[arg(long)]
        json: bool,
    },

    /// Explain one command: danger level, template and usage
    Explain {
        /// Command name, e.g. `chmod`
        command: String,
    },
}

impl Cli {
    /// Command-line flags win over file values
    pub fn apply_overrides(&self, config: &mut Config) {
        if self.demo {
            config.demo = true;
        }
        if let Some(shell) = &self.shell {
            config.shell = shell.clone();
        }
        if self.debug {
            config.features.debug_logging = true;
        }
    }
}
