// teachterm - teaching terminal
// Main entry point

use anyhow::Result;
use clap::Parser;
use std::sync::Arc;

use teachterm::catalog::CategoryFilter;
use teachterm::cli::{commands, tui, Cli, Commands};
use teachterm::config::{load_config, load_config_from};
use teachterm::logging;
use teachterm::shell::{PtyShell, ShellCapability};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(command) = &cli.command {
        logging::init_stderr_logging();
        let mut stdout = std::io::stdout();
        return match command {
            Commands::List { category, json } => {
                commands::run_list(category.unwrap_or(CategoryFilter::All), *json, &mut stdout)
            }
            Commands::Explain { command } => commands::run_explain(command, &mut stdout),
        };
    }

    let mut config = match &cli.config {
        Some(path) => load_config_from(path)?,
        None => load_config()?,
    };
    cli.apply_overrides(&mut config);
    config.validate()?;

    let log_path = match &cli.log_file {
        Some(path) => path.clone(),
        None => logging::default_log_path()?,
    };
    logging::init_file_logging(&log_path, config.features.debug_logging)?;
    for warning in config.warnings() {
        tracing::warn!("{}", warning);
    }

    let capability = if config.demo {
        tracing::info!("Demo mode requested, no shell will be spawned");
        ShellCapability::Unavailable
    } else {
        ShellCapability::Remote(Arc::new(PtyShell::new()))
    };

    tui::run(&config, capability).await
}
