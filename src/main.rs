use anyhow::{Context, Result};
use clap::Parser;
use keybind_finder::cli::{self, CliArgs};
use keybind_finder::config::AppConfig;
use keybind_finder::console;
use tracing_subscriber::EnvFilter;

/// Set up logging based on RUST_LOG environment variable
pub fn setup_logging() {
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_target(true)
            .with_writer(std::io::stderr)
            .init();
    }
}

fn main() -> Result<()> {
    setup_logging();

    let cli_args = CliArgs::parse();
    let app_config = AppConfig::from_layers(&cli_args);

    if cli_args.print_config {
        app_config.print();
        return Ok(());
    }

    match &cli_args.command {
        Some(_) => {
            cli::execute_cli_command(&cli_args, app_config)
                .context("Failed to execute CLI command")?;
        }
        None => {
            console::run_interactive(&app_config).context("Failed to run interactive prompt")?;
        }
    }

    Ok(())
}
