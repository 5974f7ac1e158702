mod args;
mod commands;
mod executor;

pub use args::{CliArgs, CliSubCommands};
pub use executor::execute_cli_command;
