pub mod args;
pub mod commands;

pub use args::{Cli, Commands, KeyCommands};
pub use commands::handle_command;
