//! Command-line interface layer.
//!
//! Commands load a [`ProjectContext`](crate::core::context::ProjectContext),
//! run the engine and print through [`report`]. The engine itself never
//! prints, so it can be used as a library.

use anyhow::Result;

pub mod args;
mod commands;
mod exit_status;
mod report;

pub use args::{Arguments, Command};
pub use exit_status::ExitStatus;

use commands::{fold::fold, init::init, lookup::lookup, recolor::recolor, tables::tables};

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let Some(Arguments { command }) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    match command {
        Some(Command::Fold(cmd)) => fold(cmd),
        Some(Command::Lookup(cmd)) => lookup(cmd),
        Some(Command::Tables(cmd)) => tables(cmd),
        Some(Command::Recolor(cmd)) => recolor(cmd),
        Some(Command::Init) => init(),
        None => anyhow::bail!("No command provided. Use --help to see available commands."),
    }
}
