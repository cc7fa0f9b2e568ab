//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `fold`: Show value and string previews for source and layout files
//! - `lookup`: Resolve string IDs against the project's string tables
//! - `tables`: List resource directories and the file chosen for each
//! - `recolor`: Rewrite the literal channels of a color expression
//! - `init`: Initialize a configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Fold(cmd)) => cmd.common.verbose,
            Some(Command::Lookup(cmd)) => cmd.common.verbose,
            Some(Command::Tables(cmd)) => cmd.common.verbose,
            Some(Command::Recolor(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Project root (defaults to the directory holding .cocolensrc.json, or the current directory)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Locale used to pick string tables, e.g. de_DE (overrides config and environment)
    #[arg(long, env = "COCOLENS_LOCALE")]
    pub locale: Option<String>,

    /// Directory searched for .strings files (overrides config file, repeatable)
    #[arg(long = "resource-root")]
    pub resource_roots: Vec<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Args)]
pub struct FoldCommand {
    /// Files or directories to fold (default: configured includes)
    pub paths: Vec<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Only show value folds
    #[arg(long, conflicts_with = "strings_only")]
    pub values_only: bool,

    /// Only show string folds
    #[arg(long)]
    pub strings_only: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct LookupCommand {
    /// String IDs to resolve
    #[arg(required = true)]
    pub ids: Vec<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct TablesCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct RecolorCommand {
    /// Source file containing the color
    pub file: PathBuf,

    /// 1-based line of the color expression
    #[arg(long)]
    pub line: usize,

    /// 1-based column inside the color expression (default: first color on the line)
    #[arg(long)]
    pub column: Option<usize>,

    /// New color as #rrggbb or #rrggbbaa
    #[arg(long)]
    pub color: String,

    /// Actually write the file (default is dry-run)
    #[arg(long)]
    pub apply: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show folded previews of literal colors, vectors, sizes and string IDs
    Fold(FoldCommand),
    /// Resolve string IDs to their localized text
    Lookup(LookupCommand),
    /// List string resource directories and the table chosen for each
    Tables(TablesCommand),
    /// Replace the literal channels of a Color3B/Color4B expression
    Recolor(RecolorCommand),
    /// Initialize a new .cocolensrc.json configuration file
    Init,
}
