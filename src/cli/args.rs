//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Vellum content utilities CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: vellum.toml)
    #[arg(short = 'C', long, default_value = "vellum.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Reading stats for exported block documents
    #[command(visible_alias = "s")]
    Stats {
        #[command(flatten)]
        args: StatsArgs,
    },

    /// Navigation menu from the exported page listing and database
    #[command(visible_alias = "m")]
    Menu {
        #[command(flatten)]
        args: MenuArgs,
    },
}

/// Stats command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct StatsArgs {
    /// Block documents to process (files, or directories scanned for *.json).
    /// Use `-` to read paths from stdin (one per line). If omitted, processes
    /// every document under `<source.dir>/blocks`.
    #[arg(value_name = "PATH", value_hint = clap::ValueHint::AnyPath)]
    pub paths: Vec<PathBuf>,

    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,

    /// Write output to file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}

/// Menu command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct MenuArgs {
    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,

    /// Write output to file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}

#[allow(unused)]
impl Cli {
    pub const fn is_stats(&self) -> bool {
        matches!(self.command, Commands::Stats { .. })
    }
    pub const fn is_menu(&self) -> bool {
        matches!(self.command, Commands::Menu { .. })
    }

    /// Whether the command refuses to run without a config file.
    ///
    /// `stats` runs fine on defaults; `menu` needs the real schema names.
    pub const fn requires_config(&self) -> bool {
        self.is_menu()
    }

    /// Per-command verbose flag.
    pub const fn verbose(&self) -> bool {
        match &self.command {
            Commands::Stats { args } => args.verbose,
            Commands::Menu { args } => args.verbose,
        }
    }
}
