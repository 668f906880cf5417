//! Vellum - content utilities for a Notion-backed static blog.

#![allow(dead_code)]

mod cli;
mod config;
mod content;
mod generator;
mod logger;
mod source;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::SiteConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    logger::set_verbose(cli.verbose());

    let config = SiteConfig::load(&cli)?;

    match &cli.command {
        Commands::Stats { args } => cli::stats::run_stats(args, &config),
        Commands::Menu { args } => cli::menu::run_menu(args, &config),
    }
}
