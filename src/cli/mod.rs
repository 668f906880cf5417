//! Command-line interface module.

mod args;
pub mod common;
pub mod menu;
pub mod output;
pub mod stats;

pub use args::{Cli, Commands, MenuArgs, StatsArgs};
