// src/cli/mod.rs
use clap::Parser;

pub mod commands;
pub mod handlers;
pub mod menu;

pub use commands::CliCommand;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Use JSON for output (for scripting)
    #[arg(long)]
    pub json: bool,

    /// Start with an empty vault instead of the demo records
    #[arg(long)]
    pub no_demo_data: bool,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}
