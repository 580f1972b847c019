use clap::Parser;
use std::path::Path;
use std::process;

mod cli;
mod config;
mod generator;
mod models;
mod strength;
mod vault;

use crate::cli::Args;
use crate::config::Config;
use crate::vault::Vault;

fn main() {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();
    let config = Config::load();

    env_logger::Builder::new()
        .filter_level(config.log_level)
        .format_timestamp_secs()
        .init();

    log::info!("🔐 Starting PassGuard - Password & Card Manager");

    let mut vault = if args.no_demo_data || !config.demo_data {
        Vault::new()
    } else {
        Vault::with_mock_data()
    };

    let result = match args.command {
        Some(command) => cli::handlers::run_command(command, &mut vault, &config, args.json),
        None => cli::menu::run_menu(&mut vault, &config),
    };

    if let Err(e) = result {
        log::error!("{}", e);
        eprintln!("❌ {}", e);
        process::exit(1);
    }

    log::info!("✅ PassGuard shutdown complete.");
}
