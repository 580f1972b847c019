// src/config.rs
use std::env;

use log::LevelFilter;

use crate::models::GenerationOptions;

// Configuration for the manager, read from the environment with defaults
#[derive(Debug, Clone)]
pub struct Config {
    // Password Generation
    pub default_password_length: usize,
    pub default_include_numbers: bool,
    pub default_include_symbols: bool,

    // Application Settings
    pub demo_data: bool,

    // Logging
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        let defaults = GenerationOptions::default();
        Self {
            default_password_length: defaults.length,
            default_include_numbers: defaults.include_numbers,
            default_include_symbols: defaults.include_symbols,
            demo_data: true,
            log_level: LevelFilter::Info,
        }
    }
}

impl Config {
    pub fn load() -> Self {
        let mut config = Config::default();

        if let Ok(value) = env::var("PASSGUARD_LENGTH") {
            if let Ok(length) = value.parse() {
                config.default_password_length = length;
            }
        }
        if let Some(flag) = env_bool("PASSGUARD_NUMBERS") {
            config.default_include_numbers = flag;
        }
        if let Some(flag) = env_bool("PASSGUARD_SYMBOLS") {
            config.default_include_symbols = flag;
        }
        if let Some(flag) = env_bool("PASSGUARD_DEMO_DATA") {
            config.demo_data = flag;
        }
        if let Ok(value) = env::var("PASSGUARD_LOG") {
            config.log_level = match value.to_lowercase().as_str() {
                "off" => LevelFilter::Off,
                "error" => LevelFilter::Error,
                "warn" => LevelFilter::Warn,
                "debug" => LevelFilter::Debug,
                "trace" => LevelFilter::Trace,
                _ => LevelFilter::Info,
            };
        }

        config
    }

    pub fn generation_options(&self) -> GenerationOptions {
        GenerationOptions {
            length: self.default_password_length,
            include_numbers: self.default_include_numbers,
            include_symbols: self.default_include_symbols,
        }
    }
}

fn env_bool(key: &str) -> Option<bool> {
    match env::var(key).ok()?.to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
