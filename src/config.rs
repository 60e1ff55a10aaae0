//! Application configuration loaded from environment variables.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::error::{Result, ScannerError};
use crate::odds::Bookmaker;

/// Which match-day window to request from the feed providers.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, Default,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum TargetDay {
    /// Matches scheduled for today.
    #[default]
    Today,
    /// Matches scheduled for tomorrow.
    Tomorrow,
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // === Scan Parameters ===
    /// Match-day window requested from every feed provider.
    #[serde(default)]
    pub target_day: TargetDay,

    /// Fuzzy-match acceptance threshold in 0..=100. A candidate pairing is
    /// accepted only if its similarity score is strictly greater.
    #[serde(default = "default_similarity_threshold")]
    pub similarity_threshold: u8,

    /// Number of scan cycles to run before exiting.
    #[serde(default = "default_cycles")]
    pub cycles: u32,

    /// Seconds to wait between scan cycles.
    #[serde(default = "default_cycle_delay")]
    pub cycle_delay_seconds: u64,

    // === Feed Providers ===
    /// Feed specs as `NAME=PATH` entries (comma separated in the
    /// environment), one JSON fixture file per bookmaker.
    #[serde(default)]
    pub feeds: Vec<String>,

    // === Notification ===
    /// Webhook URL for opportunity notifications. Falls back to log-only
    /// notifications when unset.
    #[serde(default)]
    pub webhook_url: Option<String>,

    // === Server Configuration ===
    /// HTTP port for the Prometheus metrics exporter.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub rust_log: String,

    /// Enable verbose logging.
    #[serde(default)]
    pub verbose: bool,
}

fn default_similarity_threshold() -> u8 {
    70
}

fn default_cycles() -> u32 {
    20
}

fn default_cycle_delay() -> u64 {
    60
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        Ok(envy::from_env()?)
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.similarity_threshold > 100 {
            return Err("SIMILARITY_THRESHOLD must be in 0..=100".to_string());
        }

        if self.cycles == 0 {
            return Err("CYCLES must be at least 1".to_string());
        }

        for spec in &self.feeds {
            if parse_feed_spec(spec).is_err() {
                return Err(format!("invalid FEEDS entry {spec:?} (expected NAME=PATH)"));
            }
        }

        Ok(())
    }

    /// Parsed `(bookmaker, fixture file)` pairs from the feed specs.
    pub fn feed_specs(&self) -> Result<Vec<(Bookmaker, PathBuf)>> {
        self.feeds.iter().map(|spec| parse_feed_spec(spec)).collect()
    }
}

fn parse_feed_spec(spec: &str) -> Result<(Bookmaker, PathBuf)> {
    match spec.split_once('=') {
        Some((name, path)) if !name.trim().is_empty() && !path.trim().is_empty() => {
            Ok((Bookmaker::new(name.trim()), PathBuf::from(path.trim())))
        }
        _ => Err(ScannerError::InvalidFeedSpec(spec.to_string())),
    }
}
