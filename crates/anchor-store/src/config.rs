//! # Configuration
//!
//! Process-level settings for hosts of the store (the seed binary, tests,
//! an embedding shell). Business settings live in the store itself, see
//! [`crate::repository::settings`].
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command-line flags (binaries only)
//! 2. Environment variables (`ANCHOR_*`)
//! 3. Defaults (this file)

use std::path::PathBuf;

use tracing::warn;
use tracing_subscriber::EnvFilter;

use crate::pool::DbConfig;

/// Default database file, relative to the working directory.
pub const DEFAULT_DB_PATH: &str = "anchor.db";

/// Log filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info,anchor=debug,sqlx=warn";

/// Host configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct AnchorConfig {
    /// SQLite file backing local storage.
    /// Default: `anchor.db`
    pub db_path: PathBuf,

    /// Seed sample data on first run.
    /// Default: true
    pub seed_sample_data: bool,

    /// Overrides the stored low-stock threshold when set.
    /// Default: none
    pub low_stock_threshold: Option<i64>,
}

impl Default for AnchorConfig {
    fn default() -> Self {
        AnchorConfig {
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            seed_sample_data: true,
            low_stock_threshold: None,
        }
    }
}

impl AnchorConfig {
    /// Reads configuration from the process environment.
    ///
    /// ## Environment Variables
    /// - `ANCHOR_DB_PATH`: database file
    /// - `ANCHOR_SEED_SAMPLE_DATA`: `true`/`false`/`1`/`0`/`yes`/`no`
    /// - `ANCHOR_LOW_STOCK_THRESHOLD`: non-negative integer
    ///
    /// Unparseable values are logged and ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`from_env`](Self::from_env) over an arbitrary lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = AnchorConfig::default();

        if let Some(path) = lookup("ANCHOR_DB_PATH").filter(|p| !p.trim().is_empty()) {
            config.db_path = PathBuf::from(path);
        }

        if let Some(raw) = lookup("ANCHOR_SEED_SAMPLE_DATA") {
            match parse_bool(&raw) {
                Some(seed) => config.seed_sample_data = seed,
                None => warn!(value = %raw, "Ignoring invalid ANCHOR_SEED_SAMPLE_DATA"),
            }
        }

        if let Some(raw) = lookup("ANCHOR_LOW_STOCK_THRESHOLD") {
            match raw.trim().parse::<i64>() {
                Ok(n) if n >= 0 => config.low_stock_threshold = Some(n),
                _ => warn!(value = %raw, "Ignoring invalid ANCHOR_LOW_STOCK_THRESHOLD"),
            }
        }

        config
    }

    /// Database configuration for [`db_path`](Self::db_path).
    pub fn db_config(&self) -> DbConfig {
        DbConfig::new(&self.db_path)
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Installs the global tracing subscriber.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - everything at debug
/// - `RUST_LOG=anchor=trace` - trace for anchor crates only
/// - Default: [`DEFAULT_LOG_FILTER`]
///
/// Calling it twice is harmless; the second call does nothing.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AnchorConfig::from_lookup(lookup(&[]));
        assert_eq!(config, AnchorConfig::default());
        assert_eq!(config.db_path, PathBuf::from("anchor.db"));
        assert!(config.seed_sample_data);
    }

    #[test]
    fn test_overrides() {
        let config = AnchorConfig::from_lookup(lookup(&[
            ("ANCHOR_DB_PATH", "/data/shop.db"),
            ("ANCHOR_SEED_SAMPLE_DATA", "no"),
            ("ANCHOR_LOW_STOCK_THRESHOLD", "12"),
        ]));
        assert_eq!(config.db_path, PathBuf::from("/data/shop.db"));
        assert!(!config.seed_sample_data);
        assert_eq!(config.low_stock_threshold, Some(12));
        assert!(!config.db_config().is_in_memory());
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = AnchorConfig::from_lookup(lookup(&[
            ("ANCHOR_DB_PATH", "  "),
            ("ANCHOR_SEED_SAMPLE_DATA", "maybe"),
            ("ANCHOR_LOW_STOCK_THRESHOLD", "-3"),
        ]));
        assert_eq!(config, AnchorConfig::default());
    }
}
