//! Runtime configuration read from the environment.
//!
//! - `TETRIS_STACK_SEED`: u32 seed for piece shapes (default: derived from the clock)
//! - `TETRIS_STACK_LOG_PATH`: session journal path (default: no journal)
//! - `TETRIS_STACK_NO_COLOR` or `NO_COLOR`: any non-empty value disables color
//!
//! Unparseable values fall back to the defaults.

use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub seed: u32,
    pub log_path: Option<String>,
    pub color: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: clock_seed(),
            log_path: None,
            color: true,
        }
    }
}

impl AppConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let seed = lookup("TETRIS_STACK_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(clock_seed);

        let log_path = lookup("TETRIS_STACK_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        let no_color = ["TETRIS_STACK_NO_COLOR", "NO_COLOR"]
            .iter()
            .any(|key| lookup(key).map(|v| !v.is_empty()).unwrap_or(false));

        Self {
            seed,
            log_path,
            color: !no_color,
        }
    }
}

/// Seed derived from the wall clock, taken once at startup.
pub fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| (d.as_secs() as u32) ^ d.subsec_nanos())
        .unwrap_or(1)
}
