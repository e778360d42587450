//! Runtime configuration read from `FALLTRIS_*` environment variables

use std::env;

use tracing::{info, warn};

use crate::types::FRAMES_PER_SECOND;

pub const MIN_FPS: u32 = 1;
pub const MAX_FPS: u32 = 240;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub seed: u64,
    /// Whether `seed` came from `FALLTRIS_SEED` rather than the OS RNG
    pub seed_from_env: bool,
    pub fps: u32,
    pub log_path: Option<String>,
    pub exit_on_loss: bool,
    /// `(variable, raw value)` pairs that failed to parse and fell back to defaults
    pub rejected: Vec<(&'static str, String)>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: 1,
            seed_from_env: false,
            fps: FRAMES_PER_SECOND,
            log_path: None,
            exit_on_loss: false,
            rejected: Vec::new(),
        }
    }
}

impl Config {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Create from any key lookup; unset or blank variables keep their defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        let get = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        match get("FALLTRIS_SEED") {
            Some(raw) => match raw.parse::<u64>() {
                Ok(seed) => {
                    config.seed = seed;
                    config.seed_from_env = true;
                }
                Err(_) => {
                    config.seed = rand::random();
                    config.rejected.push(("FALLTRIS_SEED", raw));
                }
            },
            None => config.seed = rand::random(),
        }

        if let Some(raw) = get("FALLTRIS_FPS") {
            match raw.parse::<u32>() {
                Ok(fps) => config.fps = fps.clamp(MIN_FPS, MAX_FPS),
                Err(_) => config.rejected.push(("FALLTRIS_FPS", raw)),
            }
        }

        config.log_path = get("FALLTRIS_LOG_PATH");

        if let Some(raw) = get("FALLTRIS_EXIT_ON_LOSS") {
            match raw.to_lowercase().as_str() {
                "1" | "true" | "yes" => config.exit_on_loss = true,
                "0" | "false" | "no" => config.exit_on_loss = false,
                _ => config.rejected.push(("FALLTRIS_EXIT_ON_LOSS", raw)),
            }
        }

        config
    }

    /// Log the effective configuration and any rejected values.
    ///
    /// Separate from parsing because the log file itself comes from this config.
    pub fn report(&self) {
        for (key, raw) in &self.rejected {
            warn!(key, value = raw.as_str(), "ignoring invalid value, using default");
        }
        info!(
            seed = self.seed,
            seed_from_env = self.seed_from_env,
            fps = self.fps,
            exit_on_loss = self.exit_on_loss,
            "configuration loaded"
        );
    }
}
