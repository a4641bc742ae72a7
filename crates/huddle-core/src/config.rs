//! Application configuration and file loading.
//!
//! Settings come from an optional `huddle.json` in the data directory;
//! command line flags override individual fields.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::chat::ChatMessage;
use crate::error::{HuddleError, HuddleResult};

/// File name of the config inside the data directory.
pub const CONFIG_FILE: &str = "huddle.json";

/// Default data directory (`<platform data dir>/huddle`).
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("huddle")
}

/// Settings for the desktop room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HuddleConfig {
    pub window_width: f64,
    pub window_height: f64,
    /// Milliseconds between scripted messages in the demo feed
    pub feed_interval_ms: u64,
    /// Start with the transcript collapsed
    pub start_hidden: bool,
    /// Default tracing filter when `RUST_LOG` is unset
    pub log_level: String,
    /// Transcript to preload, as a JSON array of messages
    pub transcript: Option<PathBuf>,
}

impl Default for HuddleConfig {
    fn default() -> Self {
        Self {
            window_width: 480.0,
            window_height: 800.0,
            feed_interval_ms: 2_500,
            start_hidden: false,
            log_level: "info".to_string(),
            transcript: None,
        }
    }
}

impl HuddleConfig {
    /// Load the config at `path`, or defaults if the file does not exist.
    pub fn load(path: impl AsRef<Path>) -> HuddleResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(?path, "no config file, using defaults");
            return Ok(Self::default());
        }

        let text = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        tracing::info!(?path, "loaded config");
        Ok(config)
    }

    /// Load `huddle.json` from a data directory.
    pub fn load_from_dir(data_dir: impl AsRef<Path>) -> HuddleResult<Self> {
        Self::load(data_dir.as_ref().join(CONFIG_FILE))
    }

    /// Reject values the window or the feed cannot use.
    pub fn validate(&self) -> HuddleResult<()> {
        for (name, value) in [
            ("window_width", self.window_width),
            ("window_height", self.window_height),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(HuddleError::Config(format!(
                    "{name} must be a positive number, got {value}"
                )));
            }
        }
        if self.feed_interval_ms == 0 {
            return Err(HuddleError::Config(
                "feed_interval_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn feed_interval(&self) -> Duration {
        Duration::from_millis(self.feed_interval_ms)
    }
}

/// Read a transcript saved as a JSON array of messages.
pub fn load_transcript(path: impl AsRef<Path>) -> HuddleResult<Vec<ChatMessage>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    let messages: Vec<ChatMessage> = serde_json::from_str(&text)?;
    tracing::info!(?path, count = messages.len(), "loaded transcript");
    Ok(messages)
}
