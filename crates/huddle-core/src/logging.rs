//! Tracing subscriber setup.
//!
//! `RUST_LOG` wins when set; otherwise the configured level applies. The
//! subscriber is installed before the config is read, so the filter can be
//! swapped afterwards through [`LogHandle`].
//!
//! ```ignore
//! let log = huddle_core::logging::init("info")?;
//! let config = HuddleConfig::load_from_dir(&data_dir)?;
//! log.set_level(&config.log_level)?;
//! ```

use tracing_subscriber::prelude::*;
use tracing_subscriber::{reload, EnvFilter, Registry};

use crate::error::{HuddleError, HuddleResult};

/// Build the filter from `RUST_LOG`, falling back to `default_level`.
pub fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Handle for changing the level of the installed subscriber.
#[derive(Clone)]
pub struct LogHandle {
    filter: reload::Handle<EnvFilter, Registry>,
}

impl LogHandle {
    /// Switch to `level`, unless `RUST_LOG` is set.
    pub fn set_level(&self, level: &str) -> HuddleResult<()> {
        if std::env::var_os(EnvFilter::DEFAULT_ENV).is_some() {
            return Ok(());
        }
        self.filter
            .reload(EnvFilter::new(level))
            .map_err(|e| HuddleError::Logging(e.to_string()))
    }
}

/// Install the global subscriber: console output filtered by [`env_filter`].
///
/// Fails if a global subscriber is already installed.
pub fn init(default_level: &str) -> HuddleResult<LogHandle> {
    let (filter, handle) = reload::Layer::new(env_filter(default_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .try_init()
        .map_err(|e| HuddleError::Logging(e.to_string()))?;
    Ok(LogHandle { filter: handle })
}
