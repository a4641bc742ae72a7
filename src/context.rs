//! Startup settings shared with the root component.
//!
//! `main` resolves the config and preloaded transcript before the window
//! opens; the app reads them back with [`room_settings`].

use std::sync::OnceLock;

use huddle_core::{ChatMessage, HuddleConfig};

/// Everything the room needs from startup.
#[derive(Clone, Debug, Default)]
pub struct RoomSettings {
    pub config: HuddleConfig,
    /// Transcript loaded from disk, shown before the feed starts
    pub initial: Vec<ChatMessage>,
}

static SETTINGS: OnceLock<RoomSettings> = OnceLock::new();

/// Store the startup settings. Later calls are ignored.
pub fn set_room_settings(settings: RoomSettings) {
    if SETTINGS.set(settings).is_err() {
        tracing::warn!("room settings already initialized");
    }
}

/// Startup settings, or defaults if `main` never set them.
pub fn room_settings() -> &'static RoomSettings {
    SETTINGS.get_or_init(RoomSettings::default)
}
