//! Huddle UI Components
//!
//! Dioxus components for the chat transcript shown beside a call:
//!
//! - [`ChatTranscript`]: animated container that mounts and unmounts with
//!   a visibility flag and staggers its entries
//! - [`ChatEntry`]: a single message bubble
//!
//! Include [`TRANSCRIPT_STYLES`] once in the document for the animations.

pub mod components;
pub mod context;
mod styles;

pub use components::*;
pub use context::{provide_locale, use_locale};
pub use styles::TRANSCRIPT_STYLES;
