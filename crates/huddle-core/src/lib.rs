//! Huddle Core Library
//!
//! Model and timing for the chat transcript shown beside a video call.
//!
//! ## Overview
//!
//! A room transport delivers an ordered list of [`ChatMessage`] records.
//! Huddle shows them as an animated transcript: the container fades in and
//! out with a visibility flag and the individual entries stagger in after
//! it. This crate holds everything about that which is not Dioxus:
//!
//! - **[`chat`]**: message records and the transcript view model
//! - **[`locale`]**: runtime locale lookup and timestamp formatting
//! - **[`motion`]**: the presence state machine and stagger timing
//! - **[`config`]** / **[`logging`]**: settings and tracing setup
//!
//! ## Quick Start
//!
//! ```ignore
//! use huddle_core::{ChatMessage, Locale, Motion, Participant, TranscriptView};
//!
//! let messages = vec![
//!     ChatMessage::new("1", 1705123456789, Participant::remote("gm"), "What do you do?"),
//! ];
//! let view = TranscriptView::build(false, &messages, &Locale::resolve(), &Motion::default());
//! assert_eq!(view.map(|v| v.len()), Some(1));
//! ```

pub mod chat;
pub mod config;
pub mod error;
pub mod locale;
pub mod logging;
pub mod motion;

// Re-exports
pub use chat::{duplicate_ids, ChatMessage, EntryView, MessageOrigin, Participant, TranscriptView};
pub use config::{default_data_dir, load_transcript, HuddleConfig};
pub use error::{HuddleError, HuddleResult};
pub use locale::{HourCycle, Locale, DEFAULT_LOCALE};
pub use motion::{Ease, Motion, Presence, PresenceStep, StaggerDirection, Transition};
