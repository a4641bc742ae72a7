//! Chat transcript model
//!
//! - [`message`]: the message records handed over by the room transport
//! - [`transcript`]: the view model the transcript component renders

pub mod message;
pub mod transcript;

pub use message::{ChatMessage, MessageOrigin, Participant};
pub use transcript::{duplicate_ids, EntryView, TranscriptView};
