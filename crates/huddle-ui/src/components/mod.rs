//! Transcript components

mod chat_entry;
mod chat_transcript;

pub use chat_entry::*;
pub use chat_transcript::*;
