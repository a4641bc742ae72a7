//! View model for the animated transcript.
//!
//! [`TranscriptView`] turns the ordered message records and the current
//! [`Presence`] into exactly what the UI renders: one [`EntryView`] per
//! message, in input order, with its origin, edited flag, locale and
//! animation delay already worked out.

use std::collections::HashSet;
use std::time::Duration;

use super::message::{ChatMessage, MessageOrigin};
use crate::locale::Locale;
use crate::motion::{Motion, Presence};

/// Everything a single chat entry needs to render.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryView {
    /// Message id, used as the reconciliation key
    pub id: String,
    pub locale: Locale,
    /// Unix timestamp in milliseconds
    pub timestamp: i64,
    pub origin: MessageOrigin,
    pub edited: bool,
    pub message: String,
    /// Sender label, empty when unknown
    pub sender: String,
    /// Start delay of this entry's current animation
    pub delay: Duration,
    /// Duration of this entry's current animation
    pub duration: Duration,
    /// Whether the entry is playing its exit animation
    pub leaving: bool,
}

/// Rendered shape of a transcript.
#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptView {
    pub presence: Presence,
    pub entries: Vec<EntryView>,
}

impl TranscriptView {
    /// Settled view for a visibility flag.
    ///
    /// Returns `None` when hidden: nothing is rendered at all.
    pub fn build(
        hidden: bool,
        messages: &[ChatMessage],
        locale: &Locale,
        motion: &Motion,
    ) -> Option<Self> {
        let presence = if hidden {
            Presence::Hidden
        } else {
            Presence::Visible
        };
        Self::for_presence(presence, messages, locale, motion)
    }

    /// View for a presence, including the in-flight enter and exit states.
    ///
    /// Entries added while the transcript is already visible animate in
    /// immediately instead of waiting behind their siblings.
    pub fn for_presence(
        presence: Presence,
        messages: &[ChatMessage],
        locale: &Locale,
        motion: &Motion,
    ) -> Option<Self> {
        if !presence.is_mounted() {
            return None;
        }

        let count = messages.len();
        let transition = motion.transition_for(presence);
        let duration = transition.unwrap_or(&motion.enter).duration;

        let entries = messages
            .iter()
            .enumerate()
            .map(|(index, msg)| EntryView {
                id: msg.id.clone(),
                locale: locale.clone(),
                timestamp: msg.timestamp,
                origin: msg.origin(),
                edited: msg.is_edited(),
                message: msg.message.clone(),
                sender: msg.sender_label().to_string(),
                delay: transition
                    .map(|t| t.child_delay(index, count))
                    .unwrap_or(Duration::ZERO),
                duration,
                leaving: presence.is_leaving(),
            })
            .collect();

        Some(Self { presence, entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Ids that occur more than once, each reported once, in first-seen order.
///
/// Unique ids are a caller precondition; this only exists so the UI can
/// log when it is broken.
pub fn duplicate_ids(messages: &[ChatMessage]) -> Vec<&str> {
    let mut seen = HashSet::with_capacity(messages.len());
    let mut reported = HashSet::new();
    let mut duplicates = Vec::new();
    for msg in messages {
        let id = msg.id.as_str();
        if !seen.insert(id) && reported.insert(id) {
            duplicates.push(id);
        }
    }
    duplicates
}
