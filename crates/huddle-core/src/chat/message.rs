//! Chat message records as supplied by the room transport
//!
//! This module provides the [`ChatMessage`] struct which represents a
//! single message in a room transcript. Records are owned by whatever
//! delivers them; Huddle only reads them.

use serde::{Deserialize, Serialize};

/// The participant a message came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    /// Stable participant identity within the room
    pub identity: String,
    /// Display name, if the participant set one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Whether this participant is the local user
    #[serde(default)]
    pub is_local: bool,
}

impl Participant {
    /// A participant representing the local user.
    pub fn local(identity: impl Into<String>) -> Self {
        Self {
            identity: identity.into(),
            name: None,
            is_local: true,
        }
    }

    /// A participant on the other end of the room.
    pub fn remote(identity: impl Into<String>) -> Self {
        Self {
            identity: identity.into(),
            name: None,
            is_local: false,
        }
    }

    /// Attach a display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Name to show next to the participant's messages.
    ///
    /// Falls back to the identity when no display name is set.
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.identity)
    }
}

/// Where a message originated relative to this client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageOrigin {
    /// Sent by the local participant
    Local,
    /// Sent by anyone else
    #[default]
    Remote,
}

impl MessageOrigin {
    /// Value used for the `data-message-origin` attribute and CSS hooks.
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageOrigin::Local => "local",
            MessageOrigin::Remote => "remote",
        }
    }

    /// Returns whether this is the local participant's message
    pub fn is_local(&self) -> bool {
        matches!(self, MessageOrigin::Local)
    }
}

/// A chat message ready for display.
///
/// # Example
///
/// ```ignore
/// let message = ChatMessage::new(
///     "01HZX5...",
///     1705123456789,
///     Participant::remote("game-master").with_name("Narrator"),
///     "What do you do?",
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    /// Unique identifier within a transcript
    pub id: String,
    /// Unix timestamp in milliseconds when the message was created
    pub timestamp: i64,
    /// Unix timestamp in milliseconds of the last edit, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edit_timestamp: Option<i64>,
    /// Sender, when the transport knows it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<Participant>,
    /// Message body
    pub message: String,
}

impl ChatMessage {
    /// Create an unedited message.
    pub fn new(
        id: impl Into<String>,
        timestamp: i64,
        from: Participant,
        message: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            timestamp,
            edit_timestamp: None,
            from: Some(from),
            message: message.into(),
        }
    }

    /// Mark the message as edited at `edit_timestamp`.
    pub fn edited_at(mut self, edit_timestamp: i64) -> Self {
        self.edit_timestamp = Some(edit_timestamp);
        self
    }

    /// Local when the sender flags itself local, remote otherwise
    /// (including when the sender is unknown).
    pub fn origin(&self) -> MessageOrigin {
        match self.from {
            Some(ref from) if from.is_local => MessageOrigin::Local,
            _ => MessageOrigin::Remote,
        }
    }

    /// Whether the message carries an edit timestamp.
    pub fn is_edited(&self) -> bool {
        self.edit_timestamp.is_some()
    }

    /// Sender label, empty when the sender is unknown.
    pub fn sender_label(&self) -> &str {
        self.from.as_ref().map(Participant::label).unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_follows_local_flag() {
        let mine = ChatMessage::new("1", 0, Participant::local("me"), "hi");
        let theirs = ChatMessage::new("2", 0, Participant::remote("gm"), "hello");
        assert_eq!(mine.origin(), MessageOrigin::Local);
        assert_eq!(theirs.origin(), MessageOrigin::Remote);
    }

    #[test]
    fn test_unknown_sender_is_remote() {
        let mut msg = ChatMessage::new("1", 0, Participant::local("me"), "hi");
        msg.from = None;
        assert_eq!(msg.origin(), MessageOrigin::Remote);
        assert_eq!(msg.sender_label(), "");
    }

    #[test]
    fn test_edited_flag() {
        let msg = ChatMessage::new("1", 10, Participant::remote("gm"), "typo");
        assert!(!msg.is_edited());
        assert!(msg.edited_at(20).is_edited());
    }

    #[test]
    fn test_label_prefers_name() {
        let anon = Participant::remote("agent-7f3a");
        assert_eq!(anon.label(), "agent-7f3a");
        assert_eq!(anon.with_name("Narrator").label(), "Narrator");
    }

    #[test]
    fn test_json_field_names() {
        let json = r#"{
            "id": "m1",
            "timestamp": 1705123456789,
            "editTimestamp": 1705123460000,
            "from": { "identity": "me", "isLocal": true },
            "message": "I follow the tracks"
        }"#;
        let msg: ChatMessage = serde_json::from_str(json).unwrap();
        assert_eq!(msg.id, "m1");
        assert_eq!(msg.edit_timestamp, Some(1705123460000));
        assert_eq!(msg.origin(), MessageOrigin::Local);
    }

    #[test]
    fn test_json_optional_fields() {
        let json = r#"{ "id": "m2", "timestamp": 0, "message": "..." }"#;
        let msg: ChatMessage = serde_json::from_str(json).unwrap();
        assert!(msg.from.is_none());
        assert!(!msg.is_edited());
    }

    #[test]
    fn test_origin_strings() {
        assert_eq!(MessageOrigin::Local.as_str(), "local");
        assert_eq!(MessageOrigin::Remote.as_str(), "remote");
        assert_eq!(MessageOrigin::default(), MessageOrigin::Remote);
    }
}
