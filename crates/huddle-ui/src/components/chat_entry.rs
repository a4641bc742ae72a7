//! Chat Entry Component
//!
//! One message in the transcript. Local messages sit on the right in a
//! filled bubble; remote messages sit on the left under the sender's name.

use std::time::Duration;

use dioxus::prelude::*;
use huddle_core::locale::format_timestamp;
use huddle_core::EntryView;

/// Properties for the ChatEntry component
#[derive(Clone, PartialEq, Props)]
pub struct ChatEntryProps {
    /// Precomputed entry from the transcript view model
    pub entry: EntryView,
    /// Vertical offset of the entry before it animates in (default: 10px)
    #[props(default = 10.0)]
    pub offset_px: f32,
}

/// Inline animation style for an entry.
///
/// `enter_delay` is the delay the entry was first mounted with. Keeping it
/// stable across renders stops the entrance animation from restarting.
pub fn entry_animation_style(entry: &EntryView, enter_delay: Duration, offset_px: f32) -> String {
    let (name, delay) = if entry.leaving {
        ("chat-entry-out", entry.delay)
    } else {
        ("chat-entry-in", enter_delay)
    };
    format!(
        "--entry-offset: {offset_px}px; animation: {name} {}ms ease-out {}ms both;",
        entry.duration.as_millis(),
        delay.as_millis()
    )
}

/// Renders a single chat message
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     for entry in view.entries {
///         ChatEntry { key: "{entry.id}", entry: entry }
///     }
/// }
/// ```
#[component]
pub fn ChatEntry(props: ChatEntryProps) -> Element {
    let entry = &props.entry;
    let enter_delay = use_hook(|| props.entry.delay);

    let origin = entry.origin.as_str();
    let (short_time, full_time) = format_timestamp(entry.timestamp, &entry.locale);
    let style = entry_animation_style(entry, enter_delay, props.offset_px);

    rsx! {
        li {
            class: "chat-entry chat-entry-{origin}",
            "data-message-origin": "{origin}",
            lang: "{entry.locale}",
            title: "{full_time}",
            style: "{style}",

            header { class: "chat-entry-header",
                if !entry.origin.is_local() && !entry.sender.is_empty() {
                    span { class: "chat-entry-sender", "{entry.sender}" }
                }
                span { class: "chat-entry-time",
                    if entry.edited {
                        span {
                            class: "chat-entry-edited",
                            "aria-label": "edited",
                            "*"
                        }
                    }
                    "{short_time}"
                }
            }

            span { class: "chat-entry-bubble", "{entry.message}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use huddle_core::{Locale, MessageOrigin};

    fn entry(leaving: bool) -> EntryView {
        EntryView {
            id: "m1".to_string(),
            locale: Locale::fallback(),
            timestamp: 0,
            origin: MessageOrigin::Remote,
            edited: false,
            message: "What do you do?".to_string(),
            sender: "Narrator".to_string(),
            delay: Duration::from_millis(100),
            duration: Duration::from_millis(300),
            leaving,
        }
    }

    #[test]
    fn entering_uses_mount_delay() {
        let style = entry_animation_style(&entry(false), Duration::from_millis(400), 10.0);
        assert_eq!(
            style,
            "--entry-offset: 10px; animation: chat-entry-in 300ms ease-out 400ms both;"
        );
    }

    #[test]
    fn leaving_uses_current_delay() {
        let style = entry_animation_style(&entry(true), Duration::from_millis(400), 10.0);
        assert_eq!(
            style,
            "--entry-offset: 10px; animation: chat-entry-out 300ms ease-out 100ms both;"
        );
    }
}
