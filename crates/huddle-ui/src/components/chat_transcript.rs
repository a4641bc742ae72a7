//! Chat Transcript Component
//!
//! Animated list of chat messages. The container fades in when shown and
//! fades out before it is removed when hidden; entries stagger in after
//! the container and leave last-first.

use dioxus::prelude::*;
use huddle_core::{duplicate_ids, ChatMessage, Motion, Presence, PresenceStep, TranscriptView};

use super::chat_entry::ChatEntry;
use crate::context::use_locale;

/// Inline animation style for the transcript container.
pub fn container_style(presence: Presence, motion: &Motion) -> String {
    let name = match presence {
        Presence::Entering => "chat-transcript-in",
        Presence::Exiting => "chat-transcript-out",
        Presence::Hidden | Presence::Visible => return String::new(),
    };
    match motion.transition_for(presence) {
        Some(t) => format!(
            "animation: {name} {}ms {} {}ms both;",
            t.duration.as_millis(),
            t.ease.css(),
            t.delay.as_millis()
        ),
        None => String::new(),
    }
}

/// Animated chat transcript
///
/// Message ids must be unique; duplicates are logged and rendered anyway.
/// Extra attributes (class, style, id, ...) go to the outer wrapper.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     ChatTranscript {
///         hidden: !chat_open(),
///         messages: messages(),
///         class: "room-chat",
///     }
/// }
/// ```
#[component]
pub fn ChatTranscript(
    /// Hide the transcript, playing the exit animation first
    #[props(default = false)]
    hidden: bool,
    /// Messages in display order
    #[props(default)]
    messages: Vec<ChatMessage>,
    /// Animation timing
    #[props(default)]
    motion: Motion,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let locale = use_locale();
    let mut presence = use_signal(|| Presence::initial(hidden));
    let mut settle_task = use_signal(|| None::<Task>);
    let count = messages.len();

    // Drive presence from the visibility flag. Tasks spawned here belong to
    // this scope, so unmounting also drops a pending settle.
    use_effect(use_reactive(
        (&hidden, &count, &motion),
        move |(hidden, count, motion)| {
            let current = *presence.peek();
            let pending = settle_task.peek().is_some();
            let PresenceStep::Restart { next, settle_after } =
                motion.step(current, hidden, count, pending)
            else {
                return;
            };

            if let Some(task) = settle_task.write().take() {
                task.cancel();
            }
            if next != current {
                tracing::debug!(from = ?current, to = ?next, count, "transcript presence");
                presence.set(next);
            }

            if let Some(wait) = settle_after {
                let task = spawn(async move {
                    tokio::time::sleep(wait).await;
                    let settled = presence.peek().settle();
                    presence.set(settled);
                    settle_task.set(None);
                    tracing::trace!(state = ?settled, "transcript animation settled");
                });
                settle_task.set(Some(task));
            }
        },
    ));

    use_effect(use_reactive((&messages,), |(messages,)| {
        let duplicates = duplicate_ids(&messages);
        if !duplicates.is_empty() {
            tracing::warn!(?duplicates, "chat transcript received duplicate message ids");
        }
    }));

    let current = presence();
    let Some(view) = TranscriptView::for_presence(current, &messages, &locale, &motion) else {
        return rsx! {};
    };
    let style = container_style(current, &motion);

    rsx! {
        div {
            ..attributes,
            ul {
                class: "chat-transcript {current.class()}",
                style: "{style}",
                role: "log",
                "aria-live": "polite",
                for entry in view.entries {
                    ChatEntry {
                        key: "{entry.id}",
                        entry: entry,
                        offset_px: motion.entry_offset_px,
                    }
                }
            }
        }
    }
}
