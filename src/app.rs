use dioxus::prelude::*;
use huddle_core::Locale;
use huddle_ui::{provide_locale, ChatTranscript, TRANSCRIPT_STYLES};

use crate::context::room_settings;
use crate::feed::ScriptedFeed;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles and the display locale, replays the scripted
/// feed into the transcript and toggles its visibility.
#[component]
pub fn App() -> Element {
    let settings = room_settings();
    provide_locale(Locale::resolve);

    let mut messages = use_signal(|| settings.initial.clone());
    let mut chat_open = use_signal(|| !settings.config.start_hidden);
    let interval = settings.config.feed_interval();

    // Feed one scripted line per interval until the script runs out
    use_future(move || async move {
        let mut feed = ScriptedFeed::default();
        loop {
            tokio::time::sleep(interval).await;
            let now = chrono::Utc::now().timestamp_millis();
            match feed.next_message(now) {
                Some(message) => {
                    tracing::debug!(id = %message.id, remaining = feed.remaining(), "feed message");
                    messages.write().push(message);
                }
                None => {
                    tracing::info!("scripted feed finished");
                    break;
                }
            }
        }
    });

    let count = messages.read().len();
    let open = chat_open();

    rsx! {
        style { {GLOBAL_STYLES} }
        style { {TRANSCRIPT_STYLES} }
        main { class: "room",
            header { class: "room-header",
                span { class: "room-live", "live" }
                h1 { class: "room-title", "Bells of Eldoria" }
                span { class: "room-count", "{count} messages" }
            }

            ChatTranscript {
                hidden: !open,
                messages: messages(),
                class: "room-chat",
                id: "transcript",
            }

            footer { class: "room-footer",
                button {
                    class: "btn-toggle",
                    "aria-pressed": "{open}",
                    "aria-controls": "transcript",
                    onclick: move |_| chat_open.set(!open),
                    if open { "Hide chat" } else { "Show chat" }
                }
            }
        }
    }
}
