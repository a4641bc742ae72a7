//! Property-based tests for the transcript view model
//!
//! Uses proptest to check that the rendered entries always mirror the
//! supplied message records.

use huddle_core::motion::{StaggerDirection, Transition};
use huddle_core::{ChatMessage, Locale, MessageOrigin, Motion, Participant, Presence, TranscriptView};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

/// Generate a sender descriptor, sometimes missing
fn sender_strategy() -> impl Strategy<Value = Option<Participant>> {
    prop::option::weighted(
        0.9,
        ("[a-z]{1,12}", any::<bool>(), prop::option::of("[A-Za-z ]{1,20}")).prop_map(
            |(identity, is_local, name)| Participant {
                identity,
                name,
                is_local,
            },
        ),
    )
}

/// Generate a single message record
fn message_strategy() -> impl Strategy<Value = ChatMessage> {
    (
        "[a-zA-Z0-9]{1,16}",
        0i64..4_000_000_000_000,
        prop::option::of(0i64..4_000_000_000_000),
        sender_strategy(),
        ".{0,200}",
    )
        .prop_map(|(id, timestamp, edit_timestamp, from, message)| ChatMessage {
            id,
            timestamp,
            edit_timestamp,
            from,
            message,
        })
}

/// Generate an ordered transcript
fn transcript_strategy(max: usize) -> impl Strategy<Value = Vec<ChatMessage>> {
    prop::collection::vec(message_strategy(), 0..max)
}

fn presence_strategy() -> impl Strategy<Value = Presence> {
    prop_oneof![
        Just(Presence::Hidden),
        Just(Presence::Entering),
        Just(Presence::Visible),
        Just(Presence::Exiting),
    ]
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Hidden transcripts render nothing regardless of content
    #[test]
    fn hidden_renders_nothing(messages in transcript_strategy(30)) {
        let view = TranscriptView::build(true, &messages, &Locale::fallback(), &Motion::default());
        prop_assert!(view.is_none());
    }

    /// Visible transcripts render one entry per message, in order
    #[test]
    fn visible_renders_every_message_in_order(messages in transcript_strategy(30)) {
        let view = TranscriptView::build(false, &messages, &Locale::fallback(), &Motion::default())
            .expect("visible transcript is mounted");
        prop_assert_eq!(view.len(), messages.len());
        for (entry, msg) in view.entries.iter().zip(&messages) {
            prop_assert_eq!(&entry.id, &msg.id);
            prop_assert_eq!(entry.timestamp, msg.timestamp);
            prop_assert_eq!(&entry.message, &msg.message);
        }
    }

    /// Edited iff an edit timestamp is present
    #[test]
    fn edited_iff_edit_timestamp(messages in transcript_strategy(30)) {
        let view = TranscriptView::build(false, &messages, &Locale::fallback(), &Motion::default())
            .expect("visible transcript is mounted");
        for (entry, msg) in view.entries.iter().zip(&messages) {
            prop_assert_eq!(entry.edited, msg.edit_timestamp.is_some());
        }
    }

    /// Local iff the sender descriptor flags it local
    #[test]
    fn local_iff_sender_flag(messages in transcript_strategy(30)) {
        let view = TranscriptView::build(false, &messages, &Locale::fallback(), &Motion::default())
            .expect("visible transcript is mounted");
        for (entry, msg) in view.entries.iter().zip(&messages) {
            let flagged_local = msg.from.as_ref().is_some_and(|p| p.is_local);
            prop_assert_eq!(entry.origin == MessageOrigin::Local, flagged_local);
        }
    }

    /// Mounted exactly when presence says so, for any presence
    #[test]
    fn mounted_iff_presence_mounted(
        presence in presence_strategy(),
        messages in transcript_strategy(10),
    ) {
        let view = TranscriptView::for_presence(
            presence, &messages, &Locale::fallback(), &Motion::default(),
        );
        prop_assert_eq!(view.is_some(), presence.is_mounted());
    }

    /// Every entry carries the transcript's locale
    #[test]
    fn entries_share_locale(
        raw in prop::option::of("[a-z]{2}_[A-Z]{2}"),
        messages in transcript_strategy(10),
    ) {
        let locale = Locale::from_raw(raw.as_deref());
        let view = TranscriptView::build(false, &messages, &locale, &Motion::default())
            .expect("visible transcript is mounted");
        prop_assert!(view.entries.iter().all(|e| e.locale == locale));
    }

    /// Stagger delays are monotone in the stagger direction and bounded by total()
    #[test]
    fn stagger_is_monotone(
        count in 1usize..50,
        stagger_ms in 0u64..500,
        delay_ms in 0u64..500,
        reverse in any::<bool>(),
    ) {
        let transition = Transition {
            delay: std::time::Duration::from_millis(delay_ms),
            stagger: std::time::Duration::from_millis(stagger_ms),
            direction: if reverse { StaggerDirection::Reverse } else { StaggerDirection::Forward },
            ..Transition::ENTER
        };
        let delays: Vec<_> = (0..count).map(|i| transition.child_delay(i, count)).collect();
        for pair in delays.windows(2) {
            if reverse {
                prop_assert!(pair[0] >= pair[1]);
            } else {
                prop_assert!(pair[0] <= pair[1]);
            }
        }
        for delay in &delays {
            prop_assert!(*delay + transition.duration <= transition.total(count));
        }
    }

    /// Any sequence of toggles followed by settling ends in a settled state
    /// that matches the last visibility flag
    #[test]
    fn presence_settles_to_last_flag(flags in prop::collection::vec(any::<bool>(), 1..20)) {
        let mut presence = Presence::initial(flags[0]);
        for hidden in &flags[1..] {
            presence = presence.toggle(*hidden);
        }
        presence = presence.settle();
        let last_hidden = *flags.last().expect("non-empty");
        prop_assert_eq!(presence.is_mounted(), !last_hidden);
        prop_assert!(!presence.is_animating());
    }
}
