//! Scripted message feed for the demo room.
//!
//! Stands in for the room's chat transport: a short game-master session
//! replayed one line at a time.

use huddle_core::{ChatMessage, Participant};

/// Who speaks a scripted line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Speaker {
    GameMaster,
    Player,
}

/// One line of the script.
#[derive(Clone, Copy, Debug)]
pub struct ScriptLine {
    pub speaker: Speaker,
    pub text: &'static str,
    /// Show the line as edited after sending
    pub edited: bool,
}

const fn gm(text: &'static str) -> ScriptLine {
    ScriptLine {
        speaker: Speaker::GameMaster,
        text,
        edited: false,
    }
}

const fn player(text: &'static str) -> ScriptLine {
    ScriptLine {
        speaker: Speaker::Player,
        text,
        edited: false,
    }
}

/// The Eldoria opening, from the bells to the forest edge.
pub const ELDORIA: &[ScriptLine] = &[
    gm("The town bells ring wildly in the sleepy Kingdom of Eldoria. A royal crier shouts: \
        \"A baby dragon has gone missing!\""),
    gm("You stand by the cobblestone gate. Left is the market square, ahead a forest path \
        glowing with tiny claw-prints, right the royal courtyard. What do you do?"),
    player("I head to the market to gather rumors."),
    gm("The market smells of fresh bread and metalwork. A stable-hand whispers: \"That baby \
        dragon loves sweet rolls and warm milk.\" What do you do?"),
    ScriptLine {
        speaker: Speaker::Player,
        text: "I take a few sweet rolls as dragon treats.",
        edited: true,
    },
    gm("Pockets full of pastries, you return to the gate. The glowing prints still lead toward \
        the forest. What do you do?"),
    player("Follow the tracks."),
    gm("Trees crowd together, their leaves whispering secrets. Somewhere deeper within you hear \
        a tiny, musical hiccup. What do you do?"),
];

/// Replays a script as chat messages.
pub struct ScriptedFeed {
    lines: &'static [ScriptLine],
    position: usize,
    game_master: Participant,
    player: Participant,
}

impl ScriptedFeed {
    pub fn new(lines: &'static [ScriptLine]) -> Self {
        Self {
            lines,
            position: 0,
            game_master: Participant::remote("game-master").with_name("Game Master"),
            player: Participant::local("player").with_name("You"),
        }
    }

    /// Next scripted message stamped with `now_ms`, or `None` once the script ends.
    pub fn next_message(&mut self, now_ms: i64) -> Option<ChatMessage> {
        let line = self.lines.get(self.position)?;
        self.position += 1;

        let from = match line.speaker {
            Speaker::GameMaster => self.game_master.clone(),
            Speaker::Player => self.player.clone(),
        };
        let message = ChatMessage::new(ulid::Ulid::new().to_string(), now_ms, from, line.text);
        Some(if line.edited {
            message.edited_at(now_ms)
        } else {
            message
        })
    }

    /// Lines not yet delivered.
    pub fn remaining(&self) -> usize {
        self.lines.len() - self.position
    }
}

impl Default for ScriptedFeed {
    fn default() -> Self {
        Self::new(ELDORIA)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn replays_script_in_order() {
        let mut feed = ScriptedFeed::default();
        let mut texts = Vec::new();
        while let Some(msg) = feed.next_message(1_000) {
            texts.push(msg.message);
        }
        let expected: Vec<_> = ELDORIA.iter().map(|l| l.text.to_string()).collect();
        assert_eq!(texts, expected);
        assert_eq!(feed.remaining(), 0);
        assert!(feed.next_message(2_000).is_none());
    }

    #[test]
    fn ids_are_unique() {
        let mut feed = ScriptedFeed::default();
        let ids: HashSet<_> = std::iter::from_fn(|| feed.next_message(0))
            .map(|m| m.id)
            .collect();
        assert_eq!(ids.len(), ELDORIA.len());
    }

    #[test]
    fn player_lines_are_local() {
        let mut feed = ScriptedFeed::default();
        for line in ELDORIA {
            let msg = feed.next_message(0).unwrap();
            assert_eq!(msg.origin().is_local(), line.speaker == Speaker::Player);
            assert_eq!(msg.is_edited(), line.edited);
        }
    }
}
