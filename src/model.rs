//! Core data model for the whiteboard mockup: tools, the static roster,
//! and the chat log reducer.

use std::rc::Rc;
use yew::Reducible;

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

/// Board background; the eraser paints with this color instead of erasing pixels.
pub const BACKGROUND_COLOR: &str = "#ffffff";

/// Delay before the fabricated peer reply lands.
pub const REPLY_DELAY_MS: u32 = 1_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tool {
    Pen,
    Eraser,
}

/// A participant in the static roster. `color` stands in for an avatar image
/// and is rendered as an initial-letter disc.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct User {
    pub id: u32,
    pub name: &'static str,
    pub color: &'static str,
}

/// Fixed set of "connected" users; no lifecycle, no presence feed.
pub const ROSTER: [User; 3] = [
    User { id: 1, name: "Alice", color: "#58a6ff" },
    User { id: 2, name: "Bob", color: "#2ea043" },
    User { id: 3, name: "Charlie", color: "#f0883e" },
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub author: String,
    pub text: String,
}

/// Insertion-ordered message log. Messages are never edited or removed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChatLog {
    pub messages: Vec<ChatMessage>,
}

#[derive(Clone, Debug)]
pub enum ChatAction {
    /// The local user submitted `text` (already sanitized).
    Local { text: String },
    /// A simulated peer echoes a submission back.
    Peer { author: &'static str, text: String },
}

impl Reducible for ChatLog {
    type Action = ChatAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut new = (*self).clone();
        match action {
            ChatAction::Local { text } => {
                new.messages.push(ChatMessage {
                    author: "You".to_string(),
                    text,
                });
            }
            ChatAction::Peer { author, text } => {
                new.messages.push(ChatMessage {
                    author: author.to_string(),
                    text: format!("Response to \"{text}\""),
                });
            }
        }
        Rc::new(new)
    }
}

/// Trims a draft message; whitespace-only drafts are rejected.
pub fn sanitize_message(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Maps a uniform sample in [0, 1) onto a roster entry. Out-of-range samples
/// clamp to the last user.
pub fn pick_peer(r: f64) -> &'static User {
    let idx = ((r * ROSTER.len() as f64).floor() as usize).min(ROSTER.len() - 1);
    &ROSTER[idx]
}
