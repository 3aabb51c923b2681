//! Conversation transcript and widget input state.
//!
//! DESIGN
//! ======
//! Turns are immutable once created and the transcript only grows, so the
//! rendered list can key rows by position. `WidgetState` holds the two pieces
//! of transient UI state the widget owns: the input text and the busy flag.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

/// Author of a transcript turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    /// Avatar glyph shown next to the turn.
    pub fn avatar(self) -> &'static str {
        match self {
            Self::User => "👤",
            Self::Bot => "🤖",
        }
    }

    /// CSS class prefix, producing `user-message` / `bot-message`.
    pub fn css_prefix(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Bot => "bot",
        }
    }
}

/// A single message in the visible transcript.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConversationTurn {
    pub sender: Sender,
    pub content: String,
    pub sources: Option<Vec<String>>,
}

impl ConversationTurn {
    /// A turn authored by the user.
    pub fn user(content: impl Into<String>) -> Self {
        Self { sender: Sender::User, content: content.into(), sources: None }
    }

    /// A turn authored by the bot, without citations.
    pub fn bot(content: impl Into<String>) -> Self {
        Self { sender: Sender::Bot, content: content.into(), sources: None }
    }

    /// Attach the citations returned alongside an answer.
    #[must_use]
    pub fn with_sources(mut self, sources: Option<Vec<String>>) -> Self {
        self.sources = sources;
        self
    }
}

/// Ordered, append-only sequence of turns.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Transcript {
    turns: Vec<ConversationTurn>,
}

impl Transcript {
    pub fn push(&mut self, turn: ConversationTurn) {
        self.turns.push(turn);
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn turns(&self) -> &[ConversationTurn] {
        &self.turns
    }

    /// Turns paired with their position, for keyed list rendering.
    pub fn indexed(&self) -> Vec<(usize, ConversationTurn)> {
        self.turns.iter().cloned().enumerate().collect()
    }
}

/// Transient state owned by the chat widget.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WidgetState {
    pub input_value: String,
    pub is_loading: bool,
}
