//! Pure mapping from a transcript turn to its render tree.
//!
//! Kept separate from the DOM so formatting and citation rules can be tested
//! without mounting anything.

#[cfg(test)]
#[path = "message_view_test.rs"]
mod message_view_test;

use crate::state::chat::{ConversationTurn, Sender};
use crate::util::format::{Inline, format_message};
use crate::util::sources::citation_list;

/// Everything needed to draw one message bubble.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessageView {
    pub sender: Sender,
    pub avatar: &'static str,
    pub body: Vec<Inline>,
    /// Comma-separated citation list; `None` hides the sources line.
    pub citation: Option<String>,
}

/// Build the render tree for a turn.
pub fn message_view(turn: &ConversationTurn) -> MessageView {
    MessageView {
        sender: turn.sender,
        avatar: turn.sender.avatar(),
        body: format_message(&turn.content),
        citation: turn.sources.as_deref().and_then(citation_list),
    }
}
