//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the chat transcript and input form. `chat_panel` owns
//! the widget instance; the others are stateless views over its data.

pub mod chat_panel;
pub mod message_bubble;
pub mod sample_questions;
