//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The widget has a single domain: the conversation. `chat` holds the turn
//! model, the append-only transcript, and the transient input/busy state.

pub mod chat;
