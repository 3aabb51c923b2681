//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure functions that turn transcript data into render trees and failure
//! causes into user-facing text. Nothing here touches the DOM.

pub mod format;
pub mod message_view;
pub mod notice;
pub mod sources;
