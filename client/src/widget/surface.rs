//! The DOM-facing seam of the chat widget.
//!
//! DESIGN
//! ======
//! `ChatWidget` never touches the DOM directly. Everything it needs from the
//! page goes through [`WidgetSurface`]: the Leptos panel implements it with
//! signals and node refs, tests implement it with plain cells.
//!
//! Loading state is held by a [`LoadingGuard`]. Acquiring it disables input
//! and shows the busy indicator; dropping it restores both and refocuses the
//! input, on every exit path.

use crate::state::chat::ConversationTurn;

/// Page operations the widget depends on.
///
/// Methods take `&self`; implementations use interior mutability.
pub trait WidgetSurface {
    /// Current contents of the text input.
    fn input_value(&self) -> String;

    /// Replace the contents of the text input.
    fn set_input(&self, text: &str);

    fn clear_input(&self) {
        self.set_input("");
    }

    /// Whether a query is outstanding.
    fn is_loading(&self) -> bool;

    /// Disable or enable input and submit, and show or hide the busy indicator.
    fn set_loading(&self, active: bool);

    fn focus_input(&self);

    /// Append a turn to the visible transcript.
    fn append_turn(&self, turn: ConversationTurn);

    /// Scroll the message list to the newest turn after layout settles.
    fn scroll_to_bottom(&self);

    /// Local network connectivity as reported by the runtime.
    fn is_online(&self) -> bool {
        true
    }
}

impl<T: WidgetSurface + ?Sized> WidgetSurface for &T {
    fn input_value(&self) -> String {
        (**self).input_value()
    }

    fn set_input(&self, text: &str) {
        (**self).set_input(text);
    }

    fn clear_input(&self) {
        (**self).clear_input();
    }

    fn is_loading(&self) -> bool {
        (**self).is_loading()
    }

    fn set_loading(&self, active: bool) {
        (**self).set_loading(active);
    }

    fn focus_input(&self) {
        (**self).focus_input();
    }

    fn append_turn(&self, turn: ConversationTurn) {
        (**self).append_turn(turn);
    }

    fn scroll_to_bottom(&self) {
        (**self).scroll_to_bottom();
    }

    fn is_online(&self) -> bool {
        (**self).is_online()
    }
}

/// Scoped hold on the loading state.
#[must_use = "loading is released as soon as the guard is dropped"]
pub struct LoadingGuard<'a, S: WidgetSurface + ?Sized> {
    surface: &'a S,
}

impl<'a, S: WidgetSurface + ?Sized> LoadingGuard<'a, S> {
    pub fn acquire(surface: &'a S) -> Self {
        surface.set_loading(true);
        Self { surface }
    }
}

impl<S: WidgetSurface + ?Sized> Drop for LoadingGuard<'_, S> {
    fn drop(&mut self) {
        self.surface.set_loading(false);
        self.surface.focus_input();
    }
}
