//! The chat widget controller.
//!
//! DESIGN
//! ======
//! `ChatWidget` is an explicit instance built by the host from a
//! [`WidgetSurface`] (the page) and a [`QueryService`] (the network). It owns
//! no DOM and no transport, which keeps `submit` testable end to end.
//!
//! Per request the widget goes `Idle -> Sending -> Idle`. At most one query is
//! outstanding: a second `submit` while loading is rejected here, not only by
//! the disabled input. There is no cancellation and no retry.

pub mod config;
pub mod surface;


use crate::net::api::QueryService;
use crate::net::types::QueryRequest;
use crate::state::chat::ConversationTurn;
use crate::util::notice::FailureNotice;
use surface::{LoadingGuard, WidgetSurface};

/// Example questions offered before the user types anything.
pub const SAMPLE_QUESTIONS: &[&str] = &[
    "What drinkware products do you have?",
    "Where is the nearest ZUS outlet?",
    "What are the opening hours?",
    "Tell me about your tumblers",
];

/// What a call to [`ChatWidget::submit`] did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Input was empty after trimming; nothing happened.
    Ignored,
    /// A query was already outstanding; nothing happened.
    Busy,
    /// The service answered and the answer was appended.
    Answered,
    /// The query failed and this notice was appended instead.
    Failed(FailureNotice),
}

#[derive(Clone, Debug)]
pub struct ChatWidget<S, Q> {
    surface: S,
    service: Q,
}

impl<S: WidgetSurface, Q: QueryService> ChatWidget<S, Q> {
    pub fn new(surface: S, service: Q) -> Self {
        Self { surface, service }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Send `raw_text` to the query service and record both sides of the
    /// exchange in the transcript.
    pub async fn submit(&self, raw_text: &str) -> SubmitOutcome {
        let query = raw_text.trim();
        if query.is_empty() {
            return SubmitOutcome::Ignored;
        }
        if self.surface.is_loading() {
            log::debug!("submit ignored: a query is already outstanding");
            return SubmitOutcome::Busy;
        }

        self.surface.clear_input();
        let _loading = LoadingGuard::acquire(&self.surface);
        self.render(ConversationTurn::user(query));

        match self.service.query(&QueryRequest::new(query)).await {
            Ok(response) => {
                log::debug!("query answered with {} source(s)", response.sources.as_ref().map_or(0, Vec::len));
                self.render(ConversationTurn::bot(response.answer).with_sources(response.sources));
                SubmitOutcome::Answered
            }
            Err(err) => {
                log::error!("chat query failed: {err}");
                let notice = FailureNotice::classify(&err, self.surface.is_online());
                self.render(ConversationTurn::bot(notice.message()));
                SubmitOutcome::Failed(notice)
            }
        }
    }

    /// Append a turn to the transcript and bring it into view.
    pub fn render(&self, turn: ConversationTurn) {
        self.surface.append_turn(turn);
        self.surface.scroll_to_bottom();
    }

    pub fn toggle_loading(&self, active: bool) {
        self.surface.set_loading(active);
    }

    pub fn present_samples(&self) -> &'static [&'static str] {
        SAMPLE_QUESTIONS
    }

    /// Behave as if the user typed `question` and pressed send.
    pub async fn ask_sample(&self, question: &str) -> SubmitOutcome {
        if self.surface.is_loading() {
            return SubmitOutcome::Busy;
        }
        self.surface.set_input(question);
        let typed = self.surface.input_value();
        self.submit(&typed).await
    }
}
