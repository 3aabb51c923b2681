//! Chat panel hosting the widget's DOM anchors.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders the five anchors the widget drives (`chatMessages`,
//! `messageInput`, `sendButton`, `chatForm`, `loadingIndicator`) and builds
//! the one [`ChatWidget`] instance for this page from a signal-backed
//! surface and the HTTP query service.

#[cfg(feature = "hydrate")]
use std::time::Duration;

use leptos::prelude::*;

use crate::components::message_bubble::MessageBubble;
use crate::components::sample_questions::SampleQuestions;
use crate::net::api::HttpQueryService;
use crate::state::chat::{ConversationTurn, Transcript, WidgetState};
use crate::util::message_view::message_view;
use crate::widget::ChatWidget;
use crate::widget::config::WidgetConfig;
use crate::widget::surface::WidgetSurface;

/// [`WidgetSurface`] backed by Leptos signals and, in the browser, node refs.
#[derive(Clone, Copy)]
pub struct SignalSurface {
    state: RwSignal<WidgetState>,
    transcript: RwSignal<Transcript>,
    #[cfg(feature = "hydrate")]
    dom: DomHandles,
}

/// Elements the surface reaches into directly. Browser-only.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy)]
struct DomHandles {
    input: NodeRef<leptos::html::Textarea>,
    messages: NodeRef<leptos::html::Div>,
    scroll_delay: Duration,
}

impl WidgetSurface for SignalSurface {
    fn input_value(&self) -> String {
        self.state.with_untracked(|s| s.input_value.clone())
    }

    fn set_input(&self, text: &str) {
        self.state.update(|s| text.clone_into(&mut s.input_value));
    }

    fn is_loading(&self) -> bool {
        self.state.with_untracked(|s| s.is_loading)
    }

    fn set_loading(&self, active: bool) {
        self.state.update(|s| s.is_loading = active);
    }

    fn focus_input(&self) {
        #[cfg(feature = "hydrate")]
        {
            // `disabled` is re-rendered on a later tick and focusing a disabled
            // textarea is a no-op, so focus from a timer task instead.
            let (state, input_ref) = (self.state, self.dom.input);
            gloo_timers::callback::Timeout::new(0, move || {
                if state.with_untracked(|s| s.is_loading) {
                    return;
                }
                if let Some(input) = input_ref.get_untracked() {
                    input.set_disabled(false);
                    if let Err(err) = input.focus() {
                        log::warn!("input focus failed: {err:?}");
                    }
                }
            })
            .forget();
        }
    }

    fn append_turn(&self, turn: ConversationTurn) {
        self.transcript.update(|t| t.push(turn));
    }

    fn scroll_to_bottom(&self) {
        #[cfg(feature = "hydrate")]
        {
            let messages_ref = self.dom.messages;
            let delay_ms = u32::try_from(self.dom.scroll_delay.as_millis()).unwrap_or(u32::MAX);
            gloo_timers::callback::Timeout::new(delay_ms, move || {
                if let Some(el) = messages_ref.get_untracked() {
                    el.set_scroll_top(el.scroll_height());
                }
            })
            .forget();
        }
    }

    fn is_online(&self) -> bool {
        #[cfg(feature = "hydrate")]
        {
            web_sys::window().map_or(true, |w| w.navigator().on_line())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            true
        }
    }
}

/// Transcript, busy indicator, and input form for the query assistant.
#[component]
pub fn ChatPanel() -> impl IntoView {
    let config = use_context::<WidgetConfig>().unwrap_or_default();

    let state = RwSignal::new(WidgetState::default());
    let transcript = RwSignal::new(Transcript::default());
    let input_ref = NodeRef::<leptos::html::Textarea>::new();
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    let surface = SignalSurface {
        state,
        transcript,
        #[cfg(feature = "hydrate")]
        dom: DomHandles { input: input_ref, messages: messages_ref, scroll_delay: config.scroll_delay },
    };
    let widget = StoredValue::new(ChatWidget::new(surface, HttpQueryService::from_config(&config)));
    let samples = widget.with_value(|w| w.present_samples());

    Effect::new(move || {
        surface.focus_input();
        surface.scroll_to_bottom();
    });

    let send = move || {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let widget = widget.get_value();
            let typed = widget.surface().input_value();
            let outcome = widget.submit(&typed).await;
            log::debug!("submit settled: {outcome:?}");
        });
    };

    let on_pick = Callback::new(move |question: &'static str| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let outcome = widget.get_value().ask_sample(question).await;
            log::debug!("sample settled: {outcome:?}");
        });
        #[cfg(not(feature = "hydrate"))]
        log::debug!("sample {question:?} ignored during server rendering");
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        send();
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            send();
        }
    };

    let is_loading = move || state.with(|s| s.is_loading);

    view! {
        <div class="chat-container">
            <div id="chatMessages" class="chat-messages" node_ref=messages_ref>
                <SampleQuestions samples=samples on_pick=on_pick/>
                <For
                    each=move || transcript.with(Transcript::indexed)
                    key=|(index, _)| *index
                    children=|(_, turn)| view! { <MessageBubble message=message_view(&turn)/> }
                />
            </div>

            <div
                id="loadingIndicator"
                class="loading-indicator"
                style:display=move || if is_loading() { "flex" } else { "none" }
            >
                <div class="message-avatar">"🤖"</div>
                <div class="typing-indicator">
                    <span></span>
                    <span></span>
                    <span></span>
                </div>
            </div>

            <form id="chatForm" class="chat-form" on:submit=on_submit>
                <textarea
                    id="messageInput"
                    class="message-input"
                    rows="1"
                    placeholder="Ask about drinkware, outlets, or opening hours..."
                    node_ref=input_ref
                    disabled=is_loading
                    prop:value=move || state.with(|s| s.input_value.clone())
                    on:input=move |ev| state.update(|s| s.input_value = event_target_value(&ev))
                    on:keydown=on_keydown
                ></textarea>
                <button id="sendButton" type="submit" class="btn btn--primary send-button" disabled=is_loading>
                    "Send"
                </button>
            </form>
        </div>
    }
}
