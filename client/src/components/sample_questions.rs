//! Clickable example questions shown at the top of the transcript.

use leptos::prelude::*;

use crate::state::chat::Sender;

/// Bot-styled bubble listing sample questions.
///
/// Clicking a question hands it to `on_pick`, which submits it exactly as if
/// it had been typed.
#[component]
pub fn SampleQuestions(samples: &'static [&'static str], on_pick: Callback<&'static str>) -> impl IntoView {
    view! {
        <div class="message bot-message">
            <div class="message-avatar">{Sender::Bot.avatar()}</div>
            <div class="message-content">
                <p>"Here are some things you can ask me:"</p>
                <div class="sample-questions">
                    {samples
                        .iter()
                        .map(|question| {
                            let question = *question;
                            view! {
                                <button type="button" class="sample-question" on:click=move |_| on_pick.run(question)>
                                    {question}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
