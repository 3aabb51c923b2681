//! Landing page: a header over the chat panel.

use leptos::prelude::*;

use crate::components::chat_panel::ChatPanel;

#[component]
pub fn ChatPage() -> impl IntoView {
    view! {
        <div class="chat-page">
            <header class="chat-header">
                <h1>"ZUS Coffee Assistant"</h1>
                <p>"Ask about drinkware, outlet locations, and opening hours."</p>
            </header>
            <ChatPanel/>
        </div>
    }
}
