//! A single transcript message.

use leptos::prelude::*;

use crate::util::format::Inline;
use crate::util::message_view::MessageView;
use crate::util::sources::CITATION_LABEL;

/// Avatar, formatted body, and optional citation line for one turn.
#[component]
pub fn MessageBubble(message: MessageView) -> impl IntoView {
    let MessageView { sender, avatar, body, citation } = message;
    let class = format!("message {}-message", sender.css_prefix());

    view! {
        <div class=class>
            <div class="message-avatar">{avatar}</div>
            <div class="message-content">
                <p>{render_inlines(body)}</p>
                {citation.map(|list| view! { <div class="sources">{format!("{CITATION_LABEL}{list}")}</div> })}
            </div>
        </div>
    }
}

fn render_inlines(nodes: Vec<Inline>) -> Vec<AnyView> {
    nodes.into_iter().map(render_inline).collect()
}

fn render_inline(node: Inline) -> AnyView {
    match node {
        Inline::Text(text) => text.into_any(),
        Inline::LineBreak => view! { <br/> }.into_any(),
        Inline::Strong(children) => view! { <strong>{render_inlines(children)}</strong> }.into_any(),
        Inline::Emphasis(children) => view! { <em>{render_inlines(children)}</em> }.into_any(),
        Inline::Code(children) => view! { <code>{render_inlines(children)}</code> }.into_any(),
    }
}
