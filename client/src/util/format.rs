//! Inline text formatting for message bodies.
//!
//! DESIGN
//! ======
//! This is a fixed four-rule substitution, not a markdown parser. Rules run
//! in order over the whole message:
//!
//! 1. `\n` becomes a line break
//! 2. `**text**` becomes strong
//! 3. `*text*` becomes emphasis
//! 4. `` `text` `` becomes inline code
//!
//! Each rule pairs the leftmost opening marker with the nearest closing
//! marker in plain text at the same nesting level. A span produced by a rule
//! is not rescanned by that rule, but later rules do look inside it.
//!
//! LIMITATIONS
//! ===========
//! Markers that overlap or cross an already-formatted span (for example
//! `**a *b** c*`) are left as literal text instead of resolving. Output is a
//! node tree; escaping happens when the tree is rendered as DOM text.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use std::collections::VecDeque;

/// A formatted fragment of a message body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Inline {
    Text(String),
    LineBreak,
    Strong(Vec<Inline>),
    Emphasis(Vec<Inline>),
    Code(Vec<Inline>),
}

impl Inline {
    fn map_children(self, f: impl FnOnce(Vec<Inline>) -> Vec<Inline>) -> Self {
        match self {
            Self::Strong(children) => Self::Strong(f(children)),
            Self::Emphasis(children) => Self::Emphasis(f(children)),
            Self::Code(children) => Self::Code(f(children)),
            leaf => leaf,
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Span {
    Strong,
    Emphasis,
    Code,
}

impl Span {
    fn marker(self) -> &'static str {
        match self {
            Self::Strong => "**",
            Self::Emphasis => "*",
            Self::Code => "`",
        }
    }

    fn wrap(self, children: Vec<Inline>) -> Inline {
        match self {
            Self::Strong => Inline::Strong(children),
            Self::Emphasis => Inline::Emphasis(children),
            Self::Code => Inline::Code(children),
        }
    }
}

/// Apply the four inline rules to a raw message.
pub fn format_message(message: &str) -> Vec<Inline> {
    [Span::Strong, Span::Emphasis, Span::Code]
        .into_iter()
        .fold(split_line_breaks(message), apply_span)
}

fn split_line_breaks(message: &str) -> Vec<Inline> {
    let mut nodes = Vec::new();
    for (i, line) in message.split('\n').enumerate() {
        if i > 0 {
            nodes.push(Inline::LineBreak);
        }
        push_text(&mut nodes, line);
    }
    nodes
}

fn push_text(nodes: &mut Vec<Inline>, text: &str) {
    if !text.is_empty() {
        nodes.push(Inline::Text(text.to_owned()));
    }
}

fn apply_span(nodes: Vec<Inline>, span: Span) -> Vec<Inline> {
    let marker = span.marker();
    let mut pending: VecDeque<Inline> = nodes.into();
    let mut out = Vec::new();

    while let Some(node) = pending.pop_front() {
        let text = match node {
            Inline::Text(text) => text,
            Inline::LineBreak => {
                out.push(Inline::LineBreak);
                continue;
            }
            element => {
                out.push(element.map_children(|children| apply_span(children, span)));
                continue;
            }
        };

        let Some(open) = text.find(marker) else {
            out.push(Inline::Text(text));
            continue;
        };
        let before = &text[..open];
        let rest = &text[open + marker.len()..];

        // Closing marker inside the same run of text.
        if let Some(close) = rest.find(marker) {
            push_text(&mut out, before);
            let mut inner = Vec::new();
            push_text(&mut inner, &rest[..close]);
            out.push(span.wrap(inner));
            push_front_text(&mut pending, &rest[close + marker.len()..]);
            continue;
        }

        // Closing marker in a later run; everything in between moves inside.
        let Some((index, close)) = find_close(&pending, marker) else {
            out.push(Inline::Text(text));
            continue;
        };
        push_text(&mut out, before);
        let mut inner = Vec::new();
        push_text(&mut inner, rest);
        inner.extend(pending.drain(..index));
        if let Some(Inline::Text(closing)) = pending.pop_front() {
            push_text(&mut inner, &closing[..close]);
            push_front_text(&mut pending, &closing[close + marker.len()..]);
        }
        out.push(span.wrap(inner));
    }

    out
}

fn push_front_text(pending: &mut VecDeque<Inline>, text: &str) {
    if !text.is_empty() {
        pending.push_front(Inline::Text(text.to_owned()));
    }
}

/// Position of the first closing marker among plain-text siblings.
fn find_close(pending: &VecDeque<Inline>, marker: &str) -> Option<(usize, usize)> {
    pending.iter().enumerate().find_map(|(index, node)| match node {
        Inline::Text(text) => text.find(marker).map(|pos| (index, pos)),
        _ => None,
    })
}
