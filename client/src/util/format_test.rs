use super::*;

fn text(s: &str) -> Inline {
    Inline::Text(s.to_owned())
}

// =============================================================
// Individual rules
// =============================================================

#[test]
fn plain_text_is_single_node() {
    assert_eq!(format_message("just words"), vec![text("just words")]);
}

#[test]
fn empty_message_has_no_nodes() {
    assert!(format_message("").is_empty());
}

#[test]
fn newlines_become_line_breaks() {
    assert_eq!(
        format_message("one\ntwo\n\nthree"),
        vec![text("one"), Inline::LineBreak, text("two"), Inline::LineBreak, Inline::LineBreak, text("three")]
    );
}

#[test]
fn bold_italic_and_code_spans() {
    assert_eq!(
        format_message("**bold** and *italic* and `code`"),
        vec![
            Inline::Strong(vec![text("bold")]),
            text(" and "),
            Inline::Emphasis(vec![text("italic")]),
            text(" and "),
            Inline::Code(vec![text("code")]),
        ]
    );
}

#[test]
fn matching_is_non_greedy() {
    assert_eq!(
        format_message("*a* and *b*"),
        vec![Inline::Emphasis(vec![text("a")]), text(" and "), Inline::Emphasis(vec![text("b")])]
    );
}

#[test]
fn unmatched_marker_stays_literal() {
    assert_eq!(format_message("5 * 3 = 15"), vec![text("5 * 3 = 15")]);
    assert_eq!(format_message("*a*b*"), vec![Inline::Emphasis(vec![text("a")]), text("b*")]);
}

#[test]
fn empty_markers_produce_empty_span() {
    assert_eq!(format_message("****"), vec![Inline::Strong(vec![])]);
}

// =============================================================
// Interaction between rules
// =============================================================

#[test]
fn bold_spans_across_line_break() {
    assert_eq!(
        format_message("**a\nb**"),
        vec![Inline::Strong(vec![text("a"), Inline::LineBreak, text("b")])]
    );
}

#[test]
fn italic_inside_bold_is_formatted() {
    assert_eq!(
        format_message("**very *hot* latte**"),
        vec![Inline::Strong(vec![text("very "), Inline::Emphasis(vec![text("hot")]), text(" latte")])]
    );
}

#[test]
fn italic_wrapping_bold_is_formatted() {
    assert_eq!(
        format_message("*a **b** c*"),
        vec![Inline::Emphasis(vec![text("a "), Inline::Strong(vec![text("b")]), text(" c")])]
    );
}

#[test]
fn code_wraps_earlier_emphasis() {
    assert_eq!(
        format_message("`a*b*c`"),
        vec![Inline::Code(vec![text("a"), Inline::Emphasis(vec![text("b")]), text("c")])]
    );
}

#[test]
fn overlapping_markers_are_left_literal() {
    assert_eq!(
        format_message("**a *b** c*"),
        vec![Inline::Strong(vec![text("a *b")]), text(" c*")]
    );
}

#[test]
fn markup_characters_are_kept_as_text() {
    assert_eq!(format_message("<b>hi</b>"), vec![text("<b>hi</b>")]);
}
