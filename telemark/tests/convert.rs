use serde_json::json;

use telemark::markdown_to_nodes;
use telemark::node::{Node, Tag};

fn convert(source: &str) -> Vec<Node> {
    markdown_to_nodes(source)
}

fn text(s: &str) -> Node {
    Node::text(s)
}

fn element(tag: Tag, children: Vec<Node>) -> Node {
    Node::element(tag, children)
}

fn paragraph(children: Vec<Node>) -> Node {
    element(Tag::P, children)
}

#[test]
fn heading_levels_collapse_to_two_ranks() {
    assert_eq!(convert("### A"), vec![element(Tag::H4, vec![text("A")])]);
    assert_eq!(convert("## A"), vec![element(Tag::H3, vec![text("A")])]);
    assert_eq!(convert("# A"), vec![element(Tag::H3, vec![text("A")])]);
}

#[test]
fn heading_needs_marker_space_and_text() {
    assert_eq!(convert("#A"), vec![paragraph(vec![text("#A")])]);
    assert_eq!(convert("#### A"), vec![paragraph(vec![text("#### A")])]);
}

#[test]
fn bare_heading_marker_becomes_a_paragraph() {
    assert_eq!(convert("# "), vec![paragraph(vec![text("# ")])]);
}

#[test]
fn heading_text_is_inline_parsed() {
    assert_eq!(
        convert("## **B** rest"),
        vec![element(
            Tag::H3,
            vec![element(Tag::Strong, vec![text("B")]), text(" rest")],
        )]
    );
}

#[test]
fn code_block_content_is_verbatim() {
    assert_eq!(
        convert("```\n*not emphasis*\n```"),
        vec![element(Tag::Pre, vec![text("*not emphasis*")])]
    );
}

#[test]
fn unterminated_code_block_swallows_the_rest() {
    assert_eq!(
        convert("```\nline1\n# not a heading"),
        vec![element(Tag::Pre, vec![text("line1\n# not a heading")])]
    );
}

#[test]
fn empty_code_block_emits_nothing() {
    assert_eq!(convert("```\n```"), vec![]);
}

#[test]
fn fence_with_language_tag_still_opens_a_block() {
    assert_eq!(
        convert("```rust\nfn main() {}\n```"),
        vec![element(Tag::Pre, vec![text("fn main() {}")])]
    );
}

#[test]
fn blank_lines_separate_blocks() {
    assert_eq!(
        convert("one\n\ntwo"),
        vec![paragraph(vec![text("one")]), paragraph(vec![text("two")])]
    );
}

#[test]
fn multi_line_paragraph_keeps_explicit_breaks() {
    assert_eq!(
        convert("line1\nline2"),
        vec![paragraph(vec![
            text("line1"),
            Node::line_break(),
            text("line2"),
        ])]
    );
}

#[test]
fn paragraph_stops_at_heading_and_fence() {
    assert_eq!(
        convert("para\n## Head\npara2\n```\ncode\n```"),
        vec![
            paragraph(vec![text("para")]),
            element(Tag::H3, vec![text("Head")]),
            paragraph(vec![text("para2")]),
            element(Tag::Pre, vec![text("code")]),
        ]
    );
}

#[test]
fn empty_and_whitespace_inputs_produce_no_blocks() {
    assert_eq!(convert(""), vec![]);
    assert_eq!(convert("\n\n  \n"), vec![]);
}

#[test]
fn plain_paragraph_round_trips_as_one_leaf() {
    assert_eq!(convert("just words"), vec![paragraph(vec![text("just words")])]);
}

#[test]
fn strong_with_both_marker_styles() {
    let expected = vec![paragraph(vec![element(Tag::Strong, vec![text("bold")])])];
    assert_eq!(convert("**bold**"), expected);
    assert_eq!(convert("__bold__"), expected);
}

#[test]
fn emphasis_with_both_marker_styles() {
    let expected = vec![paragraph(vec![element(Tag::Em, vec![text("it")])])];
    assert_eq!(convert("*it*"), expected);
    assert_eq!(convert("_it_"), expected);
}

#[test]
fn strong_wins_over_emphasis_on_the_same_opener() {
    assert_eq!(
        convert("**a** *b*"),
        vec![paragraph(vec![
            element(Tag::Strong, vec![text("a")]),
            text(" "),
            element(Tag::Em, vec![text("b")]),
        ])]
    );
}

#[test]
fn inline_code_span() {
    assert_eq!(
        convert("run `cargo test` now"),
        vec![paragraph(vec![
            text("run "),
            element(Tag::Code, vec![text("cargo test")]),
            text(" now"),
        ])]
    );
}

#[test]
fn well_formed_link_carries_href() {
    assert_eq!(
        convert("[x](http://y)"),
        vec![paragraph(vec![Node::link("http://y", "x")])]
    );
}

#[test]
fn link_missing_closing_paren_falls_back_to_text() {
    assert_eq!(convert("[x](y"), vec![paragraph(vec![text("[x](y")])]);
}

#[test]
fn unclosed_markers_are_literal_text() {
    assert_eq!(convert("**abc"), vec![paragraph(vec![text("**abc")])]);
    assert_eq!(convert("`abc"), vec![paragraph(vec![text("`abc")])]);
    assert_eq!(convert("a * b"), vec![paragraph(vec![text("a * b")])]);
}

#[test]
fn doubled_closer_rejects_emphasis() {
    // The first closer found after the opener is itself followed by a
    // marker, which fails the whole match; everything is literal.
    assert_eq!(convert("*a**"), vec![paragraph(vec![text("*a**")])]);
}

#[test]
fn empty_strong_marker_pair() {
    assert_eq!(
        convert("****"),
        vec![paragraph(vec![element(Tag::Strong, vec![text("")])])]
    );
}

#[test]
fn tripled_asterisks_parse_as_strong_plus_stray_marker() {
    assert_eq!(
        convert("***text***"),
        vec![paragraph(vec![
            element(Tag::Strong, vec![text("*text")]),
            text("*"),
        ])]
    );
}

#[test]
fn adjacent_markers_after_strong_still_parse() {
    assert_eq!(
        convert("**a***b*"),
        vec![paragraph(vec![
            element(Tag::Strong, vec![text("a")]),
            element(Tag::Em, vec![text("b")]),
        ])]
    );
}

#[test]
fn link_label_is_not_rescanned_for_emphasis() {
    assert_eq!(
        convert("[**not bold**](u)"),
        vec![paragraph(vec![Node::link("u", "**not bold**")])]
    );
}

#[test]
fn tokenizer_always_advances_on_stray_specials() {
    use telemark::convert::inline::tokenize;
    assert_eq!(tokenize("*"), vec![text("*")]);
    assert_eq!(tokenize("_"), vec![text("_")]);
    assert_eq!(tokenize("["), vec![text("[")]);
    assert_eq!(tokenize("`"), vec![text("`")]);
}

#[test]
fn tokenize_empty_input_yields_one_empty_string() {
    assert_eq!(telemark::convert::inline::tokenize(""), vec![text("")]);
}

#[test]
fn serialized_shape_matches_the_publishing_api() {
    let nodes = convert("## T\n\na [x](u)\nb");
    let value = serde_json::to_value(&nodes).expect("serialization failed");
    assert_eq!(
        value,
        json!([
            {"tag": "h3", "children": ["T"]},
            {"tag": "p", "children": [
                "a ",
                {"tag": "a", "attrs": {"href": "u"}, "children": ["x"]},
                {"tag": "br"},
                "b",
            ]},
        ])
    );
}

#[test]
fn empty_block_text_serializes_as_single_empty_string() {
    let node = Node::element(Tag::P, telemark::convert::inline::tokenize(""));
    let value = serde_json::to_value(&node).expect("serialization failed");
    assert_eq!(value, json!({"tag": "p", "children": [""]}));
}

#[test]
fn line_break_serializes_without_a_children_key() {
    let value = serde_json::to_value(Node::line_break()).expect("serialization failed");
    assert_eq!(value, json!({"tag": "br"}));
}
