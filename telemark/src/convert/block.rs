use crate::convert::inline;
use crate::node::{Node, Tag};

/// Marker opening and closing a verbatim code block.
const FENCE: &str = "```";

/// Heading markers checked longest-first so `###` wins over `##`.
/// Level 3 maps to `h4`; levels 2 and 1 both map to `h3` — the target
/// document format has only two heading ranks.
const HEADINGS: [(&str, Tag); 3] = [("### ", Tag::H4), ("## ", Tag::H3), ("# ", Tag::H3)];

/// Split the source into an ordered sequence of block nodes.
///
/// The line cursor advances by one or more lines per iteration: blank
/// lines produce nothing, fences capture until the closing fence (or
/// end of input), headings consume exactly one line, and anything else
/// accumulates into a paragraph.
pub fn segment(source: &str) -> Vec<Node> {
    let lines: Vec<&str> = source.split('\n').collect();
    let mut nodes = Vec::new();
    let mut pos = 0;

    while pos < lines.len() {
        let line = lines[pos];

        if line.trim().is_empty() {
            pos += 1;
            continue;
        }

        // Fenced code block: content is verbatim, no inline parsing.
        if line.trim().starts_with(FENCE) {
            pos += 1;
            let start = pos;
            while pos < lines.len() && !lines[pos].trim().starts_with(FENCE) {
                pos += 1;
            }
            if pos > start {
                let code = lines[start..pos].join("\n");
                nodes.push(Node::element(Tag::Pre, vec![Node::text(code)]));
            }
            pos += 1; // closing fence
            continue;
        }

        if let Some(node) = heading(line) {
            nodes.push(node);
            pos += 1;
            continue;
        }

        // Paragraph: absorb lines until a blank, heading marker, or fence.
        let start = pos;
        while pos < lines.len() && continues_paragraph(lines[pos]) {
            pos += 1;
        }
        if pos > start {
            let text = lines[start..pos].join("\n");
            nodes.push(Node::element(Tag::P, inline::tokenize(&text)));
        } else {
            // A heading marker with no text after the space matches
            // neither the heading rule nor the continuation rule.
            // Consume it as a one-line paragraph so the scan advances.
            nodes.push(Node::element(Tag::P, inline::tokenize(line)));
            pos += 1;
        }
    }

    nodes
}

/// Match a raw line against the heading table: marker, a space, and at
/// least one character of text. The text is inline-parsed.
fn heading(line: &str) -> Option<Node> {
    for (marker, tag) in HEADINGS {
        if let Some(text) = line.strip_prefix(marker) {
            if !text.is_empty() {
                return Some(Node::element(tag, inline::tokenize(text)));
            }
        }
    }
    None
}

fn continues_paragraph(line: &str) -> bool {
    !line.trim().is_empty() && !starts_heading(line) && !line.trim().starts_with(FENCE)
}

/// A heading marker at the start of a raw line: one to three `#`
/// followed by a space. Text after the space is not required here; a
/// bare marker still ends the paragraph.
fn starts_heading(line: &str) -> bool {
    HEADINGS.iter().any(|(marker, _)| line.starts_with(marker))
}
