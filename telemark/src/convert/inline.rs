use crate::node::{Node, Tag};

/// Characters that terminate a plain text run.
const SPECIAL: [char; 5] = ['*', '_', '`', '[', '\n'];

/// One tokenizer rule: consume input at the cursor and return true, or
/// leave the scanner untouched and return false.
type Rule = fn(&mut Scanner<'_>) -> bool;

/// Rules in priority order, tried in sequence at each cursor position.
/// Double markers come before single so `**` is never misread as two
/// emphasis openers, and the plain-run rule last always matches,
/// guaranteeing forward progress.
const RULES: [Rule; 8] = [
    strong_asterisks,
    strong_underscores,
    em_asterisk,
    em_underscore,
    code_span,
    link,
    line_break,
    plain_run,
];

/// Tokenize one block's text into inline children.
///
/// Captured inner text of strong, emphasis, code spans and link labels
/// is raw — it is not re-scanned for nested constructs. Empty input
/// yields a single empty string, never an empty list.
pub fn tokenize(text: &str) -> Vec<Node> {
    let mut scanner = Scanner {
        text,
        pos: 0,
        nodes: Vec::new(),
    };
    while scanner.pos < scanner.text.len() {
        for rule in RULES {
            if rule(&mut scanner) {
                break;
            }
        }
    }
    if scanner.nodes.is_empty() {
        scanner.nodes.push(Node::text(""));
    }
    scanner.nodes
}

/// Cursor over one block's text plus the nodes emitted so far.
struct Scanner<'a> {
    text: &'a str,
    pos: usize,
    nodes: Vec<Node>,
}

impl<'a> Scanner<'a> {
    /// Unconsumed remainder of the text.
    fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }

    fn byte_at(&self, offset: usize) -> Option<u8> {
        self.rest().as_bytes().get(offset).copied()
    }

    /// Emit a literal run, merging into a preceding run so fallback
    /// characters read as one leaf string.
    fn push_text(&mut self, text: &str) {
        if let Some(Node::Text(prev)) = self.nodes.last_mut() {
            prev.push_str(text);
        } else {
            self.nodes.push(Node::text(text));
        }
    }
}

fn strong_asterisks(s: &mut Scanner<'_>) -> bool {
    double_marker(s, "**")
}

fn strong_underscores(s: &mut Scanner<'_>) -> bool {
    double_marker(s, "__")
}

/// `**text**` / `__text__`: closed by the next literal double marker.
/// No closer means no match; the opener falls through to plain text.
fn double_marker(s: &mut Scanner<'_>, marker: &str) -> bool {
    let rest = s.rest();
    if !rest.starts_with(marker) {
        return false;
    }
    let Some(close) = rest[marker.len()..].find(marker) else {
        return false;
    };
    let inner = &rest[marker.len()..marker.len() + close];
    s.nodes
        .push(Node::element(Tag::Strong, vec![Node::text(inner)]));
    s.pos += 2 * marker.len() + close;
    true
}

fn em_asterisk(s: &mut Scanner<'_>) -> bool {
    single_marker(s, b'*')
}

fn em_underscore(s: &mut Scanner<'_>) -> bool {
    single_marker(s, b'_')
}

/// `*text*` / `_text_`: the opener must not begin a double run, and the
/// first closer found after it must not either. A doubled closer fails
/// the whole match rather than searching further — only the character
/// immediately after the closer is ever checked.
fn single_marker(s: &mut Scanner<'_>, marker: u8) -> bool {
    if s.byte_at(0) != Some(marker) || s.byte_at(1) == Some(marker) {
        return false;
    }
    let rest = s.rest();
    let Some(close) = rest[1..].find(marker as char).map(|i| i + 1) else {
        return false;
    };
    if s.byte_at(close + 1) == Some(marker) {
        return false;
    }
    s.nodes
        .push(Node::element(Tag::Em, vec![Node::text(&rest[1..close])]));
    s.pos += close + 1;
    true
}

/// `` `text` ``: closed by the next backtick.
fn code_span(s: &mut Scanner<'_>) -> bool {
    let rest = s.rest();
    if !rest.starts_with('`') {
        return false;
    }
    let Some(close) = rest[1..].find('`').map(|i| i + 1) else {
        return false;
    };
    s.nodes
        .push(Node::element(Tag::Code, vec![Node::text(&rest[1..close])]));
    s.pos += close + 1;
    true
}

/// `[label](url)`: requires `]` immediately followed by `(` and a
/// closing `)`. Any missing piece fails the match and the `[` is
/// emitted as plain text by the fallback rule.
fn link(s: &mut Scanner<'_>) -> bool {
    let rest = s.rest();
    if !rest.starts_with('[') {
        return false;
    }
    let Some(close_bracket) = rest.find(']') else {
        return false;
    };
    if rest.as_bytes().get(close_bracket + 1) != Some(&b'(') {
        return false;
    }
    let url_start = close_bracket + 2;
    let Some(close_paren) = rest[url_start..].find(')').map(|i| i + url_start) else {
        return false;
    };
    let label = &rest[1..close_bracket];
    let href = &rest[url_start..close_paren];
    s.nodes.push(Node::link(href, label));
    s.pos += close_paren + 1;
    true
}

/// A literal newline becomes a `br` element; paragraph text keeps its
/// embedded line breaks as explicit nodes.
fn line_break(s: &mut Scanner<'_>) -> bool {
    if s.byte_at(0) != Some(b'\n') {
        return false;
    }
    s.nodes.push(Node::line_break());
    s.pos += 1;
    true
}

/// Collect characters up to the next special character or end of text.
/// When the cursor already sits on a special character that formed no
/// construct, that one character is consumed as literal text — the scan
/// must always advance.
fn plain_run(s: &mut Scanner<'_>) -> bool {
    let rest = s.rest();
    let mut end = rest.find(&SPECIAL[..]).unwrap_or(rest.len());
    if end == 0 {
        end = 1; // every special character is a single byte
    }
    s.push_text(&rest[..end]);
    s.pos += end;
    true
}
