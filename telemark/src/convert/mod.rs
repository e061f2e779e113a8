pub mod block;
pub mod inline;

use crate::node::Node;

/// Convert a markdown body into the flat, ordered block sequence the
/// publishing API expects. The document root is implicit: the result is
/// a list, not a wrapping node.
///
/// Conversion is total. Malformed markdown degrades into plain text or
/// differently-shaped blocks, never an error: an unterminated code
/// fence swallows the rest of the document, an unclosed inline marker
/// becomes literal text.
pub fn markdown_to_nodes(markdown: &str) -> Vec<Node> {
    block::segment(markdown)
}
