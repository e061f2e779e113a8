use serde::{Deserialize, Serialize};

/// A single node in the published document tree.
///
/// Serializes to exactly the shape the telegra.ph API accepts: a bare
/// string for leaf text, or an object with `tag` and optional `attrs` /
/// `children` fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
    /// Leaf text run, used directly as a child without wrapping.
    Text(String),
    Element(Element),
}

/// A tagged element with an ordered child sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub tag: Tag,
    /// Present only on links.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attrs: Option<Attrs>,
    /// Absent only on line breaks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Node>>,
}

/// The fixed tag vocabulary the publishing endpoint accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tag {
    H3,
    H4,
    P,
    Pre,
    Strong,
    Em,
    Code,
    A,
    Br,
}

/// Element attributes. Only links carry any.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attrs {
    pub href: String,
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    pub fn element(tag: Tag, children: Vec<Node>) -> Self {
        Node::Element(Element {
            tag,
            attrs: None,
            children: Some(children),
        })
    }

    /// A link element: the only tag that carries attributes.
    pub fn link(href: impl Into<String>, label: impl Into<String>) -> Self {
        Node::Element(Element {
            tag: Tag::A,
            attrs: Some(Attrs { href: href.into() }),
            children: Some(vec![Node::Text(label.into())]),
        })
    }

    /// A line break. Line breaks carry no children at all.
    pub fn line_break() -> Self {
        Node::Element(Element {
            tag: Tag::Br,
            attrs: None,
            children: None,
        })
    }
}
