pub mod convert;
pub mod node;
pub mod title;

pub use convert::markdown_to_nodes;
pub use node::{Attrs, Element, Node, Tag};
pub use title::split_title;
