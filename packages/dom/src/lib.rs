pub mod escape;
pub mod flatten;
pub mod node;
pub mod serialize;
pub mod visitor;

pub use escape::{decode_entities, escape_text};
pub use flatten::flatten_text;
pub use node::{Element, Node};
pub use serialize::to_html;
pub use visitor::{walk_element, walk_node, Visitor};
