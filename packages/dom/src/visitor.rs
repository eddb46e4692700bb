use crate::node::{Element, Node};

/// Visitor pattern for traversing document trees immutably
///
/// Default implementations walk the entire tree; override specific
/// visit_* methods to act on the nodes you care about. There is no
/// mutable counterpart: trees are persistent, transforms allocate.
pub trait Visitor: Sized {
    fn visit_node(&mut self, node: &Node) {
        walk_node(self, node);
    }

    fn visit_element(&mut self, element: &Element) {
        walk_element(self, element);
    }

    fn visit_text(&mut self, _content: &str) {
        // Leaf node, no children to walk
    }
}

pub fn walk_node<V: Visitor>(visitor: &mut V, node: &Node) {
    match node {
        Node::Element(element) => visitor.visit_element(element),
        Node::Text { content } => visitor.visit_text(content),
        Node::Fragment { children } => {
            for child in children {
                visitor.visit_node(child);
            }
        }
    }
}

pub fn walk_element<V: Visitor>(visitor: &mut V, element: &Element) {
    for child in &element.children {
        visitor.visit_node(child);
    }
}
