use crate::node::Node;
use crate::visitor::{walk_node, Visitor};

struct TextCollector {
    buffer: String,
}

impl Visitor for TextCollector {
    fn visit_text(&mut self, content: &str) {
        self.buffer.push_str(content);
    }
}

/// Concatenate all text descendants of a tree in document order.
pub fn flatten_text(node: &Node) -> String {
    let mut collector = TextCollector {
        buffer: String::new(),
    };
    walk_node(&mut collector, node);
    collector.buffer
}
