use crate::context::StructuralMerger;
use lamina_dom::{Element, Node};

/// Minimal structural merger: source attributes layered over the target's,
/// source children replacing the target's when present.
///
/// Hosts with a richer merge model inject their own [`StructuralMerger`];
/// this one keeps the crate usable stand-alone and gives the non-pattern
/// title path a concrete fallback.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReplaceMerger;

impl StructuralMerger for ReplaceMerger {
    fn merge(&self, target: &Node, source: &Node) -> Node {
        let (Node::Element(target_el), Node::Element(source_el)) = (target, source) else {
            return source.clone();
        };

        let mut merged = Element::new(&target_el.tag);
        merged.attributes = target_el.attributes.clone();
        for (name, value) in &source_el.attributes {
            merged.set_attr(name, value);
        }
        merged.children = if source_el.children.is_empty() {
            target_el.children.clone()
        } else {
            source_el.children.clone()
        };

        Node::Element(merged)
    }
}
