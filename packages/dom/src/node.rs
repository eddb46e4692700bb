use serde::{Deserialize, Serialize};

/// Document tree node
///
/// Trees are persistent: consumers build new nodes instead of mutating
/// existing ones, so a node handed out by one pipeline stage can be shared
/// with the next without defensive copies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Node {
    /// Markup element
    Element(Element),

    /// Text node
    Text { content: String },

    /// Flat ordered sequence without a tag of its own
    Fragment { children: Vec<Node> },
}

/// Element with a tag, ordered attributes, and ordered children
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub tag: String,

    /// Attributes in first-occurrence order
    pub attributes: Vec<(String, String)>,

    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(attr_name, _)| attr_name == name)
            .map(|(_, value)| value.as_str())
    }

    /// Replaces an existing attribute's value in place, preserving its
    /// position; appends otherwise.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.attributes.push((name, value)),
        }
    }
}

impl Node {
    pub fn element(tag: impl Into<String>) -> Self {
        Node::Element(Element::new(tag))
    }

    pub fn text(content: impl Into<String>) -> Self {
        Node::Text {
            content: content.into(),
        }
    }

    pub fn fragment(children: Vec<Node>) -> Self {
        Node::Fragment { children }
    }

    /// Fragment with no children; the canonical empty result
    pub fn empty() -> Self {
        Node::Fragment {
            children: Vec::new(),
        }
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        if let Node::Element(ref mut element) = self {
            element.set_attr(name, value);
        }
        self
    }

    pub fn with_child(mut self, child: Node) -> Self {
        if let Node::Element(ref mut element) = self {
            element.children.push(child);
        }
        self
    }

    pub fn with_children(mut self, new_children: Vec<Node>) -> Self {
        if let Node::Element(ref mut element) = self {
            element.children.extend(new_children);
        }
        self
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            Node::Element(element) => Some(&element.tag),
            _ => None,
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        match self {
            Node::Element(element) => element.attr(name),
            _ => None,
        }
    }

    pub fn children(&self) -> &[Node] {
        match self {
            Node::Element(element) => &element.children,
            Node::Fragment { children } => children,
            Node::Text { .. } => &[],
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Node::Element(element) => element.children.is_empty(),
            Node::Fragment { children } => children.is_empty(),
            Node::Text { content } => content.is_empty(),
        }
    }
}
