//! Title merge decision: pattern placeholder or structural merge.
//!
//! When either title carries the pattern directive, the merge defers: the
//! result is a placeholder element carrying the directive plus the two
//! extracted title values as `data-` attributes, substituted by a later
//! pass once the resolved values are in context. Without a directive the
//! titles go through the general structural merge like any other element.

use crate::context::StructuralMerger;
use crate::error::{DecorateError, DecorateResult};
use crate::merge::ReplaceMerger;
use crate::options::DecoratorOptions;
use lamina_dom::{escape_text, flatten_text, Element, Node};
use tracing::{debug, instrument};

/// Placeholder attribute holding the extracted content-page title value.
pub const CONTENT_TITLE_ATTRIBUTE: &str = "data-layout-content-title";

/// Placeholder attribute holding the extracted layout title value.
pub const DECORATOR_TITLE_ATTRIBUTE: &str = "data-layout-decorator-title";

pub struct TitleMergeStrategy {
    options: DecoratorOptions,
    merger: Box<dyn StructuralMerger>,
}

impl TitleMergeStrategy {
    pub fn new(options: DecoratorOptions) -> Self {
        Self::with_merger(options, Box::new(ReplaceMerger))
    }

    pub fn with_merger(options: DecoratorOptions, merger: Box<dyn StructuralMerger>) -> Self {
        Self { options, merger }
    }

    /// Merge the layout's title element with the content page's.
    ///
    /// Inputs are only read; the returned tree is freshly allocated (or
    /// produced by the injected merger, which carries the same
    /// non-mutation obligation).
    #[instrument(skip(self, target_title, source_title))]
    pub fn decorate(&self, target_title: &Node, source_title: &Node) -> DecorateResult<Node> {
        let target = self.expect_title(target_title)?;
        let source = self.expect_title(source_title)?;

        // Content overrides layout: the source directive wins.
        let directive = source
            .attr(&self.options.pattern_attribute)
            .or_else(|| target.attr(&self.options.pattern_attribute));

        let Some(pattern) = directive else {
            debug!("no title pattern directive; delegating to structural merge");
            return Ok(self.merger.merge(target_title, source_title));
        };

        debug!(pattern = %pattern, "deferring title substitution to a placeholder");

        let content_value = self.extract_title_value(source);
        let layout_value = self.extract_title_value(target);

        let mut placeholder = Element::new(&self.options.title_tag);
        placeholder.set_attr(&self.options.pattern_attribute, pattern);
        if let Some(value) = content_value {
            placeholder.set_attr(CONTENT_TITLE_ATTRIBUTE, value);
        }
        if let Some(value) = layout_value {
            placeholder.set_attr(DECORATOR_TITLE_ATTRIBUTE, value);
        }

        Ok(Node::Element(placeholder))
    }

    fn expect_title<'a>(&self, node: &'a Node) -> DecorateResult<&'a Element> {
        match node {
            Node::Element(element) if element.tag == self.options.title_tag => Ok(element),
            Node::Element(element) => Err(DecorateError::not_a_title(
                &element.tag,
                &self.options.title_tag,
            )),
            Node::Text { .. } => Err(DecorateError::not_a_title("#text", &self.options.title_tag)),
            Node::Fragment { .. } => Err(DecorateError::not_a_title(
                "#fragment",
                &self.options.title_tag,
            )),
        }
    }

    /// Extract a comparable title value from a title element: the
    /// evaluated-text attribute when present, otherwise a quoted,
    /// escaped literal synthesized from the element's inline content.
    fn extract_title_value(&self, element: &Element) -> Option<String> {
        if let Some(value) = element.attr(&self.options.text_attribute) {
            return Some(value.to_string());
        }
        inline_content_text(element).map(|text| format!("'{}'", escape_text(&text)))
    }
}

/// Inline title content under the host's node layout: the first child
/// carries processor attributes and the last child is wrapper padding, so
/// meaningful content is a second child in between, present only when
/// the element has more than two children.
fn inline_content_text(element: &Element) -> Option<String> {
    if element.children.len() <= 2 {
        return None;
    }
    element.children.get(1).map(flatten_text)
}
