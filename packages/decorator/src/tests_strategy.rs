/// Tests for the title merge strategy and its placeholder output
use crate::context::StructuralMerger;
use crate::error::DecorateError;
use crate::options::DecoratorOptions;
use crate::strategy::{TitleMergeStrategy, CONTENT_TITLE_ATTRIBUTE, DECORATOR_TITLE_ATTRIBUTE};
use lamina_dom::Node;
use std::cell::Cell;
use std::rc::Rc;

const PATTERN_ATTRIBUTE: &str = "deco:title-pattern";
const TEXT_ATTRIBUTE: &str = "deco:text";

fn strategy() -> TitleMergeStrategy {
    TitleMergeStrategy::new(DecoratorOptions::default())
}

/// Title element in the host layout: a directive-bearing first child,
/// optional inline content as second child, wrapper padding last.
fn title_with_inline_content(text: &str) -> Node {
    Node::element("title")
        .with_child(Node::element("span"))
        .with_child(Node::text(text))
        .with_child(Node::text(""))
}

#[test]
fn source_directive_wins_over_target() {
    let target = Node::element("title").with_attr(PATTERN_ATTRIBUTE, "$LAYOUT_TITLE");
    let source = Node::element("title").with_attr(PATTERN_ATTRIBUTE, "$CONTENT_TITLE");

    let result = strategy().decorate(&target, &source).unwrap();

    assert_eq!(result.attr(PATTERN_ATTRIBUTE), Some("$CONTENT_TITLE"));
}

#[test]
fn target_directive_applies_when_source_has_none() {
    let target = Node::element("title").with_attr(PATTERN_ATTRIBUTE, "$LAYOUT_TITLE+");
    let source = Node::element("title");

    let result = strategy().decorate(&target, &source).unwrap();

    assert_eq!(result.attr(PATTERN_ATTRIBUTE), Some("$LAYOUT_TITLE+"));
}

#[test]
fn placeholder_carries_extracted_values() {
    let target = Node::element("title")
        .with_attr(PATTERN_ATTRIBUTE, "$LAYOUT_TITLE | $CONTENT_TITLE")
        .with_attr(TEXT_ATTRIBUTE, "layout.title");
    let source = title_with_inline_content("Fish & Chips");

    let result = strategy().decorate(&target, &source).unwrap();

    assert_eq!(
        result.attr(PATTERN_ATTRIBUTE),
        Some("$LAYOUT_TITLE | $CONTENT_TITLE")
    );
    assert_eq!(
        result.attr(CONTENT_TITLE_ATTRIBUTE),
        Some("'Fish &amp; Chips'")
    );
    assert_eq!(result.attr(DECORATOR_TITLE_ATTRIBUTE), Some("layout.title"));
}

#[test]
fn placeholder_omits_attributes_for_absent_values() {
    let target = Node::element("title").with_attr(PATTERN_ATTRIBUTE, "$CONTENT_TITLE");
    let source = Node::element("title");

    let result = strategy().decorate(&target, &source).unwrap();

    assert_eq!(result.attr(CONTENT_TITLE_ATTRIBUTE), None);
    assert_eq!(result.attr(DECORATOR_TITLE_ATTRIBUTE), None);
}

#[test]
fn placeholder_is_a_bare_title_element() {
    let target = Node::element("title")
        .with_attr(PATTERN_ATTRIBUTE, "$CONTENT_TITLE")
        .with_child(Node::text("Layout"));
    let source = Node::element("title").with_child(Node::text("Page"));

    let result = strategy().decorate(&target, &source).unwrap();

    assert_eq!(result.tag(), Some("title"));
    assert!(result.children().is_empty());
}

#[test]
fn text_attribute_wins_over_inline_content() {
    let target = Node::element("title").with_attr(PATTERN_ATTRIBUTE, "$CONTENT_TITLE");
    let mut source = title_with_inline_content("Inline");
    source = source.with_attr(TEXT_ATTRIBUTE, "page.title");

    let result = strategy().decorate(&target, &source).unwrap();

    assert_eq!(result.attr(CONTENT_TITLE_ATTRIBUTE), Some("page.title"));
}

#[test]
fn bare_wrapper_children_do_not_count_as_inline_content() {
    let target = Node::element("title").with_attr(PATTERN_ATTRIBUTE, "$CONTENT_TITLE");
    // Two children only: directive carrier plus padding, no real content.
    let source = Node::element("title")
        .with_child(Node::element("span"))
        .with_child(Node::text("ignored"));

    let result = strategy().decorate(&target, &source).unwrap();

    assert_eq!(result.attr(CONTENT_TITLE_ATTRIBUTE), None);
}

struct RecordingMerger {
    calls: Rc<Cell<usize>>,
}

impl StructuralMerger for RecordingMerger {
    fn merge(&self, _target: &Node, source: &Node) -> Node {
        self.calls.set(self.calls.get() + 1);
        source.clone()
    }
}

#[test]
fn no_directive_delegates_to_the_structural_merger() {
    let calls = Rc::new(Cell::new(0));
    let strategy = TitleMergeStrategy::with_merger(
        DecoratorOptions::default(),
        Box::new(RecordingMerger {
            calls: calls.clone(),
        }),
    );

    let target = Node::element("title").with_child(Node::text("Layout"));
    let source = Node::element("title").with_child(Node::text("Page"));

    let result = strategy.decorate(&target, &source).unwrap();

    assert_eq!(calls.get(), 1);
    assert_eq!(result, source);
}

#[test]
fn default_merger_prefers_source_children() {
    let target = Node::element("title").with_child(Node::text("Layout"));
    let source = Node::element("title").with_child(Node::text("Page"));

    let result = strategy().decorate(&target, &source).unwrap();

    assert_eq!(result.children(), &[Node::text("Page")]);
}

#[test]
fn decorate_does_not_mutate_its_inputs() {
    let target = Node::element("title")
        .with_attr(PATTERN_ATTRIBUTE, "$LAYOUT_TITLE | $CONTENT_TITLE")
        .with_attr(TEXT_ATTRIBUTE, "layout.title")
        .with_child(Node::element("span"))
        .with_child(Node::text("Layout"))
        .with_child(Node::text(""));
    let source = title_with_inline_content("Page");
    let target_before = target.clone();
    let source_before = source.clone();

    strategy().decorate(&target, &source).unwrap();

    assert_eq!(target, target_before);
    assert_eq!(source, source_before);
}

#[test]
fn rejects_non_title_elements() {
    let title = Node::element("title");
    let div = Node::element("div");

    let err = strategy().decorate(&div, &title).unwrap_err();
    assert_eq!(
        err,
        DecorateError::not_a_title("div", "title")
    );

    let err = strategy().decorate(&title, &Node::text("loose")).unwrap_err();
    assert_eq!(err, DecorateError::not_a_title("#text", "title"));
}

#[test]
fn honors_custom_dialect_attribute_names() {
    let options = DecoratorOptions {
        title_tag: "svg:title".to_string(),
        pattern_attribute: "x:title-pattern".to_string(),
        text_attribute: "x:text".to_string(),
    };
    let strategy = TitleMergeStrategy::new(options);

    let target = Node::element("svg:title").with_attr("x:title-pattern", "$CONTENT_TITLE");
    let source = Node::element("svg:title").with_attr("x:text", "page.title");

    let result = strategy.decorate(&target, &source).unwrap();

    assert_eq!(result.tag(), Some("svg:title"));
    assert_eq!(result.attr("x:title-pattern"), Some("$CONTENT_TITLE"));
    assert_eq!(result.attr(CONTENT_TITLE_ATTRIBUTE), Some("page.title"));
}
