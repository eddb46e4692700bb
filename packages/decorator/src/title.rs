//! Composite title construction from a pattern string.
//!
//! A pattern references the two named sub-titles (`$LAYOUT_TITLE`,
//! `$CONTENT_TITLE`) amid literal text; building substitutes each token
//! with the referenced title's tree. Substitution only happens when both
//! titles are present; with one missing the other is returned as-is and
//! the pattern is ignored, and with both missing the result is an empty
//! fragment.

use crate::context::{Context, EvalError, ExpressionEvaluator, TitleSource};
use crate::diagnostics::Diagnostics;
use crate::pattern::{tokenize, Segment};
use crate::state::DecorationPassState;
use lamina_dom::{decode_entities, escape_text, flatten_text, Node};
use std::sync::Arc;
use tracing::debug;

/// Builds a composite title node from a pattern and up to two sub-titles.
pub struct TitleBuilder {
    diagnostics: Arc<Diagnostics>,
}

impl TitleBuilder {
    pub fn new() -> Self {
        Self {
            diagnostics: Diagnostics::shared(),
        }
    }

    /// Builder reporting into an injected diagnostics instance.
    pub fn with_diagnostics(diagnostics: Arc<Diagnostics>) -> Self {
        Self { diagnostics }
    }

    /// Build the merged title tree.
    ///
    /// The result is always freshly allocated (or a clone of an input
    /// tree); inputs are never aliased mutably through the output.
    pub fn build(
        &self,
        pattern: Option<&str>,
        content_title: Option<&Node>,
        layout_title: Option<&Node>,
    ) -> Node {
        match (content_title, layout_title) {
            (Some(content), Some(layout)) => match pattern {
                Some(pattern) => self.substitute(pattern, content, layout),
                // Both present without a pattern: content overrides layout.
                None => content.clone(),
            },
            (Some(content), None) => content.clone(),
            (None, Some(layout)) => layout.clone(),
            (None, None) => Node::empty(),
        }
    }

    fn substitute(&self, pattern: &str, content: &Node, layout: &Node) -> Node {
        let segments = tokenize(pattern);
        debug!(pattern = %pattern, segments = segments.len(), "substituting title pattern");

        let mut parts = Vec::with_capacity(segments.len());
        for segment in segments {
            match segment {
                Segment::Literal(text) => parts.push(Node::text(text)),
                Segment::Content => parts.push(content.clone()),
                Segment::Layout => parts.push(layout.clone()),
                Segment::DeprecatedLayout => {
                    self.diagnostics.warn_deprecated_title_token();
                    parts.push(layout.clone());
                }
            }
        }

        Node::fragment(parts)
    }

    /// Resolve both title sources, record their flattened values into the
    /// pass state, build the merged title, and record the resulting value.
    pub fn build_from_sources(
        &self,
        pattern: Option<&str>,
        content_source: Option<&TitleSource>,
        layout_source: Option<&TitleSource>,
        evaluator: &dyn ExpressionEvaluator,
        context: &dyn Context,
        state: &mut DecorationPassState,
    ) -> Result<Node, EvalError> {
        let (content, layout) =
            resolve_titles(content_source, layout_source, evaluator, context, state)?;

        let result = self.build(pattern, content.as_ref(), layout.as_ref());
        state.set_resulting_title(flatten_text(&result));

        Ok(result)
    }
}

impl Default for TitleBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve a title source to a tree.
///
/// `title_text` wins over `title_model`: the expression is evaluated,
/// entities in the evaluated value are decoded, and the value is
/// re-escaped when the source asks for it. A source with neither field
/// resolves to `None`: absent, not empty.
pub fn resolve_source(
    source: &TitleSource,
    evaluator: &dyn ExpressionEvaluator,
    context: &dyn Context,
) -> Result<Option<Node>, EvalError> {
    if let Some(expression) = &source.title_text {
        let evaluated = evaluator.evaluate(expression, context)?;
        let decoded = decode_entities(&evaluated);
        let value = if source.escape {
            escape_text(&decoded)
        } else {
            decoded
        };
        return Ok(Some(Node::text(value)));
    }

    Ok(source.title_model.clone())
}

/// Resolve both sources and record the resolved title values into the
/// pass state for later stages (absolute fallback title display).
pub fn resolve_titles(
    content_source: Option<&TitleSource>,
    layout_source: Option<&TitleSource>,
    evaluator: &dyn ExpressionEvaluator,
    context: &dyn Context,
    state: &mut DecorationPassState,
) -> Result<(Option<Node>, Option<Node>), EvalError> {
    let content = match content_source {
        Some(source) => resolve_source(source, evaluator, context)?,
        None => None,
    };
    let layout = match layout_source {
        Some(source) => resolve_source(source, evaluator, context)?,
        None => None,
    };

    if let Some(node) = &content {
        state.set_content_title(flatten_text(node));
    }
    if let Some(node) = &layout {
        state.set_layout_title(flatten_text(node));
    }

    Ok((content, layout))
}
