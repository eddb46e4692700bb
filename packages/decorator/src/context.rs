use lamina_dom::Node;
use std::collections::HashMap;
use thiserror::Error;

/// Error surfaced by the host's expression evaluator.
///
/// Evaluation failures are fatal to the current document assembly and are
/// propagated unmodified; there is no partial or fallback value.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("failed to evaluate '{expression}': {message}")]
pub struct EvalError {
    pub expression: String,
    pub message: String,
}

impl EvalError {
    pub fn new(expression: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
            message: message.into(),
        }
    }
}

/// A named reference to a title in context.
///
/// Carries either an unevaluated expression string (`title_text`) or a
/// pre-built tree (`title_model`); `title_text` takes priority when both
/// are set. A source with neither resolves to absent, not to an empty
/// string. Absence triggers fallback to the other source.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TitleSource {
    pub title_text: Option<String>,
    pub escape: bool,
    pub title_model: Option<Node>,
}

impl TitleSource {
    pub fn from_text(expression: impl Into<String>, escape: bool) -> Self {
        Self {
            title_text: Some(expression.into()),
            escape,
            title_model: None,
        }
    }

    pub fn from_model(model: Node) -> Self {
        Self {
            title_text: None,
            escape: false,
            title_model: Some(model),
        }
    }
}

/// Typed lookups into the host's evaluation context.
///
/// Missing key means absent; implementations never substitute empty
/// values for missing ones.
pub trait Context {
    fn title_source(&self, key: &str) -> Option<TitleSource>;

    fn string(&self, key: &str) -> Option<String>;
}

/// Map-backed context for hosts without richer scoping, and for tests.
#[derive(Debug, Clone, Default)]
pub struct MapContext {
    titles: HashMap<String, TitleSource>,
    strings: HashMap<String, String>,
}

impl MapContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_title_source(&mut self, key: impl Into<String>, source: TitleSource) {
        self.titles.insert(key.into(), source);
    }

    pub fn insert_string(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.strings.insert(key.into(), value.into());
    }
}

impl Context for MapContext {
    fn title_source(&self, key: &str) -> Option<TitleSource> {
        self.titles.get(key).cloned()
    }

    fn string(&self, key: &str) -> Option<String> {
        self.strings.get(key).cloned()
    }
}

/// The host template engine's expression service.
pub trait ExpressionEvaluator {
    fn evaluate(&self, expression: &str, context: &dyn Context) -> Result<String, EvalError>;
}

/// Evaluator for hosts whose title expressions are already plain strings;
/// returns the expression verbatim.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityEvaluator;

impl ExpressionEvaluator for IdentityEvaluator {
    fn evaluate(&self, expression: &str, _context: &dyn Context) -> Result<String, EvalError> {
        Ok(expression.to_string())
    }
}

/// General-purpose element merging for everything that is not a title.
///
/// Implementations must not mutate either input; the title strategy
/// relies on that when it delegates.
pub trait StructuralMerger {
    fn merge(&self, target: &Node, source: &Node) -> Node;
}
