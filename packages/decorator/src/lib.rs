pub mod context;
pub mod diagnostics;
pub mod error;
pub mod merge;
pub mod options;
pub mod pattern;
pub mod state;
pub mod strategy;
pub mod title;

#[cfg(test)]
mod tests_strategy;


pub use context::{
    Context, EvalError, ExpressionEvaluator, IdentityEvaluator, MapContext, StructuralMerger,
    TitleSource,
};
pub use diagnostics::Diagnostics;
pub use error::{DecorateError, DecorateResult};
pub use merge::ReplaceMerger;
pub use options::DecoratorOptions;
pub use pattern::{tokenize, Segment};
pub use state::DecorationPassState;
pub use strategy::{TitleMergeStrategy, CONTENT_TITLE_ATTRIBUTE, DECORATOR_TITLE_ATTRIBUTE};
pub use title::{resolve_source, resolve_titles, TitleBuilder};
