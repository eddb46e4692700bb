use crate::context::EvalError;
use thiserror::Error;

pub type DecorateResult<T> = Result<T, DecorateError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DecorateError {
    /// The title merge was invoked against something that is not the
    /// title-equivalent element. Fatal to the current document assembly.
    #[error("title merge applied to <{found}>, expected <{expected}>")]
    NotATitleElement { found: String, expected: String },

    #[error(transparent)]
    Evaluation(#[from] EvalError),
}

impl DecorateError {
    pub fn not_a_title(found: impl Into<String>, expected: impl Into<String>) -> Self {
        Self::NotATitleElement {
            found: found.into(),
            expected: expected.into(),
        }
    }
}
