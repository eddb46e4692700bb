use lamina_decorator::{DecorateError, EvalError};
use thiserror::Error;

/// Common error type that can hold any lamina error
#[derive(Error, Debug)]
pub enum CommonError {
    #[error("Decoration error: {0}")]
    Decorate(#[from] DecorateError),

    #[error("Evaluation error: {0}")]
    Evaluation(#[from] EvalError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Generic error: {0}")]
    Generic(String),
}

impl From<String> for CommonError {
    fn from(s: String) -> Self {
        CommonError::Generic(s)
    }
}

impl From<&str> for CommonError {
    fn from(s: &str) -> Self {
        CommonError::Generic(s.to_string())
    }
}
