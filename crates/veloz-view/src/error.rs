use thiserror::Error;
use veloz_core::CoreError;

/// A submission rejected locally. No collaborator was called.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("required fields are empty: {}", .0.join(", "))]
    Missing(Vec<&'static str>),

    #[error("{field} must be greater than zero")]
    NonPositive { field: &'static str },

    #[error("invalid value for {field}: '{value}'")]
    Invalid { field: &'static str, value: String },

    #[error("{field} does not match {other}")]
    Mismatch {
        field: &'static str,
        other: &'static str,
    },

    #[error("{field} must be at least {min} characters")]
    TooShort { field: &'static str, min: usize },
}

#[derive(Debug, Error)]
pub enum FormError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Denied(#[from] CoreError),

    #[error("a submission is already in progress")]
    Busy,

    #[error("unknown field '{0}'")]
    UnknownField(String),

    #[error("the create form is not open")]
    Closed,

    /// The persistence collaborator failed; entered values are kept.
    #[error("could not save: {0}")]
    Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}
