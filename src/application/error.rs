// src/application/error.rs
use crate::application::dto::FieldErrors;
use crate::domain::errors::DomainError;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

/// Failure of a remote operation or of a command before it reached the remote
/// service. Cloneable so a call state can keep it as its recorded outcome.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("validation failed: {0}")]
    Validation(FieldErrors),

    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("unauthorized: {0}")]
    Unauthorized(String),

    #[error("forbidden: {0}")]
    Forbidden(String),

    #[error("infrastructure failure: {0}")]
    Infrastructure(String),
}

impl ApplicationError {
    pub fn validation(errors: impl Into<FieldErrors>) -> Self {
        Self::Validation(errors.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::Unauthorized(msg.into())
    }

    pub fn forbidden(msg: impl Into<String>) -> Self {
        Self::Forbidden(msg.into())
    }

    pub fn infrastructure(msg: impl Into<String>) -> Self {
        Self::Infrastructure(msg.into())
    }

    /// Field errors to hand to a form: the validation payload when there is
    /// one, otherwise the message under the `error` key.
    #[must_use]
    pub fn to_field_errors(&self) -> FieldErrors {
        match self {
            Self::Validation(errors) => errors.clone(),
            other => FieldErrors::single("error", other.to_string()),
        }
    }
}
