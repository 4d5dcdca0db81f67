// src/application/ports/form_errors.rs
use crate::application::dto::FieldErrors;

/// Write-only sink for field-level validation failures. Like the navigator it
/// runs inside a settlement and must not call back into the store.
pub trait FormErrorsSink: Send + Sync {
    fn set_errors(&self, errors: FieldErrors);
}
