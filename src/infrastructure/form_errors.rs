// src/infrastructure/form_errors.rs
use crate::application::dto::FieldErrors;
use crate::application::ports::form_errors::FormErrorsSink;
use tokio::sync::watch;

/// In-memory form error state shared with the view layer, independent of the
/// article store.
pub struct FormErrorsStore {
    errors: watch::Sender<FieldErrors>,
}

impl FormErrorsStore {
    #[must_use]
    pub fn new() -> Self {
        let (errors, _) = watch::channel(FieldErrors::default());
        Self { errors }
    }

    #[must_use]
    pub fn errors(&self) -> FieldErrors {
        self.errors.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<FieldErrors> {
        self.errors.subscribe()
    }

    /// Clears errors, e.g. when a form is destroyed.
    pub fn reset_errors(&self) {
        self.errors.send_replace(FieldErrors::default());
    }
}

impl Default for FormErrorsStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FormErrorsSink for FormErrorsStore {
    fn set_errors(&self, errors: FieldErrors) {
        self.errors.send_replace(errors);
    }
}
