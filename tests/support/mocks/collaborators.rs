// tests/support/mocks/collaborators.rs
use std::sync::Mutex;

use mokkan_client::application::{
    dto::FieldErrors,
    ports::{
        form_errors::FormErrorsSink,
        navigation::{NavigationTarget, Navigator},
    },
};

#[derive(Default)]
pub struct RecordingNavigator {
    visited: Mutex<Vec<NavigationTarget>>,
}

impl RecordingNavigator {
    pub fn visited(&self) -> Vec<NavigationTarget> {
        self.visited.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate_to(&self, target: NavigationTarget) {
        self.visited.lock().unwrap().push(target);
    }
}

#[derive(Default)]
pub struct RecordingFormErrors {
    received: Mutex<Vec<FieldErrors>>,
}

impl RecordingFormErrors {
    pub fn received(&self) -> Vec<FieldErrors> {
        self.received.lock().unwrap().clone()
    }
}

impl FormErrorsSink for RecordingFormErrors {
    fn set_errors(&self, errors: FieldErrors) {
        self.received.lock().unwrap().push(errors);
    }
}
