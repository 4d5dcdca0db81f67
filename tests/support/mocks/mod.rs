// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod api;
pub mod collaborators;
pub mod gate;
pub mod time;

pub use api::ScriptedApi;
pub use collaborators::{RecordingFormErrors, RecordingNavigator};
pub use gate::Gates;
pub use time::fixed_now;
