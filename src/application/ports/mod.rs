// src/application/ports/mod.rs
pub mod form_errors;
pub mod navigation;
pub mod remote;

// Type aliases to make port injection sites more descriptive and reduce `dyn` noise
pub type ArticlesApiPort = dyn remote::ArticlesApi;
pub type ActionsApiPort = dyn remote::ActionsApi;
pub type NavigatorPort = dyn navigation::Navigator;
pub type FormErrorsPort = dyn form_errors::FormErrorsSink;
