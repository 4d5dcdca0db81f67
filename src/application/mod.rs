pub mod call_state;
pub mod dto;
pub mod error;
pub mod ports;
pub mod store;

pub use error::{ApplicationError, ApplicationResult};
