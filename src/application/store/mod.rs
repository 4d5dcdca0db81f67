// src/application/store/mod.rs
mod articles;
mod channel;
mod command;
mod comments;
mod fetch;
mod flight;
mod profile;
mod service;
mod snapshot;

pub use channel::Channel;
pub use command::{ArticleCommand, PendingCommand, Settlement};
pub use flight::FlightTicket;
pub use service::ArticleStore;
pub use snapshot::StoreSnapshot;
