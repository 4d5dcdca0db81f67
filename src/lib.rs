pub mod application;
pub mod client;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod telemetry;

pub use application::store::{ArticleCommand, ArticleStore, Settlement, StoreSnapshot};
pub use client::ArticleClient;
pub use config::ClientConfig;
