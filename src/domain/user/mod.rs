// src/domain/user/mod.rs
pub mod entity;
pub mod value_objects;

pub use entity::Profile;
pub use value_objects::Username;
