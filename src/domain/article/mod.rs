pub mod entity;
pub mod state;
pub mod value_objects;

pub use entity::{Article, NewArticle};
pub use state::ArticleState;
pub use value_objects::ArticleSlug;
