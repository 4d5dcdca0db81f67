pub mod entity;
pub mod value_objects;

pub use entity::Comment;
pub use value_objects::CommentId;
