pub mod articles;
pub mod errors;

pub use articles::ArticleForm;
pub use errors::{FieldErrors, ValidationErrorBody};
