// src/domain/article/state.rs
use crate::domain::article::entity::Article;
use crate::domain::comment::{Comment, CommentId};
use crate::domain::user::Profile;
use serde::Serialize;

/// In-memory snapshot of the article aggregate: the article and its comments.
///
/// Every method is a pure transformation applied at a settlement point; none
/// of them perform I/O.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ArticleState {
    pub data: Article,
    pub comments: Vec<Comment>,
}

impl ArticleState {
    #[must_use]
    pub fn initial() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::initial();
    }

    pub fn reset_article(&mut self) {
        self.data = Article::empty();
    }

    pub fn reset_comments(&mut self) {
        self.comments.clear();
    }

    pub fn replace_article(&mut self, article: Article) {
        self.data = article;
    }

    pub fn replace_comments(&mut self, comments: Vec<Comment>) {
        self.comments = comments;
    }

    pub fn merge_author(&mut self, profile: Profile) {
        self.data.set_author(profile);
    }

    pub fn prepend_comment(&mut self, comment: Comment) {
        self.comments.insert(0, comment);
    }

    pub fn remove_comment(&mut self, id: CommentId) {
        self.comments.retain(|comment| comment.id != id);
    }
}
