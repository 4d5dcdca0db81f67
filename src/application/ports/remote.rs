// src/application/ports/remote.rs
use crate::application::ApplicationResult;
use crate::domain::{
    article::{Article, ArticleSlug, NewArticle},
    comment::{Comment, CommentId},
    user::{Profile, Username},
};
use async_trait::async_trait;

/// Remote article endpoints. Implementations own transport and decoding; a
/// 422 response must surface as `ApplicationError::Validation`.
#[async_trait]
pub trait ArticlesApi: Send + Sync {
    async fn get_article(&self, slug: &ArticleSlug) -> ApplicationResult<Article>;

    async fn get_comments(&self, slug: &ArticleSlug) -> ApplicationResult<Vec<Comment>>;

    async fn delete_comment(&self, comment_id: CommentId, slug: &ArticleSlug)
    -> ApplicationResult<()>;

    async fn delete_article(&self, slug: &ArticleSlug) -> ApplicationResult<()>;

    async fn add_comment(&self, slug: &ArticleSlug, body: &str) -> ApplicationResult<Comment>;

    async fn publish_article(&self, article: &NewArticle) -> ApplicationResult<Article>;

    async fn edit_article(
        &self,
        slug: &ArticleSlug,
        article: &NewArticle,
    ) -> ApplicationResult<Article>;
}

/// Remote profile actions.
#[async_trait]
pub trait ActionsApi: Send + Sync {
    async fn follow_user(&self, username: &Username) -> ApplicationResult<Profile>;

    async fn unfollow_user(&self, username: &Username) -> ApplicationResult<Profile>;
}
