// tests/support/mocks/api.rs
use std::sync::Mutex;

use async_trait::async_trait;
use mokkan_client::application::{
    ApplicationResult,
    ports::remote::{ActionsApi, ArticlesApi},
};
use mokkan_client::domain::{
    article::{Article, ArticleSlug, NewArticle},
    comment::{Comment, CommentId},
    user::{Profile, Username},
};

use super::gate::Gates;

/// Remote endpoints driven entirely by the test.
///
/// Keys: slug for article/comment reads, article deletion, comment creation
/// and edits; `"<slug>/<id>"` for comment deletion; title for publishing;
/// username for follow/unfollow.
#[derive(Default)]
pub struct ScriptedApi {
    pub articles: Gates<Article>,
    pub comments: Gates<Vec<Comment>>,
    pub delete_comment: Gates<()>,
    pub delete_article: Gates<()>,
    pub add_comment: Gates<Comment>,
    pub publish: Gates<Article>,
    pub edit: Gates<Article>,
    pub follow: Gates<Profile>,
    pub unfollow: Gates<Profile>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedApi {
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl ArticlesApi for ScriptedApi {
    async fn get_article(&self, slug: &ArticleSlug) -> ApplicationResult<Article> {
        self.record(format!("get_article:{slug}"));
        self.articles.wait(slug.as_str()).await
    }

    async fn get_comments(&self, slug: &ArticleSlug) -> ApplicationResult<Vec<Comment>> {
        self.record(format!("get_comments:{slug}"));
        self.comments.wait(slug.as_str()).await
    }

    async fn delete_comment(
        &self,
        comment_id: CommentId,
        slug: &ArticleSlug,
    ) -> ApplicationResult<()> {
        let key = format!("{slug}/{comment_id}");
        self.record(format!("delete_comment:{key}"));
        self.delete_comment.wait(&key).await
    }

    async fn delete_article(&self, slug: &ArticleSlug) -> ApplicationResult<()> {
        self.record(format!("delete_article:{slug}"));
        self.delete_article.wait(slug.as_str()).await
    }

    async fn add_comment(&self, slug: &ArticleSlug, body: &str) -> ApplicationResult<Comment> {
        self.record(format!("add_comment:{slug}:{body}"));
        self.add_comment.wait(slug.as_str()).await
    }

    async fn publish_article(&self, article: &NewArticle) -> ApplicationResult<Article> {
        self.record(format!("publish_article:{}", article.title));
        self.publish.wait(&article.title).await
    }

    async fn edit_article(
        &self,
        slug: &ArticleSlug,
        article: &NewArticle,
    ) -> ApplicationResult<Article> {
        self.record(format!("edit_article:{slug}:{}", article.title));
        self.edit.wait(slug.as_str()).await
    }
}

#[async_trait]
impl ActionsApi for ScriptedApi {
    async fn follow_user(&self, username: &Username) -> ApplicationResult<Profile> {
        self.record(format!("follow_user:{username}"));
        self.follow.wait(username.as_str()).await
    }

    async fn unfollow_user(&self, username: &Username) -> ApplicationResult<Profile> {
        self.record(format!("unfollow_user:{username}"));
        self.unfollow.wait(username.as_str()).await
    }
}
