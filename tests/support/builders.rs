// tests/support/builders.rs
use mokkan_client::domain::{
    article::{Article, ArticleSlug, NewArticle},
    comment::{Comment, CommentId},
    user::{Profile, Username},
};

use super::mocks::fixed_now;

pub struct ArticleBuilder {
    slug: String,
    title: String,
    body: String,
    author: Profile,
}

impl ArticleBuilder {
    pub fn new(slug: impl Into<String>) -> Self {
        let slug = slug.into();
        Self {
            title: format!("Title of {slug}"),
            body: format!("Body of {slug}"),
            slug,
            author: profile("jake", false),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn author(mut self, author: Profile) -> Self {
        self.author = author;
        self
    }

    pub fn build(self) -> Article {
        Article {
            slug: self.slug,
            title: self.title,
            description: "description".into(),
            body: self.body,
            tag_list: vec!["rust".into()],
            author: self.author,
            favorited: false,
            favorites_count: 0,
            created_at: Some(fixed_now()),
            updated_at: Some(fixed_now()),
        }
    }
}

pub fn article(slug: &str) -> Article {
    ArticleBuilder::new(slug).build()
}

pub fn new_article(title: &str) -> NewArticle {
    NewArticle {
        title: title.into(),
        description: "description".into(),
        body: "body".into(),
        tag_list: vec![],
    }
}

pub fn comment(id: i64) -> Comment {
    Comment {
        id: comment_id(id),
        body: format!("comment {id}"),
        author: profile("celeb", false),
        created_at: fixed_now(),
        updated_at: None,
    }
}

pub fn profile(username: &str, following: bool) -> Profile {
    Profile {
        username: username.into(),
        bio: None,
        image: String::new(),
        following,
    }
}

pub fn slug(value: &str) -> ArticleSlug {
    ArticleSlug::new(value).unwrap()
}

pub fn username(value: &str) -> Username {
    Username::new(value).unwrap()
}

pub fn comment_id(id: i64) -> CommentId {
    CommentId::new(id).unwrap()
}

pub fn comment_ids(comments: &[Comment]) -> Vec<i64> {
    comments.iter().map(|c| i64::from(c.id)).collect()
}
