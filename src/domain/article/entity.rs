// src/domain/article/entity.rs
use crate::domain::article::value_objects::ArticleSlug;
use crate::domain::user::Profile;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub body: String,
    #[serde(default)]
    pub tag_list: Vec<String>,
    pub author: Profile,
    #[serde(default)]
    pub favorited: bool,
    #[serde(default)]
    pub favorites_count: u32,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Article {
    /// Sentinel meaning "no article loaded". Its slug is the empty string.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.slug().is_some()
    }

    /// Slug of the loaded article, `None` for the sentinel.
    #[must_use]
    pub fn slug(&self) -> Option<ArticleSlug> {
        ArticleSlug::new(self.slug.clone()).ok()
    }

    /// The only partial merge the aggregate allows.
    pub fn set_author(&mut self, author: Profile) {
        self.author = author;
    }
}

/// Payload for publishing a new article or replacing an existing one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewArticle {
    pub title: String,
    pub description: String,
    pub body: String,
    #[serde(default)]
    pub tag_list: Vec<String>,
}
