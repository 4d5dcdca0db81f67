use crate::domain::article::NewArticle;
use serde::{Deserialize, Serialize};

/// Raw values of the article editor form. Tags are entered as one
/// comma-separated string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleForm {
    pub title: String,
    pub description: String,
    pub body: String,
    #[serde(default)]
    pub tag_list: String,
}

impl ArticleForm {
    #[must_use]
    pub fn into_new_article(self) -> NewArticle {
        let tag_list = self
            .tag_list
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(str::to_string)
            .collect();
        NewArticle {
            title: self.title,
            description: self.description,
            body: self.body,
            tag_list,
        }
    }
}
