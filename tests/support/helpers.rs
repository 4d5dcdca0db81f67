// tests/support/helpers.rs
use std::sync::Arc;

use mokkan_client::application::store::ArticleStore;

use super::builders::{article, slug};
use super::mocks::{RecordingFormErrors, RecordingNavigator, ScriptedApi};

pub struct Harness {
    pub store: Arc<ArticleStore>,
    pub api: Arc<ScriptedApi>,
    pub navigator: Arc<RecordingNavigator>,
    pub form_errors: Arc<RecordingFormErrors>,
}

pub fn harness() -> Harness {
    let api = Arc::new(ScriptedApi::default());
    let navigator = Arc::new(RecordingNavigator::default());
    let form_errors = Arc::new(RecordingFormErrors::default());
    let store = Arc::new(ArticleStore::new(
        api.clone(),
        api.clone(),
        navigator.clone(),
        form_errors.clone(),
    ));
    Harness {
        store,
        api,
        navigator,
        form_errors,
    }
}

impl Harness {
    /// Loads article `value` through the store so later commands see it.
    pub async fn load_article(&self, value: &str) {
        self.api.articles.respond(value, Ok(article(value)));
        let settlement = self.store.get_article(slug(value)).await.unwrap();
        assert!(settlement.is_applied());
    }

    pub async fn load_comments(&self, value: &str, comments: Vec<mokkan_client::domain::comment::Comment>) {
        self.api.comments.respond(value, Ok(comments));
        let settlement = self.store.get_comments(slug(value)).await.unwrap();
        assert!(settlement.is_applied());
    }
}
