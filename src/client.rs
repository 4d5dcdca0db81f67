// src/client.rs
use std::sync::Arc;

use tokio::sync::mpsc;

use crate::application::{
    ports::{ActionsApiPort, ArticlesApiPort, FormErrorsPort, NavigatorPort},
    store::ArticleStore,
};
use crate::config::ClientConfig;
use crate::infrastructure::{ChannelNavigator, FormErrorsStore};

/// Application-lifetime wiring: the one article store, the form error store it
/// reports to, and the stream of paths it asks the router to visit.
pub struct ArticleClient {
    pub store: Arc<ArticleStore>,
    pub form_errors: Arc<FormErrorsStore>,
    pub navigation: mpsc::UnboundedReceiver<String>,
}

impl ArticleClient {
    pub fn new(
        config: &ClientConfig,
        articles: Arc<ArticlesApiPort>,
        actions: Arc<ActionsApiPort>,
    ) -> Self {
        let form_errors = Arc::new(FormErrorsStore::new());
        let (navigator, navigation) = ChannelNavigator::new(config.routes().clone());
        let navigator: Arc<NavigatorPort> = Arc::new(navigator);
        let sink: Arc<FormErrorsPort> = Arc::clone(&form_errors) as Arc<FormErrorsPort>;

        let store = Arc::new(ArticleStore::new(articles, actions, navigator, sink));

        Self {
            store,
            form_errors,
            navigation,
        }
    }
}
