// src/infrastructure/navigation.rs
use crate::application::ports::navigation::{NavigationTarget, Navigator};
use crate::config::RouteConfig;
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// Forwards rendered route paths to whoever drives the router.
pub struct ChannelNavigator {
    routes: RouteConfig,
    tx: mpsc::UnboundedSender<String>,
}

impl ChannelNavigator {
    #[must_use]
    pub fn new(routes: RouteConfig) -> (Self, mpsc::UnboundedReceiver<String>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { routes, tx }, rx)
    }
}

impl Navigator for ChannelNavigator {
    fn navigate_to(&self, target: NavigationTarget) {
        let path = self.routes.path_for(&target);
        debug!(%path, "navigating");
        if self.tx.send(path).is_err() {
            warn!(?target, "navigation receiver dropped");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::article::ArticleSlug;

    #[test]
    fn sends_rendered_paths_in_order() {
        let (navigator, mut rx) = ChannelNavigator::new(RouteConfig::default());
        navigator.navigate_to(NavigationTarget::Article(ArticleSlug::new("a").unwrap()));
        navigator.navigate_to(NavigationTarget::Home);
        assert_eq!(rx.try_recv().unwrap(), "/article/a");
        assert_eq!(rx.try_recv().unwrap(), "/");
    }

    #[test]
    fn dropped_receiver_is_not_fatal() {
        let (navigator, rx) = ChannelNavigator::new(RouteConfig::default());
        drop(rx);
        navigator.navigate_to(NavigationTarget::Home);
    }
}
