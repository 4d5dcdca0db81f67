use crate::application::call_state::{CallState, CallStates, TrackedChannel};
use crate::application::error::ApplicationError;
use crate::domain::{
    article::{Article, ArticleState},
    comment::Comment,
};

/// Everything an observer of the store can see, published as one value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreSnapshot {
    pub state: ArticleState,
    pub call_states: CallStates,
}

impl StoreSnapshot {
    #[must_use]
    pub const fn article(&self) -> &Article {
        &self.state.data
    }

    #[must_use]
    pub fn comments(&self) -> &[Comment] {
        &self.state.comments
    }

    #[must_use]
    pub const fn call_state(&self, channel: TrackedChannel) -> &CallState {
        self.call_states.get(channel)
    }

    #[must_use]
    pub fn article_loading(&self) -> bool {
        self.call_state(TrackedChannel::GetArticle).is_loading()
    }

    #[must_use]
    pub fn article_loaded(&self) -> bool {
        self.call_state(TrackedChannel::GetArticle).is_loaded()
    }

    #[must_use]
    pub const fn article_error(&self) -> Option<&ApplicationError> {
        self.call_state(TrackedChannel::GetArticle).error()
    }

    #[must_use]
    pub fn comments_loading(&self) -> bool {
        self.call_state(TrackedChannel::GetComments).is_loading()
    }

    #[must_use]
    pub fn comments_loaded(&self) -> bool {
        self.call_state(TrackedChannel::GetComments).is_loaded()
    }

    #[must_use]
    pub const fn comments_error(&self) -> Option<&ApplicationError> {
        self.call_state(TrackedChannel::GetComments).error()
    }
}
