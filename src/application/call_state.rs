// src/application/call_state.rs
use crate::application::error::ApplicationError;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CallStatus {
    #[default]
    Init,
    Loading,
    Loaded,
}

/// Load state of one tracked channel. `error` is only ever present once the
/// channel is `Loaded`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallState {
    status: CallStatus,
    error: Option<ApplicationError>,
}

impl CallState {
    #[must_use]
    pub const fn init() -> Self {
        Self {
            status: CallStatus::Init,
            error: None,
        }
    }

    pub fn set_loading(&mut self) {
        self.status = CallStatus::Loading;
        self.error = None;
    }

    pub fn set_loaded(&mut self, error: Option<ApplicationError>) {
        self.status = CallStatus::Loaded;
        self.error = error;
    }

    #[must_use]
    pub const fn status(&self) -> CallStatus {
        self.status
    }

    #[must_use]
    pub const fn error(&self) -> Option<&ApplicationError> {
        self.error.as_ref()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.status == CallStatus::Loading
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.status == CallStatus::Loaded
    }
}

/// Channels that keep a [`CallState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TrackedChannel {
    GetArticle,
    GetComments,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallStates {
    get_article: CallState,
    get_comments: CallState,
}

impl CallStates {
    #[must_use]
    pub const fn get(&self, channel: TrackedChannel) -> &CallState {
        match channel {
            TrackedChannel::GetArticle => &self.get_article,
            TrackedChannel::GetComments => &self.get_comments,
        }
    }

    pub fn get_mut(&mut self, channel: TrackedChannel) -> &mut CallState {
        match channel {
            TrackedChannel::GetArticle => &mut self.get_article,
            TrackedChannel::GetComments => &mut self.get_comments,
        }
    }

    pub fn set_loading(&mut self, channel: TrackedChannel) {
        self.get_mut(channel).set_loading();
    }

    pub fn set_loaded(&mut self, channel: TrackedChannel, error: Option<ApplicationError>) {
        self.get_mut(channel).set_loaded(error);
    }
}
