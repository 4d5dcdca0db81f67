use crate::application::call_state::TrackedChannel;
use std::fmt;

/// Lane a command travels on. Each lane has its own single-flight discipline;
/// only the two fetch lanes keep a call state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    GetArticle,
    GetComments,
    FollowUser,
    UnfollowUser,
    DeleteComment,
    DeleteArticle,
    AddComment,
    PublishArticle,
    EditArticle,
}

impl Channel {
    pub const ALL: [Self; 9] = [
        Self::GetArticle,
        Self::GetComments,
        Self::FollowUser,
        Self::UnfollowUser,
        Self::DeleteComment,
        Self::DeleteArticle,
        Self::AddComment,
        Self::PublishArticle,
        Self::EditArticle,
    ];

    #[must_use]
    pub const fn tracked(self) -> Option<TrackedChannel> {
        match self {
            Self::GetArticle => Some(TrackedChannel::GetArticle),
            Self::GetComments => Some(TrackedChannel::GetComments),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GetArticle => "fetch-article",
            Self::GetComments => "fetch-comments",
            Self::FollowUser => "follow-user",
            Self::UnfollowUser => "unfollow-user",
            Self::DeleteComment => "delete-comment",
            Self::DeleteArticle => "delete-article",
            Self::AddComment => "add-comment",
            Self::PublishArticle => "publish-article",
            Self::EditArticle => "edit-article",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
