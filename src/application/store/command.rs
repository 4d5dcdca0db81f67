// src/application/store/command.rs
use super::{channel::Channel, flight::FlightTicket};
use crate::application::error::ApplicationError;
use crate::domain::{
    article::{ArticleSlug, NewArticle},
    comment::CommentId,
    user::Username,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArticleCommand {
    GetArticle(ArticleSlug),
    GetComments(ArticleSlug),
    FollowUser(Username),
    UnfollowUser(Username),
    DeleteComment {
        comment_id: CommentId,
        slug: ArticleSlug,
    },
    DeleteArticle(ArticleSlug),
    /// Comment body; the target article is the one loaded when the command is issued.
    AddComment(String),
    PublishArticle(NewArticle),
    EditArticle {
        slug: ArticleSlug,
        article: NewArticle,
    },
}

impl ArticleCommand {
    #[must_use]
    pub const fn channel(&self) -> Channel {
        match self {
            Self::GetArticle(_) => Channel::GetArticle,
            Self::GetComments(_) => Channel::GetComments,
            Self::FollowUser(_) => Channel::FollowUser,
            Self::UnfollowUser(_) => Channel::UnfollowUser,
            Self::DeleteComment { .. } => Channel::DeleteComment,
            Self::DeleteArticle(_) => Channel::DeleteArticle,
            Self::AddComment(_) => Channel::AddComment,
            Self::PublishArticle(_) => Channel::PublishArticle,
            Self::EditArticle { .. } => Channel::EditArticle,
        }
    }
}

/// A command whose pre-effect has already run. Completing it performs the
/// remote call and settles the outcome.
#[derive(Debug)]
#[must_use = "a pending command does nothing until it is completed"]
pub struct PendingCommand {
    pub(super) ticket: FlightTicket,
    pub(super) command: ArticleCommand,
    /// Slug of the loaded article when the command was issued.
    pub(super) article_slug: Option<ArticleSlug>,
}

impl PendingCommand {
    pub const fn ticket(&self) -> FlightTicket {
        self.ticket
    }

    pub const fn command(&self) -> &ArticleCommand {
        &self.command
    }
}

/// How a completed command ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Settlement {
    /// The success reducer ran.
    Applied,
    /// The failure reducer ran (rollback or error routing).
    Recovered(ApplicationError),
    /// A newer command on the same channel was issued first; nothing was applied.
    Superseded,
}

impl Settlement {
    #[must_use]
    pub const fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }

    #[must_use]
    pub const fn is_superseded(&self) -> bool {
        matches!(self, Self::Superseded)
    }
}
