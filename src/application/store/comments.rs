// src/application/store/comments.rs
use std::future::Future;

use tracing::{debug, warn};

use super::{
    command::{ArticleCommand, Settlement},
    flight::FlightTicket,
    service::ArticleStore,
};
use crate::application::{
    ApplicationResult,
    dto::FieldErrors,
    error::ApplicationError,
};
use crate::domain::{article::ArticleSlug, comment::CommentId};

impl ArticleStore {
    /// Comments on the article loaded at the time of the call.
    pub fn add_comment(
        &self,
        body: impl Into<String>,
    ) -> impl Future<Output = ApplicationResult<Settlement>> + Send + '_ {
        self.dispatch(ArticleCommand::AddComment(body.into()))
    }

    pub fn delete_comment(
        &self,
        comment_id: CommentId,
        slug: ArticleSlug,
    ) -> impl Future<Output = ApplicationResult<Settlement>> + Send + '_ {
        self.dispatch(ArticleCommand::DeleteComment { comment_id, slug })
    }

    pub(super) async fn append_comment(
        &self,
        ticket: FlightTicket,
        slug: Option<ArticleSlug>,
        body: String,
    ) -> Settlement {
        let outcome = match slug {
            Some(slug) => self.articles.add_comment(&slug, &body).await,
            None => Err(ApplicationError::validation(FieldErrors::single(
                "article",
                "must be loaded before commenting",
            ))),
        };

        self.settle(ticket, |store| match outcome {
            Ok(comment) => {
                debug!(comment_id = %comment.id, "comment added");
                store.update(|snapshot| snapshot.state.prepend_comment(comment));
                Settlement::Applied
            }
            Err(err) => {
                warn!(error = %err, "failed to add comment");
                store.form_errors.set_errors(err.to_field_errors());
                Settlement::Recovered(err)
            }
        })
        .unwrap_or(Settlement::Superseded)
    }

    pub(super) async fn remove_comment(
        &self,
        ticket: FlightTicket,
        comment_id: CommentId,
        slug: ArticleSlug,
    ) -> ApplicationResult<Settlement> {
        let outcome = self.articles.delete_comment(comment_id, &slug).await;
        self.settle(ticket, |store| match outcome {
            Ok(()) => {
                debug!(%comment_id, %slug, "comment deleted");
                store.update(|snapshot| snapshot.state.remove_comment(comment_id));
                Ok(Settlement::Applied)
            }
            Err(err) => {
                warn!(%comment_id, %slug, error = %err, "failed to delete comment");
                Err(err)
            }
        })
        .unwrap_or(Ok(Settlement::Superseded))
    }
}
