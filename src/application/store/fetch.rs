// src/application/store/fetch.rs
use std::future::Future;

use tracing::{debug, warn};

use super::{
    command::{ArticleCommand, Settlement},
    flight::FlightTicket,
    service::ArticleStore,
};
use crate::application::{ApplicationResult, call_state::TrackedChannel};
use crate::domain::article::ArticleSlug;

impl ArticleStore {
    pub fn get_article(
        &self,
        slug: ArticleSlug,
    ) -> impl Future<Output = ApplicationResult<Settlement>> + Send + '_ {
        self.dispatch(ArticleCommand::GetArticle(slug))
    }

    pub fn get_comments(
        &self,
        slug: ArticleSlug,
    ) -> impl Future<Output = ApplicationResult<Settlement>> + Send + '_ {
        self.dispatch(ArticleCommand::GetComments(slug))
    }

    pub(super) async fn fetch_article(&self, ticket: FlightTicket, slug: ArticleSlug) -> Settlement {
        let outcome = self.articles.get_article(&slug).await;
        self.settle(ticket, |store| match outcome {
            Ok(article) => {
                debug!(%slug, "article loaded");
                store.update(|snapshot| {
                    snapshot.state.replace_article(article);
                    snapshot.call_states.set_loaded(TrackedChannel::GetArticle, None);
                });
                Settlement::Applied
            }
            Err(err) => {
                warn!(%slug, error = %err, "failed to load article");
                store.update(|snapshot| {
                    snapshot.state.reset_article();
                    snapshot
                        .call_states
                        .set_loaded(TrackedChannel::GetArticle, Some(err.clone()));
                });
                Settlement::Recovered(err)
            }
        })
        .unwrap_or(Settlement::Superseded)
    }

    pub(super) async fn fetch_comments(&self, ticket: FlightTicket, slug: ArticleSlug) -> Settlement {
        let outcome = self.articles.get_comments(&slug).await;
        self.settle(ticket, |store| match outcome {
            Ok(comments) => {
                debug!(%slug, count = comments.len(), "comments loaded");
                store.update(|snapshot| {
                    snapshot.state.replace_comments(comments);
                    snapshot.call_states.set_loaded(TrackedChannel::GetComments, None);
                });
                Settlement::Applied
            }
            Err(err) => {
                warn!(%slug, error = %err, "failed to load comments");
                store.update(|snapshot| {
                    snapshot.state.reset_comments();
                    snapshot
                        .call_states
                        .set_loaded(TrackedChannel::GetComments, Some(err.clone()));
                });
                Settlement::Recovered(err)
            }
        })
        .unwrap_or(Settlement::Superseded)
    }
}
