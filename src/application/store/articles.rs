// src/application/store/articles.rs
use std::future::Future;

use tracing::{debug, warn};

use super::{
    command::{ArticleCommand, Settlement},
    flight::FlightTicket,
    service::ArticleStore,
};
use crate::application::{
    ApplicationResult, dto::ArticleForm, error::ApplicationError,
    ports::navigation::NavigationTarget,
};
use crate::domain::article::{Article, ArticleSlug, NewArticle};

impl ArticleStore {
    pub fn delete_article(
        &self,
        slug: ArticleSlug,
    ) -> impl Future<Output = ApplicationResult<Settlement>> + Send + '_ {
        self.dispatch(ArticleCommand::DeleteArticle(slug))
    }

    pub fn publish_article(
        &self,
        article: NewArticle,
    ) -> impl Future<Output = ApplicationResult<Settlement>> + Send + '_ {
        self.dispatch(ArticleCommand::PublishArticle(article))
    }

    pub fn edit_article(
        &self,
        slug: ArticleSlug,
        article: NewArticle,
    ) -> impl Future<Output = ApplicationResult<Settlement>> + Send + '_ {
        self.dispatch(ArticleCommand::EditArticle { slug, article })
    }

    /// Edits the loaded article, or publishes a new one when none is loaded.
    pub fn submit_article(
        &self,
        form: ArticleForm,
    ) -> impl Future<Output = ApplicationResult<Settlement>> + Send + '_ {
        let article = form.into_new_article();
        let loaded = self.snapshot().state.data.slug();
        let command = match loaded {
            Some(slug) => ArticleCommand::EditArticle { slug, article },
            None => ArticleCommand::PublishArticle(article),
        };
        self.dispatch(command)
    }

    pub(super) async fn remove_article(&self, ticket: FlightTicket, slug: ArticleSlug) -> Settlement {
        let outcome = self.articles.delete_article(&slug).await;
        self.settle(ticket, |store| match outcome {
            Ok(()) => {
                debug!(%slug, "article deleted");
                store.update(|snapshot| snapshot.state.reset_article());
                store.navigator.navigate_to(NavigationTarget::Home);
                Settlement::Applied
            }
            Err(err) => {
                warn!(%slug, error = %err, "failed to delete article");
                store.update(|snapshot| snapshot.state.reset());
                Settlement::Recovered(err)
            }
        })
        .unwrap_or(Settlement::Superseded)
    }

    pub(super) async fn publish(&self, ticket: FlightTicket, article: NewArticle) -> Settlement {
        let outcome = self.articles.publish_article(&article).await;
        self.settle(ticket, |store| store.apply_saved(outcome))
            .unwrap_or(Settlement::Superseded)
    }

    pub(super) async fn edit(
        &self,
        ticket: FlightTicket,
        slug: ArticleSlug,
        article: NewArticle,
    ) -> Settlement {
        let outcome = self.articles.edit_article(&slug, &article).await;
        self.settle(ticket, |store| store.apply_saved(outcome))
            .unwrap_or(Settlement::Superseded)
    }

    /// Shared settlement of publish and edit.
    fn apply_saved(&self, outcome: ApplicationResult<Article>) -> Settlement {
        match outcome {
            Ok(saved) => {
                let Some(slug) = saved.slug() else {
                    let err = ApplicationError::infrastructure("saved article has no slug");
                    warn!(error = %err, "failed to save article");
                    self.form_errors.set_errors(err.to_field_errors());
                    return Settlement::Recovered(err);
                };
                debug!(%slug, "article saved");
                self.update(|snapshot| snapshot.state.replace_article(saved));
                self.navigator.navigate_to(NavigationTarget::Article(slug));
                Settlement::Applied
            }
            Err(err) => {
                warn!(error = %err, "failed to save article");
                self.form_errors.set_errors(err.to_field_errors());
                Settlement::Recovered(err)
            }
        }
    }
}
