// src/application/store/service.rs
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

use super::{
    channel::Channel,
    command::{ArticleCommand, PendingCommand, Settlement},
    flight::{FlightLedger, FlightTicket},
    snapshot::StoreSnapshot,
};
use crate::application::{
    ApplicationResult,
    call_state::TrackedChannel,
    ports::{ActionsApiPort, ArticlesApiPort, FormErrorsPort, NavigatorPort},
};

/// Client-side store for the article aggregate.
///
/// Commands are issued on channels. Issuing a command disarms any earlier
/// command still in flight on the same channel, so only the newest one on a
/// channel may ever settle into the state. Create one store per application
/// and share it behind an `Arc`; [`ArticleStore::initialize_article`] resets
/// it in place.
pub struct ArticleStore {
    state: watch::Sender<StoreSnapshot>,
    ledger: Mutex<FlightLedger>,
    pub(super) articles: Arc<ArticlesApiPort>,
    pub(super) actions: Arc<ActionsApiPort>,
    pub(super) navigator: Arc<NavigatorPort>,
    pub(super) form_errors: Arc<FormErrorsPort>,
}

impl ArticleStore {
    pub fn new(
        articles: Arc<ArticlesApiPort>,
        actions: Arc<ActionsApiPort>,
        navigator: Arc<NavigatorPort>,
        form_errors: Arc<FormErrorsPort>,
    ) -> Self {
        let (state, _) = watch::channel(StoreSnapshot::default());
        Self {
            state,
            ledger: Mutex::new(FlightLedger::default()),
            articles,
            actions,
            navigator,
            form_errors,
        }
    }

    /// Receiver that observes every settlement. The current value is always
    /// a consistent snapshot.
    pub fn subscribe(&self) -> watch::Receiver<StoreSnapshot> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> StoreSnapshot {
        self.state.borrow().clone()
    }

    /// Resets the article and its comments to the empty sentinel.
    pub fn initialize_article(&self) {
        let _ledger = self.lock_ledger();
        self.update(|snapshot| snapshot.state.reset());
        debug!("article state initialised");
    }

    /// Arms `command` on its channel and runs its pre-effect. Nothing is sent
    /// to the remote service until the returned command is completed.
    pub fn issue(&self, command: ArticleCommand) -> PendingCommand {
        let channel = command.channel();
        let mut ledger = self.lock_ledger();
        let ticket = ledger.arm(channel);

        let article_slug = match &command {
            ArticleCommand::AddComment(_) => self.state.borrow().state.data.slug(),
            _ => None,
        };

        if let Some(tracked) = channel.tracked() {
            self.update(|snapshot| {
                match tracked {
                    TrackedChannel::GetArticle => snapshot.state.reset_article(),
                    TrackedChannel::GetComments => snapshot.state.reset_comments(),
                }
                snapshot.call_states.set_loading(tracked);
            });
        }
        drop(ledger);

        debug!(
            channel = %channel,
            generation = ticket.generation(),
            "command issued"
        );
        PendingCommand {
            ticket,
            command,
            article_slug,
        }
    }

    /// Performs the remote call for `pending` and applies its reducer.
    ///
    /// Failures that have a reducer come back as [`Settlement::Recovered`].
    /// Follow, unfollow and delete-comment failures have none and are
    /// returned as `Err`.
    pub async fn complete(&self, pending: PendingCommand) -> ApplicationResult<Settlement> {
        let PendingCommand {
            ticket,
            command,
            article_slug,
        } = pending;

        match command {
            ArticleCommand::GetArticle(slug) => Ok(self.fetch_article(ticket, slug).await),
            ArticleCommand::GetComments(slug) => Ok(self.fetch_comments(ticket, slug).await),
            ArticleCommand::FollowUser(username) => self.follow(ticket, username).await,
            ArticleCommand::UnfollowUser(username) => self.unfollow(ticket, username).await,
            ArticleCommand::DeleteComment { comment_id, slug } => {
                self.remove_comment(ticket, comment_id, slug).await
            }
            ArticleCommand::DeleteArticle(slug) => Ok(self.remove_article(ticket, slug).await),
            ArticleCommand::AddComment(body) => {
                Ok(self.append_comment(ticket, article_slug, body).await)
            }
            ArticleCommand::PublishArticle(article) => Ok(self.publish(ticket, article).await),
            ArticleCommand::EditArticle { slug, article } => {
                Ok(self.edit(ticket, slug, article).await)
            }
        }
    }

    /// Issues `command` immediately and returns the future that completes it.
    pub fn dispatch(
        &self,
        command: ArticleCommand,
    ) -> impl Future<Output = ApplicationResult<Settlement>> + Send + '_ {
        let pending = self.issue(command);
        self.complete(pending)
    }

    /// Issues `command` immediately and completes it on a background task.
    pub fn spawn(self: &Arc<Self>, command: ArticleCommand) -> JoinHandle<ApplicationResult<Settlement>> {
        let pending = self.issue(command);
        let store = Arc::clone(self);
        tokio::spawn(async move { store.complete(pending).await })
    }

    /// Runs `apply` if `ticket` is still the newest on its channel, with the
    /// ledger held so nothing else can issue or settle in between.
    pub(super) fn settle<R>(&self, ticket: FlightTicket, apply: impl FnOnce(&Self) -> R) -> Option<R> {
        let ledger = self.lock_ledger();
        if !ledger.is_live(&ticket) {
            debug!(
                channel = %ticket.channel(),
                generation = ticket.generation(),
                "discarding superseded settlement"
            );
            return None;
        }
        let result = apply(self);
        drop(ledger);
        Some(result)
    }

    pub(super) fn update(&self, modify: impl FnOnce(&mut StoreSnapshot)) {
        self.state.send_modify(modify);
    }

    /// Live generation of `channel`, `None` if nothing was ever issued on it.
    pub fn generation(&self, channel: Channel) -> Option<u64> {
        self.lock_ledger().live_generation(channel)
    }

    fn lock_ledger(&self) -> MutexGuard<'_, FlightLedger> {
        self.ledger.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
