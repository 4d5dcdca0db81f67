// src/application/store/profile.rs
use std::future::Future;

use tracing::{debug, warn};

use super::{
    command::{ArticleCommand, Settlement},
    flight::FlightTicket,
    service::ArticleStore,
};
use crate::application::ApplicationResult;
use crate::domain::user::{Profile, Username};

impl ArticleStore {
    pub fn follow_user(
        &self,
        username: Username,
    ) -> impl Future<Output = ApplicationResult<Settlement>> + Send + '_ {
        self.dispatch(ArticleCommand::FollowUser(username))
    }

    pub fn unfollow_user(
        &self,
        username: Username,
    ) -> impl Future<Output = ApplicationResult<Settlement>> + Send + '_ {
        self.dispatch(ArticleCommand::UnfollowUser(username))
    }

    pub(super) async fn follow(
        &self,
        ticket: FlightTicket,
        username: Username,
    ) -> ApplicationResult<Settlement> {
        let outcome = self.actions.follow_user(&username).await;
        self.settle_author(ticket, &username, outcome)
    }

    pub(super) async fn unfollow(
        &self,
        ticket: FlightTicket,
        username: Username,
    ) -> ApplicationResult<Settlement> {
        let outcome = self.actions.unfollow_user(&username).await;
        self.settle_author(ticket, &username, outcome)
    }

    fn settle_author(
        &self,
        ticket: FlightTicket,
        username: &Username,
        outcome: ApplicationResult<Profile>,
    ) -> ApplicationResult<Settlement> {
        self.settle(ticket, |store| match outcome {
            Ok(profile) => {
                debug!(%username, following = profile.following, "author profile updated");
                store.update(|snapshot| snapshot.state.merge_author(profile));
                Ok(Settlement::Applied)
            }
            Err(err) => {
                warn!(
                    channel = %ticket.channel(),
                    %username,
                    error = %err,
                    "profile action failed"
                );
                Err(err)
            }
        })
        .unwrap_or(Ok(Settlement::Superseded))
    }
}
