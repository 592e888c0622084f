//! Select Winner Use Case
//!
//! Resolves the nominated winner's profile from the user store and
//! writes the winner fields onto the contest and its roster in one
//! transaction. Terminal: a contest's winner is write-once.
//!
//! A contest with no roster has had no payments; selecting a winner for
//! it fails with `NoParticipants` and leaves the contest untouched.

use identity::domain::repository::UserRepository;
use identity::models::Email;
use kernel::id::ContestId;
use std::sync::Arc;

use crate::domain::entity::contest::Winner;
use crate::domain::repository::ContestRepository;
use crate::error::{ContestError, ContestResult};

pub struct SelectWinnerUseCase<C, U>
where
    C: ContestRepository,
    U: UserRepository,
{
    contests: Arc<C>,
    users: Arc<U>,
}

impl<C, U> SelectWinnerUseCase<C, U>
where
    C: ContestRepository,
    U: UserRepository,
{
    pub fn new(contests: Arc<C>, users: Arc<U>) -> Self {
        Self { contests, users }
    }

    pub async fn execute(
        &self,
        contest_id: &ContestId,
        winner_email: &str,
    ) -> ContestResult<Winner> {
        let email = Email::new(winner_email)?;

        let user = self
            .users
            .find_by_email(&email)
            .await
            .map_err(ContestError::Identity)?
            .ok_or(ContestError::WinnerNotFound)?;

        let winner = Winner {
            name: user.display_name,
            image_url: user.image_url,
            email: user.email.into_string(),
        };

        self.contests.set_winner(contest_id, &winner).await?;

        tracing::info!(
            contest_id = %contest_id,
            winner = %winner.email,
            "Winner selected"
        );

        Ok(winner)
    }
}
