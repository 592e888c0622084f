//! Confirm Draft Use Case
//!
//! Admin confirms a draft: the draft's status flips to confirmed and
//! the admin-supplied payload is published as a new contest. Both
//! writes run as one store transaction.

use kernel::id::DraftId;
use std::sync::Arc;

use crate::domain::entity::contest::{Contest, ContestFields};
use crate::domain::repository::ContestRepository;
use crate::error::ContestResult;

pub struct ConfirmDraftUseCase<C>
where
    C: ContestRepository,
{
    contests: Arc<C>,
}

impl<C> ConfirmDraftUseCase<C>
where
    C: ContestRepository,
{
    pub fn new(contests: Arc<C>) -> Self {
        Self { contests }
    }

    pub async fn execute(
        &self,
        draft_id: &DraftId,
        payload: ContestFields,
    ) -> ContestResult<Contest> {
        let contest = Contest::new(payload);

        self.contests.publish_confirmed(draft_id, &contest).await?;

        tracing::info!(
            draft_id = %draft_id,
            contest_id = %contest.contest_id,
            name = %contest.fields.name,
            "Draft confirmed and published"
        );

        Ok(contest)
    }
}
