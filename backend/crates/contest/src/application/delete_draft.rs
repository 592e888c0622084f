//! Delete Draft Use Case
//!
//! Removes a draft and any published contest carrying the same
//! identifier (a partially-confirmed pair). Both removals are attempted
//! even when one finds nothing.

use identity::models::Email;
use kernel::id::{ContestId, DraftId};
use std::sync::Arc;

use crate::domain::repository::{ContestRepository, DraftRepository};
use crate::error::{ContestError, ContestResult};

/// What the two removal attempts actually deleted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteReport {
    pub draft_deleted: bool,
    pub contest_deleted: bool,
}

pub struct DeleteDraftUseCase<D, C>
where
    D: DraftRepository,
    C: ContestRepository,
{
    drafts: Arc<D>,
    contests: Arc<C>,
}

impl<D, C> DeleteDraftUseCase<D, C>
where
    D: DraftRepository,
    C: ContestRepository,
{
    pub fn new(drafts: Arc<D>, contests: Arc<C>) -> Self {
        Self { drafts, contests }
    }

    /// Creator path: the draft must exist and be owned by the caller.
    pub async fn execute_creator(
        &self,
        draft_id: &DraftId,
        requester: &Email,
    ) -> ContestResult<DeleteReport> {
        let draft = self
            .drafts
            .find_by_id(draft_id)
            .await?
            .ok_or(ContestError::DraftNotFound)?;

        if draft.creator_email != requester.as_str() {
            return Err(ContestError::NotDraftOwner);
        }

        self.delete_both(draft_id).await
    }

    /// Admin path: no ownership check, both removals unconditional.
    /// Not-found only when neither side had a row.
    pub async fn execute_admin(&self, draft_id: &DraftId) -> ContestResult<DeleteReport> {
        let report = self.delete_both(draft_id).await?;

        if !report.draft_deleted && !report.contest_deleted {
            return Err(ContestError::DraftNotFound);
        }

        Ok(report)
    }

    async fn delete_both(&self, draft_id: &DraftId) -> ContestResult<DeleteReport> {
        let draft_deleted = self.drafts.delete(draft_id).await?;

        // Same identifier in the published collection: cleanup for a
        // confirm that published before the draft was deleted.
        let shadow_id = ContestId::from_uuid(draft_id.into_uuid());
        let contest_deleted = self.contests.delete(&shadow_id).await?;

        tracing::info!(
            draft_id = %draft_id,
            draft_deleted,
            contest_deleted,
            "Draft removal attempted on both collections"
        );

        Ok(DeleteReport {
            draft_deleted,
            contest_deleted,
        })
    }
}
