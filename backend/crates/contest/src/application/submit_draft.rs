//! Submit Draft Use Case
//!
//! Creator submits a contest draft; it waits for admin confirmation.
//! The creator identity always comes from the verified token, never
//! from the request body.

use identity::models::Email;
use kernel::id::DraftId;
use std::sync::Arc;

use crate::domain::entity::contest::ContestFields;
use crate::domain::entity::draft::ContestDraft;
use crate::domain::repository::DraftRepository;
use crate::error::ContestResult;

pub struct SubmitDraftUseCase<D>
where
    D: DraftRepository,
{
    drafts: Arc<D>,
}

impl<D> SubmitDraftUseCase<D>
where
    D: DraftRepository,
{
    pub fn new(drafts: Arc<D>) -> Self {
        Self { drafts }
    }

    pub async fn execute(&self, creator: &Email, fields: ContestFields) -> ContestResult<DraftId> {
        let draft = ContestDraft::new(creator.as_str().to_string(), fields);

        self.drafts.insert(&draft).await?;

        tracing::info!(
            draft_id = %draft.draft_id,
            creator = %creator,
            name = %draft.fields.name,
            "Draft contest submitted"
        );

        Ok(draft.draft_id)
    }
}
