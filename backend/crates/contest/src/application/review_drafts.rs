//! Review Drafts Use Case
//!
//! Creator's own-draft listing and the admin's unified review view
//! (pending drafts concatenated with published contests).

use std::sync::Arc;

use crate::domain::entity::contest::Contest;
use crate::domain::entity::draft::ContestDraft;
use crate::domain::repository::{ContestRepository, DraftRepository};
use crate::domain::value_object::sort::ContestQuery;
use crate::error::ContestResult;

/// One entry of the admin review view
#[derive(Debug, Clone)]
pub enum ReviewItem {
    Draft(ContestDraft),
    Published(Contest),
}

pub struct ReviewDraftsUseCase<D, C>
where
    D: DraftRepository,
    C: ContestRepository,
{
    drafts: Arc<D>,
    contests: Arc<C>,
}

impl<D, C> ReviewDraftsUseCase<D, C>
where
    D: DraftRepository,
    C: ContestRepository,
{
    pub fn new(drafts: Arc<D>, contests: Arc<C>) -> Self {
        Self { drafts, contests }
    }

    /// All drafts owned by one creator
    pub async fn list_for_creator(&self, creator_email: &str) -> ContestResult<Vec<ContestDraft>> {
        self.drafts.list_by_creator(creator_email).await
    }

    /// Pending drafts followed by every published contest
    pub async fn list_pending(&self) -> ContestResult<Vec<ReviewItem>> {
        let pending = self.drafts.list_pending().await?;
        let published = self
            .contests
            .list_published(&ContestQuery::default())
            .await?;

        let mut items: Vec<ReviewItem> = pending.into_iter().map(ReviewItem::Draft).collect();
        items.extend(published.into_iter().map(ReviewItem::Published));

        Ok(items)
    }
}
