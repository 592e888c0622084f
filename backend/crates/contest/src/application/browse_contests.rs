//! Browse Contests Use Case
//!
//! Public listing, lookup, and participation counting for published
//! contests.

use kernel::id::ContestId;
use std::sync::Arc;

use crate::domain::entity::contest::Contest;
use crate::domain::repository::ContestRepository;
use crate::domain::value_object::sort::ContestQuery;
use crate::error::{ContestError, ContestResult};

pub struct BrowseContestsUseCase<C>
where
    C: ContestRepository,
{
    contests: Arc<C>,
}

impl<C> BrowseContestsUseCase<C>
where
    C: ContestRepository,
{
    pub fn new(contests: Arc<C>) -> Self {
        Self { contests }
    }

    /// List published contests; raw parameters are validated here
    pub async fn list(
        &self,
        tags: Option<String>,
        sort_field: Option<String>,
        sort_order: Option<String>,
    ) -> ContestResult<Vec<Contest>> {
        let query = ContestQuery::from_params(tags, sort_field, sort_order)?;
        self.contests.list_published(&query).await
    }

    pub async fn get(&self, contest_id: &ContestId) -> ContestResult<Contest> {
        self.contests
            .find_by_id(contest_id)
            .await?
            .ok_or(ContestError::ContestNotFound)
    }

    /// Count one registration; no upper bound
    pub async fn join(&self, contest_id: &ContestId) -> ContestResult<()> {
        let updated = self.contests.increment_participation(contest_id).await?;
        if !updated {
            return Err(ContestError::ContestNotFound);
        }

        tracing::debug!(contest_id = %contest_id, "Participation counted");

        Ok(())
    }
}
