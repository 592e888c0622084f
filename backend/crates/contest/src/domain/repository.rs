//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::id::{ContestId, DraftId};

use crate::domain::entity::contest::{Contest, Winner};
use crate::domain::entity::draft::ContestDraft;
use crate::domain::value_object::sort::ContestQuery;
use crate::error::ContestResult;

/// Draft contest repository trait
#[trait_variant::make(DraftRepository: Send)]
pub trait LocalDraftRepository {
    /// Insert a new draft
    async fn insert(&self, draft: &ContestDraft) -> ContestResult<()>;

    /// Find draft by ID
    async fn find_by_id(&self, draft_id: &DraftId) -> ContestResult<Option<ContestDraft>>;

    /// All drafts owned by a creator, newest first
    async fn list_by_creator(&self, creator_email: &str) -> ContestResult<Vec<ContestDraft>>;

    /// All drafts still awaiting confirmation
    async fn list_pending(&self) -> ContestResult<Vec<ContestDraft>>;

    /// Delete a draft. Returns false when nothing was deleted.
    async fn delete(&self, draft_id: &DraftId) -> ContestResult<bool>;
}

/// Published contest repository trait
#[trait_variant::make(ContestRepository: Send)]
pub trait LocalContestRepository {
    /// Mark the draft confirmed and insert the published contest, as one
    /// transaction. Fails with `DraftNotFound` / `DraftAlreadyConfirmed`
    /// on the confirmation step and `PublishStep` on the insert step;
    /// either failure rolls the whole operation back.
    async fn publish_confirmed(&self, draft_id: &DraftId, contest: &Contest) -> ContestResult<()>;

    /// Published contests matching the validated query
    async fn list_published(&self, query: &ContestQuery) -> ContestResult<Vec<Contest>>;

    /// Find published contest by ID
    async fn find_by_id(&self, contest_id: &ContestId) -> ContestResult<Option<Contest>>;

    /// Delete a published contest. Returns false when nothing was deleted.
    async fn delete(&self, contest_id: &ContestId) -> ContestResult<bool>;

    /// Atomically add one to the participation counter. Returns false
    /// when the contest does not exist.
    async fn increment_participation(&self, contest_id: &ContestId) -> ContestResult<bool>;

    /// Write the winner onto the contest and mirror it into the roster,
    /// as one transaction. Fails with `ContestNotFound`,
    /// `WinnerAlreadySelected`, or `NoParticipants` (no roster row);
    /// any failure leaves both untouched.
    async fn set_winner(&self, contest_id: &ContestId, winner: &Winner) -> ContestResult<()>;
}
