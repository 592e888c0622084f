//! Application Layer - Use Cases

pub mod browse_contests;
pub mod confirm_draft;
pub mod delete_draft;
pub mod review_drafts;
pub mod select_winner;
pub mod submit_draft;

pub use browse_contests::BrowseContestsUseCase;
pub use confirm_draft::ConfirmDraftUseCase;
pub use delete_draft::{DeleteDraftUseCase, DeleteReport};
pub use review_drafts::{ReviewDraftsUseCase, ReviewItem};
pub use select_winner::SelectWinnerUseCase;
pub use submit_draft::SubmitDraftUseCase;
