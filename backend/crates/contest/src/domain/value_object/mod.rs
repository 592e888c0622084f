//! Value Objects

pub mod draft_status;
pub mod sort;

pub use draft_status::DraftStatus;
pub use sort::{ContestQuery, SortField, SortOrder};
