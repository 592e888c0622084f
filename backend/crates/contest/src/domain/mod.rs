//! Domain Layer

pub mod entity;
pub mod repository;
pub mod value_object;

// Re-exports
pub use entity::contest::{Contest, ContestFields, Winner};
pub use entity::draft::ContestDraft;
pub use entity::roster::ParticipantRoster;
pub use repository::{ContestRepository, DraftRepository};
pub use value_object::draft_status::DraftStatus;
pub use value_object::sort::{ContestQuery, SortField, SortOrder};
