//! Domain Entities

pub mod contest;
pub mod draft;
pub mod roster;

pub use contest::{Contest, ContestFields, Winner};
pub use draft::ContestDraft;
pub use roster::ParticipantRoster;
