//! Draft (Created) Contest Entity

use chrono::{DateTime, Utc};
use kernel::id::DraftId;

use crate::domain::entity::contest::ContestFields;
use crate::domain::value_object::draft_status::DraftStatus;

/// Draft contest - submitted by a creator, awaiting admin confirmation.
/// Confirmation copies it into the published collection; the draft row
/// survives with status `confirmed`.
#[derive(Debug, Clone)]
pub struct ContestDraft {
    pub draft_id: DraftId,
    pub creator_email: String,
    pub fields: ContestFields,
    pub status: DraftStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ContestDraft {
    pub fn new(creator_email: String, fields: ContestFields) -> Self {
        let now = Utc::now();
        Self {
            draft_id: DraftId::new(),
            creator_email,
            fields,
            status: DraftStatus::Pending,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_draft_is_pending() {
        let draft = ContestDraft::new(
            "creator@test.com".to_string(),
            ContestFields {
                name: "X".to_string(),
                image_url: None,
                description: String::new(),
                price: 0.0,
                prize: None,
                tags: String::new(),
                deadline: None,
            },
        );
        assert!(draft.status.is_pending());
    }
}
