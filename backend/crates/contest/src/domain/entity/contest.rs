//! Published Contest Entity

use chrono::{DateTime, Utc};
use kernel::id::ContestId;

/// Descriptive contest fields shared by drafts and published contests
#[derive(Debug, Clone, PartialEq)]
pub struct ContestFields {
    pub name: String,
    pub image_url: Option<String>,
    pub description: String,
    /// Entry price in major currency units
    pub price: f64,
    pub prize: Option<String>,
    /// Comma-separated tag list, filtered by substring match
    pub tags: String,
    pub deadline: Option<DateTime<Utc>>,
}

/// Winner fields, write-once per contest
#[derive(Debug, Clone, PartialEq)]
pub struct Winner {
    pub name: String,
    pub image_url: Option<String>,
    pub email: String,
}

/// Published contest - created only by confirming a draft
#[derive(Debug, Clone)]
pub struct Contest {
    pub contest_id: ContestId,
    pub fields: ContestFields,
    pub participation_count: i64,
    pub winner: Option<Winner>,
    pub created_at: DateTime<Utc>,
}

impl Contest {
    /// Create a fresh publication from the admin-supplied payload
    pub fn new(fields: ContestFields) -> Self {
        Self {
            contest_id: ContestId::new(),
            fields,
            participation_count: 0,
            winner: None,
            created_at: Utc::now(),
        }
    }
}
