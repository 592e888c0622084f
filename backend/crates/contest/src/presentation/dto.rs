//! Data Transfer Objects

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::{DeleteReport, ReviewItem};
use crate::domain::entity::contest::{Contest, ContestFields, Winner};
use crate::domain::entity::draft::ContestDraft;

/// Contest payload shared by draft submission and admin confirmation
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContestPayload {
    pub name: String,
    pub image: Option<String>,
    pub description: String,
    pub price: f64,
    pub prize: Option<String>,
    #[serde(default)]
    pub tags: String,
    pub deadline: Option<DateTime<Utc>>,
}

impl From<ContestPayload> for ContestFields {
    fn from(payload: ContestPayload) -> Self {
        ContestFields {
            name: payload.name,
            image_url: payload.image,
            description: payload.description,
            price: payload.price,
            prize: payload.prize,
            tags: payload.tags,
            deadline: payload.deadline,
        }
    }
}

/// Browse query parameters for the public contest listing
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrowseQuery {
    pub tags: Option<String>,
    pub sort_field: Option<String>,
    pub sort_order: Option<String>,
}

/// Creator query parameter for the own-draft listing
#[derive(Debug, Deserialize)]
pub struct CreatorQuery {
    pub creator: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitDraftResponse {
    pub draft_id: Uuid,
    pub success: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteDraftResponse {
    pub success: bool,
    pub draft_deleted: bool,
    pub contest_deleted: bool,
}

impl From<DeleteReport> for DeleteDraftResponse {
    fn from(report: DeleteReport) -> Self {
        Self {
            success: true,
            draft_deleted: report.draft_deleted,
            contest_deleted: report.contest_deleted,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinResponse {
    pub success: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectWinnerRequest {
    pub contest_id: Uuid,
    pub winner_email: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WinnerResponse {
    pub name: String,
    pub image: Option<String>,
    pub email: String,
}

impl From<Winner> for WinnerResponse {
    fn from(winner: Winner) -> Self {
        Self {
            name: winner.name,
            image: winner.image_url,
            email: winner.email,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftResponse {
    pub id: Uuid,
    pub creator_email: String,
    pub name: String,
    pub image: Option<String>,
    pub description: String,
    pub price: f64,
    pub prize: Option<String>,
    pub tags: String,
    pub deadline: Option<DateTime<Utc>>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl From<ContestDraft> for DraftResponse {
    fn from(draft: ContestDraft) -> Self {
        Self {
            id: draft.draft_id.into_uuid(),
            creator_email: draft.creator_email,
            name: draft.fields.name,
            image: draft.fields.image_url,
            description: draft.fields.description,
            price: draft.fields.price,
            prize: draft.fields.prize,
            tags: draft.fields.tags,
            deadline: draft.fields.deadline,
            status: draft.status.code().to_string(),
            created_at: draft.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContestResponse {
    pub id: Uuid,
    pub name: String,
    pub image: Option<String>,
    pub description: String,
    pub price: f64,
    pub prize: Option<String>,
    pub tags: String,
    pub deadline: Option<DateTime<Utc>>,
    pub participation_count: i64,
    pub winner: Option<WinnerResponse>,
    pub created_at: DateTime<Utc>,
}

impl From<Contest> for ContestResponse {
    fn from(contest: Contest) -> Self {
        Self {
            id: contest.contest_id.into_uuid(),
            name: contest.fields.name,
            image: contest.fields.image_url,
            description: contest.fields.description,
            price: contest.fields.price,
            prize: contest.fields.prize,
            tags: contest.fields.tags,
            deadline: contest.fields.deadline,
            participation_count: contest.participation_count,
            winner: contest.winner.map(WinnerResponse::from),
            created_at: contest.created_at,
        }
    }
}

/// One entry of the admin review listing; `kind` discriminates drafts
/// from already-published contests
#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ReviewItemResponse {
    Draft(DraftResponse),
    Published(ContestResponse),
}

impl From<ReviewItem> for ReviewItemResponse {
    fn from(item: ReviewItem) -> Self {
        match item {
            ReviewItem::Draft(draft) => ReviewItemResponse::Draft(draft.into()),
            ReviewItem::Published(contest) => ReviewItemResponse::Published(contest.into()),
        }
    }
}
