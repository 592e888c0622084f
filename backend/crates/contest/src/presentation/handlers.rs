//! HTTP Handlers

use axum::Extension;
use axum::Json;
use axum::extract::{Path, Query, State};
use identity::domain::repository::UserRepository;
use identity::middleware::AuthUser;
use kernel::id::{ContestId, DraftId};
use std::sync::Arc;
use uuid::Uuid;

use crate::application::{
    BrowseContestsUseCase, ConfirmDraftUseCase, DeleteDraftUseCase, ReviewDraftsUseCase,
    SelectWinnerUseCase, SubmitDraftUseCase,
};
use crate::domain::repository::{ContestRepository, DraftRepository};
use crate::error::{ContestError, ContestResult};
use crate::presentation::dto::{
    BrowseQuery, ContestPayload, ContestResponse, CreatorQuery, DeleteDraftResponse, DraftResponse,
    JoinResponse, ReviewItemResponse, SelectWinnerRequest, SubmitDraftResponse, WinnerResponse,
};

/// Shared state for contest handlers
#[derive(Clone)]
pub struct ContestAppState<D, C, U>
where
    D: DraftRepository + Clone + Send + Sync + 'static,
    C: ContestRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    pub drafts: Arc<D>,
    pub contests: Arc<C>,
    pub users: Arc<U>,
}

// ============================================================================
// Public browsing
// ============================================================================

/// GET /contests
pub async fn list_contests<D, C, U>(
    State(state): State<ContestAppState<D, C, U>>,
    Query(query): Query<BrowseQuery>,
) -> ContestResult<Json<Vec<ContestResponse>>>
where
    D: DraftRepository + Clone + Send + Sync + 'static,
    C: ContestRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = BrowseContestsUseCase::new(state.contests.clone());

    let contests = use_case
        .list(query.tags, query.sort_field, query.sort_order)
        .await?;

    Ok(Json(contests.into_iter().map(ContestResponse::from).collect()))
}

/// GET /contests/{id}
pub async fn get_contest<D, C, U>(
    State(state): State<ContestAppState<D, C, U>>,
    Path(id): Path<Uuid>,
) -> ContestResult<Json<ContestResponse>>
where
    D: DraftRepository + Clone + Send + Sync + 'static,
    C: ContestRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = BrowseContestsUseCase::new(state.contests.clone());

    let contest = use_case.get(&ContestId::from_uuid(id)).await?;

    Ok(Json(contest.into()))
}

/// PATCH /contest/{id} (count one registration)
pub async fn join_contest<D, C, U>(
    State(state): State<ContestAppState<D, C, U>>,
    Path(id): Path<Uuid>,
) -> ContestResult<Json<JoinResponse>>
where
    D: DraftRepository + Clone + Send + Sync + 'static,
    C: ContestRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = BrowseContestsUseCase::new(state.contests.clone());

    use_case.join(&ContestId::from_uuid(id)).await?;

    Ok(Json(JoinResponse { success: true }))
}

// ============================================================================
// Creator surface
// ============================================================================

/// POST /creator-contest (creator)
pub async fn submit_draft<D, C, U>(
    State(state): State<ContestAppState<D, C, U>>,
    Extension(auth): Extension<AuthUser>,
    Json(payload): Json<ContestPayload>,
) -> ContestResult<Json<SubmitDraftResponse>>
where
    D: DraftRepository + Clone + Send + Sync + 'static,
    C: ContestRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = SubmitDraftUseCase::new(state.drafts.clone());

    let draft_id = use_case.execute(&auth.email, payload.into()).await?;

    Ok(Json(SubmitDraftResponse {
        draft_id: draft_id.into_uuid(),
        success: true,
    }))
}

/// GET /creator/contest?creator= (creator; query email must match token)
pub async fn list_own_drafts<D, C, U>(
    State(state): State<ContestAppState<D, C, U>>,
    Extension(auth): Extension<AuthUser>,
    Query(query): Query<CreatorQuery>,
) -> ContestResult<Json<Vec<DraftResponse>>>
where
    D: DraftRepository + Clone + Send + Sync + 'static,
    C: ContestRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    auth.assert_email(&query.creator)
        .map_err(ContestError::Identity)?;

    let use_case = ReviewDraftsUseCase::new(state.drafts.clone(), state.contests.clone());

    let drafts = use_case.list_for_creator(auth.email.as_str()).await?;

    Ok(Json(drafts.into_iter().map(DraftResponse::from).collect()))
}

/// DELETE /creator/contest/{id} (creator; own drafts only)
pub async fn delete_own_draft<D, C, U>(
    State(state): State<ContestAppState<D, C, U>>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> ContestResult<Json<DeleteDraftResponse>>
where
    D: DraftRepository + Clone + Send + Sync + 'static,
    C: ContestRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = DeleteDraftUseCase::new(state.drafts.clone(), state.contests.clone());

    let report = use_case
        .execute_creator(&DraftId::from_uuid(id), &auth.email)
        .await?;

    Ok(Json(report.into()))
}

/// PATCH /selected-winner (creator)
pub async fn select_winner<D, C, U>(
    State(state): State<ContestAppState<D, C, U>>,
    Json(req): Json<SelectWinnerRequest>,
) -> ContestResult<Json<WinnerResponse>>
where
    D: DraftRepository + Clone + Send + Sync + 'static,
    C: ContestRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = SelectWinnerUseCase::new(state.contests.clone(), state.users.clone());

    let winner = use_case
        .execute(&ContestId::from_uuid(req.contest_id), &req.winner_email)
        .await?;

    Ok(Json(winner.into()))
}

// ============================================================================
// Admin surface
// ============================================================================

/// GET /get-pending-contests (admin)
pub async fn list_pending<D, C, U>(
    State(state): State<ContestAppState<D, C, U>>,
) -> ContestResult<Json<Vec<ReviewItemResponse>>>
where
    D: DraftRepository + Clone + Send + Sync + 'static,
    C: ContestRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = ReviewDraftsUseCase::new(state.drafts.clone(), state.contests.clone());

    let items = use_case.list_pending().await?;

    Ok(Json(
        items.into_iter().map(ReviewItemResponse::from).collect(),
    ))
}

/// DELETE /delete-pending-contest/{id} (admin)
pub async fn delete_pending<D, C, U>(
    State(state): State<ContestAppState<D, C, U>>,
    Path(id): Path<Uuid>,
) -> ContestResult<Json<DeleteDraftResponse>>
where
    D: DraftRepository + Clone + Send + Sync + 'static,
    C: ContestRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = DeleteDraftUseCase::new(state.drafts.clone(), state.contests.clone());

    let report = use_case.execute_admin(&DraftId::from_uuid(id)).await?;

    Ok(Json(report.into()))
}

/// PATCH /confirm-pending-contest/{id} (admin)
pub async fn confirm_pending<D, C, U>(
    State(state): State<ContestAppState<D, C, U>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ContestPayload>,
) -> ContestResult<Json<ContestResponse>>
where
    D: DraftRepository + Clone + Send + Sync + 'static,
    C: ContestRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = ConfirmDraftUseCase::new(state.contests.clone());

    let contest = use_case
        .execute(&DraftId::from_uuid(id), payload.into())
        .await?;

    Ok(Json(contest.into()))
}
