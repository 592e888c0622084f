//! HTTP Handlers

use axum::Json;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use axum::Extension;
use kernel::id::UserId;
use std::sync::Arc;
use uuid::Uuid;

use crate::application::config::IdentityConfig;
use crate::application::{
    ListUsersUseCase, RoleCheckUseCase, SetRoleUseCase, TokenService, UpsertUserInput,
    UpsertUserUseCase,
};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::email::Email;
use crate::error::IdentityResult;
use crate::presentation::dto::{
    AdminCheckResponse, CreatorCheckResponse, IssueTokenRequest, SetRoleRequest, SetRoleResponse,
    TokenResponse, UpsertUserRequest, UserResponse,
};
use crate::presentation::middleware::AuthUser;

/// Shared state for identity handlers
#[derive(Clone)]
pub struct IdentityAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<IdentityConfig>,
}

// ============================================================================
// Token issue / logout
// ============================================================================

/// POST /jwt
pub async fn issue_token<R>(
    State(state): State<IdentityAppState<R>>,
    Json(req): Json<IssueTokenRequest>,
) -> IdentityResult<impl IntoResponse>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let email = Email::new(req.email)?;

    let token = TokenService::new(&state.config).issue(&email)?;

    let cookie = state.config.cookie.build_set_cookie(&token);

    tracing::debug!(email = %email, "Issued identity token");

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(TokenResponse { success: true }),
    ))
}

/// GET /logout
pub async fn logout<R>(
    State(state): State<IdentityAppState<R>>,
) -> IdentityResult<impl IntoResponse>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let cookie = state.config.cookie.build_delete_cookie();

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(TokenResponse { success: true }),
    ))
}

// ============================================================================
// Users
// ============================================================================

/// PUT /users
pub async fn upsert_user<R>(
    State(state): State<IdentityAppState<R>>,
    Json(req): Json<UpsertUserRequest>,
) -> IdentityResult<Json<UserResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = UpsertUserUseCase::new(state.repo.clone());

    let input = UpsertUserInput {
        email: req.email,
        display_name: req.name,
        image_url: req.image,
    };

    let user = use_case.execute(input).await?;

    Ok(Json(user.into()))
}

/// GET /get-all-users (admin)
pub async fn list_users<R>(
    State(state): State<IdentityAppState<R>>,
) -> IdentityResult<Json<Vec<UserResponse>>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListUsersUseCase::new(state.repo.clone());

    let users = use_case.execute().await?;

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// PATCH /set-user-role/{id} (admin)
pub async fn set_user_role<R>(
    State(state): State<IdentityAppState<R>>,
    Path(id): Path<Uuid>,
    Json(req): Json<SetRoleRequest>,
) -> IdentityResult<Json<SetRoleResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = SetRoleUseCase::new(state.repo.clone());

    let user_id = UserId::from_uuid(id);
    let role = use_case.execute(&user_id, &req.role).await?;

    Ok(Json(SetRoleResponse {
        id,
        role: role.code().to_string(),
    }))
}

// ============================================================================
// Self checks
// ============================================================================

/// GET /user/admin (authenticated; answers for the token's own email)
pub async fn admin_check<R>(
    State(state): State<IdentityAppState<R>>,
    Extension(auth): Extension<AuthUser>,
) -> IdentityResult<Json<AdminCheckResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = RoleCheckUseCase::new(state.repo.clone());

    let admin = use_case.is_admin(&auth.email).await?;

    Ok(Json(AdminCheckResponse { admin }))
}

/// GET /user/creator/{email} (authenticated; path email must match token)
pub async fn creator_check<R>(
    State(state): State<IdentityAppState<R>>,
    Extension(auth): Extension<AuthUser>,
    Path(email): Path<String>,
) -> IdentityResult<Json<CreatorCheckResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    auth.assert_email(&email)?;

    let use_case = RoleCheckUseCase::new(state.repo.clone());

    let creator = use_case.is_creator(&auth.email).await?;

    Ok(Json(CreatorCheckResponse { creator }))
}
