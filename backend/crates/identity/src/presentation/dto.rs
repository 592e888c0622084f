//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entity::user::User;

// ============================================================================
// Token
// ============================================================================

/// POST /jwt request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueTokenRequest {
    pub email: String,
}

/// Token issue / logout response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    pub success: bool,
}

// ============================================================================
// Users
// ============================================================================

/// PUT /users request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpsertUserRequest {
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
}

/// User representation
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub image: Option<String>,
    pub role: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.user_id.into_uuid(),
            email: user.email.into_string(),
            name: user.display_name,
            image: user.image_url,
            role: user.role.code().to_string(),
        }
    }
}

/// PATCH /set-user-role/{id} request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetRoleRequest {
    pub role: String,
}

/// Role change response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetRoleResponse {
    pub id: Uuid,
    pub role: String,
}

// ============================================================================
// Self checks
// ============================================================================

/// GET /user/admin response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminCheckResponse {
    pub admin: bool,
}

/// GET /user/creator/{email} response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatorCheckResponse {
    pub creator: bool,
}
