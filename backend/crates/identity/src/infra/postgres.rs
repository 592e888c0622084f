//! PostgreSQL Repository Implementation

use chrono::{DateTime, Utc};
use kernel::id::UserId;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::user::{User, UserProfile};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{email::Email, user_role::UserRole};
use crate::error::{IdentityError, IdentityResult};

/// PostgreSQL-backed user repository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl UserRepository for PgUserRepository {
    async fn upsert(&self, profile: &UserProfile) -> IdentityResult<User> {
        let now = Utc::now();

        // Role is intentionally absent from the DO UPDATE set list.
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (
                user_id,
                email,
                display_name,
                image_url,
                user_role,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $6)
            ON CONFLICT (email) DO UPDATE SET
                display_name = EXCLUDED.display_name,
                image_url = EXCLUDED.image_url,
                updated_at = EXCLUDED.updated_at
            RETURNING
                user_id,
                email,
                display_name,
                image_url,
                user_role,
                created_at,
                updated_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(profile.email.as_str())
        .bind(&profile.display_name)
        .bind(&profile.image_url)
        .bind(UserRole::default().id())
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        row.into_user()
    }

    async fn find_by_email(&self, email: &Email) -> IdentityResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                user_id,
                email,
                display_name,
                image_url,
                user_role,
                created_at,
                updated_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_user()).transpose()
    }

    async fn find_by_id(&self, user_id: &UserId) -> IdentityResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                user_id,
                email,
                display_name,
                image_url,
                user_role,
                created_at,
                updated_at
            FROM users
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_user()).transpose()
    }

    async fn list_all(&self) -> IdentityResult<Vec<User>> {
        let rows = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                user_id,
                email,
                display_name,
                image_url,
                user_role,
                created_at,
                updated_at
            FROM users
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(|r| r.into_user()).collect()
    }

    async fn set_role(&self, user_id: &UserId, role: UserRole) -> IdentityResult<bool> {
        let updated = sqlx::query(
            r#"
            UPDATE users
            SET user_role = $2, updated_at = $3
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_uuid())
        .bind(role.id())
        .bind(Utc::now())
        .execute(&self.pool)
        .await?
        .rows_affected();

        Ok(updated > 0)
    }
}

// ============================================================================
// Row types
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    user_id: Uuid,
    email: String,
    display_name: String,
    image_url: Option<String>,
    user_role: i16,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> IdentityResult<User> {
        Ok(User {
            user_id: UserId::from_uuid(self.user_id),
            email: Email::new(self.email)
                .map_err(|e| IdentityError::Internal(format!("Corrupt email in store: {e}")))?,
            display_name: self.display_name,
            image_url: self.image_url,
            role: UserRole::from_id(self.user_role),
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}
