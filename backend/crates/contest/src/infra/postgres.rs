//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use kernel::id::{ContestId, DraftId};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::contest::{Contest, ContestFields, Winner};
use crate::domain::entity::draft::ContestDraft;
use crate::domain::repository::{ContestRepository, DraftRepository};
use crate::domain::value_object::draft_status::DraftStatus;
use crate::domain::value_object::sort::ContestQuery;
use crate::error::{ContestError, ContestResult};

/// PostgreSQL-backed contest repository (drafts + published contests)
#[derive(Clone)]
pub struct PgContestRepository {
    pool: PgPool,
}

impl PgContestRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Escape LIKE wildcards in user input; queries use `ESCAPE '\'`
fn escape_like(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

// ============================================================================
// Draft Repository Implementation
// ============================================================================

impl DraftRepository for PgContestRepository {
    async fn insert(&self, draft: &ContestDraft) -> ContestResult<()> {
        sqlx::query(
            r#"
            INSERT INTO contest_drafts (
                draft_id,
                creator_email,
                contest_name,
                image_url,
                description,
                price,
                prize,
                tags,
                deadline,
                draft_status,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            "#,
        )
        .bind(draft.draft_id.as_uuid())
        .bind(&draft.creator_email)
        .bind(&draft.fields.name)
        .bind(&draft.fields.image_url)
        .bind(&draft.fields.description)
        .bind(draft.fields.price)
        .bind(&draft.fields.prize)
        .bind(&draft.fields.tags)
        .bind(draft.fields.deadline)
        .bind(draft.status.id())
        .bind(draft.created_at)
        .bind(draft.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, draft_id: &DraftId) -> ContestResult<Option<ContestDraft>> {
        let row = sqlx::query_as::<_, DraftRow>(
            r#"
            SELECT
                draft_id, creator_email, contest_name, image_url, description,
                price, prize, tags, deadline, draft_status, created_at, updated_at
            FROM contest_drafts
            WHERE draft_id = $1
            "#,
        )
        .bind(draft_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(DraftRow::into_draft))
    }

    async fn list_by_creator(&self, creator_email: &str) -> ContestResult<Vec<ContestDraft>> {
        let rows = sqlx::query_as::<_, DraftRow>(
            r#"
            SELECT
                draft_id, creator_email, contest_name, image_url, description,
                price, prize, tags, deadline, draft_status, created_at, updated_at
            FROM contest_drafts
            WHERE creator_email = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(creator_email)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(DraftRow::into_draft).collect())
    }

    async fn list_pending(&self) -> ContestResult<Vec<ContestDraft>> {
        let rows = sqlx::query_as::<_, DraftRow>(
            r#"
            SELECT
                draft_id, creator_email, contest_name, image_url, description,
                price, prize, tags, deadline, draft_status, created_at, updated_at
            FROM contest_drafts
            WHERE draft_status = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(DraftStatus::Pending.id())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(DraftRow::into_draft).collect())
    }

    async fn delete(&self, draft_id: &DraftId) -> ContestResult<bool> {
        let deleted = sqlx::query("DELETE FROM contest_drafts WHERE draft_id = $1")
            .bind(draft_id.as_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }
}

// ============================================================================
// Contest Repository Implementation
// ============================================================================

impl ContestRepository for PgContestRepository {
    async fn publish_confirmed(&self, draft_id: &DraftId, contest: &Contest) -> ContestResult<()> {
        let mut tx = self.pool.begin().await?;

        let confirmed = sqlx::query(
            r#"
            UPDATE contest_drafts
            SET draft_status = $2, updated_at = $3
            WHERE draft_id = $1 AND draft_status = $4
            "#,
        )
        .bind(draft_id.as_uuid())
        .bind(DraftStatus::Confirmed.id())
        .bind(Utc::now())
        .bind(DraftStatus::Pending.id())
        .execute(&mut *tx)
        .await?
        .rows_affected();

        if confirmed == 0 {
            let exists = sqlx::query_scalar::<_, bool>(
                "SELECT EXISTS (SELECT 1 FROM contest_drafts WHERE draft_id = $1)",
            )
            .bind(draft_id.as_uuid())
            .fetch_one(&mut *tx)
            .await?;

            return Err(if exists {
                ContestError::DraftAlreadyConfirmed
            } else {
                ContestError::DraftNotFound
            });
        }

        sqlx::query(
            r#"
            INSERT INTO contests (
                contest_id,
                contest_name,
                image_url,
                description,
                price,
                prize,
                tags,
                deadline,
                participation_count,
                created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(contest.contest_id.as_uuid())
        .bind(&contest.fields.name)
        .bind(&contest.fields.image_url)
        .bind(&contest.fields.description)
        .bind(contest.fields.price)
        .bind(&contest.fields.prize)
        .bind(&contest.fields.tags)
        .bind(contest.fields.deadline)
        .bind(contest.participation_count)
        .bind(contest.created_at)
        .execute(&mut *tx)
        .await
        .map_err(ContestError::PublishStep)?;

        tx.commit().await?;

        Ok(())
    }

    async fn list_published(&self, query: &ContestQuery) -> ContestResult<Vec<Contest>> {
        // Order clause is assembled from allow-listed constants only.
        let order_by = match query.sort {
            Some((field, order)) => format!("{} {}", field.column(), order.sql()),
            None => "created_at DESC".to_string(),
        };

        let rows = if let Some(tags) = &query.tags {
            let sql = format!(
                r#"
                SELECT
                    contest_id, contest_name, image_url, description, price, prize,
                    tags, deadline, participation_count, winner_name, winner_image,
                    winner_email, created_at
                FROM contests
                WHERE tags ILIKE $1 ESCAPE '\'
                ORDER BY {order_by}
                "#
            );
            sqlx::query_as::<_, ContestRow>(&sql)
                .bind(format!("%{}%", escape_like(tags)))
                .fetch_all(&self.pool)
                .await?
        } else {
            let sql = format!(
                r#"
                SELECT
                    contest_id, contest_name, image_url, description, price, prize,
                    tags, deadline, participation_count, winner_name, winner_image,
                    winner_email, created_at
                FROM contests
                ORDER BY {order_by}
                "#
            );
            sqlx::query_as::<_, ContestRow>(&sql)
                .fetch_all(&self.pool)
                .await?
        };

        Ok(rows.into_iter().map(ContestRow::into_contest).collect())
    }

    async fn find_by_id(&self, contest_id: &ContestId) -> ContestResult<Option<Contest>> {
        let row = sqlx::query_as::<_, ContestRow>(
            r#"
            SELECT
                contest_id, contest_name, image_url, description, price, prize,
                tags, deadline, participation_count, winner_name, winner_image,
                winner_email, created_at
            FROM contests
            WHERE contest_id = $1
            "#,
        )
        .bind(contest_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(ContestRow::into_contest))
    }

    async fn delete(&self, contest_id: &ContestId) -> ContestResult<bool> {
        let deleted = sqlx::query("DELETE FROM contests WHERE contest_id = $1")
            .bind(contest_id.as_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }

    async fn increment_participation(&self, contest_id: &ContestId) -> ContestResult<bool> {
        let updated = sqlx::query(
            r#"
            UPDATE contests
            SET participation_count = participation_count + 1
            WHERE contest_id = $1
            "#,
        )
        .bind(contest_id.as_uuid())
        .execute(&self.pool)
        .await?
        .rows_affected();

        Ok(updated > 0)
    }

    async fn set_winner(&self, contest_id: &ContestId, winner: &Winner) -> ContestResult<()> {
        let mut tx = self.pool.begin().await?;

        let current = sqlx::query_scalar::<_, Option<String>>(
            "SELECT winner_email FROM contests WHERE contest_id = $1 FOR UPDATE",
        )
        .bind(contest_id.as_uuid())
        .fetch_optional(&mut *tx)
        .await?;

        match current {
            None => return Err(ContestError::ContestNotFound),
            Some(Some(_)) => return Err(ContestError::WinnerAlreadySelected),
            Some(None) => {}
        }

        sqlx::query(
            r#"
            UPDATE contests
            SET winner_name = $2, winner_image = $3, winner_email = $4
            WHERE contest_id = $1
            "#,
        )
        .bind(contest_id.as_uuid())
        .bind(&winner.name)
        .bind(&winner.image_url)
        .bind(&winner.email)
        .execute(&mut *tx)
        .await?;

        // Mirror into the roster. No roster row means nobody ever paid;
        // the whole transaction rolls back on drop.
        let mirrored = sqlx::query(
            r#"
            UPDATE participant_rosters
            SET winner_name = $2, winner_image = $3, winner_email = $4, updated_at = $5
            WHERE contest_id = $1
            "#,
        )
        .bind(contest_id.as_uuid())
        .bind(&winner.name)
        .bind(&winner.image_url)
        .bind(&winner.email)
        .bind(Utc::now())
        .execute(&mut *tx)
        .await?
        .rows_affected();

        if mirrored == 0 {
            return Err(ContestError::NoParticipants);
        }

        tx.commit().await?;

        Ok(())
    }
}

// ============================================================================
// Row types
// ============================================================================

#[derive(sqlx::FromRow)]
struct DraftRow {
    draft_id: Uuid,
    creator_email: String,
    contest_name: String,
    image_url: Option<String>,
    description: String,
    price: f64,
    prize: Option<String>,
    tags: String,
    deadline: Option<DateTime<Utc>>,
    draft_status: i16,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl DraftRow {
    fn into_draft(self) -> ContestDraft {
        ContestDraft {
            draft_id: DraftId::from_uuid(self.draft_id),
            creator_email: self.creator_email,
            fields: ContestFields {
                name: self.contest_name,
                image_url: self.image_url,
                description: self.description,
                price: self.price,
                prize: self.prize,
                tags: self.tags,
                deadline: self.deadline,
            },
            status: DraftStatus::from_id(self.draft_status),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct ContestRow {
    contest_id: Uuid,
    contest_name: String,
    image_url: Option<String>,
    description: String,
    price: f64,
    prize: Option<String>,
    tags: String,
    deadline: Option<DateTime<Utc>>,
    participation_count: i64,
    winner_name: Option<String>,
    winner_image: Option<String>,
    winner_email: Option<String>,
    created_at: DateTime<Utc>,
}

impl ContestRow {
    fn into_contest(self) -> Contest {
        let winner = self.winner_email.map(|email| Winner {
            name: self.winner_name.unwrap_or_default(),
            image_url: self.winner_image,
            email,
        });

        Contest {
            contest_id: ContestId::from_uuid(self.contest_id),
            fields: ContestFields {
                name: self.contest_name,
                image_url: self.image_url,
                description: self.description,
                price: self.price,
                prize: self.prize,
                tags: self.tags,
                deadline: self.deadline,
            },
            participation_count: self.participation_count,
            winner,
            created_at: self.created_at,
        }
    }
}
