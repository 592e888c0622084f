//! PostgreSQL Repository Implementation

use chrono::{DateTime, Utc};
use contest::models::{ParticipantRoster, Winner};
use kernel::id::{ContestId, PaymentId};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::payment::{Payment, RecordOutcome};
use crate::domain::repository::PaymentRepository;
use crate::error::PaymentResult;

/// PostgreSQL-backed payment repository (payments + rosters)
#[derive(Clone)]
pub struct PgPaymentRepository {
    pool: PgPool,
}

impl PgPaymentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl PaymentRepository for PgPaymentRepository {
    async fn record(
        &self,
        payment: &Payment,
        creator_email: &str,
    ) -> PaymentResult<RecordOutcome> {
        let mut tx = self.pool.begin().await?;

        // The uniqueness constraint on (contest_id, participant_email)
        // makes the duplicate check and the insert one atomic step.
        let inserted = sqlx::query(
            r#"
            INSERT INTO payments (
                payment_id, contest_id, contest_name, participant_email, amount, paid_at
            ) VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (contest_id, participant_email) DO NOTHING
            "#,
        )
        .bind(payment.payment_id.as_uuid())
        .bind(payment.contest_id.as_uuid())
        .bind(&payment.contest_name)
        .bind(&payment.participant_email)
        .bind(payment.amount)
        .bind(payment.paid_at)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        if inserted == 0 {
            return Ok(RecordOutcome::Duplicate);
        }

        // Roster upsert with set semantics on the participant array
        sqlx::query(
            r#"
            INSERT INTO participant_rosters (
                contest_id, contest_name, creator_email, participants, updated_at
            ) VALUES ($1, $2, $3, ARRAY[$4], $5)
            ON CONFLICT (contest_id) DO UPDATE
            SET participants = CASE
                    WHEN participant_rosters.participants @> ARRAY[$4]
                    THEN participant_rosters.participants
                    ELSE array_append(participant_rosters.participants, $4)
                END,
                updated_at = $5
            "#,
        )
        .bind(payment.contest_id.as_uuid())
        .bind(&payment.contest_name)
        .bind(creator_email)
        .bind(&payment.participant_email)
        .bind(Utc::now())
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(RecordOutcome::Recorded)
    }

    async fn list_by_participant(&self, participant_email: &str) -> PaymentResult<Vec<Payment>> {
        let rows = sqlx::query_as::<_, PaymentRow>(
            r#"
            SELECT payment_id, contest_id, contest_name, participant_email, amount, paid_at
            FROM payments
            WHERE participant_email = $1
            ORDER BY paid_at DESC
            "#,
        )
        .bind(participant_email)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(PaymentRow::into_payment).collect())
    }

    async fn rosters_by_creator(
        &self,
        creator_email: &str,
    ) -> PaymentResult<Vec<ParticipantRoster>> {
        let rows = sqlx::query_as::<_, RosterRow>(
            r#"
            SELECT contest_id, contest_name, creator_email, participants,
                   winner_name, winner_image, winner_email, updated_at
            FROM participant_rosters
            WHERE creator_email = $1
            ORDER BY updated_at DESC
            "#,
        )
        .bind(creator_email)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(RosterRow::into_roster).collect())
    }

    async fn rosters_by_winner(&self, winner_email: &str) -> PaymentResult<Vec<ParticipantRoster>> {
        let rows = sqlx::query_as::<_, RosterRow>(
            r#"
            SELECT contest_id, contest_name, creator_email, participants,
                   winner_name, winner_image, winner_email, updated_at
            FROM participant_rosters
            WHERE winner_email = $1
            ORDER BY updated_at DESC
            "#,
        )
        .bind(winner_email)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(RosterRow::into_roster).collect())
    }
}

#[derive(sqlx::FromRow)]
struct PaymentRow {
    payment_id: Uuid,
    contest_id: Uuid,
    contest_name: String,
    participant_email: String,
    amount: f64,
    paid_at: DateTime<Utc>,
}

impl PaymentRow {
    fn into_payment(self) -> Payment {
        Payment {
            payment_id: PaymentId::from_uuid(self.payment_id),
            contest_id: ContestId::from_uuid(self.contest_id),
            contest_name: self.contest_name,
            participant_email: self.participant_email,
            amount: self.amount,
            paid_at: self.paid_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct RosterRow {
    contest_id: Uuid,
    contest_name: String,
    creator_email: String,
    participants: Vec<String>,
    winner_name: Option<String>,
    winner_image: Option<String>,
    winner_email: Option<String>,
    updated_at: DateTime<Utc>,
}

impl RosterRow {
    fn into_roster(self) -> ParticipantRoster {
        let winner = self.winner_email.map(|email| Winner {
            name: self.winner_name.unwrap_or_default(),
            image_url: self.winner_image,
            email,
        });

        ParticipantRoster {
            contest_id: ContestId::from_uuid(self.contest_id),
            contest_name: self.contest_name,
            creator_email: self.creator_email,
            participants: self.participants,
            winner,
            updated_at: self.updated_at,
        }
    }
}
