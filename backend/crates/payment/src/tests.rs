//! Unit tests for the payment crate use cases, backed by in-memory
//! stores and a scripted gateway.

use std::sync::{Arc, Mutex};

use contest::models::{ParticipantRoster, Winner};
use kernel::id::ContestId;

use crate::application::config::PaymentConfig;
use crate::application::{
    CreateIntentUseCase, ListPaymentsUseCase, RecordPaymentInput, RecordPaymentUseCase,
    RosterQueriesUseCase,
};
use crate::domain::entity::payment::{Payment, RecordOutcome};
use crate::domain::gateway::PaymentGateway;
use crate::domain::repository::PaymentRepository;
use crate::error::{PaymentError, PaymentResult};

/// In-memory payment + roster store with the same idempotency contract
/// as the PostgreSQL implementation
#[derive(Clone, Default)]
struct MemoryPaymentStore {
    payments: Arc<Mutex<Vec<Payment>>>,
    rosters: Arc<Mutex<Vec<ParticipantRoster>>>,
}

impl MemoryPaymentStore {
    fn set_winner(&self, contest_id: &ContestId, winner: Winner) {
        let mut rosters = self.rosters.lock().unwrap();
        let roster = rosters
            .iter_mut()
            .find(|r| &r.contest_id == contest_id)
            .unwrap();
        roster.winner = Some(winner);
    }
}

impl PaymentRepository for MemoryPaymentStore {
    async fn record(
        &self,
        payment: &Payment,
        creator_email: &str,
    ) -> PaymentResult<RecordOutcome> {
        let mut payments = self.payments.lock().unwrap();
        let duplicate = payments.iter().any(|p| {
            p.contest_id == payment.contest_id
                && p.participant_email == payment.participant_email
        });
        if duplicate {
            return Ok(RecordOutcome::Duplicate);
        }
        payments.push(payment.clone());

        let mut rosters = self.rosters.lock().unwrap();
        match rosters
            .iter_mut()
            .find(|r| r.contest_id == payment.contest_id)
        {
            Some(roster) => roster.add_participant(payment.participant_email.clone()),
            None => rosters.push(ParticipantRoster::first(
                payment.contest_id,
                payment.contest_name.clone(),
                creator_email.to_string(),
                payment.participant_email.clone(),
            )),
        }

        Ok(RecordOutcome::Recorded)
    }

    async fn list_by_participant(&self, participant_email: &str) -> PaymentResult<Vec<Payment>> {
        Ok(self
            .payments
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.participant_email == participant_email)
            .cloned()
            .collect())
    }

    async fn rosters_by_creator(
        &self,
        creator_email: &str,
    ) -> PaymentResult<Vec<ParticipantRoster>> {
        Ok(self
            .rosters
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.creator_email == creator_email)
            .cloned()
            .collect())
    }

    async fn rosters_by_winner(&self, winner_email: &str) -> PaymentResult<Vec<ParticipantRoster>> {
        Ok(self
            .rosters
            .lock()
            .unwrap()
            .iter()
            .filter(|r| {
                r.winner
                    .as_ref()
                    .is_some_and(|w| w.email == winner_email)
            })
            .cloned()
            .collect())
    }
}

/// Scripted gateway that records the forwarded amounts
#[derive(Clone, Default)]
struct MockGateway {
    requests: Arc<Mutex<Vec<(i64, String)>>>,
    fail: bool,
}

impl PaymentGateway for MockGateway {
    async fn create_intent(&self, amount_minor: i64, currency: &str) -> PaymentResult<String> {
        if self.fail {
            return Err(PaymentError::Provider("scripted failure".to_string()));
        }
        self.requests
            .lock()
            .unwrap()
            .push((amount_minor, currency.to_string()));
        Ok(format!("pi_secret_{amount_minor}"))
    }
}

fn store() -> Arc<MemoryPaymentStore> {
    Arc::new(MemoryPaymentStore::default())
}

fn input(contest_id: ContestId, participant: &str) -> RecordPaymentInput {
    RecordPaymentInput {
        contest_id,
        contest_name: "Logo Design".to_string(),
        participant_email: participant.to_string(),
        creator_email: "creator@test.com".to_string(),
        amount: 10.0,
    }
}

// ============================================================================
// Recording
// ============================================================================

#[tokio::test]
async fn double_record_yields_one_payment_and_a_duplicate() {
    let store = store();
    let record = RecordPaymentUseCase::new(store.clone());
    let contest_id = ContestId::new();

    let first = record.execute(input(contest_id, "b@test.com")).await.unwrap();
    assert_eq!(first, RecordOutcome::Recorded);

    let second = record.execute(input(contest_id, "b@test.com")).await.unwrap();
    assert_eq!(second, RecordOutcome::Duplicate);

    let payments = ListPaymentsUseCase::new(store.clone())
        .for_participant("b@test.com")
        .await
        .unwrap();
    assert_eq!(payments.len(), 1);

    let rosters = store.rosters.lock().unwrap();
    assert_eq!(rosters.len(), 1);
    assert_eq!(rosters[0].participants, vec!["b@test.com"]);
}

#[tokio::test]
async fn n_participants_make_n_unique_roster_members() {
    let store = store();
    let record = RecordPaymentUseCase::new(store.clone());
    let contest_id = ContestId::new();

    for participant in ["a@test.com", "b@test.com", "c@test.com", "a@test.com"] {
        record.execute(input(contest_id, participant)).await.unwrap();
    }

    let rosters = store.rosters.lock().unwrap();
    assert_eq!(rosters[0].participants.len(), 3);
    assert_eq!(store.payments.lock().unwrap().len(), 3);
}

#[tokio::test]
async fn record_normalizes_and_validates_emails() {
    let store = store();
    let record = RecordPaymentUseCase::new(store.clone());
    let contest_id = ContestId::new();

    record
        .execute(input(contest_id, " B@Test.Com "))
        .await
        .unwrap();

    // normalized on the way in, so the raw spelling is a duplicate
    let repeat = record.execute(input(contest_id, "b@test.com")).await.unwrap();
    assert_eq!(repeat, RecordOutcome::Duplicate);

    let invalid = record.execute(input(contest_id, "not-an-email")).await;
    assert!(matches!(invalid, Err(PaymentError::Validation(_))));
}

// ============================================================================
// Roster queries
// ============================================================================

#[tokio::test]
async fn roster_queries_filter_by_creator_and_winner() {
    let store = store();
    let record = RecordPaymentUseCase::new(store.clone());

    let won = ContestId::new();
    let other = ContestId::new();
    record.execute(input(won, "b@test.com")).await.unwrap();
    record
        .execute(RecordPaymentInput {
            creator_email: "second@test.com".to_string(),
            ..input(other, "b@test.com")
        })
        .await
        .unwrap();

    store.set_winner(
        &won,
        Winner {
            name: "Bea".to_string(),
            image_url: None,
            email: "b@test.com".to_string(),
        },
    );

    let queries = RosterQueriesUseCase::new(store.clone());

    let mine = queries.for_creator("creator@test.com").await.unwrap();
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].contest_id, won);

    let wins = queries.won_by("b@test.com").await.unwrap();
    assert_eq!(wins.len(), 1);
    assert_eq!(wins[0].contest_id, won);

    assert!(queries.won_by("a@test.com").await.unwrap().is_empty());
}

// ============================================================================
// Intent bridge
// ============================================================================

#[tokio::test]
async fn create_intent_converts_to_minor_units() {
    let gateway = Arc::new(MockGateway::default());
    let use_case = CreateIntentUseCase::new(gateway.clone(), Arc::new(PaymentConfig::development()));

    let secret = use_case.execute(Some(10.0)).await.unwrap();
    assert_eq!(secret, "pi_secret_1000");

    let requests = gateway.requests.lock().unwrap();
    assert_eq!(requests.as_slice(), &[(1000, "usd".to_string())]);
}

#[tokio::test]
async fn create_intent_rejects_missing_or_tiny_price() {
    let gateway = Arc::new(MockGateway::default());
    let use_case = CreateIntentUseCase::new(gateway.clone(), Arc::new(PaymentConfig::development()));

    assert!(matches!(
        use_case.execute(None).await,
        Err(PaymentError::InvalidAmount)
    ));
    assert!(matches!(
        use_case.execute(Some(0.001)).await,
        Err(PaymentError::InvalidAmount)
    ));

    // nothing reached the provider
    assert!(gateway.requests.lock().unwrap().is_empty());
}

#[tokio::test]
async fn create_intent_surfaces_provider_failure() {
    let gateway = Arc::new(MockGateway {
        fail: true,
        ..Default::default()
    });
    let use_case = CreateIntentUseCase::new(gateway, Arc::new(PaymentConfig::development()));

    let result = use_case.execute(Some(10.0)).await;
    assert!(matches!(result, Err(PaymentError::Provider(_))));
}

// ============================================================================
// End-to-end participation flow
// ============================================================================

mod scenario {
    use super::*;
    use contest::application::{BrowseContestsUseCase, ConfirmDraftUseCase, SubmitDraftUseCase};
    use contest::models::{Contest, ContestDraft, ContestFields, ContestQuery, DraftStatus};
    use contest::{ContestError, ContestResult};
    use identity::models::Email;
    use kernel::id::DraftId;

    /// Just enough of a contest store for the flow under test
    #[derive(Clone, Default)]
    struct MemoryContestStore {
        drafts: Arc<Mutex<Vec<ContestDraft>>>,
        contests: Arc<Mutex<Vec<Contest>>>,
    }

    impl contest::domain::repository::DraftRepository for MemoryContestStore {
        async fn insert(&self, draft: &ContestDraft) -> ContestResult<()> {
            self.drafts.lock().unwrap().push(draft.clone());
            Ok(())
        }

        async fn find_by_id(&self, draft_id: &DraftId) -> ContestResult<Option<ContestDraft>> {
            Ok(self
                .drafts
                .lock()
                .unwrap()
                .iter()
                .find(|d| &d.draft_id == draft_id)
                .cloned())
        }

        async fn list_by_creator(&self, creator_email: &str) -> ContestResult<Vec<ContestDraft>> {
            Ok(self
                .drafts
                .lock()
                .unwrap()
                .iter()
                .filter(|d| d.creator_email == creator_email)
                .cloned()
                .collect())
        }

        async fn list_pending(&self) -> ContestResult<Vec<ContestDraft>> {
            Ok(self
                .drafts
                .lock()
                .unwrap()
                .iter()
                .filter(|d| d.status.is_pending())
                .cloned()
                .collect())
        }

        async fn delete(&self, draft_id: &DraftId) -> ContestResult<bool> {
            let mut drafts = self.drafts.lock().unwrap();
            let before = drafts.len();
            drafts.retain(|d| &d.draft_id != draft_id);
            Ok(drafts.len() < before)
        }
    }

    impl contest::domain::repository::ContestRepository for MemoryContestStore {
        async fn publish_confirmed(
            &self,
            draft_id: &DraftId,
            contest: &Contest,
        ) -> ContestResult<()> {
            let mut drafts = self.drafts.lock().unwrap();
            let draft = drafts
                .iter_mut()
                .find(|d| &d.draft_id == draft_id)
                .ok_or(ContestError::DraftNotFound)?;
            if !draft.status.is_pending() {
                return Err(ContestError::DraftAlreadyConfirmed);
            }
            draft.status = DraftStatus::Confirmed;
            self.contests.lock().unwrap().push(contest.clone());
            Ok(())
        }

        async fn list_published(&self, _query: &ContestQuery) -> ContestResult<Vec<Contest>> {
            Ok(self.contests.lock().unwrap().clone())
        }

        async fn find_by_id(&self, contest_id: &ContestId) -> ContestResult<Option<Contest>> {
            Ok(self
                .contests
                .lock()
                .unwrap()
                .iter()
                .find(|c| &c.contest_id == contest_id)
                .cloned())
        }

        async fn delete(&self, contest_id: &ContestId) -> ContestResult<bool> {
            let mut contests = self.contests.lock().unwrap();
            let before = contests.len();
            contests.retain(|c| &c.contest_id != contest_id);
            Ok(contests.len() < before)
        }

        async fn increment_participation(&self, contest_id: &ContestId) -> ContestResult<bool> {
            let mut contests = self.contests.lock().unwrap();
            match contests.iter_mut().find(|c| &c.contest_id == contest_id) {
                Some(contest) => {
                    contest.participation_count += 1;
                    Ok(true)
                }
                None => Ok(false),
            }
        }

        async fn set_winner(
            &self,
            _contest_id: &ContestId,
            _winner: &contest::models::Winner,
        ) -> ContestResult<()> {
            unimplemented!("not part of the participation flow")
        }
    }

    #[tokio::test]
    async fn submit_confirm_pay_and_repeat() {
        let contests = Arc::new(MemoryContestStore::default());
        let payments = store();
        let gateway = Arc::new(MockGateway::default());

        // creator A submits a draft
        let creator = Email::new("a@test.com").unwrap();
        let draft_id = SubmitDraftUseCase::new(contests.clone())
            .execute(
                &creator,
                ContestFields {
                    name: "Logo Design".to_string(),
                    image_url: None,
                    description: "Design a logo".to_string(),
                    price: 10.0,
                    prize: None,
                    tags: "Art".to_string(),
                    deadline: None,
                },
            )
            .await
            .unwrap();

        // admin confirms with a priced payload
        let contest = ConfirmDraftUseCase::new(contests.clone())
            .execute(
                &draft_id,
                ContestFields {
                    name: "Logo Design".to_string(),
                    image_url: None,
                    description: "Design a logo".to_string(),
                    price: 10.0,
                    prize: None,
                    tags: "Art".to_string(),
                    deadline: None,
                },
            )
            .await
            .unwrap();

        // the publication is publicly listed
        let listed = BrowseContestsUseCase::new(contests.clone())
            .list(None, None, None)
            .await
            .unwrap();
        assert!(listed.iter().any(|c| c.contest_id == contest.contest_id));

        // participant B gets a client secret for the entry price
        let secret = CreateIntentUseCase::new(gateway, Arc::new(PaymentConfig::development()))
            .execute(Some(contest.fields.price))
            .await
            .unwrap();
        assert_eq!(secret, "pi_secret_1000");

        // B's completed payment is recorded once
        let record = RecordPaymentUseCase::new(payments.clone());
        let pay = RecordPaymentInput {
            contest_id: contest.contest_id,
            contest_name: contest.fields.name.clone(),
            participant_email: "b@test.com".to_string(),
            creator_email: "a@test.com".to_string(),
            amount: contest.fields.price,
        };

        assert_eq!(
            record.execute(pay.clone()).await.unwrap(),
            RecordOutcome::Recorded
        );

        let listed = ListPaymentsUseCase::new(payments.clone())
            .for_participant("b@test.com")
            .await
            .unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].contest_id, contest.contest_id);

        // repeating the call is a duplicate marker, not a second record
        assert_eq!(
            record.execute(pay).await.unwrap(),
            RecordOutcome::Duplicate
        );
        assert_eq!(
            ListPaymentsUseCase::new(payments.clone())
                .for_participant("b@test.com")
                .await
                .unwrap()
                .len(),
            1
        );
    }
}
