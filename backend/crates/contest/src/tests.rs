//! Unit tests for the contest crate use cases, backed by an in-memory
//! store that mirrors the transactional semantics of the PostgreSQL
//! implementation.

use std::cmp::Ordering;
use std::sync::{Arc, Mutex};

use identity::domain::entity::user::{User, UserProfile};
use identity::domain::repository::UserRepository;
use identity::models::{Email, UserRole};
use identity::IdentityResult;
use kernel::id::{ContestId, DraftId, UserId};

use crate::application::{
    BrowseContestsUseCase, ConfirmDraftUseCase, DeleteDraftUseCase, ReviewDraftsUseCase,
    ReviewItem, SelectWinnerUseCase, SubmitDraftUseCase,
};
use crate::domain::entity::contest::{Contest, ContestFields, Winner};
use crate::domain::entity::draft::ContestDraft;
use crate::domain::entity::roster::ParticipantRoster;
use crate::domain::repository::{ContestRepository, DraftRepository};
use crate::domain::value_object::draft_status::DraftStatus;
use crate::domain::value_object::sort::{ContestQuery, SortField, SortOrder};
use crate::error::{ContestError, ContestResult};

/// In-memory draft + contest + roster store. Multi-step operations
/// check all their preconditions before mutating, so a failure leaves
/// the store untouched, the way the real transactions do.
#[derive(Clone, Default)]
struct MemoryContestStore {
    drafts: Arc<Mutex<Vec<ContestDraft>>>,
    contests: Arc<Mutex<Vec<Contest>>>,
    rosters: Arc<Mutex<Vec<ParticipantRoster>>>,
}

impl MemoryContestStore {
    fn seed_roster(&self, contest: &Contest, creator: &str, participants: &[&str]) {
        let mut roster = ParticipantRoster::first(
            contest.contest_id,
            contest.fields.name.clone(),
            creator.to_string(),
            participants[0].to_string(),
        );
        for participant in &participants[1..] {
            roster.add_participant(participant.to_string());
        }
        self.rosters.lock().unwrap().push(roster);
    }
}

impl DraftRepository for MemoryContestStore {
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

impl ContestRepository for MemoryContestStore {
    async fn publish_confirmed(&self, draft_id: &DraftId, contest: &Contest) -> ContestResult<()> {
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

    async fn list_published(&self, query: &ContestQuery) -> ContestResult<Vec<Contest>> {
        let mut contests: Vec<Contest> = self
            .contests
            .lock()
            .unwrap()
            .iter()
            .filter(|c| match &query.tags {
                Some(tags) => c
                    .fields
                    .tags
                    .to_lowercase()
                    .contains(&tags.to_lowercase()),
                None => true,
            })
            .cloned()
            .collect();

        match query.sort {
            Some((field, order)) => {
                contests.sort_by(|a, b| {
                    let by = match field {
                        SortField::Name => a.fields.name.cmp(&b.fields.name),
                        SortField::Price => a
                            .fields
                            .price
                            .partial_cmp(&b.fields.price)
                            .unwrap_or(Ordering::Equal),
                        SortField::ParticipationCount => {
                            a.participation_count.cmp(&b.participation_count)
                        }
                        SortField::Deadline => a.fields.deadline.cmp(&b.fields.deadline),
                        SortField::CreatedAt => a.created_at.cmp(&b.created_at),
                    };
                    match order {
                        SortOrder::Asc => by,
                        SortOrder::Desc => by.reverse(),
                    }
                });
            }
            None => contests.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        }

        Ok(contests)
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

    async fn set_winner(&self, contest_id: &ContestId, winner: &Winner) -> ContestResult<()> {
        let mut contests = self.contests.lock().unwrap();
        let mut rosters = self.rosters.lock().unwrap();

        let contest = contests
            .iter_mut()
            .find(|c| &c.contest_id == contest_id)
            .ok_or(ContestError::ContestNotFound)?;

        if contest.winner.is_some() {
            return Err(ContestError::WinnerAlreadySelected);
        }

        let roster = rosters
            .iter_mut()
            .find(|r| &r.contest_id == contest_id)
            .ok_or(ContestError::NoParticipants)?;

        contest.winner = Some(winner.clone());
        roster.winner = Some(winner.clone());
        Ok(())
    }
}

/// Minimal in-memory user store for winner resolution
#[derive(Clone, Default)]
struct MemoryUserRepository {
    users: Arc<Mutex<Vec<User>>>,
}

impl MemoryUserRepository {
    fn seed(&self, email: &str, name: &str, image: Option<&str>) {
        let user = User::new(UserProfile {
            email: Email::new(email).unwrap(),
            display_name: name.to_string(),
            image_url: image.map(str::to_string),
        });
        self.users.lock().unwrap().push(user);
    }
}

impl UserRepository for MemoryUserRepository {
    async fn upsert(&self, profile: &UserProfile) -> IdentityResult<User> {
        let user = User::new(profile.clone());
        self.users.lock().unwrap().push(user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &Email) -> IdentityResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| &u.email == email)
            .cloned())
    }

    async fn find_by_id(&self, user_id: &UserId) -> IdentityResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| &u.user_id == user_id)
            .cloned())
    }

    async fn list_all(&self) -> IdentityResult<Vec<User>> {
        Ok(self.users.lock().unwrap().clone())
    }

    async fn set_role(&self, user_id: &UserId, role: UserRole) -> IdentityResult<bool> {
        let mut users = self.users.lock().unwrap();
        match users.iter_mut().find(|u| &u.user_id == user_id) {
            Some(user) => {
                user.role = role;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

fn store() -> Arc<MemoryContestStore> {
    Arc::new(MemoryContestStore::default())
}

fn fields(name: &str, price: f64, tags: &str) -> ContestFields {
    ContestFields {
        name: name.to_string(),
        image_url: None,
        description: format!("{name} description"),
        price,
        prize: Some("$500".to_string()),
        tags: tags.to_string(),
        deadline: None,
    }
}

fn creator() -> Email {
    Email::new("creator@test.com").unwrap()
}

async fn submit(store: &Arc<MemoryContestStore>, name: &str, price: f64, tags: &str) -> DraftId {
    SubmitDraftUseCase::new(store.clone())
        .execute(&creator(), fields(name, price, tags))
        .await
        .unwrap()
}

async fn confirm(store: &Arc<MemoryContestStore>, draft_id: &DraftId, name: &str) -> Contest {
    ConfirmDraftUseCase::new(store.clone())
        .execute(draft_id, fields(name, 25.0, "Art"))
        .await
        .unwrap()
}

// ============================================================================
// Draft lifecycle
// ============================================================================

#[tokio::test]
async fn submitted_draft_is_pending_and_owned() {
    let store = store();
    let draft_id = submit(&store, "Logo Design", 10.0, "Art,Design").await;

    let review = ReviewDraftsUseCase::new(store.clone(), store.clone());
    let mine = review.list_for_creator("creator@test.com").await.unwrap();
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].draft_id, draft_id);
    assert!(mine[0].status.is_pending());

    assert!(review.list_for_creator("other@test.com").await.unwrap().is_empty());
}

#[tokio::test]
async fn confirm_publishes_payload_and_flips_draft() {
    let store = store();
    let draft_id = submit(&store, "Logo Design", 10.0, "Art").await;

    // admin publishes an edited payload, not the submitted one verbatim
    let contest = ConfirmDraftUseCase::new(store.clone())
        .execute(&draft_id, fields("Logo Design (Final)", 15.0, "Art,Brand"))
        .await
        .unwrap();

    let draft = DraftRepository::find_by_id(&*store, &draft_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(draft.status, DraftStatus::Confirmed);

    let browse = BrowseContestsUseCase::new(store.clone());
    let published = browse.list(None, None, None).await.unwrap();
    assert_eq!(published.len(), 1);
    assert_eq!(published[0].contest_id, contest.contest_id);
    assert_eq!(published[0].fields.name, "Logo Design (Final)");
    assert_eq!(published[0].participation_count, 0);
    assert!(published[0].winner.is_none());
}

#[tokio::test]
async fn confirm_twice_is_conflict() {
    let store = store();
    let draft_id = submit(&store, "Logo Design", 10.0, "Art").await;
    confirm(&store, &draft_id, "Logo Design").await;

    let result = ConfirmDraftUseCase::new(store.clone())
        .execute(&draft_id, fields("Logo Design", 10.0, "Art"))
        .await;
    assert!(matches!(result, Err(ContestError::DraftAlreadyConfirmed)));
}

#[tokio::test]
async fn confirm_unknown_draft_is_not_found() {
    let store = store();
    let result = ConfirmDraftUseCase::new(store.clone())
        .execute(&DraftId::new(), fields("X", 1.0, ""))
        .await;
    assert!(matches!(result, Err(ContestError::DraftNotFound)));
}

#[tokio::test]
async fn pending_review_concatenates_drafts_and_published() {
    let store = store();
    let confirmed_id = submit(&store, "Old", 5.0, "Art").await;
    confirm(&store, &confirmed_id, "Old").await;
    submit(&store, "New", 8.0, "Art").await;

    let items = ReviewDraftsUseCase::new(store.clone(), store.clone())
        .list_pending()
        .await
        .unwrap();

    let drafts = items
        .iter()
        .filter(|i| matches!(i, ReviewItem::Draft(_)))
        .count();
    let published = items
        .iter()
        .filter(|i| matches!(i, ReviewItem::Published(_)))
        .count();

    // the confirmed draft leaves the pending list but its publication shows up
    assert_eq!(drafts, 1);
    assert_eq!(published, 1);
}

// ============================================================================
// Draft deletion
// ============================================================================

#[tokio::test]
async fn creator_cannot_delete_another_creators_draft() {
    let store = store();
    let draft_id = submit(&store, "Logo Design", 10.0, "Art").await;

    let delete = DeleteDraftUseCase::new(store.clone(), store.clone());
    let intruder = Email::new("other@test.com").unwrap();

    let result = delete.execute_creator(&draft_id, &intruder).await;
    assert!(matches!(result, Err(ContestError::NotDraftOwner)));
    assert!(DraftRepository::find_by_id(&*store, &draft_id)
        .await
        .unwrap()
        .is_some());

    let report = delete.execute_creator(&draft_id, &creator()).await.unwrap();
    assert!(report.draft_deleted);
    assert!(DraftRepository::find_by_id(&*store, &draft_id)
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn admin_delete_of_nothing_is_not_found() {
    let store = store();
    let delete = DeleteDraftUseCase::new(store.clone(), store.clone());

    let result = delete.execute_admin(&DraftId::new()).await;
    assert!(matches!(result, Err(ContestError::DraftNotFound)));

    let draft_id = submit(&store, "Logo Design", 10.0, "Art").await;
    let report = delete.execute_admin(&draft_id).await.unwrap();
    assert!(report.draft_deleted);
    assert!(!report.contest_deleted);
}

// ============================================================================
// Browsing
// ============================================================================

#[tokio::test]
async fn browse_filters_tags_case_insensitively() {
    let store = store();
    let a = submit(&store, "Poster", 5.0, "art,print").await;
    let b = submit(&store, "Jingle", 9.0, "Music").await;
    ConfirmDraftUseCase::new(store.clone())
        .execute(&a, fields("Poster", 5.0, "art,print"))
        .await
        .unwrap();
    ConfirmDraftUseCase::new(store.clone())
        .execute(&b, fields("Jingle", 9.0, "Music"))
        .await
        .unwrap();

    let browse = BrowseContestsUseCase::new(store.clone());

    let hits = browse.list(Some("ART".to_string()), None, None).await.unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].fields.name, "Poster");

    let misses = browse.list(Some("film".to_string()), None, None).await.unwrap();
    assert!(misses.is_empty());
}

#[tokio::test]
async fn browse_sorts_by_allow_listed_fields_only() {
    let store = store();
    for (name, price) in [("Cheap", 1.0), ("Dear", 50.0), ("Mid", 10.0)] {
        let id = submit(&store, name, price, "Art").await;
        ConfirmDraftUseCase::new(store.clone())
            .execute(&id, fields(name, price, "Art"))
            .await
            .unwrap();
    }

    let browse = BrowseContestsUseCase::new(store.clone());

    let sorted = browse
        .list(None, Some("price".to_string()), Some("desc".to_string()))
        .await
        .unwrap();
    let names: Vec<&str> = sorted.iter().map(|c| c.fields.name.as_str()).collect();
    assert_eq!(names, vec!["Dear", "Mid", "Cheap"]);

    let bad_field = browse
        .list(None, Some("attendance".to_string()), None)
        .await;
    assert!(matches!(bad_field, Err(ContestError::InvalidSortField(_))));

    let bad_order = browse
        .list(None, Some("price".to_string()), Some("sideways".to_string()))
        .await;
    assert!(matches!(bad_order, Err(ContestError::InvalidSortOrder(_))));
}

#[tokio::test]
async fn join_increments_until_contest_vanishes() {
    let store = store();
    let draft_id = submit(&store, "Logo Design", 10.0, "Art").await;
    let contest = confirm(&store, &draft_id, "Logo Design").await;

    let browse = BrowseContestsUseCase::new(store.clone());
    browse.join(&contest.contest_id).await.unwrap();
    browse.join(&contest.contest_id).await.unwrap();

    let found = browse.get(&contest.contest_id).await.unwrap();
    assert_eq!(found.participation_count, 2);

    let result = browse.join(&ContestId::new()).await;
    assert!(matches!(result, Err(ContestError::ContestNotFound)));
}

// ============================================================================
// Winner selection
// ============================================================================

struct WinnerFixture {
    store: Arc<MemoryContestStore>,
    users: Arc<MemoryUserRepository>,
    contest: Contest,
}

async fn winner_fixture() -> WinnerFixture {
    let store = store();
    let draft_id = submit(&store, "Logo Design", 10.0, "Art").await;
    let contest = confirm(&store, &draft_id, "Logo Design").await;

    let users = Arc::new(MemoryUserRepository::default());
    users.seed("winner@test.com", "Winnie", Some("https://img.test/w.png"));

    WinnerFixture {
        store,
        users,
        contest,
    }
}

#[tokio::test]
async fn select_winner_requires_participants() {
    let fx = winner_fixture().await;
    let select = SelectWinnerUseCase::new(fx.store.clone(), fx.users.clone());

    // nobody has paid, so there is no roster
    let result = select.execute(&fx.contest.contest_id, "winner@test.com").await;
    assert!(matches!(result, Err(ContestError::NoParticipants)));

    // the failed selection left the contest untouched
    let contest = ContestRepository::find_by_id(&*fx.store, &fx.contest.contest_id)
        .await
        .unwrap()
        .unwrap();
    assert!(contest.winner.is_none());
}

#[tokio::test]
async fn select_winner_resolves_profile_and_is_write_once() {
    let fx = winner_fixture().await;
    fx.store
        .seed_roster(&fx.contest, "creator@test.com", &["winner@test.com", "b@test.com"]);

    let select = SelectWinnerUseCase::new(fx.store.clone(), fx.users.clone());

    let winner = select
        .execute(&fx.contest.contest_id, "winner@test.com")
        .await
        .unwrap();
    assert_eq!(winner.name, "Winnie");
    assert_eq!(winner.email, "winner@test.com");

    let contest = ContestRepository::find_by_id(&*fx.store, &fx.contest.contest_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(contest.winner, Some(winner));

    let again = select.execute(&fx.contest.contest_id, "b@test.com").await;
    assert!(matches!(again, Err(ContestError::WinnerAlreadySelected)));
}

#[tokio::test]
async fn select_winner_unknown_user_or_contest() {
    let fx = winner_fixture().await;
    fx.store
        .seed_roster(&fx.contest, "creator@test.com", &["winner@test.com"]);

    let select = SelectWinnerUseCase::new(fx.store.clone(), fx.users.clone());

    let unknown_user = select.execute(&fx.contest.contest_id, "ghost@test.com").await;
    assert!(matches!(unknown_user, Err(ContestError::WinnerNotFound)));

    let unknown_contest = select.execute(&ContestId::new(), "winner@test.com").await;
    assert!(matches!(unknown_contest, Err(ContestError::ContestNotFound)));

    let bad_email = select.execute(&fx.contest.contest_id, "not-an-email").await;
    assert!(matches!(bad_email, Err(ContestError::Validation(_))));
}
