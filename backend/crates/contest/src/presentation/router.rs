//! Contest Router

use axum::{
    Router, middleware,
    routing::{delete, get, patch, post},
};
use identity::IdentityConfig;
use identity::domain::repository::UserRepository;
use identity::middleware::{GuardState, require_admin, require_creator};
use std::sync::Arc;

use crate::domain::repository::{ContestRepository, DraftRepository};
use crate::infra::postgres::PgContestRepository;
use crate::presentation::handlers::{self, ContestAppState};

/// Create the contest router with the PostgreSQL repository
pub fn contest_router<U>(
    repo: PgContestRepository,
    users: Arc<U>,
    config: Arc<IdentityConfig>,
) -> Router
where
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let repo = Arc::new(repo);
    contest_router_generic(repo.clone(), repo, users, config)
}

/// Create a generic contest router for any repository implementations
pub fn contest_router_generic<D, C, U>(
    drafts: Arc<D>,
    contests: Arc<C>,
    users: Arc<U>,
    config: Arc<IdentityConfig>,
) -> Router
where
    D: DraftRepository + Clone + Send + Sync + 'static,
    C: ContestRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let state = ContestAppState {
        drafts,
        contests,
        users: users.clone(),
    };
    let guards = GuardState::new(users, config);

    let public = Router::new()
        .route("/contests", get(handlers::list_contests::<D, C, U>))
        .route("/contests/{id}", get(handlers::get_contest::<D, C, U>))
        .route("/contest/{id}", patch(handlers::join_contest::<D, C, U>));

    let creator = Router::new()
        .route("/creator-contest", post(handlers::submit_draft::<D, C, U>))
        .route("/creator/contest", get(handlers::list_own_drafts::<D, C, U>))
        .route(
            "/creator/contest/{id}",
            delete(handlers::delete_own_draft::<D, C, U>),
        )
        .route("/selected-winner", patch(handlers::select_winner::<D, C, U>))
        .route_layer(middleware::from_fn_with_state(
            guards.clone(),
            require_creator::<U>,
        ));

    let admin = Router::new()
        .route(
            "/get-pending-contests",
            get(handlers::list_pending::<D, C, U>),
        )
        .route(
            "/delete-pending-contest/{id}",
            delete(handlers::delete_pending::<D, C, U>),
        )
        .route(
            "/confirm-pending-contest/{id}",
            patch(handlers::confirm_pending::<D, C, U>),
        )
        .route_layer(middleware::from_fn_with_state(guards, require_admin::<U>));

    public.merge(creator).merge(admin).with_state(state)
}
