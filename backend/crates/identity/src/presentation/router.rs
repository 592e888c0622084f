//! Identity Router

use axum::{
    Router, middleware,
    routing::{get, patch, post, put},
};
use std::sync::Arc;

use crate::application::config::IdentityConfig;
use crate::domain::repository::UserRepository;
use crate::infra::postgres::PgUserRepository;
use crate::presentation::handlers::{self, IdentityAppState};
use crate::presentation::middleware::{GuardState, require_admin, require_auth};

/// Create the identity router with the PostgreSQL repository
pub fn identity_router(repo: PgUserRepository, config: IdentityConfig) -> Router {
    identity_router_generic(repo, config)
}

/// Create a generic identity router for any repository implementation
pub fn identity_router_generic<R>(repo: R, config: IdentityConfig) -> Router
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let state = IdentityAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };
    let guards = GuardState::new(state.repo.clone(), state.config.clone());

    let public = Router::new()
        .route("/jwt", post(handlers::issue_token::<R>))
        .route("/logout", get(handlers::logout::<R>))
        .route("/users", put(handlers::upsert_user::<R>));

    let authenticated = Router::new()
        .route("/user/admin", get(handlers::admin_check::<R>))
        .route("/user/creator/{email}", get(handlers::creator_check::<R>))
        .route_layer(middleware::from_fn_with_state(
            guards.clone(),
            require_auth::<R>,
        ));

    let admin = Router::new()
        .route("/get-all-users", get(handlers::list_users::<R>))
        .route("/set-user-role/{id}", patch(handlers::set_user_role::<R>))
        .route_layer(middleware::from_fn_with_state(guards, require_admin::<R>));

    public
        .merge(authenticated)
        .merge(admin)
        .with_state(state)
}
