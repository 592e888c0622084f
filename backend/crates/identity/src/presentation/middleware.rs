//! Authorization Guards
//!
//! Request-time checks that must pass before a handler's business logic
//! runs. `require_auth` verifies the token cookie only; the role guards
//! additionally load the user named by the token's email claim and
//! compare roles. Role or email values supplied in the request body or
//! query are never trusted for these decisions.

use axum::body::Body;
use axum::extract::State;
use axum::http::{HeaderMap, Request};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use crate::application::RoleCheckUseCase;
use crate::application::config::IdentityConfig;
use crate::application::token::TokenService;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{email::Email, user_role::UserRole};
use crate::error::{IdentityError, IdentityResult};

/// Guard state shared by all role-guarded routers
#[derive(Clone)]
pub struct GuardState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<IdentityConfig>,
}

impl<R> GuardState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub fn new(repo: Arc<R>, config: Arc<IdentityConfig>) -> Self {
        Self { repo, config }
    }
}

/// Verified identity attached to the request by `require_auth`
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub email: Email,
}

impl AuthUser {
    /// Compare a caller-supplied email against the token claim.
    /// The supplied value is only ever a value to compare, never a
    /// substitute identity.
    pub fn assert_email(&self, supplied: &str) -> IdentityResult<()> {
        if self.email.as_str() != supplied.trim().to_lowercase() {
            return Err(IdentityError::EmailMismatch);
        }
        Ok(())
    }
}

/// Verify the token cookie on a request and return the caller identity
pub fn authenticate(headers: &HeaderMap, config: &IdentityConfig) -> IdentityResult<AuthUser> {
    let token = platform::cookie::extract_cookie(headers, &config.cookie.name)
        .ok_or(IdentityError::MissingToken)?;

    let claims = TokenService::new(config).verify(&token)?;

    let email = Email::new(claims.sub).map_err(|_| IdentityError::InvalidToken)?;

    Ok(AuthUser { email })
}

/// Middleware that requires a valid token
pub async fn require_auth<R>(
    State(state): State<GuardState<R>>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let auth = match authenticate(req.headers(), &state.config) {
        Ok(auth) => auth,
        Err(e) => return Err(e.into_response()),
    };

    req.extensions_mut().insert(auth);

    Ok(next.run(req).await)
}

/// Middleware that requires a valid token AND the admin role
pub async fn require_admin<R>(
    State(state): State<GuardState<R>>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, Response>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    require_role(state, req, next, UserRole::Admin).await
}

/// Middleware that requires a valid token AND the creator role
pub async fn require_creator<R>(
    State(state): State<GuardState<R>>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, Response>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    require_role(state, req, next, UserRole::Creator).await
}

async fn require_role<R>(
    state: GuardState<R>,
    mut req: Request<Body>,
    next: Next,
    role: UserRole,
) -> Result<Response, Response>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let auth = match authenticate(req.headers(), &state.config) {
        Ok(auth) => auth,
        Err(e) => return Err(e.into_response()),
    };

    let use_case = RoleCheckUseCase::new(state.repo.clone());

    let stored = match use_case.role_of(&auth.email).await {
        Ok(stored) => stored,
        Err(e) => return Err(e.into_response()),
    };

    if stored != Some(role) {
        return Err(IdentityError::RoleRequired { role }.into_response());
    }

    req.extensions_mut().insert(auth);

    Ok(next.run(req).await)
}
