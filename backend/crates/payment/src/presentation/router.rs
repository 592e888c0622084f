//! Payment Router

use axum::{
    Router, middleware,
    routing::{get, post},
};
use identity::IdentityConfig;
use identity::domain::repository::UserRepository;
use identity::middleware::{GuardState, require_auth, require_creator};
use std::sync::Arc;

use crate::application::config::PaymentConfig;
use crate::domain::gateway::PaymentGateway;
use crate::domain::repository::PaymentRepository;
use crate::infra::postgres::PgPaymentRepository;
use crate::infra::stripe::StripeGateway;
use crate::presentation::handlers::{self, PaymentAppState};

/// Create the payment router with the PostgreSQL repository and the
/// Stripe gateway
pub fn payment_router<U>(
    repo: PgPaymentRepository,
    payment_config: Arc<PaymentConfig>,
    users: Arc<U>,
    identity_config: Arc<IdentityConfig>,
) -> Router
where
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let gateway = Arc::new(StripeGateway::new(payment_config.clone()));
    payment_router_generic(Arc::new(repo), gateway, payment_config, users, identity_config)
}

/// Create a generic payment router for any repository and gateway
pub fn payment_router_generic<P, G, U>(
    payments: Arc<P>,
    gateway: Arc<G>,
    payment_config: Arc<PaymentConfig>,
    users: Arc<U>,
    identity_config: Arc<IdentityConfig>,
) -> Router
where
    P: PaymentRepository + Clone + Send + Sync + 'static,
    G: PaymentGateway + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let state = PaymentAppState {
        payments,
        gateway,
        payment_config,
        users: users.clone(),
        identity_config: identity_config.clone(),
    };
    let guards = GuardState::new(users, identity_config);

    // POST records without a guard; the GET on the same path
    // authenticates inside the handler.
    let public = Router::new().route(
        "/user-payments",
        post(handlers::record_payment::<P, G, U>).get(handlers::list_payments::<P, G, U>),
    );

    let authenticated = Router::new()
        .route(
            "/create-payment-intent",
            post(handlers::create_intent::<P, G, U>),
        )
        .route(
            "/contest-won-by-user",
            get(handlers::contests_won::<P, G, U>),
        )
        .route_layer(middleware::from_fn_with_state(
            guards.clone(),
            require_auth::<U>,
        ));

    let creator = Router::new()
        .route(
            "/submitted-participants",
            get(handlers::submitted_participants::<P, G, U>),
        )
        .route_layer(middleware::from_fn_with_state(guards, require_creator::<U>));

    public.merge(authenticated).merge(creator).with_state(state)
}
