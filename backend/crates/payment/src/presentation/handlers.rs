//! HTTP Handlers

use axum::Extension;
use axum::Json;
use axum::extract::{Query, State};
use axum::http::HeaderMap;
use identity::IdentityConfig;
use identity::domain::repository::UserRepository;
use identity::middleware::{AuthUser, authenticate};
use kernel::id::ContestId;
use std::sync::Arc;

use crate::application::config::PaymentConfig;
use crate::application::{
    CreateIntentUseCase, ListPaymentsUseCase, RecordPaymentInput, RecordPaymentUseCase,
    RosterQueriesUseCase,
};
use crate::domain::gateway::PaymentGateway;
use crate::domain::repository::PaymentRepository;
use crate::error::PaymentResult;
use crate::presentation::dto::{
    CreateIntentRequest, CreateIntentResponse, CreatorQuery, ParticipantQuery, PaymentResponse,
    RecordPaymentRequest, RecordPaymentResponse, RosterResponse, WinnerQuery,
};

/// Shared state for payment handlers
#[derive(Clone)]
pub struct PaymentAppState<P, G, U>
where
    P: PaymentRepository + Clone + Send + Sync + 'static,
    G: PaymentGateway + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    pub payments: Arc<P>,
    pub gateway: Arc<G>,
    pub payment_config: Arc<PaymentConfig>,
    pub users: Arc<U>,
    pub identity_config: Arc<IdentityConfig>,
}

/// POST /create-payment-intent (authenticated)
pub async fn create_intent<P, G, U>(
    State(state): State<PaymentAppState<P, G, U>>,
    Json(req): Json<CreateIntentRequest>,
) -> PaymentResult<Json<CreateIntentResponse>>
where
    P: PaymentRepository + Clone + Send + Sync + 'static,
    G: PaymentGateway + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = CreateIntentUseCase::new(state.gateway.clone(), state.payment_config.clone());

    let client_secret = use_case.execute(req.price).await?;

    Ok(Json(CreateIntentResponse { client_secret }))
}

/// POST /user-payments (no guard; recording is keyed and idempotent)
pub async fn record_payment<P, G, U>(
    State(state): State<PaymentAppState<P, G, U>>,
    Json(req): Json<RecordPaymentRequest>,
) -> PaymentResult<Json<RecordPaymentResponse>>
where
    P: PaymentRepository + Clone + Send + Sync + 'static,
    G: PaymentGateway + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = RecordPaymentUseCase::new(state.payments.clone());

    let outcome = use_case
        .execute(RecordPaymentInput {
            contest_id: ContestId::from_uuid(req.contest_id),
            contest_name: req.contest_name,
            participant_email: req.participant_email,
            creator_email: req.creator_email,
            amount: req.amount,
        })
        .await?;

    Ok(Json(outcome.into()))
}

/// GET /user-payments?participant= (authenticated in-handler; shares
/// its path with the unguarded POST, so the guard cannot be a layer)
pub async fn list_payments<P, G, U>(
    State(state): State<PaymentAppState<P, G, U>>,
    headers: HeaderMap,
    Query(query): Query<ParticipantQuery>,
) -> PaymentResult<Json<Vec<PaymentResponse>>>
where
    P: PaymentRepository + Clone + Send + Sync + 'static,
    G: PaymentGateway + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let auth = authenticate(&headers, &state.identity_config)?;
    auth.assert_email(&query.participant)?;

    let use_case = ListPaymentsUseCase::new(state.payments.clone());

    let payments = use_case.for_participant(auth.email.as_str()).await?;

    Ok(Json(payments.into_iter().map(PaymentResponse::from).collect()))
}

/// GET /submitted-participants?creator= (creator; query email must
/// match token)
pub async fn submitted_participants<P, G, U>(
    State(state): State<PaymentAppState<P, G, U>>,
    Extension(auth): Extension<AuthUser>,
    Query(query): Query<CreatorQuery>,
) -> PaymentResult<Json<Vec<RosterResponse>>>
where
    P: PaymentRepository + Clone + Send + Sync + 'static,
    G: PaymentGateway + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    auth.assert_email(&query.creator)?;

    let use_case = RosterQueriesUseCase::new(state.payments.clone());

    let rosters = use_case.for_creator(auth.email.as_str()).await?;

    Ok(Json(rosters.into_iter().map(RosterResponse::from).collect()))
}

/// GET /contest-won-by-user?winnerEmail= (authenticated; query email
/// must match token)
pub async fn contests_won<P, G, U>(
    State(state): State<PaymentAppState<P, G, U>>,
    Extension(auth): Extension<AuthUser>,
    Query(query): Query<WinnerQuery>,
) -> PaymentResult<Json<Vec<RosterResponse>>>
where
    P: PaymentRepository + Clone + Send + Sync + 'static,
    G: PaymentGateway + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    auth.assert_email(&query.winner_email)?;

    let use_case = RosterQueriesUseCase::new(state.payments.clone());

    let rosters = use_case.won_by(auth.email.as_str()).await?;

    Ok(Json(rosters.into_iter().map(RosterResponse::from).collect()))
}
