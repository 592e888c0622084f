//! Application Layer - Use Cases

pub mod config;
pub mod create_intent;
pub mod list_payments;
pub mod record_payment;
pub mod rosters;

pub use create_intent::CreateIntentUseCase;
pub use list_payments::ListPaymentsUseCase;
pub use record_payment::{RecordPaymentInput, RecordPaymentUseCase};
pub use rosters::RosterQueriesUseCase;
