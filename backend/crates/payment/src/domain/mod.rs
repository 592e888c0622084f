//! Domain Layer

pub mod entity;
pub mod gateway;
pub mod repository;

// Re-exports
pub use entity::payment::{Payment, RecordOutcome};
pub use gateway::PaymentGateway;
pub use repository::PaymentRepository;
