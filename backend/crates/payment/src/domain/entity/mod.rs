//! Domain Entities

pub mod payment;
