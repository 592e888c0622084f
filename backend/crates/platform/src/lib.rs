//! Platform Crate - Technical Infrastructure
//!
//! Shared technical foundations for the contest backend:
//! - Cookie management (token cookie configuration, Set-Cookie construction)

pub mod cookie;
