//! Application Layer - Use Cases

pub mod config;
pub mod list_users;
pub mod role_check;
pub mod set_role;
pub mod token;
pub mod upsert_user;

pub use config::IdentityConfig;
pub use list_users::ListUsersUseCase;
pub use role_check::RoleCheckUseCase;
pub use set_role::SetRoleUseCase;
pub use token::{Claims, TokenService};
pub use upsert_user::{UpsertUserInput, UpsertUserUseCase};
