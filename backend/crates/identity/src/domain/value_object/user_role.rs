use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{IdentityError, IdentityResult};

/// User role. New accounts start as plain users; only an admin can
/// promote a user to admin or creator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[repr(i16)]
pub enum UserRole {
    #[default]
    User = 0,
    Admin = 1,
    Creator = 2,
}

impl UserRole {
    #[inline]
    pub const fn id(&self) -> i16 {
        *self as i16
    }

    #[inline]
    pub const fn code(&self) -> &'static str {
        use UserRole::*;
        match self {
            User => "user",
            Admin => "admin",
            Creator => "creator",
        }
    }

    #[inline]
    pub const fn is_admin(&self) -> bool {
        matches!(self, UserRole::Admin)
    }

    #[inline]
    pub const fn is_creator(&self) -> bool {
        matches!(self, UserRole::Creator)
    }

    /// Decode a role stored in the database. Values outside the enum can
    /// only appear through manual data edits.
    #[inline]
    pub fn from_id(id: i16) -> Self {
        use UserRole::*;
        match id {
            0 => User,
            1 => Admin,
            2 => Creator,
            _ => {
                tracing::error!("Invalid UserRole id: {}", id);
                unreachable!("Invalid UserRole id: {}", id)
            }
        }
    }

    /// Parse a role name from a request body
    pub fn parse(code: &str) -> IdentityResult<Self> {
        use UserRole::*;
        match code {
            "user" => Ok(User),
            "admin" => Ok(Admin),
            "creator" => Ok(Creator),
            other => Err(IdentityError::UnknownRole(other.to_string())),
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
