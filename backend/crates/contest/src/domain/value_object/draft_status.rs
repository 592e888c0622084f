use serde::{Deserialize, Serialize};
use std::fmt;

/// Draft contest status. A draft starts `Pending` and is flipped to
/// `Confirmed` exactly once, when an admin publishes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[repr(i16)]
pub enum DraftStatus {
    #[default]
    Pending = 0,
    Confirmed = 1,
}

impl DraftStatus {
    #[inline]
    pub const fn id(&self) -> i16 {
        *self as i16
    }

    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            DraftStatus::Pending => "pending",
            DraftStatus::Confirmed => "confirmed",
        }
    }

    #[inline]
    pub const fn is_pending(&self) -> bool {
        matches!(self, DraftStatus::Pending)
    }

    /// Decode a status stored in the database
    #[inline]
    pub fn from_id(id: i16) -> Self {
        match id {
            0 => DraftStatus::Pending,
            1 => DraftStatus::Confirmed,
            _ => {
                tracing::error!("Invalid DraftStatus id: {}", id);
                unreachable!("Invalid DraftStatus id: {}", id)
            }
        }
    }
}

impl fmt::Display for DraftStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
