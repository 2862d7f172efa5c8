//! User domain types.

use serde::{Deserialize, Serialize};

/// User permission level.
///
/// Wire format: `u8` (0 = Client, 1 = Superadmin). JSON format:
/// `"CLIENT"` / `"SUPERADMIN"`.
///
/// Escalation is one-way: a Client may become a Superadmin when its email
/// enters the allow-list, never the reverse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Client = 0,
    Superadmin = 1,
}

impl UserRole {
    /// Convert from `u8` wire value. Returns `None` for unknown values.
    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            0 => Some(Self::Client),
            1 => Some(Self::Superadmin),
            _ => None,
        }
    }

    /// Convert to `u8` wire value.
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// The single authorization predicate for administrative operations.
    pub fn is_superadmin(self) -> bool {
        matches!(self, Self::Superadmin)
    }
}
