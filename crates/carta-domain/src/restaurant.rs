//! Restaurant domain types.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Business status of a restaurant, toggled by superadmins.
///
/// Wire format: `u8` (0 = Active, 1 = Paused). JSON format:
/// `"ACTIVE"` / `"PAUSED"`. Orthogonal to the menu `published` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RestaurantStatus {
    Active = 0,
    Paused = 1,
}

impl RestaurantStatus {
    /// Convert from `u8` wire value. Returns `None` for unknown values.
    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            0 => Some(Self::Active),
            1 => Some(Self::Paused),
            _ => None,
        }
    }

    /// Convert to `u8` wire value.
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// The other status. Used by the admin status toggle.
    pub fn toggled(self) -> Self {
        match self {
            Self::Active => Self::Paused,
            Self::Paused => Self::Active,
        }
    }
}

/// Category names seeded into every freshly provisioned restaurant,
/// in creation order.
pub const STARTER_CATEGORIES: [&str; 5] = [
    "Entrantes",
    "Platos principales",
    "Postres",
    "Bebidas",
    "Vinos",
];

/// QR foreground color assigned to new restaurants (first brand palette entry).
pub const DEFAULT_QR_COLOR: &str = "#f85c1b";

/// Public menu URL for a restaurant, derived from its owner's user id.
///
/// Valid only while the menu is published; recomputed on every publish.
pub fn menu_link(base_url: &str, owner_id: Uuid) -> String {
    format!("{}/menu/{}", base_url.trim_end_matches('/'), owner_id)
}
