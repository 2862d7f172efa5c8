//! Dish translation types.
//!
//! Menus are authored in Spanish; dishes carry a machine-translated map for
//! the languages the public menu can render.

use serde::{Deserialize, Serialize};

/// Languages the public menu is translated into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetLanguage {
    En,
    De,
}

impl TargetLanguage {
    /// ISO 639-1 code sent to the translation service.
    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::De => "de",
        }
    }

    /// Tag prepended to the untranslated text when the translation service
    /// is unavailable. Best-effort contract: the original text still ships.
    pub fn fallback_tag(self) -> &'static str {
        match self {
            Self::En => "[EN]",
            Self::De => "[DE]",
        }
    }

    /// The tagged-passthrough value used when translation fails.
    pub fn fallback_text(self, original: &str) -> String {
        format!("{} {}", self.fallback_tag(), original)
    }
}

/// Translated title + description for one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslatedText {
    pub title: String,
    pub description: String,
}

/// Per-dish translation map, stored alongside the dish as JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DishTranslations {
    pub en: TranslatedText,
    pub de: TranslatedText,
}
