//! Per-locale metadata.

use serde::{Deserialize, Serialize};

use super::message::MessageTable;

/// Text direction of a locale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Left-to-right (default).
    #[default]
    Ltr,
    /// Right-to-left.
    Rtl,
}

impl Direction {
    /// Value for the html `dir` attribute.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ltr => "ltr",
            Self::Rtl => "rtl",
        }
    }

    #[inline]
    pub const fn is_rtl(&self) -> bool {
        matches!(self, Self::Rtl)
    }
}

/// Language tag, direction, font and messages for one locale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleProfile {
    /// BCP 47 tag used for date/number formatting (e.g. `ar-EG`).
    pub lang_tag: String,
    pub direction: Direction,
    /// Font family name, if the locale needs a specific one.
    pub font: Option<String>,
    pub messages: MessageTable,
}
