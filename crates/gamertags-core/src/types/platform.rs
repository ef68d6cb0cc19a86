//! Gaming platforms a tag can be recorded for.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseNameError;

/// One of the six supported platforms.
///
/// Declaration order is the display order everywhere (inputs, card rows,
/// summary lines). The discriminant doubles as the slot index inside
/// [`ProfileState`](super::ProfileState).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Steam,
    Xbox,
    Playstation,
    Nintendo,
    Twitch,
    Discord,
}

impl Platform {
    /// Every platform, in display order.
    pub const ALL: [Platform; 6] = [
        Platform::Steam,
        Platform::Xbox,
        Platform::Playstation,
        Platform::Nintendo,
        Platform::Twitch,
        Platform::Discord,
    ];

    /// Number of platforms in the fixed set
    pub const COUNT: usize = Self::ALL.len();

    /// Lowercase identifier, used as the persisted JSON key and element id.
    pub fn key(&self) -> &'static str {
        match self {
            Platform::Steam => "steam",
            Platform::Xbox => "xbox",
            Platform::Playstation => "playstation",
            Platform::Nintendo => "nintendo",
            Platform::Twitch => "twitch",
            Platform::Discord => "discord",
        }
    }

    /// Key with its first letter upper-cased ("Playstation", not "PlayStation").
    pub fn display_name(&self) -> &'static str {
        match self {
            Platform::Steam => "Steam",
            Platform::Xbox => "Xbox",
            Platform::Playstation => "Playstation",
            Platform::Nintendo => "Nintendo",
            Platform::Twitch => "Twitch",
            Platform::Discord => "Discord",
        }
    }

    /// Label for the platform's text input.
    pub fn input_label(&self) -> String {
        format!("{} Tag", self.display_name())
    }

    pub(crate) fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Platform {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Platform::ALL
            .into_iter()
            .find(|p| p.key().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseNameError {
                kind: "platform",
                value: s.to_string(),
            })
    }
}
