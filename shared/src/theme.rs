//! Light/dark theme resolution.
//!
//! The theme is decided once per page load from, in order: the
//! server-provided `data-initial-theme` attribute, the `theme` key in local
//! storage, and finally the `system` preference, which maps the wall clock
//! onto light or dark.

use std::str::FromStr;

use chrono::Timelike;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const THEME_STORAGE_KEY: &str = "theme";
pub const INITIAL_THEME_ATTRIBUTE: &str = "data-initial-theme";
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Dark hours start at 18:30 (inclusive) and end at 06:30 (exclusive).
const DARK_FROM_MINUTE: u32 = 18 * 60 + 30;
const DARK_UNTIL_MINUTE: u32 = 6 * 60 + 30;

/// What the user asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    Dark,
    #[default]
    System,
}

/// What actually gets applied to the document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown theme preference: {0:?}")]
pub struct UnknownTheme(pub String);

impl FromStr for ThemePreference {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(ThemePreference::Light),
            "dark" => Ok(ThemePreference::Dark),
            "system" => Ok(ThemePreference::System),
            other => Err(UnknownTheme(other.to_string())),
        }
    }
}

impl ThemePreference {
    pub const ALL: [ThemePreference; 3] = [
        ThemePreference::Light,
        ThemePreference::Dark,
        ThemePreference::System,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
            ThemePreference::System => "system",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ThemePreference::Light => "Light",
            ThemePreference::Dark => "Dark",
            ThemePreference::System => "System (follows time of day)",
        }
    }

    pub fn resolve<T: Timelike>(self, now: &T) -> Theme {
        match self {
            ThemePreference::Light => Theme::Light,
            ThemePreference::Dark => Theme::Dark,
            ThemePreference::System => {
                if is_dark_hours(now) {
                    Theme::Dark
                } else {
                    Theme::Light
                }
            }
        }
    }
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

/// Whether `now` falls inside [18:30, 06:30).
pub fn is_dark_hours<T: Timelike>(now: &T) -> bool {
    let minute_of_day = now.hour() * 60 + now.minute();
    minute_of_day >= DARK_FROM_MINUTE || minute_of_day < DARK_UNTIL_MINUTE
}

/// Pick the effective preference from the page attribute and stored value.
///
/// Empty or unrecognized values are skipped.
pub fn effective_preference(initial_attr: Option<&str>, stored: Option<&str>) -> ThemePreference {
    initial_attr
        .and_then(|value| value.parse().ok())
        .or_else(|| stored.and_then(|value| value.parse().ok()))
        .unwrap_or_default()
}

pub fn resolve_theme<T: Timelike>(initial_attr: Option<&str>, stored: Option<&str>, now: &T) -> Theme {
    effective_preference(initial_attr, stored).resolve(now)
}
