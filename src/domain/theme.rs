//! Theme mode value type.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Color scheme of the interface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn is_dark(&self) -> bool {
        matches!(self, ThemeMode::Dark)
    }

    pub fn from_dark(dark: bool) -> Self {
        if dark {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }

    /// The other mode
    pub fn toggled(self) -> Self {
        Self::from_dark(!self.is_dark())
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Interpret a persisted preference. Anything but `"dark"` is light.
    pub fn from_saved(value: &str) -> Self {
        Self::from_dark(value == "dark")
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            other => Err(AppError::validation(format!(
                "Unknown theme '{}', expected 'light' or 'dark'",
                other
            ))),
        }
    }
}

/// Guess whether the terminal has a dark background from `COLORFGBG`.
///
/// The variable looks like `"15;0"` (foreground;background); backgrounds
/// 0-6 and 8 are dark. Returns `None` when it is missing or unparsable.
pub fn prefers_dark_from_colorfgbg(value: Option<&str>) -> Option<bool> {
    let background: u8 = value?.rsplit(';').next()?.trim().parse().ok()?;
    Some(matches!(background, 0..=6 | 8))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_saved_values() {
        assert_eq!(ThemeMode::from_saved("dark"), ThemeMode::Dark);
        assert_eq!(ThemeMode::from_saved("light"), ThemeMode::Light);
        assert_eq!(ThemeMode::from_saved("sepia"), ThemeMode::Light);
    }

    #[test]
    fn test_parse_and_toggle() {
        assert_eq!("DARK".parse::<ThemeMode>().unwrap(), ThemeMode::Dark);
        assert!("blue".parse::<ThemeMode>().is_err());
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled().to_string(), "light");
    }

    #[test]
    fn test_colorfgbg_detection() {
        assert_eq!(prefers_dark_from_colorfgbg(Some("15;0")), Some(true));
        assert_eq!(prefers_dark_from_colorfgbg(Some("15;default")), None);
        assert_eq!(prefers_dark_from_colorfgbg(Some("0;15")), Some(false));
        assert_eq!(prefers_dark_from_colorfgbg(None), None);
    }
}
