//! Theme system for console color schemes

use crossterm::style::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Available themes
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Default,
    Dark,
    Light,
}

impl Theme {
    /// Get the color scheme for this theme
    pub fn colors(&self) -> ColorScheme {
        match self {
            Self::Default => ColorScheme::default(),
            Self::Dark => ColorScheme::dark(),
            Self::Light => ColorScheme::light(),
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "default" => Ok(Self::Default),
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            _ => Err(format!(
                "Invalid theme '{}'. Valid options: default, dark, light",
                s
            )),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => write!(f, "default"),
            Self::Dark => write!(f, "dark"),
            Self::Light => write!(f, "light"),
        }
    }
}

/// Color scheme for console output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorScheme {
    /// "Found N keys for ..." header
    pub found: Color,
    /// Zero-result message
    pub empty: Color,
    /// Invalid keybind and error notices
    pub invalid: Color,
    /// Lookup mode hints
    pub warning: Color,
    /// Per-file scan notices
    pub notice: Color,
    /// Separator lines
    pub separator: Color,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            found: Color::DarkYellow,
            empty: Color::DarkGreen,
            invalid: Color::DarkRed,
            warning: Color::DarkYellow,
            notice: Color::Reset,
            separator: Color::Reset,
        }
    }
}

impl ColorScheme {
    /// Dark theme
    pub fn dark() -> Self {
        Self {
            found: Color::Rgb {
                r: 230,
                g: 190,
                b: 90,
            }, // Warm yellow
            empty: Color::Rgb {
                r: 80,
                g: 200,
                b: 120,
            }, // Soft green
            invalid: Color::Rgb {
                r: 240,
                g: 90,
                b: 90,
            }, // Bright red
            warning: Color::Rgb {
                r: 250,
                g: 200,
                b: 100,
            }, // Bright yellow
            notice: Color::Rgb {
                r: 150,
                g: 155,
                b: 160,
            },
            separator: Color::Rgb {
                r: 90,
                g: 95,
                b: 100,
            },
        }
    }

    /// Light theme
    pub fn light() -> Self {
        Self {
            found: Color::Rgb {
                r: 200,
                g: 120,
                b: 0,
            }, // Deep orange
            empty: Color::Rgb { r: 0, g: 130, b: 50 }, // Rich green
            invalid: Color::Rgb {
                r: 200,
                g: 20,
                b: 20,
            }, // Strong red
            warning: Color::Rgb {
                r: 210,
                g: 130,
                b: 0,
            }, // Deep amber
            notice: Color::Rgb { r: 70, g: 75, b: 80 },
            separator: Color::Rgb {
                r: 140,
                g: 145,
                b: 150,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_from_str_is_case_insensitive() {
        assert_eq!("Dark".parse::<Theme>(), Ok(Theme::Dark));
        assert_eq!("LIGHT".parse::<Theme>(), Ok(Theme::Light));
        assert!("neon".parse::<Theme>().unwrap_err().contains("neon"));
    }

    #[test]
    fn test_theme_display_round_trips() {
        for theme in [Theme::Default, Theme::Dark, Theme::Light] {
            assert_eq!(theme.to_string().parse::<Theme>(), Ok(theme));
        }
    }

    #[test]
    fn test_default_theme_colors() {
        let colors = Theme::Default.colors();
        assert_eq!(colors.found, Color::DarkYellow);
        assert_eq!(colors.invalid, Color::DarkRed);
        assert_ne!(Theme::Dark.colors(), colors);
    }
}
