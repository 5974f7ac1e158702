use crossterm::style::{Color, Stylize};

use crate::config::{AppConfig, ColorScheme};

/// Applies the active color scheme to console text
#[derive(Debug, Clone, Copy)]
pub struct Painter {
    colors: ColorScheme,
    enabled: bool,
}

impl Painter {
    pub fn new(colors: ColorScheme, enabled: bool) -> Self {
        Self { colors, enabled }
    }

    pub fn from_config(cfg: &AppConfig) -> Self {
        Self::new(cfg.ui.theme.colors(), cfg.ui.color)
    }

    /// A painter that never emits escape sequences
    pub fn plain() -> Self {
        Self::new(ColorScheme::default(), false)
    }

    pub fn colors(&self) -> &ColorScheme {
        &self.colors
    }

    /// Color `text`, or return it unchanged when colors are off
    pub fn paint(&self, text: &str, color: Color) -> String {
        if !self.enabled || color == Color::Reset {
            return text.to_string();
        }
        text.with(color).to_string()
    }

    /// Emphasize a command name
    pub fn emphasis(&self, text: &str) -> String {
        if !self.enabled {
            return text.to_string();
        }
        text.italic().to_string()
    }
}
