mod app_config;
mod theme;

pub use app_config::AppConfig;
pub use theme::{ColorScheme, Theme};
