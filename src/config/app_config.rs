//! Application configuration structures

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::cli::CliArgs;

use super::Theme;

/// Application configuration (all settings needed at runtime)
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub main: MainConfig,
    pub ui: UIConfig,
    pub internal: InternalConfig,
}

/// Main section of the configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MainConfig {
    /// Directory to scan for configuration files
    pub root: String,
    /// File name pattern of configuration files
    pub pattern: String,
    /// Maximum scan depth (0 means unlimited)
    pub max_depth: usize,
}

/// UI section of the configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UIConfig {
    /// Console color theme
    pub theme: Theme,
    /// Whether to emit colored output at all
    pub color: bool,
}

/// Internal configuration (not user-configurable)
#[derive(Debug, Clone)]
pub struct InternalConfig {
    /// Directory name patterns to exclude from scanning
    pub exclude_dirs: Vec<String>,
    /// Line printed between prompt sections
    pub separator: String,
}

impl Default for MainConfig {
    fn default() -> Self {
        Self {
            root: ".".to_string(),
            pattern: "*.ini".to_string(),
            max_depth: 0,
        }
    }
}

impl Default for UIConfig {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            color: true,
        }
    }
}

impl Default for InternalConfig {
    fn default() -> Self {
        Self {
            exclude_dirs: Vec::new(),
            separator: "----------".to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Default)]
#[serde(default)]
struct AppConfigUserFields {
    main: MainConfig,
    ui: UIConfig,
}

impl AppConfig {
    /// Create app configuration with layered priority system:
    /// CLI args (highest) -> Config file -> Default values (lowest)
    pub fn from_layers(cli_args: &CliArgs) -> Self {
        let mut config = Self::default();
        if let Some(file_config) = Self::load_from_file(cli_args.config.as_deref()) {
            config.merge_file_config(file_config);
        }
        config.apply_cli_overrides(cli_args);

        debug!(
            root = %config.main.root,
            pattern = %config.main.pattern,
            "Final scan settings"
        );

        config
    }

    /// Directory the scan starts from, resolved against the working directory
    pub fn scan_root(&self) -> PathBuf {
        let root = PathBuf::from(&self.main.root);
        if root.is_absolute() {
            return root;
        }
        match std::env::current_dir() {
            Ok(cwd) => cwd.join(root),
            Err(e) => {
                warn!("Could not determine current directory: {}", e);
                root
            }
        }
    }

    /// Get list of paths to search for configuration file (in priority order)
    ///
    /// Search order:
    /// 1. CLI --config argument (highest priority)
    /// 2. <platform config dir>/keybind-finder/config.toml
    /// 3. ~/.config/keybind-finder/config.toml
    fn get_search_paths(cli_config_path: Option<&str>) -> Vec<PathBuf> {
        let mut paths = Vec::new();

        if let Some(config_path) = cli_config_path {
            let expanded_path = PathBuf::from(expand_tilde_in_path(config_path));
            debug!("Using config path from CLI argument: {:?}", expanded_path);
            paths.push(expanded_path);
        }

        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join("keybind-finder").join("config.toml"));
        }

        if let Some(dir) = dirs::home_dir() {
            let fallback = dir
                .join(".config")
                .join("keybind-finder")
                .join("config.toml");
            if !paths.contains(&fallback) {
                paths.push(fallback);
            }
        }

        paths
    }

    /// Load user configuration from file, return None if file does not exist
    fn load_from_file(cli_config_path: Option<&str>) -> Option<AppConfigUserFields> {
        let config_paths = Self::get_search_paths(cli_config_path);
        debug!("Searching for config file in paths: {:?}", config_paths);

        for config_path in &config_paths {
            if config_path.exists() {
                debug!("Loading config from: {:?}", config_path);
                return match fs::read_to_string(config_path) {
                    Ok(content) => Self::parse_file_config(&content, config_path),
                    Err(e) => {
                        warn!(
                            "Failed to read config file at {:?}: {}. Using defaults",
                            config_path, e
                        );
                        None
                    }
                };
            }
        }

        debug!("No config file found in search paths: {:?}", config_paths);
        None
    }

    fn parse_file_config(content: &str, source: &Path) -> Option<AppConfigUserFields> {
        match toml::from_str::<AppConfigUserFields>(content) {
            Ok(config) => {
                debug!("Successfully loaded config from file");
                Some(config)
            }
            Err(e) => {
                warn!(
                    "Failed to parse config file at {:?}: {}. Using defaults",
                    source, e
                );
                None
            }
        }
    }

    /// Merge user configuration loaded from file
    fn merge_file_config(&mut self, mut file_config: AppConfigUserFields) {
        file_config.main.root = expand_tilde_in_path(&file_config.main.root);
        self.main = file_config.main;
        self.ui = file_config.ui;
    }

    /// Apply CLI argument overrides to configuration
    fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(ref path) = args.path {
            debug!("CLI override: root = {}", path);
            self.main.root = expand_tilde_in_path(path);
        }

        if let Some(ref pattern) = args.pattern {
            debug!("CLI override: pattern = {}", pattern);
            self.main.pattern = pattern.clone();
        }

        if let Some(depth) = args.max_depth {
            debug!("CLI override: max_depth = {}", depth);
            self.main.max_depth = depth;
        }

        if let Some(ref theme_str) = args.theme {
            match theme_str.parse::<Theme>() {
                Ok(theme) => {
                    debug!("CLI override: theme = {}", theme);
                    self.ui.theme = theme;
                }
                Err(e) => {
                    warn!("Invalid theme '{}': {}. Using default theme.", theme_str, e);
                }
            }
        }

        if args.no_color {
            debug!("CLI override: color = false");
            self.ui.color = false;
        }
    }

    /// Print user-configurable fields in JSON format
    pub fn print(&self) {
        let user_fields = AppConfigUserFields {
            main: self.main.clone(),
            ui: self.ui.clone(),
        };
        match serde_json::to_string_pretty(&user_fields) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("Failed to serialize configuration: {}", e),
        }
    }
}

/// Expand ~ in path to home directory
fn expand_tilde_in_path(path: &str) -> String {
    if path.starts_with("~/") {
        if let Some(home) = dirs::home_dir() {
            return path.replacen("~", &home.to_string_lossy(), 1);
        }
    } else if path == "~"
        && let Some(home) = dirs::home_dir()
    {
        return home.to_string_lossy().to_string();
    }
    path.to_string()
}
