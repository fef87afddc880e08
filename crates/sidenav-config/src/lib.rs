//! Configuration management for sidenav.
//!
//! Parses `sidenav.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! `sidebar.file` supports environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default

mod expand;

use serde::Deserialize;
use sidenav_tree::{DEFAULT_MAX_DEPTH, NavigationOptions, ValidationOptions};
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override sidebar file path.
    pub sidebar_file: Option<PathBuf>,
    /// Override maximum nesting depth.
    pub max_depth: Option<usize>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "sidenav.toml";

/// Sidebar filename used when the config does not name one.
const DEFAULT_SIDEBAR_FILE: &str = "sidebar.yaml";

/// Upper bound accepted for `sidebar.max_depth`.
pub const MAX_DEPTH_LIMIT: usize = 64;

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Sidebar configuration (paths are relative strings from TOML).
    sidebar: SidebarConfigRaw,

    /// Resolved sidebar configuration (set after loading).
    #[serde(skip)]
    pub sidebar_resolved: SidebarConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Raw sidebar configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
struct SidebarConfigRaw {
    file: Option<String>,
    max_depth: Option<usize>,
    collapsed: Option<bool>,
}

/// Resolved sidebar configuration with an absolute file path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarConfig {
    /// Sidebar definition file (`.yaml`, `.yml`, `.json` or `.toml`).
    pub file: PathBuf,
    /// Deepest allowed entry, top-level groups being depth 1.
    pub max_depth: usize,
    /// Collapse state of groups that set none themselves.
    pub collapsed: bool,
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from(DEFAULT_SIDEBAR_FILE),
            max_depth: DEFAULT_MAX_DEPTH,
            collapsed: false,
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`sidebar.file`").
        field: String,
        /// Error message (e.g., "${`SIDEBAR`} not set").
        message: String,
    },
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `sidenav.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails or
    /// the final values are invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        config.validate()?;

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(file) = &settings.sidebar_file {
            self.sidebar_resolved.file.clone_from(file);
        }
        if let Some(max_depth) = settings.max_depth {
            self.sidebar_resolved.max_depth = max_depth;
        }
    }

    /// Options for building the sidebar navigation.
    #[must_use]
    pub fn navigation_options(&self) -> NavigationOptions {
        NavigationOptions {
            max_depth: self.sidebar_resolved.max_depth,
            collapsed: self.sidebar_resolved.collapsed,
        }
    }

    /// Options for validating the raw sidebar.
    #[must_use]
    pub fn validation_options(&self) -> ValidationOptions {
        self.navigation_options().validation()
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let current = std::env::current_dir().ok()?;
        Self::discover_from(&current)
    }

    /// Search for config file in `start` and its parents.
    fn discover_from(start: &Path) -> Option<PathBuf> {
        start
            .ancestors()
            .map(|dir| dir.join(CONFIG_FILENAME))
            .find(|candidate| candidate.exists())
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            sidebar: SidebarConfigRaw::default(),
            sidebar_resolved: SidebarConfig {
                file: base.join(DEFAULT_SIDEBAR_FILE),
                ..SidebarConfig::default()
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically by [`Config::load`] once CLI settings are applied.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sidebar_resolved.file.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "sidebar.file cannot be empty".to_owned(),
            ));
        }

        let max_depth = self.sidebar_resolved.max_depth;
        if !(1..=MAX_DEPTH_LIMIT).contains(&max_depth) {
            return Err(ConfigError::Validation(format!(
                "sidebar.max_depth must be between 1 and {MAX_DEPTH_LIMIT}, got {max_depth}"
            )));
        }

        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(ref file) = self.sidebar.file {
            self.sidebar.file = Some(expand::expand_env(file, "sidebar.file")?);
        }

        Ok(())
    }

    /// Resolve relative paths against the config directory and apply defaults.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let file = self
            .sidebar
            .file
            .as_deref()
            .unwrap_or(DEFAULT_SIDEBAR_FILE);

        self.sidebar_resolved = SidebarConfig {
            file: if file.is_empty() {
                PathBuf::new()
            } else {
                config_dir.join(file)
            },
            max_depth: self.sidebar.max_depth.unwrap_or(DEFAULT_MAX_DEPTH),
            collapsed: self.sidebar.collapsed.unwrap_or(false),
        };
    }
}
