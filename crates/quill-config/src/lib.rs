//! Configuration management for Quill.
//!
//! Parses `quill.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `notion.api_key`
//! - `notion.database_id`
//! - `notion.api_url`

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override site output directory.
    pub output_dir: Option<PathBuf>,
    /// Override Notion database ID.
    pub database_id: Option<String>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "quill.toml";

/// Default Notion API endpoint.
const DEFAULT_API_URL: &str = "https://api.notion.com/v1";

/// Notion API version sent in the `Notion-Version` header.
const DEFAULT_API_VERSION: &str = "2022-06-28";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Notion API configuration.
    pub notion: Option<NotionConfig>,
    /// Site configuration (paths are relative strings from TOML).
    site: SiteConfigRaw,

    /// Resolved site configuration (set after loading).
    #[serde(skip)]
    pub site_resolved: SiteConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Notion API configuration.
#[derive(Debug, Deserialize)]
pub struct NotionConfig {
    /// Integration token.
    pub api_key: String,
    /// Database holding the posts.
    pub database_id: String,
    /// API base URL.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Value of the `Notion-Version` header.
    #[serde(default = "default_api_version")]
    pub api_version: String,
    /// HTTP timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// Name of the checkbox property gating publication.
    #[serde(default = "default_published_property")]
    pub published_property: String,
}

impl NotionConfig {
    /// Validate that all required fields are properly set.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any field is empty or has invalid format.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.api_key, "notion.api_key")?;
        require_non_empty(&self.database_id, "notion.database_id")?;
        require_non_empty(&self.api_url, "notion.api_url")?;
        require_http_url(&self.api_url, "notion.api_url")?;
        require_non_empty(&self.api_version, "notion.api_version")?;
        require_non_empty(&self.published_property, "notion.published_property")?;
        if self.timeout == 0 {
            return Err(ConfigError::Validation(
                "notion.timeout must be greater than 0".to_owned(),
            ));
        }
        Ok(())
    }
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_owned()
}

fn default_api_version() -> String {
    DEFAULT_API_VERSION.to_owned()
}

fn default_timeout() -> u64 {
    30
}

fn default_published_property() -> String {
    "Published".to_owned()
}

/// Raw site configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct SiteConfigRaw {
    title: Option<String>,
    description: Option<String>,
    output_dir: Option<String>,
}

/// Resolved site configuration with absolute paths.
#[derive(Debug, Default)]
pub struct SiteConfig {
    /// Heading of the listing page.
    pub title: String,
    /// Tagline under the listing heading.
    pub description: String,
    /// Directory the static site is written to.
    pub output_dir: PathBuf,
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
        /// Config field path (e.g., "`notion.api_key`").
        field: String,
        /// Error message (e.g., "${`NOTION_API_KEY`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `quill.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
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

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(output_dir) = &settings.output_dir {
            self.site_resolved.output_dir.clone_from(output_dir);
        }
        if let Some(database_id) = &settings.database_id
            && let Some(notion) = self.notion.as_mut()
        {
            notion.database_id.clone_from(database_id);
        }
    }

    /// Get validated Notion configuration.
    ///
    /// Returns the Notion config if the `[notion]` section is present and all
    /// fields are valid. Commands talking to the API use this instead of the
    /// `notion` field.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if the section is missing or invalid.
    pub fn require_notion(&self) -> Result<&NotionConfig, ConfigError> {
        let notion = self.notion.as_ref().ok_or_else(|| {
            ConfigError::Validation("[notion] section required in config".into())
        })?;
        notion.validate()?;
        Ok(notion)
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        let mut config = Self {
            notion: None,
            site: SiteConfigRaw::default(),
            site_resolved: SiteConfig::default(),
            config_path: None,
        };
        config.resolve_paths(base);
        config
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

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// The `[notion]` section is validated only when present; commands that
    /// need it call [`Config::require_notion`].
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(notion) = &self.notion {
            notion.validate()?;
        }
        require_non_empty(&self.site_resolved.title, "site.title")?;
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(ref mut notion) = self.notion {
            notion.api_key = expand::expand_env(&notion.api_key, "notion.api_key")?;
            notion.database_id = expand::expand_env(&notion.database_id, "notion.database_id")?;
            notion.api_url = expand::expand_env(&notion.api_url, "notion.api_url")?;
        }
        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        self.site_resolved = SiteConfig {
            title: self
                .site
                .title
                .clone()
                .unwrap_or_else(|| "Latest Updates".to_owned()),
            description: self.site.description.clone().unwrap_or_default(),
            output_dir: config_dir.join(self.site.output_dir.as_deref().unwrap_or("dist")),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const NOTION_SECTION: &str = r#"
[notion]
api_key = "secret_123"
database_id = "db-1"
"#;

    #[test]
    fn test_default_config() {
        let config = Config::default_with_base(Path::new("/test"));
        assert!(config.notion.is_none());
        assert_eq!(config.site_resolved.title, "Latest Updates");
        assert_eq!(config.site_resolved.output_dir, PathBuf::from("/test/dist"));
        assert!(config.config_path.is_none());
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.notion.is_none());
    }

    #[test]
    fn test_parse_notion_defaults() {
        let config: Config = toml::from_str(NOTION_SECTION).unwrap();
        let notion = config.notion.unwrap();
        assert_eq!(notion.api_key, "secret_123");
        assert_eq!(notion.database_id, "db-1");
        assert_eq!(notion.api_url, "https://api.notion.com/v1");
        assert_eq!(notion.api_version, "2022-06-28");
        assert_eq!(notion.timeout, 30);
        assert_eq!(notion.published_property, "Published");
    }

    #[test]
    fn test_parse_notion_overrides() {
        let toml = r#"
[notion]
api_key = "k"
database_id = "d"
api_url = "http://localhost:8080/v1"
api_version = "2025-09-03"
timeout = 5
published_property = "Live"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        let notion = config.notion.unwrap();
        assert_eq!(notion.api_url, "http://localhost:8080/v1");
        assert_eq!(notion.api_version, "2025-09-03");
        assert_eq!(notion.timeout, 5);
        assert_eq!(notion.published_property, "Live");
    }

    #[test]
    fn test_resolve_site_paths() {
        let toml = r#"
[site]
title = "Team Notes"
description = "What we shipped"
output_dir = "public"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.resolve_paths(Path::new("/project"));

        assert_eq!(config.site_resolved.title, "Team Notes");
        assert_eq!(config.site_resolved.description, "What we shipped");
        assert_eq!(
            config.site_resolved.output_dir,
            PathBuf::from("/project/public")
        );
    }

    #[test]
    fn test_require_notion_missing_section() {
        let config = Config::default_with_base(Path::new("/test"));
        let err = config.require_notion().unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("[notion]"));
    }

    #[test]
    fn test_require_notion_rejects_empty_key() {
        let toml = r#"
[notion]
api_key = ""
database_id = "db"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        let err = config.require_notion().unwrap_err();
        assert!(err.to_string().contains("notion.api_key"));
    }

    #[test]
    fn test_require_notion_rejects_non_http_url() {
        let toml = r#"
[notion]
api_key = "k"
database_id = "db"
api_url = "ftp://api.notion.com"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        let err = config.require_notion().unwrap_err();
        assert!(err.to_string().contains("http://"));
    }

    #[test]
    fn test_require_notion_rejects_zero_timeout() {
        let toml = r#"
[notion]
api_key = "k"
database_id = "db"
timeout = 0
"#;
        let config: Config = toml::from_str(toml).unwrap();
        let err = config.require_notion().unwrap_err();
        assert!(err.to_string().contains("notion.timeout"));
    }

    #[test]
    fn test_apply_cli_settings() {
        let mut config: Config = toml::from_str(NOTION_SECTION).unwrap();
        config.resolve_paths(Path::new("/project"));
        let overrides = CliSettings {
            output_dir: Some(PathBuf::from("/tmp/site")),
            database_id: Some("db-2".to_owned()),
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(config.site_resolved.output_dir, PathBuf::from("/tmp/site"));
        assert_eq!(config.notion.unwrap().database_id, "db-2");
    }

    #[test]
    fn test_load_explicit_path_not_found() {
        let err = Config::load(Some(Path::new("/nonexistent/quill.toml")), None).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_load_from_file_resolves_relative_to_config_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quill.toml");
        std::fs::write(&path, format!("{NOTION_SECTION}\n[site]\noutput_dir = \"out\"\n"))
            .unwrap();

        let config = Config::load(Some(&path), None).unwrap();

        assert_eq!(config.site_resolved.output_dir, dir.path().join("out"));
        assert_eq!(config.config_path, Some(path));
        assert_eq!(config.require_notion().unwrap().database_id, "db-1");
    }
}
