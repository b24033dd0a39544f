//! Configuration management for the gradebook client.
//!
//! Loads configuration from ${GRADEBOOK_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::api::{DEFAULT_API_BASE, resolve_base_url, validate_base_url};

/// Returns the default config template with comments.
///
/// Embedded from default_config.toml at compile time.
fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

/// Merges user config values into the default template.
///
/// New comments from the template stay present while user values win.
fn merge_with_template(user_config: &str) -> Result<String> {
    use toml_edit::DocumentMut;

    let mut doc: DocumentMut = default_config_template()
        .parse()
        .context("Failed to parse default config template")?;
    let user_doc: DocumentMut = user_config.parse().context("Failed to parse user config")?;

    merge_items(doc.as_table_mut(), user_doc.as_table());

    Ok(doc.to_string())
}

fn merge_items(target: &mut toml_edit::Table, source: &toml_edit::Table) {
    use toml_edit::Item;

    for (key, value) in source.iter() {
        match value {
            Item::Value(v) => {
                target[key] = Item::Value(v.clone());
            }
            Item::Table(src_table) => {
                if let Some(Item::Table(target_table)) = target.get_mut(key) {
                    merge_items(target_table, src_table);
                } else {
                    target[key] = Item::Table(src_table.clone());
                }
            }
            Item::ArrayOfTables(src_arr) => {
                target[key] = Item::ArrayOfTables(src_arr.clone());
            }
            Item::None => {}
        }
    }
}

pub mod paths {
    //! Path resolution for gradebook configuration and data.
    //!
    //! GRADEBOOK_HOME resolution order:
    //! 1. `GRADEBOOK_HOME` environment variable
    //! 2. `~/.config/gradebook`

    use std::path::PathBuf;

    pub const HOME_ENV: &str = "GRADEBOOK_HOME";

    pub fn gradebook_home() -> PathBuf {
        if let Ok(home) = std::env::var(HOME_ENV)
            && !home.trim().is_empty()
        {
            return PathBuf::from(home);
        }

        dirs::home_dir().map_or_else(
            || PathBuf::from(".gradebook"),
            |h| h.join(".config").join("gradebook"),
        )
    }

    pub fn config_path() -> PathBuf {
        gradebook_home().join("config.toml")
    }

    pub fn logs_dir() -> PathBuf {
        gradebook_home().join("logs")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Root of the REST API, e.g. `http://localhost:8080/api`.
    pub api_base: String,
    pub notice_timeout_ms: u64,
    /// `EnvFilter` directive used when `GRADEBOOK_LOG` is unset.
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            notice_timeout_ms: Self::DEFAULT_NOTICE_TIMEOUT_MS,
            log_level: Self::DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl Config {
    pub const DEFAULT_NOTICE_TIMEOUT_MS: u64 = 3000;
    pub const DEFAULT_LOG_LEVEL: &'static str = "info";

    /// Loads configuration from the default path.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if the file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    pub fn notice_timeout(&self) -> Duration {
        Duration::from_millis(self.notice_timeout_ms)
    }

    /// Effective API root for this session (flag > env > config > default).
    pub fn effective_api_base(&self, cli_override: Option<&str>) -> Result<String> {
        resolve_base_url(cli_override, Some(&self.api_base))
    }

    /// Writes the commented template to `path`.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }

        Self::write_config(path, default_config_template())
    }

    pub fn save_api_base(api_base: &str) -> Result<()> {
        Self::save_api_base_to(&paths::config_path(), api_base)
    }

    /// Saves only the api_base field to a specific config file path.
    ///
    /// Creates the file from the template if it doesn't exist; otherwise
    /// merges the user's values into the latest template first.
    pub fn save_api_base_to(path: &Path, api_base: &str) -> Result<()> {
        use toml_edit::{DocumentMut, value};

        let api_base = api_base.trim();
        validate_base_url(api_base)?;

        let contents = if path.exists() {
            let user_config = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            merge_with_template(&user_config)?
        } else {
            default_config_template().to_string()
        };

        let mut doc: DocumentMut = contents
            .parse()
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        doc["api_base"] = value(api_base);

        Self::write_config(path, &doc.to_string())
    }

    fn write_config(path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let tmp_path = path.with_extension("toml.tmp");
        fs::write(&tmp_path, content)
            .with_context(|| format!("Failed to write config to {}", tmp_path.display()))?;
        fs::rename(&tmp_path, path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                tmp_path.display(),
                path.display()
            )
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.notice_timeout(), Duration::from_millis(3000));
    }

    #[test]
    fn test_template_parses_to_defaults() {
        let config: Config = toml::from_str(default_config_template()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "notice_timeout_ms = 500\n").unwrap();
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.notice_timeout_ms, 500);
        assert_eq!(config.api_base, DEFAULT_API_BASE);
    }

    #[test]
    fn test_invalid_file_reports_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "api_base = [").unwrap();
        let err = Config::load_from(&path).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse config"));
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        Config::init(&path).unwrap();
        assert!(path.exists());
        assert!(Config::init(&path).is_err());
    }

    #[test]
    fn test_save_api_base_preserves_user_values() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "log_level = \"debug\"\n").unwrap();

        Config::save_api_base_to(&path, "http://grades.example:9000/api").unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("# Root of the grade-record REST API."));
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.api_base, "http://grades.example:9000/api");
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_save_api_base_rejects_invalid_url() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        assert!(Config::save_api_base_to(&path, "nope").is_err());
        assert!(!path.exists());
    }
}
