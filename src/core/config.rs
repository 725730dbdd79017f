use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::core::{
    dirs::get_config_directory,
    error::{ErrorCode, Result, StatusError},
    status::{StoredStatus, Template},
};

const CONFIG_FILE: &str = "config.json";
const DEFAULT_HISTORY_LIMIT: usize = 10;

fn default_history_limit() -> usize {
    DEFAULT_HISTORY_LIMIT
}

fn default_git_integration() -> bool {
    true
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StatusConfig {
    #[serde(default)]
    pub status_message_templates: Vec<Template>,
    #[serde(default)]
    pub bookmarked_statuses: Vec<StoredStatus>,
    /// 0 disables history recording
    #[serde(default = "default_history_limit")]
    pub status_history_limit: usize,
    #[serde(default = "default_git_integration")]
    pub git_integration: bool,
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self {
            status_message_templates: Vec::new(),
            bookmarked_statuses: Vec::new(),
            status_history_limit: DEFAULT_HISTORY_LIMIT,
            git_integration: true,
        }
    }
}

fn not_accessible(path: &Path, source: impl std::error::Error + Send + Sync + 'static) -> StatusError {
    StatusError::internal(
        ErrorCode::ConfigurationNotAccessible,
        format!("Could not read configuration at {}: {source}", path.display()),
    )
    .with_source(source)
}

impl StatusConfig {
    pub fn config_path() -> Result<PathBuf> {
        Ok(get_config_directory()?.join(CONFIG_FILE))
    }

    /// Load the configuration, falling back to defaults when no file exists yet
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No configuration at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| not_accessible(path, e))?;
        let config = serde_json::from_str(&content).map_err(|e| not_accessible(path, e))?;
        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::debug!("Saved configuration to {}", path.display());
        Ok(())
    }

    /// Template at a 1-based index
    pub fn template(&self, index: usize) -> Result<&Template> {
        index
            .checked_sub(1)
            .and_then(|i| self.status_message_templates.get(i))
            .ok_or_else(|| {
                StatusError::not_configured(format!(
                    "No template at index {index} ({} configured)",
                    self.status_message_templates.len()
                ))
            })
    }

    /// Remove and return the template at a 1-based index
    pub fn remove_template(&mut self, index: usize) -> Result<Template> {
        self.template(index)?;
        Ok(self.status_message_templates.remove(index - 1))
    }

    /// Add a bookmark unless an identical one exists. Returns whether it was added.
    pub fn bookmark(&mut self, status: StoredStatus) -> bool {
        if self.bookmarked_statuses.contains(&status) {
            return false;
        }
        self.bookmarked_statuses.push(status);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::status::Availability;
    use tempfile::TempDir;

    fn template(label: &str) -> Template {
        Template {
            label: label.to_string(),
            message: format!("{label} in {{d}}"),
            availability: Availability::Busy,
        }
    }

    #[test]
    fn test_missing_file_gives_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config = StatusConfig::load_from(&temp_dir.path().join(CONFIG_FILE))?;
        assert_eq!(config, StatusConfig::default());
        assert_eq!(config.status_history_limit, 10);
        assert!(config.git_integration);
        Ok(())
    }

    #[test]
    fn test_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("nested").join(CONFIG_FILE);

        let mut config = StatusConfig::default();
        config.status_message_templates.push(template("Coding"));
        config.git_integration = false;
        config.save_to(&path)?;

        assert_eq!(StatusConfig::load_from(&path)?, config);
        Ok(())
    }

    #[test]
    fn test_partial_file_uses_field_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join(CONFIG_FILE);
        std::fs::write(&path, r#"{"statusHistoryLimit": 3}"#)?;

        let config = StatusConfig::load_from(&path)?;
        assert_eq!(config.status_history_limit, 3);
        assert!(config.git_integration);
        assert!(config.status_message_templates.is_empty());
        Ok(())
    }

    #[test]
    fn test_malformed_file_is_not_accessible() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "{ not json")?;

        let err = StatusConfig::load_from(&path).unwrap_err();
        assert!(err.is_code(ErrorCode::ConfigurationNotAccessible));
        assert!(err.message().contains(CONFIG_FILE));
        Ok(())
    }

    #[test]
    fn test_template_indices_are_one_based() -> Result<()> {
        let mut config = StatusConfig::default();
        config.status_message_templates.push(template("First"));
        config.status_message_templates.push(template("Second"));

        assert_eq!(config.template(1)?.label, "First");
        assert!(config
            .template(0)
            .unwrap_err()
            .is_code(ErrorCode::NotConfigured));
        assert!(config
            .template(3)
            .unwrap_err()
            .is_code(ErrorCode::NotConfigured));

        assert_eq!(config.remove_template(1)?.label, "First");
        assert_eq!(config.template(1)?.label, "Second");
        Ok(())
    }

    #[test]
    fn test_bookmark_skips_duplicates() {
        let mut config = StatusConfig::default();
        let status = StoredStatus::new(Availability::Away, "Lunch");
        assert!(config.bookmark(status.clone()));
        assert!(!config.bookmark(status));
        assert_eq!(config.bookmarked_statuses.len(), 1);
    }
}
