//! Recently used statuses, persisted in the cache directory.
//!
//! The newest entry comes first. Recording a status that is already present moves it to the
//! front instead of duplicating it, and the list never grows past the configured limit.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::core::{dirs::get_cache_directory, error::Result, status::StoredStatus};

const HISTORY_FILE: &str = "history.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    #[serde(flatten)]
    pub status: StoredStatus,
    pub recorded_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusHistory {
    pub entries: Vec<HistoryEntry>,
}

impl StatusHistory {
    pub fn history_path() -> Result<PathBuf> {
        Ok(get_cache_directory()?.join(HISTORY_FILE))
    }

    pub fn load() -> Result<Self> {
        Self::load_from(&Self::history_path()?)
    }

    /// A missing or unreadable history file yields an empty history
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        match serde_json::from_str(&content) {
            Ok(history) => Ok(history),
            Err(e) => {
                log::warn!("Ignoring corrupt history at {}: {e}", path.display());
                Ok(Self::default())
            }
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::history_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::debug!(
            "Saved {} history entries to {}",
            self.entries.len(),
            path.display()
        );
        Ok(())
    }

    /// Put `status` in front, dropping an identical older entry and anything past `limit`
    pub fn record(&mut self, status: StoredStatus, recorded_at: DateTime<Utc>, limit: usize) {
        self.entries.retain(|entry| entry.status != status);
        self.entries.insert(
            0,
            HistoryEntry {
                status,
                recorded_at,
            },
        );
        self.entries.truncate(limit);
    }

    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.first()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::status::Availability;
    use tempfile::TempDir;

    fn status(message: &str) -> StoredStatus {
        StoredStatus::new(Availability::Online, message)
    }

    fn messages(history: &StatusHistory) -> Vec<&str> {
        history
            .entries
            .iter()
            .map(|e| e.status.message.as_str())
            .collect()
    }

    #[test]
    fn test_record_newest_first_without_duplicates() {
        let mut history = StatusHistory::default();
        let now = Utc::now();
        history.record(status("a"), now, 10);
        history.record(status("b"), now, 10);
        history.record(status("a"), now, 10);

        assert_eq!(messages(&history), vec!["a", "b"]);
        assert_eq!(history.latest().map(|e| e.status.message.as_str()), Some("a"));
    }

    #[test]
    fn test_same_message_different_availability_is_distinct() {
        let mut history = StatusHistory::default();
        let now = Utc::now();
        history.record(status("a"), now, 10);
        history.record(StoredStatus::new(Availability::Busy, "a"), now, 10);
        assert_eq!(history.entries.len(), 2);
    }

    #[test]
    fn test_record_respects_limit() {
        let mut history = StatusHistory::default();
        let now = Utc::now();
        for message in ["a", "b", "c", "d"] {
            history.record(status(message), now, 2);
        }
        assert_eq!(messages(&history), vec!["d", "c"]);

        history.record(status("e"), now, 0);
        assert!(history.is_empty());
    }

    #[test]
    fn test_save_load_and_clear() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join(HISTORY_FILE);

        let mut history = StatusHistory::default();
        history.record(status("Reviewing"), Utc::now(), 5);
        history.save_to(&path)?;

        let mut loaded = StatusHistory::load_from(&path)?;
        assert_eq!(loaded, history);

        loaded.clear();
        loaded.save_to(&path)?;
        assert!(StatusHistory::load_from(&path)?.is_empty());
        Ok(())
    }

    #[test]
    fn test_corrupt_file_is_ignored() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join(HISTORY_FILE);
        std::fs::write(&path, "[[[")?;

        assert!(StatusHistory::load_from(&path)?.is_empty());
        Ok(())
    }
}
