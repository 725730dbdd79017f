//! Isolated config and cache homes for running the binary

#![allow(dead_code)]

use anyhow::Result;
use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestHome {
    pub temp_dir: TempDir,
}

impl TestHome {
    pub fn new() -> Result<Self> {
        Ok(Self {
            temp_dir: TempDir::new()?,
        })
    }

    pub fn config_file(&self) -> PathBuf {
        self.temp_dir
            .path()
            .join("config")
            .join("chat-status")
            .join("config.json")
    }

    pub fn history_file(&self) -> PathBuf {
        self.temp_dir
            .path()
            .join("cache")
            .join("chat-status")
            .join("history.json")
    }

    /// The binary, run from `cwd` with this home
    pub fn command(&self, cwd: &Path) -> Result<Command> {
        let mut cmd = Command::cargo_bin("chat-status")?;
        cmd.current_dir(cwd)
            .env("HOME", self.temp_dir.path())
            .env("XDG_CONFIG_HOME", self.temp_dir.path().join("config"))
            .env("XDG_CACHE_HOME", self.temp_dir.path().join("cache"))
            .env("NO_COLOR", "1");
        Ok(cmd)
    }

    pub fn write_config(&self, json: &serde_json::Value) -> Result<()> {
        let path = self.config_file();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(json)?)?;
        Ok(())
    }

    pub fn read_config(&self) -> Result<serde_json::Value> {
        let content = std::fs::read_to_string(self.config_file())?;
        Ok(serde_json::from_str(&content)?)
    }
}
