//! Temporary git repositories built with the real `git` binary

#![allow(dead_code)]

use anyhow::{ensure, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// The TempDir must outlive the test, dropping it deletes the repository
pub struct TestRepo {
    pub temp_dir: TempDir,
    pub path: PathBuf,
}

impl TestRepo {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create (and return) a directory below the repository root
    pub fn subdir(&self, relative: &str) -> Result<PathBuf> {
        let dir = self.path.join(relative);
        fs::create_dir_all(&dir)?;
        Ok(dir)
    }
}

pub fn git(dir: &Path, args: &[&str]) -> Result<String> {
    let output = Command::new("git").args(args).current_dir(dir).output()?;
    ensure!(
        output.status.success(),
        "git {} failed: {}",
        args.join(" "),
        String::from_utf8_lossy(&output.stderr)
    );
    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// Fresh repository with `branch` checked out and no commits
pub fn setup_test_repo(branch: &str) -> Result<TestRepo> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().to_path_buf();

    git(&path, &["init"])?;
    git(&path, &["config", "user.name", "Test User"])?;
    git(&path, &["config", "user.email", "test@example.com"])?;
    git(&path, &["checkout", "-b", branch])?;

    Ok(TestRepo { temp_dir, path })
}

pub fn setup_test_repo_with_initial_commit(branch: &str) -> Result<TestRepo> {
    let repo = setup_test_repo(branch)?;
    create_file(&repo.path, "README.md", "# status\n")?;
    git(&repo.path, &["add", "README.md"])?;
    git(&repo.path, &["commit", "-m", "Initial commit"])?;
    Ok(repo)
}

pub fn create_file(dir: &Path, name: &str, content: &str) -> Result<()> {
    fs::write(dir.join(name), content)?;
    Ok(())
}

pub fn head_commit(dir: &Path) -> Result<String> {
    git(dir, &["rev-parse", "HEAD"])
}
