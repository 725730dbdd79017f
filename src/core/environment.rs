//! The outside world as seen by the renderer.
//!
//! Rendering reads three things it does not own: the working directory, the clock and the
//! version-control state of `HEAD`. Each is a small trait so the renderer can be driven by the
//! real process ([`ProcessDirectory`], [`SystemClock`], [`crate::core::git::GitRepo`]) or by
//! pinned values in tests ([`FixedDirectory`], [`FixedClock`], [`FixedVersionControl`]).

use chrono::{DateTime, FixedOffset, Local, Utc};
use std::path::PathBuf;

use crate::core::error::{ErrorCode, Result, StatusError};

/// Branch and commit lookup for a reference such as `HEAD`.
///
/// Implementations must report a missing or disabled integration as
/// `GitExtensionNotAvailable` and a reference that cannot be resolved as `GitExtensionError`.
pub trait VersionControl {
    /// Branch name the reference points at, `None` when it is not on a branch (detached)
    fn branch_name(&self, reference: &str) -> Result<Option<String>>;

    /// Full hexadecimal commit id the reference resolves to
    fn commit_hash(&self, reference: &str) -> Result<String>;
}

pub trait WorkingDirectory {
    fn current_dir(&self) -> Result<PathBuf>;
}

pub trait Clock {
    /// Current instant in the clock's own local offset
    fn now(&self) -> DateTime<FixedOffset>;

    /// `instant` in the local offset that applies at that instant, which differs from the
    /// offset of [`Clock::now`] across a daylight saving change
    fn localize(&self, instant: DateTime<Utc>) -> DateTime<FixedOffset>;
}

/// Stands in for a repository that is absent or switched off in the configuration
#[derive(Debug, Clone)]
pub struct UnavailableVersionControl {
    reason: String,
}

impl UnavailableVersionControl {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    fn error(&self) -> StatusError {
        StatusError::internal(ErrorCode::GitExtensionNotAvailable, self.reason.clone())
    }
}

impl VersionControl for UnavailableVersionControl {
    fn branch_name(&self, _reference: &str) -> Result<Option<String>> {
        Err(self.error())
    }

    fn commit_hash(&self, _reference: &str) -> Result<String> {
        Err(self.error())
    }
}

/// In-memory repository state
#[derive(Debug, Clone, Default)]
pub struct FixedVersionControl {
    pub branch: Option<String>,
    pub commit: Option<String>,
}

impl VersionControl for FixedVersionControl {
    fn branch_name(&self, _reference: &str) -> Result<Option<String>> {
        Ok(self.branch.clone())
    }

    fn commit_hash(&self, reference: &str) -> Result<String> {
        self.commit.clone().ok_or_else(|| {
            StatusError::internal(
                ErrorCode::GitExtensionError,
                format!("Could not resolve commit of {reference}"),
            )
        })
    }
}

/// The working directory of the running process
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessDirectory;

impl WorkingDirectory for ProcessDirectory {
    fn current_dir(&self) -> Result<PathBuf> {
        Ok(std::env::current_dir()?)
    }
}

#[derive(Debug, Clone)]
pub struct FixedDirectory(pub PathBuf);

impl WorkingDirectory for FixedDirectory {
    fn current_dir(&self) -> Result<PathBuf> {
        Ok(self.0.clone())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }

    fn localize(&self, instant: DateTime<Utc>) -> DateTime<FixedOffset> {
        instant.with_timezone(&Local).fixed_offset()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<FixedOffset>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }

    /// A pinned clock has no zone rules, every instant keeps the pinned offset
    fn localize(&self, instant: DateTime<Utc>) -> DateTime<FixedOffset> {
        instant.with_timezone(self.0.offset())
    }
}
