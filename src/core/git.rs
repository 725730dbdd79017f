//! Git access for `{g?...}` placeholders.
//!
//! [`GitRepo`] wraps a `git2` repository discovered from a directory and implements
//! [`VersionControl`]. [`discover_version_control`] picks the implementation the renderer should
//! use: the repository when one is found and the integration is enabled, otherwise an
//! [`UnavailableVersionControl`] carrying the reason.
//!
//! # Public API
//! - [`GitRepo`]: Branch and commit lookup over `git2`
//! - [`discover_version_control`]: Repository discovery honoring the `gitIntegration` setting

use git2::{ReferenceType, Repository};
use std::path::Path;

use crate::core::{
    environment::{UnavailableVersionControl, VersionControl},
    error::{ErrorCode, Result, StatusError},
};

const BRANCH_PREFIX: &str = "refs/heads/";

pub struct GitRepo {
    repo: Repository,
}

impl GitRepo {
    /// Open the repository containing `path`, searching parent directories
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let repo = Repository::discover(path).map_err(|e| {
            StatusError::internal(
                ErrorCode::GitExtensionNotAvailable,
                format!("No git repository found at {}", path.display()),
            )
            .with_source(e)
        })?;

        log::debug!("Opened git repository at {}", repo.path().display());
        Ok(GitRepo { repo })
    }
}

fn unresolved(reference: &str, what: &str, source: git2::Error) -> StatusError {
    StatusError::internal(
        ErrorCode::GitExtensionError,
        format!("Could not resolve {what} of {reference}"),
    )
    .with_source(source)
}

impl VersionControl for GitRepo {
    fn branch_name(&self, reference: &str) -> Result<Option<String>> {
        let found = self
            .repo
            .find_reference(reference)
            .map_err(|e| unresolved(reference, "branch", e))?;

        // A symbolic HEAD names its branch even before the first commit exists
        if found.kind() == Some(ReferenceType::Symbolic) {
            return Ok(found
                .symbolic_target()
                .and_then(|target| target.strip_prefix(BRANCH_PREFIX))
                .map(str::to_string));
        }

        if found.is_branch() {
            Ok(found.shorthand().map(str::to_string))
        } else {
            // Detached HEAD
            Ok(None)
        }
    }

    fn commit_hash(&self, reference: &str) -> Result<String> {
        let commit = self
            .repo
            .revparse_single(reference)
            .and_then(|object| object.peel_to_commit())
            .map_err(|e| unresolved(reference, "commit", e))?;

        Ok(commit.id().to_string())
    }
}

/// Version control for placeholders rendered from `dir`
pub fn discover_version_control(dir: &Path, enabled: bool) -> Box<dyn VersionControl> {
    if !enabled {
        return Box::new(UnavailableVersionControl::new(
            "Git integration is disabled in the configuration",
        ));
    }

    match GitRepo::open(dir) {
        Ok(repo) => Box::new(repo),
        Err(e) => {
            log::debug!("Git integration unavailable: {e}");
            Box::new(UnavailableVersionControl::new(e.message()))
        }
    }
}
