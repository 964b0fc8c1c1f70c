//! Alias symlink resource.

use std::io;
use std::path::PathBuf;

use super::{Resource, ResourceChange, ResourceState};
use crate::error::InstallError;

/// Symbolic link that exposes the installed executable under a git
/// subcommand name (`git-<alias>`), replacing whatever is at the link path.
#[derive(Debug, Clone)]
pub struct AliasResource {
    /// The installed executable the link points to.
    pub target: PathBuf,
    /// Where the link itself is created.
    pub link: PathBuf,
}

impl AliasResource {
    /// Create a new alias resource.
    #[must_use]
    pub const fn new(target: PathBuf, link: PathBuf) -> Self {
        Self { target, link }
    }

    fn link_error(&self, source: io::Error) -> InstallError {
        // Alias creation shares the copy failure kind: both are write-phase
        // failures surfaced under exit code 4.
        InstallError::CopyFailed {
            path: self.link.clone(),
            source,
        }
    }
}

impl Resource for AliasResource {
    fn description(&self) -> String {
        format!("{} -> {}", self.link.display(), self.target.display())
    }

    fn current_state(&self) -> Result<ResourceState, InstallError> {
        if !self.target.exists() {
            return Ok(ResourceState::Invalid {
                reason: format!("link target does not exist: {}", self.target.display()),
            });
        }

        match std::fs::read_link(&self.link) {
            Ok(existing) => {
                if existing == self.target {
                    Ok(ResourceState::Correct)
                } else {
                    Ok(ResourceState::Incorrect {
                        current: format!("points to {}", existing.display()),
                    })
                }
            }
            Err(_) => {
                if self.link.exists() {
                    Ok(ResourceState::Incorrect {
                        current: "link path is a regular file".to_string(),
                    })
                } else {
                    Ok(ResourceState::Missing)
                }
            }
        }
    }

    fn apply(&self) -> Result<ResourceChange, InstallError> {
        #[cfg(unix)]
        {
            // Remove whatever currently occupies the link path, link or file.
            if self.link.symlink_metadata().is_ok() {
                std::fs::remove_file(&self.link).map_err(|e| self.link_error(e))?;
            }

            std::os::unix::fs::symlink(&self.target, &self.link)
                .map_err(|e| self.link_error(e))?;

            Ok(ResourceChange::Applied)
        }

        #[cfg(not(unix))]
        {
            Ok(ResourceChange::Skipped {
                reason: "symlinks are only created on Unix hosts".to_string(),
            })
        }
    }
}
