//! Executable permission resource (Unix only).

use std::io;
use std::path::PathBuf;

use super::{Resource, ResourceChange, ResourceState};
use crate::error::InstallError;

/// Mode applied to the installed executable: read and execute for everyone,
/// write for the owner.
pub const EXECUTABLE_MODE: u32 = 0o755;

/// Marks the installed file executable by all principals.
#[derive(Debug, Clone)]
pub struct ExecModeResource {
    /// Installed file whose mode is managed.
    pub target: PathBuf,
}

impl ExecModeResource {
    /// Create a new executable-mode resource.
    #[must_use]
    pub const fn new(target: PathBuf) -> Self {
        Self { target }
    }

    fn mode_error(&self, source: io::Error) -> InstallError {
        InstallError::PermissionSetFailed {
            path: self.target.clone(),
            source,
        }
    }
}

impl Resource for ExecModeResource {
    fn description(&self) -> String {
        format!("{:o} {}", EXECUTABLE_MODE, self.target.display())
    }

    fn current_state(&self) -> Result<ResourceState, InstallError> {
        if !self.target.exists() {
            return Ok(ResourceState::Invalid {
                reason: format!("target does not exist: {}", self.target.display()),
            });
        }

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;

            let current = std::fs::metadata(&self.target)
                .map_err(|e| self.mode_error(e))?
                .permissions()
                .mode()
                & 0o7777;

            if current == EXECUTABLE_MODE {
                Ok(ResourceState::Correct)
            } else {
                Ok(ResourceState::Incorrect {
                    current: format!("{current:o}"),
                })
            }
        }

        #[cfg(not(unix))]
        {
            Ok(ResourceState::Invalid {
                reason: "file modes are only managed on Unix hosts".to_string(),
            })
        }
    }

    fn apply(&self) -> Result<ResourceChange, InstallError> {
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;

            let perms = std::fs::Permissions::from_mode(EXECUTABLE_MODE);
            std::fs::set_permissions(&self.target, perms)
                .map_err(|e| self.mode_error(e))?;

            Ok(ResourceChange::Applied)
        }

        #[cfg(not(unix))]
        {
            Ok(ResourceChange::Skipped {
                reason: "file modes are only managed on Unix hosts".to_string(),
            })
        }
    }
}
