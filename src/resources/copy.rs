//! Executable copy resource with atomic staging.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

use super::{Resource, ResourceChange, ResourceState};
use crate::error::InstallError;

/// Byte-for-byte copy of the source executable into the install directory.
///
/// The copy is staged to a temporary file in the same directory and renamed
/// into place, so a failure mid-copy never leaves a partially written target.
#[derive(Debug, Clone)]
pub struct CopyResource {
    /// File to install (read as opaque bytes).
    pub source: PathBuf,
    /// Final install location.
    pub target: PathBuf,
}

impl CopyResource {
    /// Create a new copy resource.
    #[must_use]
    pub const fn new(source: PathBuf, target: PathBuf) -> Self {
        Self { source, target }
    }

    fn copy_error(&self, source: io::Error) -> InstallError {
        InstallError::CopyFailed {
            path: self.target.clone(),
            source,
        }
    }
}

impl Resource for CopyResource {
    fn description(&self) -> String {
        format!("{} -> {}", self.source.display(), self.target.display())
    }

    fn current_state(&self) -> Result<ResourceState, InstallError> {
        if !self.source.is_file() {
            return Ok(ResourceState::Invalid {
                reason: format!("source does not exist: {}", self.source.display()),
            });
        }

        if !self.target.exists() {
            return Ok(ResourceState::Missing);
        }

        let source_digest = file_digest(&self.source).map_err(|e| self.copy_error(e))?;
        let target_digest = file_digest(&self.target).map_err(|e| self.copy_error(e))?;

        if source_digest == target_digest {
            Ok(ResourceState::Correct)
        } else {
            Ok(ResourceState::Incorrect {
                current: "target content differs from source".to_string(),
            })
        }
    }

    fn apply(&self) -> Result<ResourceChange, InstallError> {
        let dir = self.target.parent().ok_or_else(|| {
            self.copy_error(io::Error::new(
                io::ErrorKind::InvalidInput,
                "target has no parent directory",
            ))
        })?;

        // Stage in the target directory so the final rename stays on one
        // filesystem and replaces any existing file in a single step.
        let mut staged = tempfile::Builder::new()
            .prefix(".gitmess-install")
            .tempfile_in(dir)
            .map_err(|e| self.copy_error(e))?;

        let mut reader = File::open(&self.source).map_err(|e| InstallError::CopyFailed {
            path: self.source.clone(),
            source: e,
        })?;
        io::copy(&mut reader, &mut staged).map_err(|e| self.copy_error(e))?;

        staged
            .persist(&self.target)
            .map_err(|e| self.copy_error(e.error))?;

        Ok(ResourceChange::Applied)
    }
}

/// SHA-256 digest of a file's contents, streamed.
fn file_digest(path: &Path) -> io::Result<[u8; 32]> {
    let mut file = File::open(path)?;
    let mut hasher = Sha256::new();
    io::copy(&mut file, &mut hasher)?;
    Ok(hasher.finalize().into())
}
