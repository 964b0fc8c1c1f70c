//! Domain error type for the install pipeline.
//!
//! Every pipeline failure is terminal: it is surfaced once with a diagnostic
//! line and mapped to a distinct process exit code. Nothing is retried and
//! nothing is rolled back.
//!
//! Alias-link failures share the [`InstallError::CopyFailed`] kind with copy
//! failures; permission failures are a distinct kind but share exit code 4,
//! keeping the exit-code surface small while the diagnostics stay precise.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure modes of the install pipeline, one per exit code.
#[derive(Error, Debug)]
pub enum InstallError {
    /// The caller is not running with elevated privileges.
    #[error("insufficient privilege: installing into a system directory requires root")]
    InsufficientPrivilege,

    /// The install directory does not exist. We never create it.
    #[error("install directory does not exist: {0}")]
    TargetDirectoryMissing(PathBuf),

    /// Copying the executable or creating the alias link failed.
    #[error("write failed for {path}: {source}")]
    CopyFailed {
        /// Path being written when the failure occurred.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Marking the installed file executable failed.
    #[error("could not mark {path} executable: {source}")]
    PermissionSetFailed {
        /// Path whose mode could not be changed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Files were written correctly but the command does not resolve on PATH.
    #[error("'{command}' was installed but is not resolvable on PATH")]
    NotOnPath {
        /// The command name that failed to resolve.
        command: String,
        /// Directory the command was installed into.
        install_dir: PathBuf,
    },
}

impl InstallError {
    /// Process exit code for this failure.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::InsufficientPrivilege => 1,
            Self::TargetDirectoryMissing(_) => 2,
            Self::NotOnPath { .. } => 3,
            Self::CopyFailed { .. } | Self::PermissionSetFailed { .. } => 4,
        }
    }

    /// One-line remediation hint for the user, where one exists.
    #[must_use]
    pub fn remediation(&self) -> Option<String> {
        match self {
            Self::InsufficientPrivilege => {
                Some("re-run with sudo (or as an administrator)".to_string())
            }
            Self::NotOnPath { install_dir, .. } => Some(format!(
                "add {} to your PATH",
                install_dir.display()
            )),
            _ => None,
        }
    }
}
