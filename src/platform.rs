//! Capability seams around the two pieces of ambient OS state the installer
//! depends on: the caller's effective privilege and PATH command resolution.
//!
//! The pipeline takes these as trait objects instead of reading process
//! globals, so tests can drive every branch without running as root or
//! mutating the environment.

use std::path::PathBuf;

use crate::exec;

/// Answers whether the current process runs with elevated privileges.
#[cfg_attr(test, mockall::automock)]
pub trait Privileges {
    /// True when the effective caller has root/administrator rights.
    fn is_elevated(&self) -> bool;
}

/// Resolves a command name through PATH search semantics.
#[cfg_attr(test, mockall::automock)]
pub trait CommandResolver {
    /// Full path the command resolves to, or `None` if it is not on PATH.
    fn resolve(&self, command: &str) -> Option<PathBuf>;
}

/// Privilege oracle for the real system.
///
/// On Unix this asks `id -u` for the effective uid; on Windows it probes
/// `net session`, which only succeeds in an elevated shell.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemPrivileges;

impl Privileges for SystemPrivileges {
    fn is_elevated(&self) -> bool {
        #[cfg(windows)]
        {
            exec::run_unchecked("net", &["session"]).is_ok_and(|r| r.success)
        }

        #[cfg(not(windows))]
        {
            exec::run_unchecked("id", &["-u"]).is_ok_and(|r| r.success && r.stdout.trim() == "0")
        }
    }
}

/// PATH resolver backed by the `which` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemResolver;

impl CommandResolver for SystemResolver {
    fn resolve(&self, command: &str) -> Option<PathBuf> {
        which::which(command).ok()
    }
}
