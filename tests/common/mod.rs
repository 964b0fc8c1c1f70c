// Shared helpers for integration tests.
//
// Provides stub implementations of the privilege and PATH capabilities plus
// a temporary-directory-backed install environment, so each test can drive
// the full pipeline without running as root or touching the real PATH.
#![allow(dead_code)]

use std::path::{Path, PathBuf};

use gitmess_installer::config::InstallSpec;
use gitmess_installer::platform::{CommandResolver, Privileges};

/// Privilege oracle with a fixed answer.
pub struct StaticPrivileges(pub bool);

impl Privileges for StaticPrivileges {
    fn is_elevated(&self) -> bool {
        self.0
    }
}

/// PATH resolver with a fixed answer.
pub struct StaticResolver(pub Option<PathBuf>);

impl CommandResolver for StaticResolver {
    fn resolve(&self, _command: &str) -> Option<PathBuf> {
        self.0.clone()
    }
}

/// An isolated install environment backed by a [`tempfile::TempDir`].
///
/// Contains a source executable and an existing install directory; the
/// directory is deleted when the context is dropped.
pub struct InstallTestContext {
    pub root: tempfile::TempDir,
    pub spec: InstallSpec,
}

impl InstallTestContext {
    /// Create a context with a small shell-script source and an empty
    /// install directory.
    pub fn new() -> Self {
        Self::with_source_bytes(b"#!/bin/sh\necho gitmess\n")
    }

    /// Create a context whose source file holds exactly `bytes`.
    pub fn with_source_bytes(bytes: &[u8]) -> Self {
        let root = tempfile::tempdir().expect("create temp dir");
        let source = root.path().join("gitmess");
        std::fs::write(&source, bytes).expect("write source executable");

        let install_dir = root.path().join("bin");
        std::fs::create_dir(&install_dir).expect("create install dir");

        let spec = InstallSpec {
            source,
            install_dir,
            project_name: "gitmess".to_string(),
            alias: Some("mess".to_string()),
        };
        Self { root, spec }
    }

    /// Resolver that reports the command at its install target, as if the
    /// install directory were on PATH.
    pub fn resolver_on_path(&self) -> StaticResolver {
        StaticResolver(Some(self.spec.target_path()))
    }

    /// Resolver that never resolves, as if the install directory were
    /// absent from PATH.
    pub fn resolver_off_path(&self) -> StaticResolver {
        StaticResolver(None)
    }

    /// Every entry name currently in the install directory.
    pub fn install_dir_entries(&self) -> Vec<String> {
        std::fs::read_dir(&self.spec.install_dir)
            .expect("read install dir")
            .map(|e| {
                e.expect("read dir entry")
                    .file_name()
                    .to_string_lossy()
                    .into_owned()
            })
            .collect()
    }
}

/// Mode bits of a file, masked to the permission bits.
#[cfg(unix)]
pub fn mode_of(path: &Path) -> u32 {
    use std::os::unix::fs::PermissionsExt;
    std::fs::metadata(path)
        .expect("stat file")
        .permissions()
        .mode()
        & 0o7777
}
