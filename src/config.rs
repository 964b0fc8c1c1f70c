//! Explicit install inputs with compiled-in defaults.

use std::path::PathBuf;

use crate::cli::Cli;

/// Default location of the executable to install.
pub const DEFAULT_SOURCE: &str = "./gitmess";
/// Default system binary directory.
pub const DEFAULT_INSTALL_DIR: &str = "/usr/local/bin";
/// Default name under which the executable is installed.
pub const DEFAULT_PROJECT_NAME: &str = "gitmess";
/// Default git subcommand alias (produces the link name `git-mess`).
pub const DEFAULT_ALIAS: &str = "mess";
/// Prefix git requires for external subcommands.
pub const GIT_SUBCOMMAND_PREFIX: &str = "git-";

/// Everything the install pipeline needs to know, gathered up front so the
/// pipeline itself never reads process globals.
#[derive(Debug, Clone)]
pub struct InstallSpec {
    /// Path of the executable to install (read as opaque bytes).
    pub source: PathBuf,
    /// Directory the executable is installed into. Never created by us.
    pub install_dir: PathBuf,
    /// Filename under which the executable is installed.
    pub project_name: String,
    /// Git subcommand alias, if a `git-<alias>` link should be created.
    pub alias: Option<String>,
}

impl InstallSpec {
    /// Build a spec from parsed CLI arguments.
    #[must_use]
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            source: cli.source.clone(),
            install_dir: cli.install_dir.clone(),
            project_name: cli.name.clone(),
            alias: if cli.no_alias {
                None
            } else {
                Some(cli.alias.clone())
            },
        }
    }

    /// Final location of the installed executable.
    #[must_use]
    pub fn target_path(&self) -> PathBuf {
        self.install_dir.join(&self.project_name)
    }

    /// Location of the alias symlink, when an alias is configured.
    #[must_use]
    pub fn alias_path(&self) -> Option<PathBuf> {
        self.alias
            .as_ref()
            .map(|alias| self.install_dir.join(format!("{GIT_SUBCOMMAND_PREFIX}{alias}")))
    }

}
