use std::path::PathBuf;

use clap::Parser;

use crate::config;

/// Command-line surface of the installer.
///
/// Running with no arguments installs `./gitmess` into `/usr/local/bin` as
/// `gitmess` with a `git-mess` alias link — the compiled-in defaults from
/// [`config`].
#[derive(Parser, Debug)]
#[command(
    name = "gitmess-install",
    about = "Install the gitmess commit-message helper",
    version = version_string()
)]
pub struct Cli {
    /// Path to the gitmess executable to install
    #[arg(short, long, default_value = config::DEFAULT_SOURCE)]
    pub source: PathBuf,

    /// Directory to install into (must already exist)
    #[arg(long, default_value = config::DEFAULT_INSTALL_DIR)]
    pub install_dir: PathBuf,

    /// Name under which the executable is installed
    #[arg(long, default_value = config::DEFAULT_PROJECT_NAME)]
    pub name: String,

    /// Git subcommand alias; a git-<ALIAS> symlink is created beside the executable
    #[arg(long, default_value = config::DEFAULT_ALIAS)]
    pub alias: String,

    /// Skip creating the git-<alias> symlink
    #[arg(long)]
    pub no_alias: bool,

    /// Preview changes without applying
    #[arg(short = 'd', long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Version injected by build.rs (`git describe`), falling back to the crate version.
#[must_use]
pub const fn version_string() -> &'static str {
    match option_env!("GITMESS_VERSION") {
        Some(v) => v,
        None => env!("CARGO_PKG_VERSION"),
    }
}
