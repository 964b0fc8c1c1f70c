//! The install pipeline: preflight checks, ordered tasks, summary.

use crate::cli::version_string;
use crate::config::InstallSpec;
use crate::error::InstallError;
use crate::logging::Logger;
use crate::platform::{CommandResolver, Privileges, SystemPrivileges, SystemResolver};
use crate::tasks::{self, Context};

/// Run the installer against the real system.
///
/// # Errors
///
/// Returns the first [`InstallError`] the pipeline hits; every error is
/// terminal and maps to a distinct process exit code.
pub fn run(spec: &InstallSpec, dry_run: bool, log: &Logger) -> Result<(), InstallError> {
    run_with(spec, dry_run, log, &SystemPrivileges, &SystemResolver)
}

/// Run the installer with explicit privilege and PATH capabilities.
///
/// The pipeline, in order: privilege check, install-directory check, copy,
/// alias link, permissions, PATH verification. It short-circuits on the
/// first failure. Preflight failures downgrade to warnings in a dry run so
/// a non-elevated user can still preview the actions.
///
/// # Errors
///
/// See [`run`].
pub fn run_with(
    spec: &InstallSpec,
    dry_run: bool,
    log: &Logger,
    privileges: &dyn Privileges,
    resolver: &dyn CommandResolver,
) -> Result<(), InstallError> {
    log.info(&format!("gitmess-install {}", version_string()));
    log.stage("Installing executable");
    log.info(&format!(
        "{} -> {}",
        spec.source.display(),
        spec.target_path().display()
    ));

    // Preflight, before any filesystem write.
    if !privileges.is_elevated() {
        if dry_run {
            log.warn("not running elevated; a real install would fail here");
        } else {
            return Err(InstallError::InsufficientPrivilege);
        }
    }

    if !spec.install_dir.is_dir() {
        if dry_run {
            log.warn(&format!(
                "install directory does not exist: {}",
                spec.install_dir.display()
            ));
        } else {
            return Err(InstallError::TargetDirectoryMissing(
                spec.install_dir.clone(),
            ));
        }
    }

    let ctx = Context {
        spec,
        log,
        dry_run,
        resolver,
    };

    let result = tasks::all_install_tasks()
        .iter()
        .try_for_each(|task| tasks::execute(task.as_ref(), &ctx));

    log.print_summary();

    match result {
        Ok(()) => {
            log.info("Installation successful");
            Ok(())
        }
        Err(err) => Err(err),
    }
}
