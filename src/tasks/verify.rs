//! Verify the installed command resolves on PATH.

use super::{Context, Task, TaskOutcome};
use crate::error::InstallError;

/// Resolve the installed command name through the caller's PATH.
///
/// Failure here means the files were written correctly but the invoking
/// shell's PATH does not include the install directory; the error carries
/// the remediation hint.
pub struct VerifyOnPath;

impl Task for VerifyOnPath {
    fn name(&self) -> &'static str {
        "Check command on PATH"
    }

    fn run(&self, ctx: &Context) -> Result<TaskOutcome, InstallError> {
        ctx.log.stage("Checking if command is available");

        if ctx.dry_run {
            return Ok(TaskOutcome::Skipped(
                "dry run: nothing was installed".to_string(),
            ));
        }

        let command = &ctx.spec.project_name;
        match ctx.resolver.resolve(command) {
            Some(resolved) => {
                ctx.log
                    .info(&format!("'{command}' resolves to {}", resolved.display()));
                if resolved != ctx.spec.target_path() {
                    ctx.log.warn(&format!(
                        "'{command}' is shadowed by {} earlier on PATH",
                        resolved.display()
                    ));
                }
                Ok(TaskOutcome::Changed)
            }
            None => Err(InstallError::NotOnPath {
                command: command.clone(),
                install_dir: ctx.spec.install_dir.clone(),
            }),
        }
    }
}
