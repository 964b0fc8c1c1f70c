//! Mark the installed executable runnable by everyone.

use super::{Context, Task, TaskOutcome};
use crate::error::InstallError;
use crate::resources::exec_mode::ExecModeResource;
use crate::resources::{Resource, ResourceChange, ResourceState};

/// Set the installed file's mode to `0755`.
pub struct SetExecutableBit;

impl Task for SetExecutableBit {
    fn name(&self) -> &'static str {
        "Set executable permissions"
    }

    fn run(&self, ctx: &Context) -> Result<TaskOutcome, InstallError> {
        let resource = ExecModeResource::new(ctx.spec.target_path());

        match resource.current_state()? {
            ResourceState::Invalid { reason } => {
                if ctx.dry_run {
                    ctx.log
                        .dry_run(&format!("would chmod {}", resource.description()));
                    return Ok(TaskOutcome::DryRun);
                }
                Ok(TaskOutcome::Skipped(reason))
            }
            ResourceState::Correct => {
                ctx.log
                    .debug(&format!("ok: {} (already correct)", resource.description()));
                Ok(TaskOutcome::AlreadyCorrect)
            }
            ResourceState::Missing | ResourceState::Incorrect { .. } => {
                if ctx.dry_run {
                    ctx.log
                        .dry_run(&format!("would chmod {}", resource.description()));
                    return Ok(TaskOutcome::DryRun);
                }
                match resource.apply()? {
                    ResourceChange::Skipped { reason } => Ok(TaskOutcome::Skipped(reason)),
                    _ => {
                        ctx.log.debug(&format!("chmod {}", resource.description()));
                        Ok(TaskOutcome::Changed)
                    }
                }
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::InstallSpec;
    use crate::logging::Logger;
    use crate::platform::MockCommandResolver;

    fn spec_in(dir: &std::path::Path) -> InstallSpec {
        InstallSpec {
            source: dir.join("source"),
            install_dir: dir.to_path_buf(),
            project_name: "gitmess".to_string(),
            alias: None,
        }
    }

    #[cfg(unix)]
    #[test]
    fn chmod_task_marks_target_executable() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let spec = spec_in(dir.path());
        std::fs::write(spec.target_path(), "exe").unwrap();
        std::fs::set_permissions(
            spec.target_path(),
            std::fs::Permissions::from_mode(0o644),
        )
        .unwrap();
        let log = Logger::with_log_file(false, None);
        let resolver = MockCommandResolver::new();
        let ctx = Context {
            spec: &spec,
            log: &log,
            dry_run: false,
            resolver: &resolver,
        };

        assert_eq!(SetExecutableBit.run(&ctx).unwrap(), TaskOutcome::Changed);
        let mode = std::fs::metadata(spec.target_path())
            .unwrap()
            .permissions()
            .mode()
            & 0o7777;
        assert_eq!(mode, 0o755);

        assert_eq!(
            SetExecutableBit.run(&ctx).unwrap(),
            TaskOutcome::AlreadyCorrect
        );
    }

    #[test]
    fn chmod_task_skips_missing_target() {
        let dir = tempfile::tempdir().unwrap();
        let spec = spec_in(dir.path());
        let log = Logger::with_log_file(false, None);
        let resolver = MockCommandResolver::new();
        let ctx = Context {
            spec: &spec,
            log: &log,
            dry_run: false,
            resolver: &resolver,
        };

        assert!(matches!(
            SetExecutableBit.run(&ctx).unwrap(),
            TaskOutcome::Skipped(_)
        ));
    }
}
