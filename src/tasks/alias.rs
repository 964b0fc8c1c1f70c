//! Create the `git-<alias>` symlink.

use super::{Context, Task, TaskOutcome};
use crate::error::InstallError;
use crate::resources::symlink::AliasResource;
use crate::resources::{Resource, ResourceChange, ResourceState};

/// Link the installed executable as a git subcommand.
pub struct CreateAlias;

impl Task for CreateAlias {
    fn name(&self) -> &'static str {
        "Create git alias"
    }

    fn should_run(&self, ctx: &Context) -> bool {
        ctx.spec.alias.is_some()
    }

    fn run(&self, ctx: &Context) -> Result<TaskOutcome, InstallError> {
        let Some(link) = ctx.spec.alias_path() else {
            return Ok(TaskOutcome::Skipped("no alias configured".to_string()));
        };
        let resource = AliasResource::new(ctx.spec.target_path(), link);

        match resource.current_state()? {
            ResourceState::Invalid { reason } => {
                // In a dry run the executable was never copied, so the link
                // target legitimately does not exist yet.
                if ctx.dry_run {
                    ctx.log
                        .dry_run(&format!("would link {}", resource.description()));
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
                        .dry_run(&format!("would link {}", resource.description()));
                    return Ok(TaskOutcome::DryRun);
                }
                match resource.apply()? {
                    ResourceChange::Skipped { reason } => Ok(TaskOutcome::Skipped(reason)),
                    _ => {
                        ctx.log.debug(&format!("linked {}", resource.description()));
                        Ok(TaskOutcome::Changed)
                    }
                }
            }
        }
    }
}
