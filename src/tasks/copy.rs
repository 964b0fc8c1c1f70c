//! Copy the executable into the install directory.

use std::io;

use super::{Context, Task, TaskOutcome};
use crate::error::InstallError;
use crate::resources::copy::CopyResource;
use crate::resources::{Resource, ResourceState};

/// Install the source executable at `<install_dir>/<name>`.
pub struct CopyExecutable;

impl Task for CopyExecutable {
    fn name(&self) -> &'static str {
        "Copy executable"
    }

    fn run(&self, ctx: &Context) -> Result<TaskOutcome, InstallError> {
        let resource = CopyResource::new(ctx.spec.source.clone(), ctx.spec.target_path());

        match resource.current_state()? {
            // A missing source is a copy failure, not a skip: there is
            // nothing to install. A dry run still previews, like the
            // other preflight downgrades.
            ResourceState::Invalid { reason } => {
                if ctx.dry_run {
                    ctx.log.warn(&reason);
                    ctx.log
                        .dry_run(&format!("would copy {}", resource.description()));
                    return Ok(TaskOutcome::DryRun);
                }
                Err(InstallError::CopyFailed {
                    path: ctx.spec.source.clone(),
                    source: io::Error::new(io::ErrorKind::NotFound, reason),
                })
            }
            ResourceState::Correct => {
                ctx.log
                    .debug(&format!("ok: {} (already correct)", resource.description()));
                Ok(TaskOutcome::AlreadyCorrect)
            }
            ResourceState::Missing | ResourceState::Incorrect { .. } => {
                if ctx.dry_run {
                    ctx.log
                        .dry_run(&format!("would copy {}", resource.description()));
                    return Ok(TaskOutcome::DryRun);
                }
                resource.apply()?;
                ctx.log.debug(&format!("copied {}", resource.description()));
                Ok(TaskOutcome::Changed)
            }
        }
    }
}
