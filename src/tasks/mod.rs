//! Named pipeline steps wired to resources.
//!
//! The install pipeline is a linear sequence of tasks executed in order.
//! Every task failure is terminal: [`execute`] records the failure for the
//! summary and propagates the error, and the caller stops the pipeline.

pub mod alias;
pub mod copy;
pub mod exec_mode;
pub mod verify;

use crate::config::InstallSpec;
use crate::error::InstallError;
use crate::logging::{Logger, StepStatus};
use crate::platform::CommandResolver;

/// Shared state handed to every task.
pub struct Context<'a> {
    /// What to install and where.
    pub spec: &'a InstallSpec,
    /// Logger shared by the whole pipeline.
    pub log: &'a Logger,
    /// When set, tasks describe their work instead of performing it.
    pub dry_run: bool,
    /// PATH resolver used by the verification step.
    pub resolver: &'a dyn CommandResolver,
}

impl std::fmt::Debug for Context<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("spec", &self.spec)
            .field("dry_run", &self.dry_run)
            .finish_non_exhaustive()
    }
}

/// Outcome of a completed task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskOutcome {
    /// The task changed the filesystem (or completed its check).
    Changed,
    /// The desired state was already in place; nothing was written.
    AlreadyCorrect,
    /// The task did not apply and was skipped with a reason.
    Skipped(String),
    /// Dry run: the task described what it would do.
    DryRun,
}

/// A named, executable install step.
pub trait Task {
    /// Human-readable task name.
    fn name(&self) -> &'static str;

    /// Whether this task applies for the given context.
    fn should_run(&self, _ctx: &Context) -> bool {
        true
    }

    /// Execute the task.
    ///
    /// # Errors
    ///
    /// Returns an [`InstallError`] when the step fails; the pipeline treats
    /// every task error as terminal.
    fn run(&self, ctx: &Context) -> Result<TaskOutcome, InstallError>;
}

/// Every install task in pipeline order.
#[must_use]
pub fn all_install_tasks() -> Vec<Box<dyn Task>> {
    vec![
        Box::new(copy::CopyExecutable),
        Box::new(alias::CreateAlias),
        Box::new(exec_mode::SetExecutableBit),
        Box::new(verify::VerifyOnPath),
    ]
}

/// Run a single task, record its result for the summary, and propagate
/// failure to the caller.
///
/// # Errors
///
/// Returns the task's [`InstallError`] unchanged after recording it.
pub fn execute(task: &dyn Task, ctx: &Context) -> Result<(), InstallError> {
    if !task.should_run(ctx) {
        ctx.log.debug(&format!("skipping: {}", task.name()));
        ctx.log
            .record_step(task.name(), StepStatus::Skipped, Some("not applicable"));
        return Ok(());
    }

    match task.run(ctx) {
        Ok(TaskOutcome::Changed) => {
            ctx.log.record_step(task.name(), StepStatus::Ok, None);
            Ok(())
        }
        Ok(TaskOutcome::AlreadyCorrect) => {
            ctx.log
                .record_step(task.name(), StepStatus::AlreadyOk, Some("already correct"));
            Ok(())
        }
        Ok(TaskOutcome::Skipped(reason)) => {
            ctx.log
                .record_step(task.name(), StepStatus::Skipped, Some(reason.as_str()));
            Ok(())
        }
        Ok(TaskOutcome::DryRun) => {
            ctx.log.record_step(task.name(), StepStatus::DryRun, None);
            Ok(())
        }
        Err(err) => {
            let reason = err.to_string();
            ctx.log
                .record_step(task.name(), StepStatus::Failed, Some(reason.as_str()));
            Err(err)
        }
    }
}
