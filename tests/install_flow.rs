#![allow(clippy::expect_used, clippy::unwrap_used)]
//! Integration tests for the install pipeline.
//!
//! Each test drives [`commands::install::run_with`] end to end against an
//! isolated temporary directory, with stubbed privilege and PATH
//! capabilities standing in for the host OS.

mod common;

use common::{InstallTestContext, StaticPrivileges};

use gitmess_installer::commands;
use gitmess_installer::error::InstallError;
use gitmess_installer::logging::Logger;
use gitmess_installer::tasks;

// ---------------------------------------------------------------------------
// Pipeline shape
// ---------------------------------------------------------------------------

/// Snapshot of the pipeline step names in their declared order.
///
/// Serves as a regression guard: any addition, removal, or reorder of a step
/// will fail this test and prompt a deliberate snapshot update.
#[test]
fn install_task_names() {
    let names: Vec<&str> = tasks::all_install_tasks()
        .iter()
        .map(|t| t.name())
        .collect();
    insta::assert_snapshot!("install_task_names", names.join("\n"));
}

#[test]
fn install_task_count() {
    assert_eq!(tasks::all_install_tasks().len(), 4);
}

// ---------------------------------------------------------------------------
// End-to-end scenarios
// ---------------------------------------------------------------------------

#[cfg(unix)]
#[test]
fn elevated_install_writes_identical_executable() {
    let ctx = InstallTestContext::with_source_bytes(b"0123456789");
    let log = Logger::with_log_file(false, None);

    let result = commands::install::run_with(
        &ctx.spec,
        false,
        &log,
        &StaticPrivileges(true),
        &ctx.resolver_on_path(),
    );
    result.expect("install should succeed");

    let target = ctx.spec.target_path();
    assert_eq!(std::fs::read(&target).unwrap(), b"0123456789");
    assert_eq!(common::mode_of(&target), 0o755);
}

#[cfg(unix)]
#[test]
fn alias_link_resolves_to_install_target() {
    let ctx = InstallTestContext::new();
    let log = Logger::with_log_file(false, None);

    commands::install::run_with(
        &ctx.spec,
        false,
        &log,
        &StaticPrivileges(true),
        &ctx.resolver_on_path(),
    )
    .expect("install should succeed");

    let link = ctx.spec.alias_path().expect("alias configured");
    assert!(link.ends_with("git-mess"));
    assert_eq!(std::fs::read_link(&link).unwrap(), ctx.spec.target_path());
}

#[test]
fn unelevated_caller_exits_1_with_no_writes() {
    let ctx = InstallTestContext::new();
    let log = Logger::with_log_file(false, None);

    let err = commands::install::run_with(
        &ctx.spec,
        false,
        &log,
        &StaticPrivileges(false),
        &ctx.resolver_on_path(),
    )
    .unwrap_err();

    assert!(matches!(err, InstallError::InsufficientPrivilege));
    assert_eq!(err.exit_code(), 1);
    assert!(ctx.install_dir_entries().is_empty(), "no filesystem change");
}

#[test]
fn missing_install_dir_exits_2_with_no_writes() {
    let ctx = InstallTestContext::new();
    let mut spec = ctx.spec.clone();
    spec.install_dir = ctx.root.path().join("nonexistent");
    let log = Logger::with_log_file(false, None);

    let err = commands::install::run_with(
        &spec,
        false,
        &log,
        &StaticPrivileges(true),
        &ctx.resolver_on_path(),
    )
    .unwrap_err();

    assert!(matches!(err, InstallError::TargetDirectoryMissing(_)));
    assert_eq!(err.exit_code(), 2);
    assert!(!spec.install_dir.exists(), "directory is never created");
}

#[cfg(unix)]
#[test]
fn off_path_exits_3_but_files_are_written() {
    let ctx = InstallTestContext::with_source_bytes(b"0123456789");
    let log = Logger::with_log_file(false, None);

    let err = commands::install::run_with(
        &ctx.spec,
        false,
        &log,
        &StaticPrivileges(true),
        &ctx.resolver_off_path(),
    )
    .unwrap_err();

    assert!(matches!(err, InstallError::NotOnPath { .. }));
    assert_eq!(err.exit_code(), 3);

    // The copy, alias, and permission steps all completed.
    let target = ctx.spec.target_path();
    assert_eq!(std::fs::read(&target).unwrap(), b"0123456789");
    assert_eq!(common::mode_of(&target), 0o755);
    assert!(ctx.spec.alias_path().unwrap().symlink_metadata().is_ok());
}

#[test]
fn missing_source_exits_4() {
    let ctx = InstallTestContext::new();
    std::fs::remove_file(&ctx.spec.source).unwrap();
    let log = Logger::with_log_file(false, None);

    let err = commands::install::run_with(
        &ctx.spec,
        false,
        &log,
        &StaticPrivileges(true),
        &ctx.resolver_on_path(),
    )
    .unwrap_err();

    assert!(matches!(err, InstallError::CopyFailed { .. }));
    assert_eq!(err.exit_code(), 4);
}

// ---------------------------------------------------------------------------
// Idempotence
// ---------------------------------------------------------------------------

#[cfg(unix)]
#[test]
fn running_twice_yields_the_same_end_state() {
    let ctx = InstallTestContext::new();
    let log = Logger::with_log_file(false, None);

    for _ in 0..2 {
        commands::install::run_with(
            &ctx.spec,
            false,
            &log,
            &StaticPrivileges(true),
            &ctx.resolver_on_path(),
        )
        .expect("install should succeed");
    }

    let target = ctx.spec.target_path();
    assert_eq!(
        std::fs::read(&target).unwrap(),
        std::fs::read(&ctx.spec.source).unwrap()
    );
    assert_eq!(common::mode_of(&target), 0o755);
    assert_eq!(
        std::fs::read_link(ctx.spec.alias_path().unwrap()).unwrap(),
        target
    );

    let mut entries = ctx.install_dir_entries();
    entries.sort();
    assert_eq!(entries, vec!["git-mess", "gitmess"]);
}

// ---------------------------------------------------------------------------
// Dry run
// ---------------------------------------------------------------------------

#[test]
fn dry_run_previews_without_writing() {
    let ctx = InstallTestContext::new();
    let log = Logger::with_log_file(true, None);

    commands::install::run_with(
        &ctx.spec,
        true,
        &log,
        &StaticPrivileges(false),
        &ctx.resolver_off_path(),
    )
    .expect("dry run succeeds even unelevated and off PATH");

    assert!(ctx.install_dir_entries().is_empty(), "dry run writes nothing");
}
