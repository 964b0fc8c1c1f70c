//! Installer for the `gitmess` commit-message helper.
//!
//! Copies the `gitmess` executable into a system binary directory, optionally
//! links it as a `git-<alias>` subcommand, marks it executable, and verifies
//! the command resolves on the invoker's PATH.
//!
//! The public API is organised into four layers:
//!
//! - **[`config`]** — explicit, validated install inputs ([`config::InstallSpec`])
//! - **[`resources`]** — idempotent `check + apply` primitives (copy, symlink, mode)
//! - **[`tasks`]** — named pipeline steps wired to resources
//! - **[`commands`]** — top-level orchestration of the install pipeline

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod exec;
pub mod logging;
pub mod platform;
pub mod resources;
pub mod tasks;
