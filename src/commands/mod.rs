//! Top-level command orchestration.

pub mod install;
