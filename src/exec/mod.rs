// src/exec/mod.rs

//! Process execution layer.
//!
//! Runs the resolved startup command as a child process with
//! `tokio::process::Command` until it exits or shutdown is requested.
//!
//! - [`launcher`] spawns and supervises the child.
//! - [`shell`] turns a [`ResolvedCommand`](crate::startup::ResolvedCommand)
//!   into a platform shell invocation.

pub mod launcher;
pub mod shell;

pub use launcher::{LaunchOutcome, launch};
pub use shell::{shell_command, shell_line};
