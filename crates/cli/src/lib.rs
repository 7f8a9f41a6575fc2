//! # cfkit CLI
//!
//! The `cf` command: argument parsing, precondition checks and text output
//! on top of the repositories in `cfkit-infra`.

pub mod cli;
pub mod commands;
pub mod error;
pub mod ui;

pub use error::CliError;
