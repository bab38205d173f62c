//! Kangaroo plugin scaffolder
//!
//! Core library components for the `genplugin` CLI.

pub mod cli;
pub mod commands;
pub mod error;
pub mod prompts;
pub mod scaffold;
pub mod templates;

pub use error::CliError;
pub use scaffold::{GeneratedFiles, PluginName, ScaffoldError, Scaffolder};
