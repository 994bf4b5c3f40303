//! CLI module for honeyset
//!
//! Command handlers and log-level gated output. Library modules return
//! diagnostics as data; only these handlers print.

mod commands;
mod logging;

pub use commands::run_command;
pub use logging::LogLevel;

// Re-export Cli from config for convenience
pub use crate::config::Cli;
