//! Subcommand implementations

pub mod compile;
pub mod config;
