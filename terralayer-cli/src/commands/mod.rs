//! CLI subcommand implementations.

pub mod config;
pub mod fetch;
pub mod metadata;
pub mod quadkey;
