//! Subcommand implementations. `main` only parses and prints.

pub mod build;
pub mod probe;
pub mod venv;
