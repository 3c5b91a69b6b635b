//! I/O helpers for envseed commands.

pub mod env_file;
pub mod prompt;
pub mod settings;
