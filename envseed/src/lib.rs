//! Seed a local `.env` file with an API key and a database URL.
//!
//! - **[`core`]**: Pure logic (record rendering, confirmation parsing, masking).
//! - **[`io`]**: Side effects (the target file, the prompt, the settings file).
//!
//! [`write`] and [`check`] coordinate the two to implement the CLI commands.

pub mod check;
pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
pub mod write;
