//! Stable exit codes for envseed commands.

/// Command succeeded, or the operator declined an overwrite.
pub const OK: i32 = 0;
/// Missing or malformed input, unreadable settings, or a failed write.
pub const INVALID: i32 = 1;
