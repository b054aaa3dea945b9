//! Process exit codes.
//! A run that completes is a success even if individual datasets failed.

pub const SUCCESS: i32 = 0;
pub const FATAL: i32 = 1; // Missing configuration, unreadable root, or other startup error
