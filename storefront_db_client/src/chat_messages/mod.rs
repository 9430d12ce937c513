pub mod create;
pub mod list;

/// Fixed window on chat history; older messages are never served.
pub const HISTORY_LIMIT: i64 = 50;
