//! Shared constants for the TUI to keep layout and timing in sync.

/// Interval in milliseconds between UI ticks/redraws.
pub const TUI_TICK_RATE_MS: u64 = 200;
/// Time-to-live in seconds for transient status messages.
pub const UI_MESSAGE_TTL_SECS: u64 = 5;
/// Highlight symbol shown beside selected list entries.
pub const TASK_LIST_HIGHLIGHT_SYMBOL: &str = "▶ ";
/// Marker displayed for completed tasks.
pub const TASK_DONE_MARKER: &str = "[x] ";
/// Marker displayed for uncompleted tasks.
pub const TASK_OPEN_MARKER: &str = "[ ] ";
/// Maximum rendered width of a task line before truncation.
pub const TASK_TEXT_MAX_GRAPHEMES: usize = 120;
/// Placeholder shown in the empty input field.
pub const INPUT_PLACEHOLDER: &str = "タスクを入力...";
