//! Capacity policy shared by every scheduling algorithm.

/// Most steps the scheduler will place on a single day.
pub const MAX_TASKS_PER_DAY: usize = 2;

/// Length of the rendered horizon in days, starting at today.
///
/// Also bounds the rescheduler's search: it looks at most this many days past
/// today before falling back to the last day of that range.
pub const VIEW_WINDOW_DAYS: i64 = 14;
