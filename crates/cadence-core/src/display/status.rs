//! Confirmation messages for operations that have no resource to show.

use std::fmt;

/// One-line outcome of a successful operation.
///
/// Failures are reported through [`ScheduleError`](crate::ScheduleError)
/// instead.
pub struct OperationStatus {
    pub message: String,
}

impl OperationStatus {
    /// Create a new success status.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Success: {}", self.message)
    }
}
