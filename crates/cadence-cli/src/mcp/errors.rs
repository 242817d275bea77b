//! Error handling utilities for MCP server

use cadence_core::ScheduleError;
use rmcp::ErrorData;

/// Rejected input and unknown ids are the caller's fault; everything else
/// is reported as an internal error.
pub fn to_mcp_error(message: &str, error: &ScheduleError) -> ErrorData {
    let text = format!("{message}: {error}");
    match error {
        ScheduleError::InvalidInput { .. }
        | ScheduleError::GoalNotFound { .. }
        | ScheduleError::StepNotFound { .. } => ErrorData::invalid_params(text, None),
        _ => ErrorData::internal_error(text, None),
    }
}
