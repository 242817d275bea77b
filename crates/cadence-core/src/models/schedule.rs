//! Read-model for the rolling schedule view.
//!
//! These types are built fresh for every request and never stored. Their
//! serde shape is the wire format consumed by clients:
//!
//! ```json
//! { "goalId": "1",
//!   "days": [ { "date": "2025-06-01",
//!               "tasks": [ { "stepId": "1", "goalId": "1", "index": 1,
//!                            "title": "...", "status": "scheduled",
//!                            "scheduledDate": "2025-06-01", "done": false } ] } ],
//!   "alerts": [] }
//! ```

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::StepStatus;

/// Full schedule view for one goal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleResponse {
    #[serde(with = "id_string")]
    pub goal_id: u64,
    pub days: Vec<DayItem>,
    pub alerts: Vec<String>,
}

impl ScheduleResponse {
    /// Total number of tasks placed in the window.
    pub fn task_count(&self) -> usize {
        self.days.iter().map(|day| day.tasks.len()).sum()
    }
}

/// One calendar day of the view, possibly empty.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DayItem {
    pub date: Date,
    pub tasks: Vec<TaskItem>,
}

/// Display projection of a step.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TaskItem {
    #[serde(with = "id_string")]
    pub step_id: u64,
    #[serde(with = "id_string")]
    pub goal_id: u64,
    pub index: u8,
    pub title: String,
    pub status: StepStatus,
    pub scheduled_date: Date,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_minutes: Option<u32>,
    pub done: bool,
}

/// Identifiers are opaque on the wire, so they travel as strings.
mod id_string {
    use serde::{de::Error as _, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(id: &u64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(id)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(D::Error::custom)
    }
}
