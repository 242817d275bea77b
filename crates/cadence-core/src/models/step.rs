//! Step model definition and related functionality.

use jiff::{civil::Date, Timestamp};
use serde::{Deserialize, Serialize};

use super::StepStatus;

/// One of the five ordered units of work under a goal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Step {
    /// Unique identifier for the step
    pub id: u64,

    /// ID of the owning goal
    pub goal_id: u64,

    /// Position within the goal (1-5), fixed at creation
    pub index: u8,

    /// Brief title/summary of the step
    pub title: String,

    /// What the learner has to do
    pub task: String,

    /// What the learner hands in when finished
    pub deliverable: String,

    /// Completion flag, independent of `status`
    pub done: bool,

    /// Day the step is planned for; `None` until the scheduler assigns one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_date: Option<Date>,

    /// Stored status; `None` reads as [`StepStatus::Scheduled`]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<StepStatus>,

    /// Rough effort estimate in minutes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_minutes: Option<u32>,

    /// Timestamp when the step was created (UTC)
    pub created_at: Timestamp,
}

impl Step {
    /// Stored status with the `scheduled` default applied.
    pub fn effective_status(&self) -> StepStatus {
        self.status.unwrap_or_default()
    }

    /// A step is missed when it is still scheduled but its date is past.
    pub fn is_missed(&self, today: Date) -> bool {
        self.effective_status() == StepStatus::Scheduled
            && self.scheduled_date.is_some_and(|date| date < today)
    }

    /// Status shown to the learner: `missed` replaces `scheduled` for past
    /// dates, anything else is shown as stored.
    pub fn display_status(&self, today: Date) -> StepStatus {
        if self.is_missed(today) {
            StepStatus::Missed
        } else {
            self.effective_status()
        }
    }
}
