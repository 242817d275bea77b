//! Request types for updating models.

use jiff::civil::Date;

use super::StepStatus;

/// Partial update of a step's schedule fields.
///
/// This is the only write the scheduling engine performs. Fields left as
/// `None` keep their stored value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScheduleUpdate {
    pub scheduled_date: Option<Date>,
    pub status: Option<StepStatus>,
}

impl ScheduleUpdate {
    /// Place a step on `date` in the `scheduled` state.
    pub fn scheduled_on(date: Date) -> Self {
        Self {
            scheduled_date: Some(date),
            status: Some(StepStatus::Scheduled),
        }
    }

    /// Change only the stored status.
    pub fn status(status: StepStatus) -> Self {
        Self {
            scheduled_date: None,
            status: Some(status),
        }
    }

    /// True when neither field would change.
    pub fn is_empty(&self) -> bool {
        self.scheduled_date.is_none() && self.status.is_none()
    }
}

/// Content for one of the five steps of a new goal, as produced by the
/// external step generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStep {
    pub index: u8,
    pub title: String,
    pub task: String,
    pub deliverable: String,
    pub estimated_minutes: Option<u32>,
}

/// Validated fields for a new goal.
#[derive(Debug, Clone, PartialEq)]
pub struct NewGoal {
    pub skill_type: super::SkillType,
    pub goal_text: String,
    pub deadline: Option<Date>,
    pub start_date: Option<Date>,
    pub duration: Option<i64>,
    pub user_id: Option<String>,
}

/// Validated, trimmed review sections for a step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReview {
    pub keep: String,
    pub problem: String,
    pub to_try: String,
    pub next: String,
}
