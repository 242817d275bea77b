//! Goal model definition and related functionality.

use jiff::{civil::Date, Timestamp};
use serde::{Deserialize, Serialize};

use super::{SkillType, Step};
use crate::calendar;

/// A learner's objective for a technology, with optional planning limits.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Goal {
    /// Unique identifier for the goal
    pub id: u64,

    /// Technology being learned
    pub skill_type: SkillType,

    /// Free-form statement of what the learner wants to achieve
    pub goal_text: String,

    /// Hard deadline; tasks after it raise alerts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<Date>,

    /// First day of the planned study period
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<Date>,

    /// Length of the planned study period in days
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,

    /// Owner, when the store is shared
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,

    /// Timestamp when the goal was created (UTC)
    pub created_at: Timestamp,

    /// Associated steps (loaded on demand)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<Step>,
}

impl Goal {
    /// Last day of the planned study period.
    ///
    /// `start_date + (duration - 1)` days, with non-positive durations
    /// collapsing to the start date. `None` unless both fields are set.
    pub fn planned_end(&self) -> Option<Date> {
        let start = self.start_date?;
        let duration = self.duration?;
        Some(calendar::add_days(start, duration.saturating_sub(1).max(0)))
    }
}
