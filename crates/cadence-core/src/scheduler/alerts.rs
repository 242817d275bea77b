//! Deadline and study-period overflow alerts.
//!
//! Both checks only see the days already in the view window. A step pushed
//! to the rescheduler's fallback day can sit past the deadline without an
//! alert if that day is outside the window.

use crate::models::{DayItem, Goal};

/// One alert per non-empty day strictly after the goal's deadline.
pub fn deadline_overflow(goal: &Goal, days: &[DayItem]) -> Vec<String> {
    let Some(deadline) = goal.deadline else {
        return Vec::new();
    };

    days.iter()
        .filter(|day| day.date > deadline && !day.tasks.is_empty())
        .map(|day| {
            format!(
                "Task scheduled on {} is past the goal deadline ({deadline})",
                day.date
            )
        })
        .collect()
}

/// One alert per non-empty day strictly after the planned study period.
///
/// The period ends `duration - 1` days after `start_date`; a non-positive
/// duration ends it on the start date itself.
pub fn duration_overflow(goal: &Goal, days: &[DayItem]) -> Vec<String> {
    let (Some(start), Some(end)) = (goal.start_date, goal.planned_end()) else {
        return Vec::new();
    };

    days.iter()
        .filter(|day| day.date > end && !day.tasks.is_empty())
        .map(|day| {
            format!(
                "Task scheduled on {} is outside the planned study period ({start} to {end})",
                day.date
            )
        })
        .collect()
}

/// Deadline alerts followed by study-period alerts.
pub fn overflow_alerts(goal: &Goal, days: &[DayItem]) -> Vec<String> {
    let mut alerts = deadline_overflow(goal, days);
    alerts.extend(duration_overflow(goal, days));
    alerts
}
