//! Rolling schedule view.

use jiff::civil::Date;

use super::{alerts::overflow_alerts, policy::VIEW_WINDOW_DAYS};
use crate::{
    calendar,
    models::{DayItem, Goal, ScheduleResponse, Step, TaskItem},
};

/// Projects a step into the view. Undated steps are shown on `today`.
pub fn task_item(step: &Step, today: Date) -> TaskItem {
    TaskItem {
        step_id: step.id,
        goal_id: step.goal_id,
        index: step.index,
        title: step.title.clone(),
        status: step.display_status(today),
        scheduled_date: step.scheduled_date.unwrap_or(today),
        estimated_minutes: step.estimated_minutes,
        done: step.done,
    }
}

/// Builds the view for the `VIEW_WINDOW_DAYS` days starting at `today`.
///
/// Every day of the window is present, empty or not. Steps dated outside the
/// window, and undated ones, do not appear. Alerts are only computed when
/// `goal` is given.
pub fn build_schedule_response(
    goal_id: u64,
    steps: &[Step],
    goal: Option<&Goal>,
    today: Date,
) -> ScheduleResponse {
    let days: Vec<DayItem> = calendar::window(today, VIEW_WINDOW_DAYS)
        .map(|date| {
            let mut on_day: Vec<&Step> = steps
                .iter()
                .filter(|step| step.scheduled_date == Some(date))
                .collect();
            on_day.sort_by_key(|step| step.index);

            DayItem {
                date,
                tasks: on_day.into_iter().map(|step| task_item(step, today)).collect(),
            }
        })
        .collect();

    let alerts = goal
        .map(|goal| overflow_alerts(goal, &days))
        .unwrap_or_default();

    ScheduleResponse {
        goal_id,
        days,
        alerts,
    }
}
