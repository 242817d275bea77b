//! Initial day assignment for steps that have never been scheduled.

use jiff::civil::Date;
use log::{debug, info, warn};

use super::{occupancy::Occupancy, StepStore};
use crate::{
    error::Result,
    models::{ScheduleUpdate, Step},
};

/// A date given to a previously unscheduled step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Assignment {
    pub step_id: u64,
    pub index: u8,
    pub date: Date,
}

/// Works out dates for every undated step without touching the store.
///
/// Undated steps are taken in ascending `index` order. A cursor starts at
/// `today` and moves forward past full days; each step lands on the cursor
/// day, which then counts one more occupant. Dated steps are never moved but
/// do count towards capacity.
pub fn plan_initial_assignment(steps: &[Step], today: Date) -> Vec<Assignment> {
    let mut unassigned: Vec<&Step> = steps
        .iter()
        .filter(|step| step.scheduled_date.is_none())
        .collect();
    if unassigned.is_empty() {
        return Vec::new();
    }
    unassigned.sort_by_key(|step| step.index);

    let mut occupancy = Occupancy::from_steps(steps);
    for (date, count) in occupancy.over_capacity() {
        warn!("{date} already holds {count} steps, above the daily cap");
    }

    let mut cursor = today;
    unassigned
        .into_iter()
        .map(|step| {
            cursor = occupancy.first_open_from(cursor);
            occupancy.occupy(cursor);
            Assignment {
                step_id: step.id,
                index: step.index,
                date: cursor,
            }
        })
        .collect()
}

/// Gives a date to every step of `goal_id` that lacks one.
///
/// Each assignment is written with its own store call, in index order. If a
/// write fails the error is returned at once; earlier writes stay committed
/// and the remaining steps stay undated until the next call picks them up.
/// Calling this again with nothing undated is a no-op.
pub fn ensure_schedule<S>(store: &mut S, goal_id: u64, today: Date) -> Result<Vec<Assignment>>
where
    S: StepStore + ?Sized,
{
    let steps = store.steps_for_goal(goal_id)?;
    let assignments = plan_initial_assignment(&steps, today);

    for assignment in &assignments {
        debug!(
            "Goal {goal_id}: assigning step {} (index {}) to {}",
            assignment.step_id, assignment.index, assignment.date
        );
        store.update_step_schedule(
            assignment.step_id,
            &ScheduleUpdate::scheduled_on(assignment.date),
        )?;
    }

    if !assignments.is_empty() {
        info!(
            "Goal {goal_id}: scheduled {} new step(s) from {today}",
            assignments.len()
        );
    }
    Ok(assignments)
}
