//! Auto-reschedule of missed and skipped steps.

use jiff::civil::Date;
use log::{debug, info, warn};

use super::{occupancy::Occupancy, policy::VIEW_WINDOW_DAYS, StepStore};
use crate::{
    calendar,
    error::Result,
    models::{ScheduleUpdate, Step, StepStatus},
};

/// A step relocated by the rescheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub step_id: u64,
    pub index: u8,
    pub from: Option<Date>,
    pub to: Date,
}

/// True for steps the rescheduler relocates: missed ones (still scheduled,
/// date in the past) and ones the learner skipped.
///
/// A step whose stored status is `missed` is not eligible on its own; only
/// the derived rule counts.
pub fn needs_reschedule(step: &Step, today: Date) -> bool {
    step.is_missed(today) || step.status == Some(StepStatus::Skipped)
}

/// Works out new dates for every missed or skipped step without touching
/// the store.
///
/// Steps move in ascending `index` order. Each one first gives up its old
/// day, then takes the first day in `[today, today + VIEW_WINDOW_DAYS]`
/// with room. When that whole range is full it goes to exactly
/// `today + VIEW_WINDOW_DAYS`, over capacity. Every move occupies its new day
/// before the next step is placed.
pub fn plan_reschedule(steps: &[Step], today: Date) -> Vec<Move> {
    let mut to_move: Vec<&Step> = steps
        .iter()
        .filter(|step| needs_reschedule(step, today))
        .collect();
    if to_move.is_empty() {
        return Vec::new();
    }
    to_move.sort_by_key(|step| step.index);

    let mut occupancy = Occupancy::from_steps(steps);
    let last_day = calendar::add_days(today, VIEW_WINDOW_DAYS);

    to_move
        .into_iter()
        .map(|step| {
            if let Some(old) = step.scheduled_date {
                occupancy.release(old);
            }
            let to = match occupancy.first_open_within(today, last_day) {
                Some(day) => day,
                None => {
                    warn!(
                        "No open day until {last_day}; step {} goes there over the daily cap",
                        step.id
                    );
                    last_day
                }
            };
            occupancy.occupy(to);
            Move {
                step_id: step.id,
                index: step.index,
                from: step.scheduled_date,
                to,
            }
        })
        .collect()
}

/// Relocates every missed or skipped step of `goal_id` and marks it
/// `scheduled` at its new date.
///
/// Steps outside that set, including completed ones, are left untouched.
/// Writes happen one step at a time; a failed write aborts the rest.
pub fn run_reschedule<S>(store: &mut S, goal_id: u64, today: Date) -> Result<Vec<Move>>
where
    S: StepStore + ?Sized,
{
    let steps = store.steps_for_goal(goal_id)?;
    let moves = plan_reschedule(&steps, today);

    for step_move in &moves {
        debug!(
            "Goal {goal_id}: moving step {} (index {}) from {} to {}",
            step_move.step_id,
            step_move.index,
            step_move
                .from
                .map_or_else(|| "unscheduled".to_string(), |d| d.to_string()),
            step_move.to
        );
        store.update_step_schedule(step_move.step_id, &ScheduleUpdate::scheduled_on(step_move.to))?;
    }

    if !moves.is_empty() {
        info!("Goal {goal_id}: rescheduled {} step(s)", moves.len());
    }
    Ok(moves)
}
