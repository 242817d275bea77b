//! Scheduling engine for five-step learning plans.
//!
//! Viewing a plan runs three phases against a [`StepStore`]:
//!
//! 1. [`ensure_schedule`] gives a date to every step that has none, filling
//!    days from `today` onwards at most [`MAX_TASKS_PER_DAY`] at a time.
//! 2. [`run_reschedule`] moves missed and skipped steps back into the
//!    [`VIEW_WINDOW_DAYS`]-day window.
//! 3. [`build_schedule_response`] re-reads the steps and lays them out day by
//!    day, adding deadline and study-period alerts.
//!
//! [`refresh_schedule`] runs all three in order. The phases only ever write
//! `scheduled_date` and `status`; `missed` is computed, never stored.
//!
//! `today` is always passed in. Only the planner reads the clock.

use jiff::civil::Date;

use crate::{
    error::Result,
    models::{Goal, ScheduleResponse, ScheduleUpdate, Step},
};

pub mod alerts;
pub mod assign;
pub mod occupancy;
pub mod policy;
pub mod reschedule;
pub mod view;


pub use alerts::{deadline_overflow, duration_overflow, overflow_alerts};
pub use assign::{ensure_schedule, plan_initial_assignment, Assignment};
pub use occupancy::Occupancy;
pub use policy::{MAX_TASKS_PER_DAY, VIEW_WINDOW_DAYS};
pub use reschedule::{needs_reschedule, plan_reschedule, run_reschedule, Move};
pub use view::{build_schedule_response, task_item};

/// The two store operations the engine needs.
pub trait StepStore {
    /// Every step of a goal, in any order. An unknown goal yields an empty
    /// list.
    fn steps_for_goal(&self, goal_id: u64) -> Result<Vec<Step>>;

    /// Applies a partial schedule update to one step.
    fn update_step_schedule(&mut self, step_id: u64, update: &ScheduleUpdate) -> Result<()>;
}

/// Assigns, reschedules, re-reads and builds the view for one goal.
///
/// A failure in either write phase aborts the pipeline; writes made before
/// the failure are kept.
pub fn refresh_schedule<S>(
    store: &mut S,
    goal_id: u64,
    goal: Option<&Goal>,
    today: Date,
) -> Result<ScheduleResponse>
where
    S: StepStore + ?Sized,
{
    ensure_schedule(store, goal_id, today)?;
    run_reschedule(store, goal_id, today)?;
    let steps = store.steps_for_goal(goal_id)?;
    Ok(build_schedule_response(goal_id, &steps, goal, today))
}
