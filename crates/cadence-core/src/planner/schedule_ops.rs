//! Schedule view operation for the Planner.

use log::debug;
use tokio::task;

use super::Planner;
use crate::{
    calendar,
    db::Database,
    error::{Result, ScheduleError},
    models::ScheduleResponse,
    params::ViewSchedule,
    scheduler,
};

impl Planner {
    /// Brings a goal's schedule up to date and returns the 14-day view.
    ///
    /// Unscheduled steps get dates, missed and skipped steps are moved back
    /// into the window, and the view is built from the re-read steps. All of
    /// it runs on one connection, without a surrounding transaction.
    ///
    /// # Errors
    ///
    /// * `ScheduleError::InvalidInput` - `today` is not `YYYY-MM-DD`
    /// * `ScheduleError::GoalNotFound` - no goal with that ID
    /// * `ScheduleError::Database` - any store failure; earlier writes stay
    pub async fn schedule_view(&self, params: &ViewSchedule) -> Result<ScheduleResponse> {
        let today = params.today_override()?.unwrap_or_else(calendar::today);
        let goal_id = params.goal_id;
        let db_path = self.db_path.clone();

        debug!("Building schedule for goal {goal_id} as of {today}");
        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            let goal = db
                .get_goal(goal_id)?
                .ok_or(ScheduleError::GoalNotFound { id: goal_id })?;
            scheduler::refresh_schedule(&mut db, goal_id, Some(&goal), today)
        })
        .await
        .map_err(ScheduleError::join)?
    }
}
