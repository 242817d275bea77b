//! Goal operations for the Planner.

use log::info;
use tokio::task;

use super::Planner;
use crate::{
    db::Database,
    error::{Result, ScheduleError},
    models::Goal,
    params::{CreateGoal, Id},
};

impl Planner {
    /// Creates a goal and its five steps in one transaction.
    ///
    /// Steps start unscheduled; the first schedule view gives them dates.
    pub async fn create_goal(&self, params: &CreateGoal) -> Result<Goal> {
        let (goal, steps) = params.validate()?;
        let db_path = self.db_path.clone();

        let created = task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.create_goal(&goal, &steps)
        })
        .await
        .map_err(ScheduleError::join)??;

        info!(
            "Created goal {} ({}) with {} steps",
            created.id,
            created.skill_type.as_str(),
            created.steps.len()
        );
        Ok(created)
    }

    /// Retrieves a goal with its steps loaded.
    pub async fn get_goal(&self, params: &Id) -> Result<Option<Goal>> {
        let db_path = self.db_path.clone();
        let goal_id = params.id;

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_goal_with_steps(goal_id)
        })
        .await
        .map_err(ScheduleError::join)?
    }

    /// Lists every goal, oldest first, with steps loaded.
    pub async fn list_goals(&self) -> Result<Vec<Goal>> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.list_goals()
        })
        .await
        .map_err(ScheduleError::join)?
    }

    /// Deletes a goal together with its steps and submissions.
    pub async fn delete_goal_by_id(&self, params: &Id) -> Result<()> {
        let db_path = self.db_path.clone();
        let goal_id = params.id;

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.delete_goal(goal_id)
        })
        .await
        .map_err(ScheduleError::join)?
    }
}
