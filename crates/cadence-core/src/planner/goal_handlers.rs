//! Goal handler operations that return formatted wrapper types.

use super::Planner;
use crate::{
    display::Goals,
    error::{Result, ScheduleError},
    models::Goal,
    params::{DeleteGoal, Id},
};

impl Planner {
    /// Lists every goal wrapped for display.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use cadence_core::PlannerBuilder;
    /// # async {
    /// let planner = PlannerBuilder::new().build().await?;
    /// let goals = planner.list_goals_summary().await?;
    /// println!("{goals}");
    /// # Result::<(), cadence_core::ScheduleError>::Ok(())
    /// # };
    /// ```
    pub async fn list_goals_summary(&self) -> Result<Goals> {
        Ok(Goals(self.list_goals().await?))
    }

    /// Permanently deletes a goal after explicit confirmation.
    ///
    /// Returns the deleted goal, or `None` when it did not exist.
    ///
    /// # Errors
    ///
    /// Returns `ScheduleError::InvalidInput` if `confirmed` is false.
    pub async fn delete_goal(&self, params: &DeleteGoal) -> Result<Option<Goal>> {
        if !params.confirmed {
            return Err(ScheduleError::invalid_input("confirmed").with_reason(
                "Goal deletion removes all steps and submissions. Set 'confirmed' to true to proceed.",
            ));
        }

        let id_params = Id { id: params.id };
        let goal = self.get_goal(&id_params).await?;
        if goal.is_some() {
            self.delete_goal_by_id(&id_params).await?;
        }
        Ok(goal)
    }
}
