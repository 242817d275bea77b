//! Step handler operations that return formatted wrapper types.

use super::Planner;
use crate::{
    display::{StepDetails, UpdateResult},
    error::Result,
    models::Step,
    params::Id,
};

impl Planner {
    /// Marks a step done.
    pub async fn complete_step(&self, params: &Id) -> Result<UpdateResult<Step>> {
        let step = self.set_step_completion(params.id, true).await?;
        Ok(UpdateResult::with_changes(
            step,
            vec!["Marked as done".to_string()],
        ))
    }

    /// Reopens a completed step on its current date.
    pub async fn reopen_step(&self, params: &Id) -> Result<UpdateResult<Step>> {
        let step = self.set_step_completion(params.id, false).await?;
        Ok(UpdateResult::with_changes(
            step,
            vec!["Reopened as scheduled".to_string()],
        ))
    }

    /// Marks a step skipped so the next schedule view moves it.
    pub async fn skip_step_result(&self, params: &Id) -> Result<UpdateResult<Step>> {
        let step = self.skip_step(params).await?;
        Ok(UpdateResult::with_changes(
            step,
            vec!["Skipped; it will be rescheduled on the next view".to_string()],
        ))
    }

    /// A step together with its submission and review, if any.
    pub async fn show_step_details(&self, params: &Id) -> Result<Option<StepDetails>> {
        let Some(step) = self.get_step(params).await? else {
            return Ok(None);
        };
        let submission = self.get_submission(params).await?;
        let review = self.get_review(params).await?;
        Ok(Some(StepDetails {
            step,
            submission,
            review,
        }))
    }
}
