//! Step operations for the Planner.

use log::info;
use tokio::task;

use super::Planner;
use crate::{
    db::Database,
    error::{Result, ScheduleError},
    models::{Review, ScheduleUpdate, Step, StepStatus, Submission},
    params::{Id, SaveReview, SetEstimate, SubmitWork},
};

/// Re-reads a step after a write; a step that vanished in between is
/// reported as not found.
fn reload_step(db: &Database, step_id: u64) -> Result<Step> {
    db.get_step(step_id)?
        .ok_or(ScheduleError::StepNotFound { id: step_id })
}

impl Planner {
    /// Retrieves every step of a goal in index order.
    pub async fn get_steps(&self, goal_id: u64) -> Result<Vec<Step>> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_steps(goal_id)
        })
        .await
        .map_err(ScheduleError::join)?
    }

    /// Retrieves a single step.
    pub async fn get_step(&self, params: &Id) -> Result<Option<Step>> {
        let db_path = self.db_path.clone();
        let step_id = params.id;

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_step(step_id)
        })
        .await
        .map_err(ScheduleError::join)?
    }

    /// Marks a step done (`status = done`) or reopens it
    /// (`status = scheduled`), returning the updated step.
    pub async fn set_step_completion(&self, step_id: u64, done: bool) -> Result<Step> {
        let db_path = self.db_path.clone();

        let step = task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.set_step_completion(step_id, done)?;
            reload_step(&db, step_id)
        })
        .await
        .map_err(ScheduleError::join)??;

        info!(
            "Step {step_id} {}",
            if done { "completed" } else { "reopened" }
        );
        Ok(step)
    }

    /// Stores `status = skipped`; the next schedule view moves the step.
    pub async fn skip_step(&self, params: &Id) -> Result<Step> {
        let db_path = self.db_path.clone();
        let step_id = params.id;

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.update_schedule(step_id, &ScheduleUpdate::status(StepStatus::Skipped))?;
            reload_step(&db, step_id)
        })
        .await
        .map_err(ScheduleError::join)?
    }

    /// Sets or clears a step's effort estimate.
    pub async fn set_step_estimate(&self, params: &SetEstimate) -> Result<Step> {
        let db_path = self.db_path.clone();
        let step_id = params.id;
        let minutes = params.minutes;

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.set_step_estimate(step_id, minutes)?;
            reload_step(&db, step_id)
        })
        .await
        .map_err(ScheduleError::join)?
    }

    /// Stores work for a step, replacing any earlier submission.
    pub async fn submit_work(&self, params: &SubmitWork) -> Result<Submission> {
        params.validate()?;
        let db_path = self.db_path.clone();
        let step_id = params.step_id;
        let content = params.content.trim().to_string();
        let content_type = params.content_type;

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.replace_submission(step_id, &content, content_type)
        })
        .await
        .map_err(ScheduleError::join)?
    }

    /// Retrieves the current submission for a step, if any.
    pub async fn get_submission(&self, params: &Id) -> Result<Option<Submission>> {
        let db_path = self.db_path.clone();
        let step_id = params.id;

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_submission(step_id)
        })
        .await
        .map_err(ScheduleError::join)?
    }

    /// Stores a review for a step, replacing any earlier one.
    pub async fn save_review(&self, params: &SaveReview) -> Result<Review> {
        let review = params.validate()?;
        let db_path = self.db_path.clone();
        let step_id = params.step_id;

        let saved = task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.replace_review(step_id, &review)
        })
        .await
        .map_err(ScheduleError::join)??;

        info!("Saved review {} for step {step_id}", saved.id);
        Ok(saved)
    }

    /// Retrieves the review of an existing step, if it has one. An unknown
    /// step is an error.
    pub async fn get_review(&self, params: &Id) -> Result<Option<Review>> {
        let db_path = self.db_path.clone();
        let step_id = params.id;

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            reload_step(&db, step_id)?;
            db.get_review(step_id)
        })
        .await
        .map_err(ScheduleError::join)?
    }
}
