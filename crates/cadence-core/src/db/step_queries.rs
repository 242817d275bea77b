//! Step queries and schedule-field updates.

use jiff::{civil::Date, Timestamp};
use log::warn;
use rusqlite::{params, types::Type, OptionalExtension};

use crate::{
    calendar,
    error::{DatabaseResultExt, Result, ScheduleError},
    models::{ScheduleUpdate, Step, StepStatus},
};

const SELECT_STEPS_BY_GOAL_SQL: &str = "SELECT id, goal_id, step_index, title, task, deliverable, done, scheduled_date, status, estimated_minutes, created_at FROM steps WHERE goal_id = ?1 ORDER BY step_index";
const SELECT_STEP_BY_ID_SQL: &str = "SELECT id, goal_id, step_index, title, task, deliverable, done, scheduled_date, status, estimated_minutes, created_at FROM steps WHERE id = ?1";
const UPDATE_STEP_SCHEDULE_SQL: &str = "UPDATE steps SET scheduled_date = COALESCE(?1, scheduled_date), status = COALESCE(?2, status) WHERE id = ?3";
const UPDATE_STEP_COMPLETION_SQL: &str = "UPDATE steps SET done = ?1, status = ?2 WHERE id = ?3";
const UPDATE_STEP_ESTIMATE_SQL: &str = "UPDATE steps SET estimated_minutes = ?1 WHERE id = ?2";

impl super::Database {
    /// Helper function to construct a Step from a database row.
    ///
    /// Schedule columns are lenient: an empty or malformed `scheduled_date`
    /// reads as unscheduled and an unknown `status` reads as absent, so a bad
    /// row is re-planned instead of failing the whole goal.
    pub(super) fn build_step_from_row(row: &rusqlite::Row) -> rusqlite::Result<Step> {
        let id = row.get::<_, i64>(0)? as u64;

        let scheduled_date = row
            .get::<_, Option<String>>(7)?
            .and_then(|raw| read_date(id, &raw));
        let status = row
            .get::<_, Option<String>>(8)?
            .and_then(|raw| match raw.parse::<StepStatus>() {
                Ok(status) => Some(status),
                Err(e) => {
                    warn!("Step {id}: ignoring stored status: {e}");
                    None
                }
            });

        Ok(Step {
            id,
            goal_id: row.get::<_, i64>(1)? as u64,
            index: row.get::<_, i64>(2)? as u8,
            title: row.get(3)?,
            task: row.get(4)?,
            deliverable: row.get(5)?,
            done: row.get(6)?,
            scheduled_date,
            status,
            estimated_minutes: row.get::<_, Option<i64>>(9)?.map(|m| m.max(0) as u32),
            created_at: row.get::<_, String>(10)?.parse::<Timestamp>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(10, Type::Text, Box::new(e))
            })?,
        })
    }

    /// Retrieves all steps for a goal in ascending index order.
    ///
    /// An unknown goal yields an empty list.
    pub fn get_steps(&self, goal_id: u64) -> Result<Vec<Step>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_STEPS_BY_GOAL_SQL)
            .db_context("Failed to prepare query")?;

        let steps = stmt
            .query_map(params![goal_id as i64], Self::build_step_from_row)
            .db_context("Failed to query steps")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch steps")?;

        Ok(steps)
    }

    /// Retrieves a single step by its ID.
    pub fn get_step(&self, step_id: u64) -> Result<Option<Step>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_STEP_BY_ID_SQL)
            .db_context("Failed to prepare query")?;

        stmt.query_row(params![step_id as i64], Self::build_step_from_row)
            .optional()
            .db_context("Failed to get step")
    }

    /// Partially updates a step's schedule fields.
    ///
    /// Fields left as `None` keep their stored value.
    ///
    /// # Errors
    ///
    /// Returns `ScheduleError::StepNotFound` if the step does not exist.
    pub fn update_schedule(&mut self, step_id: u64, update: &ScheduleUpdate) -> Result<()> {
        let changed = self
            .connection
            .execute(
                UPDATE_STEP_SCHEDULE_SQL,
                params![
                    update.scheduled_date.map(|date| date.to_string()),
                    update.status.map(|status| status.as_str()),
                    step_id as i64
                ],
            )
            .db_context("Failed to update step schedule")?;

        if changed == 0 {
            return Err(ScheduleError::StepNotFound { id: step_id });
        }
        Ok(())
    }

    /// Sets the completion flag.
    ///
    /// Completing a step also stores `status = done` so the rescheduler leaves
    /// it alone; reopening it returns it to `scheduled` on its current date.
    pub fn set_step_completion(&mut self, step_id: u64, done: bool) -> Result<()> {
        let status = if done {
            StepStatus::Done
        } else {
            StepStatus::Scheduled
        };

        let changed = self
            .connection
            .execute(
                UPDATE_STEP_COMPLETION_SQL,
                params![done, status.as_str(), step_id as i64],
            )
            .db_context("Failed to update step completion")?;

        if changed == 0 {
            return Err(ScheduleError::StepNotFound { id: step_id });
        }
        Ok(())
    }

    /// Sets or clears the effort estimate.
    pub fn set_step_estimate(&mut self, step_id: u64, minutes: Option<u32>) -> Result<()> {
        let changed = self
            .connection
            .execute(
                UPDATE_STEP_ESTIMATE_SQL,
                params![minutes.map(i64::from), step_id as i64],
            )
            .db_context("Failed to update step estimate")?;

        if changed == 0 {
            return Err(ScheduleError::StepNotFound { id: step_id });
        }
        Ok(())
    }
}

fn read_date(step_id: u64, raw: &str) -> Option<Date> {
    if raw.is_empty() {
        return None;
    }
    let parsed = calendar::parse_date(raw);
    if parsed.is_none() {
        warn!("Step {step_id}: treating malformed scheduled date {raw:?} as unscheduled");
    }
    parsed
}
