//! Goal CRUD operations and queries.

use jiff::{civil::Date, Timestamp};
use log::warn;
use rusqlite::{params, types::Type, OptionalExtension};

use crate::{
    calendar,
    error::{DatabaseResultExt, Result, ScheduleError},
    models::{Goal, NewGoal, NewStep, SkillType, Step},
};

/// Every goal is broken into exactly this many steps.
pub const STEPS_PER_GOAL: usize = 5;

const INSERT_GOAL_SQL: &str = "INSERT INTO goals (skill_type, goal_text, deadline, start_date, duration, user_id, created_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)";
const INSERT_STEP_SQL: &str = "INSERT INTO steps (goal_id, step_index, title, task, deliverable, done, estimated_minutes, created_at) VALUES (?1, ?2, ?3, ?4, ?5, 0, ?6, ?7)";
const SELECT_GOAL_BY_ID_SQL: &str = "SELECT id, skill_type, goal_text, deadline, start_date, duration, user_id, created_at FROM goals WHERE id = ?1";
const SELECT_GOALS_SQL: &str = "SELECT id, skill_type, goal_text, deadline, start_date, duration, user_id, created_at FROM goals ORDER BY id";
const DELETE_GOAL_SQL: &str = "DELETE FROM goals WHERE id = ?1";

impl super::Database {
    /// Helper function to construct a Goal (without steps) from a database row.
    ///
    /// A malformed planning date reads as absent; the overflow check that
    /// depends on it is then skipped.
    fn build_goal_from_row(row: &rusqlite::Row) -> rusqlite::Result<Goal> {
        let id = row.get::<_, i64>(0)? as u64;

        let skill_str: String = row.get(1)?;
        let skill_type = skill_str.parse::<SkillType>().map_err(|_| {
            rusqlite::Error::FromSqlConversionFailure(
                1,
                Type::Text,
                format!("Invalid skill type: {skill_str}").into(),
            )
        })?;

        Ok(Goal {
            id,
            skill_type,
            goal_text: row.get(2)?,
            deadline: read_goal_date(id, "deadline", row.get(3)?),
            start_date: read_goal_date(id, "start_date", row.get(4)?),
            duration: row.get(5)?,
            user_id: row.get(6)?,
            created_at: row.get::<_, String>(7)?.parse::<Timestamp>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(7, Type::Text, Box::new(e))
            })?,
            steps: Vec::new(),
        })
    }

    /// Creates a goal together with its five steps in one transaction.
    ///
    /// Steps start unscheduled; the scheduler places them on first view.
    ///
    /// # Errors
    ///
    /// Returns `ScheduleError::InvalidInput` unless `steps` holds exactly five
    /// entries with indices 1 through 5.
    pub fn create_goal(&mut self, goal: &NewGoal, steps: &[NewStep]) -> Result<Goal> {
        validate_step_indices(steps)?;

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let now = Timestamp::now();
        let now_str = now.to_string();

        tx.execute(
            INSERT_GOAL_SQL,
            params![
                goal.skill_type.as_str(),
                &goal.goal_text,
                goal.deadline.map(|d| d.to_string()),
                goal.start_date.map(|d| d.to_string()),
                goal.duration,
                goal.user_id.as_deref(),
                &now_str
            ],
        )
        .db_context("Failed to insert goal")?;

        let goal_id = tx.last_insert_rowid() as u64;

        let mut sorted: Vec<&NewStep> = steps.iter().collect();
        sorted.sort_by_key(|step| step.index);

        let mut created_steps = Vec::with_capacity(STEPS_PER_GOAL);
        for step in sorted {
            tx.execute(
                INSERT_STEP_SQL,
                params![
                    goal_id as i64,
                    i64::from(step.index),
                    &step.title,
                    &step.task,
                    &step.deliverable,
                    step.estimated_minutes.map(i64::from),
                    &now_str
                ],
            )
            .db_context("Failed to insert step")?;

            created_steps.push(Step {
                id: tx.last_insert_rowid() as u64,
                goal_id,
                index: step.index,
                title: step.title.clone(),
                task: step.task.clone(),
                deliverable: step.deliverable.clone(),
                done: false,
                scheduled_date: None,
                status: None,
                estimated_minutes: step.estimated_minutes,
                created_at: now,
            });
        }

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Goal {
            id: goal_id,
            skill_type: goal.skill_type,
            goal_text: goal.goal_text.clone(),
            deadline: goal.deadline,
            start_date: goal.start_date,
            duration: goal.duration,
            user_id: goal.user_id.clone(),
            created_at: now,
            steps: created_steps,
        })
    }

    /// Retrieves a goal by its ID, without steps.
    pub fn get_goal(&self, goal_id: u64) -> Result<Option<Goal>> {
        self.connection
            .query_row(
                SELECT_GOAL_BY_ID_SQL,
                params![goal_id as i64],
                Self::build_goal_from_row,
            )
            .optional()
            .db_context("Failed to get goal")
    }

    /// Retrieves a goal by its ID with its steps loaded.
    pub fn get_goal_with_steps(&self, goal_id: u64) -> Result<Option<Goal>> {
        match self.get_goal(goal_id)? {
            Some(mut goal) => {
                goal.steps = self.get_steps(goal_id)?;
                Ok(Some(goal))
            }
            None => Ok(None),
        }
    }

    /// Lists all goals with their steps, oldest first.
    pub fn list_goals(&self) -> Result<Vec<Goal>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_GOALS_SQL)
            .db_context("Failed to prepare query")?;

        let mut goals = stmt
            .query_map([], Self::build_goal_from_row)
            .db_context("Failed to query goals")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch goals")?;

        for goal in &mut goals {
            goal.steps = self.get_steps(goal.id)?;
        }

        Ok(goals)
    }

    /// Permanently deletes a goal; steps and submissions cascade.
    pub fn delete_goal(&mut self, goal_id: u64) -> Result<()> {
        let deleted = self
            .connection
            .execute(DELETE_GOAL_SQL, params![goal_id as i64])
            .db_context("Failed to delete goal")?;

        if deleted == 0 {
            return Err(ScheduleError::GoalNotFound { id: goal_id });
        }
        Ok(())
    }
}

/// Checks the five-step invariant: one step for each index 1 through 5.
pub fn validate_step_indices(steps: &[NewStep]) -> Result<()> {
    if steps.len() != STEPS_PER_GOAL {
        return Err(ScheduleError::invalid_input("steps").with_reason(format!(
            "expected exactly {STEPS_PER_GOAL} steps, got {}",
            steps.len()
        )));
    }

    let mut seen = [false; STEPS_PER_GOAL];
    for step in steps {
        let slot = usize::from(step.index)
            .checked_sub(1)
            .filter(|slot| *slot < STEPS_PER_GOAL)
            .ok_or_else(|| {
                ScheduleError::invalid_input("index").with_reason(format!(
                    "step index {} is outside 1-{STEPS_PER_GOAL}",
                    step.index
                ))
            })?;
        if seen[slot] {
            return Err(ScheduleError::invalid_input("index")
                .with_reason(format!("step index {} appears twice", step.index)));
        }
        seen[slot] = true;
    }

    Ok(())
}

fn read_goal_date(goal_id: u64, field: &str, raw: Option<String>) -> Option<Date> {
    let raw = raw.filter(|raw| !raw.is_empty())?;
    let parsed = calendar::parse_date(&raw);
    if parsed.is_none() {
        warn!("Goal {goal_id}: ignoring malformed {field} {raw:?}");
    }
    parsed
}
