//! Submission queries. Each step keeps at most one submission.

use jiff::Timestamp;
use rusqlite::{params, types::Type, OptionalExtension};

use crate::{
    error::{DatabaseResultExt, Result, ScheduleError},
    models::{ContentType, Submission},
};

const CHECK_STEP_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM steps WHERE id = ?1)";
const DELETE_SUBMISSION_SQL: &str = "DELETE FROM submissions WHERE step_id = ?1";
const INSERT_SUBMISSION_SQL: &str = "INSERT INTO submissions (step_id, content, content_type, created_at) VALUES (?1, ?2, ?3, ?4)";
const SELECT_SUBMISSION_SQL: &str = "SELECT id, step_id, content, content_type, created_at FROM submissions WHERE step_id = ?1";

impl super::Database {
    fn build_submission_from_row(row: &rusqlite::Row) -> rusqlite::Result<Submission> {
        let type_str: String = row.get(3)?;
        let content_type = type_str.parse::<ContentType>().map_err(|_| {
            rusqlite::Error::FromSqlConversionFailure(
                3,
                Type::Text,
                format!("Invalid content type: {type_str}").into(),
            )
        })?;

        Ok(Submission {
            id: row.get::<_, i64>(0)? as u64,
            step_id: row.get::<_, i64>(1)? as u64,
            content: row.get(2)?,
            content_type,
            created_at: row.get::<_, String>(4)?.parse::<Timestamp>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(4, Type::Text, Box::new(e))
            })?,
        })
    }

    /// Stores a submission for a step, replacing any previous one.
    pub fn replace_submission(
        &mut self,
        step_id: u64,
        content: &str,
        content_type: ContentType,
    ) -> Result<Submission> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let step_exists: bool = tx
            .query_row(CHECK_STEP_EXISTS_SQL, params![step_id as i64], |row| {
                row.get(0)
            })
            .db_context("Failed to check step existence")?;

        if !step_exists {
            return Err(ScheduleError::StepNotFound { id: step_id });
        }

        tx.execute(DELETE_SUBMISSION_SQL, params![step_id as i64])
            .db_context("Failed to remove previous submission")?;

        let now = Timestamp::now();
        tx.execute(
            INSERT_SUBMISSION_SQL,
            params![step_id as i64, content, content_type.as_str(), now.to_string()],
        )
        .db_context("Failed to insert submission")?;

        let id = tx.last_insert_rowid() as u64;
        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Submission {
            id,
            step_id,
            content: content.to_string(),
            content_type,
            created_at: now,
        })
    }

    /// Retrieves the submission for a step, if any.
    pub fn get_submission(&self, step_id: u64) -> Result<Option<Submission>> {
        self.connection
            .query_row(
                SELECT_SUBMISSION_SQL,
                params![step_id as i64],
                Self::build_submission_from_row,
            )
            .optional()
            .db_context("Failed to get submission")
    }
}
