//! Review queries. Like submissions, each step keeps at most one review.

use jiff::Timestamp;
use rusqlite::{params, types::Type, OptionalExtension};

use crate::{
    error::{DatabaseResultExt, Result, ScheduleError},
    models::{NewReview, Review},
};

const CHECK_STEP_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM steps WHERE id = ?1)";
const DELETE_REVIEW_SQL: &str = "DELETE FROM reviews WHERE step_id = ?1";
const INSERT_REVIEW_SQL: &str = "INSERT INTO reviews (step_id, keep, problem, to_try, next, created_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6)";
const SELECT_REVIEW_SQL: &str = "SELECT id, step_id, keep, problem, to_try, next, created_at FROM reviews WHERE step_id = ?1";

impl super::Database {
    fn build_review_from_row(row: &rusqlite::Row) -> rusqlite::Result<Review> {
        Ok(Review {
            id: row.get::<_, i64>(0)? as u64,
            step_id: row.get::<_, i64>(1)? as u64,
            keep: row.get(2)?,
            problem: row.get(3)?,
            to_try: row.get(4)?,
            next: row.get(5)?,
            created_at: row.get::<_, String>(6)?.parse::<Timestamp>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(6, Type::Text, Box::new(e))
            })?,
        })
    }

    /// Stores a review for a step, replacing any previous one.
    pub fn replace_review(&mut self, step_id: u64, review: &NewReview) -> Result<Review> {
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

        tx.execute(DELETE_REVIEW_SQL, params![step_id as i64])
            .db_context("Failed to remove previous review")?;

        let now = Timestamp::now();
        tx.execute(
            INSERT_REVIEW_SQL,
            params![
                step_id as i64,
                review.keep,
                review.problem,
                review.to_try,
                review.next,
                now.to_string()
            ],
        )
        .db_context("Failed to insert review")?;

        let id = tx.last_insert_rowid() as u64;
        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Review {
            id,
            step_id,
            keep: review.keep.clone(),
            problem: review.problem.clone(),
            to_try: review.to_try.clone(),
            next: review.next.clone(),
            created_at: now,
        })
    }

    /// Retrieves the review for a step, if any.
    pub fn get_review(&self, step_id: u64) -> Result<Option<Review>> {
        self.connection
            .query_row(
                SELECT_REVIEW_SQL,
                params![step_id as i64],
                Self::build_review_from_row,
            )
            .optional()
            .db_context("Failed to get review")
    }
}
