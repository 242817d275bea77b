//! SQLite storage for goals, steps, submissions and reviews.
//!
//! [`Database`] owns one connection. Queries are split by entity into
//! [`goal_queries`], [`step_queries`], [`submission_queries`] and
//! [`review_queries`]; the schema and its migrations live in [`migrations`].
//! The scheduling engine reaches the store only through the
//! [`StepStore`](crate::scheduler::StepStore) implementation at the bottom of
//! this file.

use std::path::Path;

use rusqlite::Connection;

use crate::{
    error::{DatabaseResultExt, Result},
    models::{ScheduleUpdate, Step},
    scheduler::StepStore,
};

pub mod goal_queries;
pub mod migrations;
pub mod review_queries;
pub mod step_queries;
pub mod submission_queries;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}

impl StepStore for Database {
    fn steps_for_goal(&self, goal_id: u64) -> Result<Vec<Step>> {
        self.get_steps(goal_id)
    }

    fn update_step_schedule(&mut self, step_id: u64, update: &ScheduleUpdate) -> Result<()> {
        self.update_schedule(step_id, update)
    }
}
