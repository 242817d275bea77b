//! Database schema initialization and migrations.

use crate::error::{DatabaseResultExt, Result};

/// Columns added to `steps` when scheduling was introduced. Databases created
/// before that only have the content columns.
const STEP_SCHEDULE_COLUMNS: [(&str, &str); 3] = [
    ("scheduled_date", "TEXT"),
    ("status", "TEXT"),
    ("estimated_minutes", "INTEGER"),
];

impl super::Database {
    /// Initializes the database schema using the embedded SQL file.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        // Enable foreign keys for this connection
        self.connection
            .execute("PRAGMA foreign_keys = ON", [])
            .db_context("Failed to enable foreign keys")?;

        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")?;

        self.apply_migrations()?;

        Ok(())
    }

    /// Apply database migrations for existing databases
    fn apply_migrations(&self) -> Result<()> {
        for (column, sql_type) in STEP_SCHEDULE_COLUMNS {
            let exists: bool = self
                .connection
                .query_row(
                    "SELECT COUNT(*) FROM pragma_table_info('steps') WHERE name = ?1",
                    [column],
                    |row| row.get(0),
                )
                .map(|count: i64| count > 0)
                .db_context("Failed to inspect steps table")?;

            if !exists {
                log::info!("Adding column steps.{column}");
                self.connection
                    .execute(
                        &format!("ALTER TABLE steps ADD COLUMN {column} {sql_type}"),
                        [],
                    )
                    .db_context("Failed to add schedule column to steps table")?;
            }
        }

        // Needs the schedule columns, so it cannot live in schema.sql.
        self.connection
            .execute(
                "CREATE INDEX IF NOT EXISTS idx_steps_scheduled_date ON steps(goal_id, scheduled_date)",
                [],
            )
            .db_context("Failed to create schedule index")?;

        Ok(())
    }
}
