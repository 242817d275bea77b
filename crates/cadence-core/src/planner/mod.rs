//! High-level planner API for goals, steps and schedules.
//!
//! [`Planner`] is the entry point for every interface. Each call opens its
//! own SQLite connection on a blocking thread (`tokio::task::spawn_blocking`),
//! so the async runtime is never blocked on disk I/O.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Handlers     │    │   Operations    │    │    Database     │
//! │ (goal_handlers, │───▶│ (goal_ops,      │───▶│   (via db/)     │
//! │  step_handlers) │    │  step_ops,      │    │                 │
//! │                 │    │  schedule_ops)  │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`Planner`] instances
//! - [`goal_ops`]: Goal creation, lookup and deletion
//! - [`step_ops`]: Completion, skipping, estimates, submissions and reviews
//! - [`schedule_ops`]: The schedule view pipeline
//! - [`goal_handlers`], [`step_handlers`]: Wrappers returning display types
//!
//! # Usage Examples
//!
//! ```rust,no_run
//! use cadence_core::{params::ViewSchedule, PlannerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = PlannerBuilder::new()
//!     .with_database_path(Some("/tmp/cadence.db"))
//!     .build()
//!     .await?;
//!
//! let view = planner
//!     .schedule_view(&ViewSchedule {
//!         goal_id: 1,
//!         today: Some("2025-06-01".to_string()),
//!     })
//!     .await?;
//! println!("{view}");
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

pub mod builder;
pub mod goal_handlers;
pub mod goal_ops;
pub mod schedule_ops;
pub mod step_handlers;
pub mod step_ops;


pub use builder::PlannerBuilder;

/// Main planner interface for managing goals and their schedules.
pub struct Planner {
    pub(crate) db_path: PathBuf,
}

impl Planner {
    /// Creates a new planner with the specified database path.
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }

    /// Location of the SQLite database this planner uses.
    pub fn database_path(&self) -> &Path {
        &self.db_path
    }
}
