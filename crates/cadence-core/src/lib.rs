//! Core library for the Cadence learning-plan scheduler.
//!
//! A learning goal is broken into five ordered steps. This crate keeps them
//! in SQLite and keeps them on the calendar: steps get days when first
//! viewed (at most two per day), missed and skipped steps are moved back
//! into a rolling 14-day window, and tasks past the goal's deadline or
//! study period raise alerts.
//!
//! - [`scheduler`]: the scheduling engine, independent of storage
//! - [`db`]: the SQLite store
//! - [`planner`]: async facade used by the CLI and MCP server
//! - [`display`]: markdown rendering of models and results
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use cadence_core::{
//!     models::SkillType,
//!     params::{CreateGoal, StepDraft, ViewSchedule},
//!     PlannerBuilder,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = PlannerBuilder::new()
//!     .with_database_path(Some("cadence.db"))
//!     .build()
//!     .await?;
//!
//! let goal = planner
//!     .create_goal(&CreateGoal {
//!         skill_type: SkillType::Go,
//!         goal_text: "Write a REST API in Go".to_string(),
//!         deadline: Some("2025-07-01".to_string()),
//!         start_date: None,
//!         duration: None,
//!         user_id: None,
//!         steps: (1..=5)
//!             .map(|index| StepDraft {
//!                 index,
//!                 title: format!("Step {index}"),
//!                 ..StepDraft::default()
//!             })
//!             .collect(),
//!     })
//!     .await?;
//!
//! let schedule = planner
//!     .schedule_view(&ViewSchedule { goal_id: goal.id, today: None })
//!     .await?;
//! println!("{schedule}");
//! # Ok(())
//! # }
//! ```

pub mod calendar;
pub mod db;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod planner;
pub mod scheduler;

pub use db::Database;
pub use display::{CreateResult, DeleteResult, Goals, OperationStatus, StepDetails, Steps, UpdateResult};
pub use error::{Result, ScheduleError};
pub use models::{
    ContentType, DayItem, Goal, Review, ScheduleResponse, SkillType, Step, StepStatus,
    Submission, TaskItem,
};
pub use params::{
    CreateGoal, DeleteGoal, Id, SaveReview, SetEstimate, StepDraft, SubmitWork, ViewSchedule,
};
pub use planner::{Planner, PlannerBuilder};
pub use scheduler::{StepStore, MAX_TASKS_PER_DAY, VIEW_WINDOW_DAYS};
