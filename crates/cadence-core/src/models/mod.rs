//! Data models for goals, steps and the schedule view.
//!
//! Stored entities ([`Goal`], [`Step`], [`Submission`], [`Review`]) mirror
//! the SQLite tables. The schedule read-model ([`ScheduleResponse`],
//! [`DayItem`], [`TaskItem`]) is ephemeral and rebuilt on every view. Display
//! implementations live in [`crate::display`].
//!
//! # Examples
//!
//! ```rust
//! use cadence_core::models::{Step, StepStatus};
//! use jiff::{civil::date, Timestamp};
//!
//! let step = Step {
//!     id: 1,
//!     goal_id: 1,
//!     index: 1,
//!     title: "Set up a Go module".to_string(),
//!     task: "Initialise a module and write a hello-world binary".to_string(),
//!     deliverable: "Repository link".to_string(),
//!     done: false,
//!     scheduled_date: Some(date(2025, 5, 31)),
//!     status: None,
//!     estimated_minutes: Some(45),
//!     created_at: Timestamp::now(),
//! };
//!
//! // Still scheduled, but yesterday: shown as missed.
//! assert_eq!(step.display_status(date(2025, 6, 1)), StepStatus::Missed);
//! ```

pub mod goal;
pub mod requests;
pub mod review;
pub mod schedule;
pub mod status;
pub mod step;
pub mod submission;


pub use goal::Goal;
pub use requests::{NewGoal, NewReview, NewStep, ScheduleUpdate};
pub use review::Review;
pub use schedule::{DayItem, ScheduleResponse, TaskItem};
pub use status::{ContentType, SkillType, StepStatus};
pub use step::Step;
pub use submission::Submission;
