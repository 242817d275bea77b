//! Display formatting for goals, steps, schedules and operation results.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! collections and operation outcomes get newtype wrappers. Everything is
//! markdown so the CLI can render it with termimad and the MCP server can
//! return it as text.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrappers &      │    │   Formatted     │
//! │ (Goal, Step,    │───▶│ Result Types    │───▶│    Output       │
//! │  Schedule)      │    │                 │    │  (Terminal/MCP) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! - [`collections`]: [`Goals`] and [`Steps`]
//! - [`results`]: [`CreateResult`], [`UpdateResult`], [`DeleteResult`],
//!   [`StepDetails`]
//! - [`status`]: [`OperationStatus`]
//! - [`datetime`]: [`LocalDateTime`] and [`DayLabel`]
//!
//! ```rust
//! use cadence_core::display::OperationStatus;
//!
//! let status = OperationStatus::success("Step 3 skipped");
//! assert_eq!(status.to_string(), "Success: Step 3 skipped\n");
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use collections::{Goals, Steps};
pub use datetime::{DayLabel, LocalDateTime};
pub use results::{CreateResult, DeleteResult, StepDetails, UpdateResult};
pub use status::OperationStatus;
