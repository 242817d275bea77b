use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{GoalCommands, ScheduleArgs, StepCommands};

/// Schedule and track five-step learning plans
///
/// Cadence keeps each learning goal's five steps on the calendar: steps are
/// given days the first time the schedule is viewed (at most two per day),
/// missed or skipped steps are moved back into the next two weeks, and
/// tasks that land past the goal's deadline or study period raise alerts.
/// It can also run as an MCP (Model Context Protocol) server so an AI
/// assistant can generate steps and drive the same planner.
#[derive(Parser)]
#[command(version, about, name = "cadence")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/cadence/cadence.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Plan as if today were this day (YYYY-MM-DD) instead of the local date
    #[arg(long, global = true)]
    pub today: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Cadence CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Manage learning goals
    #[command(alias = "g")]
    Goal {
        #[command(subcommand)]
        command: GoalCommands,
    },
    /// Manage steps within goals
    #[command(alias = "s")]
    Step {
        #[command(subcommand)]
        command: StepCommands,
    },
    /// Show the 14-day schedule of a goal, rescheduling as needed
    #[command(alias = "sch")]
    Schedule(ScheduleArgs),
    /// Start the MCP server
    Serve,
}
