//! Command definitions and handlers for the terminal interface.
//!
//! Every command has a clap wrapper that converts into the matching core
//! parameter type, so clap attributes never leak into `cadence-core`:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Planner → Display → Renderer
//! ```

use std::{fs, path::PathBuf};

use anyhow::{bail, Context, Result};
use cadence_core::{
    display::{CreateResult, DeleteResult, OperationStatus},
    models::{ContentType, SkillType},
    params::{
        CreateGoal, DeleteGoal, Id, SaveReview, SetEstimate, StepDraft, SubmitWork, ViewSchedule,
    },
    Planner,
};
use clap::{Args, Subcommand};

use crate::renderer::TerminalRenderer;

/// Create a goal from a file of five generated steps
#[derive(Args)]
pub struct CreateGoalArgs {
    /// Technology being learned: nextjs, go or gcp
    pub skill_type: SkillType,
    /// What you want to achieve
    pub goal_text: String,
    /// JSON file holding an array of five steps
    /// (`index`, `title`, `task`, `deliverable`, optional `estimated_minutes`)
    #[arg(long, value_name = "FILE")]
    pub steps: PathBuf,
    /// Deadline (YYYY-MM-DD)
    #[arg(long)]
    pub deadline: Option<String>,
    /// First day of study (YYYY-MM-DD)
    #[arg(long)]
    pub start_date: Option<String>,
    /// Length of the study period in days
    #[arg(long)]
    pub duration: Option<i64>,
    /// Owner identifier
    #[arg(long)]
    pub user_id: Option<String>,
}

impl CreateGoalArgs {
    /// Reads the steps file; the remaining fields map one to one.
    fn into_params(self) -> Result<CreateGoal> {
        let raw = fs::read_to_string(&self.steps)
            .with_context(|| format!("Failed to read steps file {}", self.steps.display()))?;
        let steps: Vec<StepDraft> = serde_json::from_str(&raw)
            .with_context(|| format!("Steps file {} is not valid JSON", self.steps.display()))?;

        Ok(CreateGoal {
            skill_type: self.skill_type,
            goal_text: self.goal_text,
            deadline: self.deadline,
            start_date: self.start_date,
            duration: self.duration,
            user_id: self.user_id,
            steps,
        })
    }
}

/// Operations that need just an ID
#[derive(Args)]
pub struct IdArgs {
    /// Unique identifier of the goal or step
    pub id: u64,
}

impl From<IdArgs> for Id {
    fn from(val: IdArgs) -> Self {
        Id { id: val.id }
    }
}

/// Delete a goal together with its steps and submissions
#[derive(Args)]
pub struct DeleteGoalArgs {
    /// ID of the goal to delete
    pub id: u64,
    /// Confirm the deletion
    #[arg(long)]
    pub confirm: bool,
}

impl From<DeleteGoalArgs> for DeleteGoal {
    fn from(val: DeleteGoalArgs) -> Self {
        DeleteGoal {
            id: val.id,
            confirmed: val.confirm,
        }
    }
}

/// Set or clear a step's effort estimate
#[derive(Args)]
pub struct EstimateArgs {
    /// ID of the step
    pub id: u64,
    /// Estimated minutes; omit to clear the estimate
    pub minutes: Option<u32>,
}

impl From<EstimateArgs> for SetEstimate {
    fn from(val: EstimateArgs) -> Self {
        SetEstimate {
            id: val.id,
            minutes: val.minutes,
        }
    }
}

/// Submit work for a step, replacing any earlier submission
#[derive(Args)]
pub struct SubmitArgs {
    /// ID of the step
    pub step_id: u64,
    /// Code, or a link when `--url` is given
    pub content: String,
    /// Treat the content as a link
    #[arg(long)]
    pub url: bool,
}

impl From<SubmitArgs> for SubmitWork {
    fn from(val: SubmitArgs) -> Self {
        SubmitWork {
            step_id: val.step_id,
            content: val.content,
            content_type: if val.url {
                ContentType::Url
            } else {
                ContentType::Code
            },
        }
    }
}

/// Review a step's work with Keep/Problem/Try/Next, replacing any earlier
/// review
#[derive(Args)]
pub struct ReviewArgs {
    /// ID of the step
    pub step_id: u64,
    /// What went well
    #[arg(long)]
    pub keep: String,
    /// What to improve
    #[arg(long)]
    pub problem: String,
    /// Something concrete to try
    #[arg(long = "try", value_name = "TRY")]
    pub to_try: String,
    /// Suggested next step
    #[arg(long)]
    pub next: String,
}

impl From<ReviewArgs> for SaveReview {
    fn from(val: ReviewArgs) -> Self {
        SaveReview {
            step_id: val.step_id,
            keep: val.keep,
            problem: val.problem,
            to_try: val.to_try,
            next: val.next,
        }
    }
}

/// Show the schedule of a goal
#[derive(Args)]
pub struct ScheduleArgs {
    /// ID of the goal
    pub goal_id: u64,
    /// Print the schedule as JSON
    #[arg(long)]
    pub json: bool,
}

impl ScheduleArgs {
    fn into_params(self, today: Option<String>) -> ViewSchedule {
        ViewSchedule {
            goal_id: self.goal_id,
            today,
        }
    }
}

/// Goal management commands
#[derive(Subcommand)]
pub enum GoalCommands {
    /// Create a new goal
    #[command(alias = "c")]
    Create(CreateGoalArgs),
    /// List all goals
    #[command(alias = "l")]
    List,
    /// Show a goal with its steps
    #[command(alias = "s")]
    Show(IdArgs),
    /// Delete a goal permanently
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteGoalArgs),
}

/// Step management commands
#[derive(Subcommand)]
pub enum StepCommands {
    /// Show a step with its submission and review
    #[command(alias = "s")]
    Show(IdArgs),
    /// Mark a step done
    Done(IdArgs),
    /// Mark a done step as not done
    Undo(IdArgs),
    /// Skip a step so it is moved on the next schedule view
    Skip(IdArgs),
    /// Set or clear the estimated minutes of a step
    #[command(alias = "e")]
    Estimate(EstimateArgs),
    /// Submit work for a step
    Submit(SubmitArgs),
    /// Save a review of a step
    #[command(alias = "r")]
    Review(ReviewArgs),
}

/// Runs commands against a planner and renders the results.
pub struct Cli {
    planner: Planner,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(planner: Planner, renderer: TerminalRenderer) -> Self {
        Self { planner, renderer }
    }

    pub async fn handle_goal_command(&self, command: GoalCommands) -> Result<()> {
        match command {
            GoalCommands::Create(args) => {
                let params = args.into_params()?;
                let goal = self
                    .planner
                    .create_goal(&params)
                    .await
                    .context("Failed to create goal")?;
                self.renderer.render(&CreateResult::new(goal).to_string())
            }
            GoalCommands::List => self.list_goals().await,
            GoalCommands::Show(args) => {
                let id = args.id;
                match self
                    .planner
                    .get_goal(&args.into())
                    .await
                    .context("Failed to load goal")?
                {
                    Some(goal) => self.renderer.render(&goal.to_string()),
                    None => bail!("Goal with ID {id} not found"),
                }
            }
            GoalCommands::Delete(args) => {
                let id = args.id;
                match self
                    .planner
                    .delete_goal(&args.into())
                    .await
                    .context("Failed to delete goal")?
                {
                    Some(goal) => self.renderer.render(&DeleteResult::new(goal).to_string()),
                    None => bail!("Goal with ID {id} not found"),
                }
            }
        }
    }

    pub async fn handle_step_command(&self, command: StepCommands) -> Result<()> {
        let output = match command {
            StepCommands::Show(args) => {
                let id = args.id;
                match self
                    .planner
                    .show_step_details(&args.into())
                    .await
                    .context("Failed to load step")?
                {
                    Some(details) => details.to_string(),
                    None => bail!("Step with ID {id} not found"),
                }
            }
            StepCommands::Done(args) => self
                .planner
                .complete_step(&args.into())
                .await
                .context("Failed to complete step")?
                .to_string(),
            StepCommands::Undo(args) => self
                .planner
                .reopen_step(&args.into())
                .await
                .context("Failed to reopen step")?
                .to_string(),
            StepCommands::Skip(args) => self
                .planner
                .skip_step_result(&args.into())
                .await
                .context("Failed to skip step")?
                .to_string(),
            StepCommands::Estimate(args) => {
                let step = self
                    .planner
                    .set_step_estimate(&args.into())
                    .await
                    .context("Failed to set estimate")?;
                let message = match step.estimated_minutes {
                    Some(minutes) => format!("Step {} estimated at {minutes} min", step.id),
                    None => format!("Cleared estimate of step {}", step.id),
                };
                OperationStatus::success(message).to_string()
            }
            StepCommands::Submit(args) => {
                let submission = self
                    .planner
                    .submit_work(&args.into())
                    .await
                    .context("Failed to submit work")?;
                CreateResult::new(submission).to_string()
            }
            StepCommands::Review(args) => {
                let review = self
                    .planner
                    .save_review(&args.into())
                    .await
                    .context("Failed to save review")?;
                CreateResult::new(review).to_string()
            }
        };
        self.renderer.render(&output)
    }

    pub async fn schedule(&self, args: ScheduleArgs, today: Option<String>) -> Result<()> {
        let json = args.json;
        let response = self
            .planner
            .schedule_view(&args.into_params(today))
            .await
            .context("Failed to build schedule")?;

        if json {
            println!(
                "{}",
                serde_json::to_string_pretty(&response).context("Failed to encode schedule")?
            );
            Ok(())
        } else {
            self.renderer.render(&response.to_string())
        }
    }

    pub async fn list_goals(&self) -> Result<()> {
        let goals = self
            .planner
            .list_goals_summary()
            .await
            .context("Failed to list goals")?;
        self.renderer.render(&goals.to_string())
    }
}
