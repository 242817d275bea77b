//! Parameter structures for Cadence operations.
//!
//! These are shared by every interface (CLI, MCP) and carry no framework
//! derives beyond serde, plus `JsonSchema` behind the `schema` feature so the
//! MCP server can publish tool schemas:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │   MCP Params    │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Dates travel as `YYYY-MM-DD` strings and are parsed by the `validate`
//! methods, which turn raw parameters into the typed requests of
//! [`crate::models`].

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    calendar,
    db::goal_queries::validate_step_indices,
    error::{Result, ScheduleError},
    models::{ContentType, NewGoal, NewReview, NewStep, SkillType},
};

/// Generic parameters for operations requiring just an ID.
///
/// Used for show_goal, delete_goal, skip_step, show_step and friends.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Id {
    /// The ID of the resource to operate on
    pub id: u64,
}

/// One generated step of a new goal.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct StepDraft {
    /// Position within the goal, 1 to 5
    pub index: u8,
    /// Short title of the step
    pub title: String,
    /// What the learner has to do
    pub task: String,
    /// What the learner hands in
    pub deliverable: String,
    /// Optional effort estimate in minutes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_minutes: Option<u32>,
}

/// Parameters for creating a goal together with its five steps.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct CreateGoal {
    /// Technology being learned ('nextjs', 'go' or 'gcp')
    pub skill_type: SkillType,
    /// What the learner wants to achieve
    pub goal_text: String,
    /// Optional deadline (YYYY-MM-DD)
    #[serde(default)]
    pub deadline: Option<String>,
    /// Optional first day of study (YYYY-MM-DD)
    #[serde(default)]
    pub start_date: Option<String>,
    /// Optional length of the study period in days
    #[serde(default)]
    pub duration: Option<i64>,
    /// Optional owner identifier
    #[serde(default)]
    pub user_id: Option<String>,
    /// Exactly five steps with indices 1 to 5
    pub steps: Vec<StepDraft>,
}

impl CreateGoal {
    /// Checks the request and converts it into store-ready parts.
    ///
    /// # Errors
    ///
    /// * `ScheduleError::InvalidInput` - empty goal text or step title, a
    ///   date that is not `YYYY-MM-DD`, or a step list that is not exactly
    ///   indices 1 to 5
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cadence_core::{models::SkillType, params::{CreateGoal, StepDraft}};
    ///
    /// let params = CreateGoal {
    ///     skill_type: SkillType::Go,
    ///     goal_text: "Ship a CLI in Go".to_string(),
    ///     deadline: Some("2025-07-01".to_string()),
    ///     start_date: None,
    ///     duration: None,
    ///     user_id: None,
    ///     steps: (1..=5)
    ///         .map(|index| StepDraft {
    ///             index,
    ///             title: format!("Step {index}"),
    ///             ..StepDraft::default()
    ///         })
    ///         .collect(),
    /// };
    /// let (goal, steps) = params.validate()?;
    /// assert_eq!(goal.deadline.map(|d| d.to_string()), Some("2025-07-01".to_string()));
    /// assert_eq!(steps.len(), 5);
    /// # cadence_core::Result::<()>::Ok(())
    /// ```
    pub fn validate(&self) -> Result<(NewGoal, Vec<NewStep>)> {
        let goal_text = self.goal_text.trim();
        if goal_text.is_empty() {
            return Err(ScheduleError::invalid_input("goal_text").with_reason("must not be empty"));
        }

        let steps: Vec<NewStep> = self
            .steps
            .iter()
            .map(|draft| {
                if draft.title.trim().is_empty() {
                    return Err(ScheduleError::invalid_input("steps")
                        .with_reason(format!("step {} has an empty title", draft.index)));
                }
                Ok(NewStep {
                    index: draft.index,
                    title: draft.title.trim().to_string(),
                    task: draft.task.clone(),
                    deliverable: draft.deliverable.clone(),
                    estimated_minutes: draft.estimated_minutes,
                })
            })
            .collect::<Result<_>>()?;
        validate_step_indices(&steps)?;

        let goal = NewGoal {
            skill_type: self.skill_type,
            goal_text: goal_text.to_string(),
            deadline: parse_optional_date("deadline", self.deadline.as_deref())?,
            start_date: parse_optional_date("start_date", self.start_date.as_deref())?,
            duration: self.duration,
            user_id: self
                .user_id
                .as_deref()
                .map(str::trim)
                .filter(|id| !id.is_empty())
                .map(str::to_string),
        };

        Ok((goal, steps))
    }
}

/// Parameters for permanently deleting a goal.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct DeleteGoal {
    /// Goal ID
    pub id: u64,
    /// Must be true; deletion also removes the goal's steps and submissions
    #[serde(default)]
    pub confirmed: bool,
}

/// Parameters for changing a step's effort estimate.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct SetEstimate {
    /// Step ID
    pub id: u64,
    /// New estimate in minutes; omit to clear it
    #[serde(default)]
    pub minutes: Option<u32>,
}

/// Parameters for submitting work for a step.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct SubmitWork {
    /// Step the work belongs to
    pub step_id: u64,
    /// Pasted code, or a link to the work
    pub content: String,
    /// 'code' (default) or 'url'
    #[serde(default)]
    pub content_type: ContentType,
}

impl SubmitWork {
    /// Rejects empty content and links without a scheme and host.
    pub fn validate(&self) -> Result<()> {
        if self.content.trim().is_empty() {
            return Err(ScheduleError::invalid_input("content").with_reason("must not be empty"));
        }
        if self.content_type == ContentType::Url && !looks_like_url(self.content.trim()) {
            return Err(ScheduleError::invalid_input("content")
                .with_reason(format!("'{}' is not a valid URL", self.content.trim())));
        }
        Ok(())
    }
}

/// Shortest and longest accepted review section, in characters after
/// trimming.
pub const REVIEW_SECTION_CHARS: std::ops::RangeInclusive<usize> = 10..=2000;

/// Parameters for saving a Keep/Problem/Try/Next review of a step.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct SaveReview {
    /// Step the review belongs to
    pub step_id: u64,
    /// What went well (10 to 2000 characters)
    pub keep: String,
    /// What to improve (10 to 2000 characters)
    pub problem: String,
    /// Something concrete to try (10 to 2000 characters)
    #[serde(rename = "try")]
    pub to_try: String,
    /// Suggested next step (10 to 2000 characters)
    pub next: String,
}

impl SaveReview {
    /// Trims every section and checks its length.
    pub fn validate(&self) -> Result<NewReview> {
        Ok(NewReview {
            keep: review_section("keep", &self.keep)?,
            problem: review_section("problem", &self.problem)?,
            to_try: review_section("try", &self.to_try)?,
            next: review_section("next", &self.next)?,
        })
    }
}

fn review_section(field: &str, raw: &str) -> Result<String> {
    let text = raw.trim();
    let chars = text.chars().count();
    if !REVIEW_SECTION_CHARS.contains(&chars) {
        return Err(ScheduleError::invalid_input(field).with_reason(format!(
            "must be {} to {} characters, got {chars}",
            REVIEW_SECTION_CHARS.start(),
            REVIEW_SECTION_CHARS.end()
        )));
    }
    Ok(text.to_string())
}

/// Parameters for viewing a goal's schedule.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ViewSchedule {
    /// Goal ID
    pub goal_id: u64,
    /// Optional day to plan from (YYYY-MM-DD); defaults to the local date
    #[serde(default)]
    pub today: Option<String>,
}

impl ViewSchedule {
    /// The requested planning day, if one was given.
    pub fn today_override(&self) -> Result<Option<jiff::civil::Date>> {
        parse_optional_date("today", self.today.as_deref())
    }
}

fn parse_optional_date(field: &str, raw: Option<&str>) -> Result<Option<jiff::civil::Date>> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(text) => calendar::parse_date(text).map(Some).ok_or_else(|| {
            ScheduleError::invalid_input(field)
                .with_reason(format!("'{text}' is not a date in YYYY-MM-DD format"))
        }),
    }
}

/// `scheme://host[...]` with an alphabetic-first scheme and a non-empty host.
fn looks_like_url(text: &str) -> bool {
    let Some((scheme, rest)) = text.split_once("://") else {
        return false;
    };
    let scheme_ok = scheme.starts_with(|c: char| c.is_ascii_alphabetic())
        && scheme
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    let host = rest
        .split(|c| matches!(c, '/' | '?' | '#'))
        .next()
        .unwrap_or_default();
    scheme_ok && !host.is_empty() && !text.chars().any(char::is_whitespace)
}
