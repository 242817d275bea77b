//! Status and kind enumerations for goals, steps and submissions.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of step statuses.
///
/// `Missed` is a display label: the scheduler derives it at read time for
/// steps still `Scheduled` on a past date and never writes it back.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
    /// Step is planned for its scheduled date
    #[default]
    Scheduled,

    /// Step has been completed
    Done,

    /// Step's date passed while it was still scheduled
    Missed,

    /// Step was deferred by the learner
    Skipped,
}

impl FromStr for StepStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "scheduled" => Ok(StepStatus::Scheduled),
            "done" => Ok(StepStatus::Done),
            "missed" => Ok(StepStatus::Missed),
            "skipped" => Ok(StepStatus::Skipped),
            _ => Err(format!("Invalid step status: {s}")),
        }
    }
}

impl StepStatus {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            StepStatus::Scheduled => "scheduled",
            StepStatus::Done => "done",
            StepStatus::Missed => "missed",
            StepStatus::Skipped => "skipped",
        }
    }

    /// Get status with consistent icon formatting for display.
    ///
    /// ```rust
    /// use cadence_core::models::StepStatus;
    ///
    /// assert_eq!(StepStatus::Done.with_icon(), "✓ Done");
    /// assert_eq!(StepStatus::Missed.with_icon(), "✗ Missed");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            StepStatus::Scheduled => "○ Scheduled",
            StepStatus::Done => "✓ Done",
            StepStatus::Missed => "✗ Missed",
            StepStatus::Skipped => "↷ Skipped",
        }
    }
}

/// Technology a learning goal targets.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub enum SkillType {
    #[serde(rename = "nextjs")]
    NextJs,
    #[serde(rename = "go")]
    Go,
    #[serde(rename = "gcp")]
    Gcp,
}

impl FromStr for SkillType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "nextjs" => Ok(SkillType::NextJs),
            "go" => Ok(SkillType::Go),
            "gcp" => Ok(SkillType::Gcp),
            _ => Err(format!("Invalid skill type: {s}")),
        }
    }
}

impl SkillType {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            SkillType::NextJs => "nextjs",
            SkillType::Go => "go",
            SkillType::Gcp => "gcp",
        }
    }
}

/// How submitted work is represented.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub enum ContentType {
    /// Inline source code or text
    #[default]
    Code,

    /// Link to the work
    Url,
}

impl FromStr for ContentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "code" => Ok(ContentType::Code),
            "url" => Ok(ContentType::Url),
            _ => Err(format!("Invalid content type: {s}")),
        }
    }
}

impl ContentType {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Code => "code",
            ContentType::Url => "url",
        }
    }
}
