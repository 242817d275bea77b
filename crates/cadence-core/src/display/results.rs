//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use crate::models::{Goal, Review, Step, Submission};

/// Wrapper type for displaying the result of create operations.
///
/// # Examples
///
/// ```rust
/// use cadence_core::{
///     display::CreateResult,
///     models::{Goal, SkillType},
/// };
/// use jiff::Timestamp;
///
/// let goal = Goal {
///     id: 1,
///     skill_type: SkillType::Gcp,
///     goal_text: "Deploy a service on Cloud Run".to_string(),
///     deadline: None,
///     start_date: None,
///     duration: None,
///     user_id: None,
///     created_at: Timestamp::now(),
///     steps: vec![],
/// };
///
/// let output = CreateResult::new(goal).to_string();
/// assert!(output.starts_with("Created goal with ID: 1"));
/// ```
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    /// Create a new CreateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<Goal> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created goal with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for CreateResult<Submission> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Saved submission for step {} (ID: {})",
            self.resource.step_id, self.resource.id
        )?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for CreateResult<Review> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Saved review for step {} (ID: {})",
            self.resource.step_id, self.resource.id
        )?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of update operations, with the
/// list of changes made.
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    /// Create a new UpdateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self {
            resource,
            changes: Vec::new(),
        }
    }

    /// Create an UpdateResult with a list of changes made.
    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }
}

impl fmt::Display for UpdateResult<Step> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated step with ID: {}", self.resource.id)?;

        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }

        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of delete operations.
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    /// Create a new DeleteResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for DeleteResult<Goal> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted goal '{}' (ID: {}) and its {} steps",
            self.resource.goal_text,
            self.resource.id,
            self.resource.steps.len()
        )
    }
}

/// A step with its latest submission and review.
pub struct StepDetails {
    pub step: Step,
    pub submission: Option<Submission>,
    pub review: Option<Review>,
}

impl fmt::Display for StepDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.step)?;
        match &self.submission {
            Some(submission) => write!(f, "{submission}")?,
            None => writeln!(f, "_No submission yet._")?,
        }
        if let Some(review) = &self.review {
            writeln!(f)?;
            write!(f, "{review}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use jiff::{civil::date, Timestamp};

    use super::*;
    use crate::models::{SkillType, StepStatus};

    fn step() -> Step {
        Step {
            id: 11,
            goal_id: 3,
            index: 2,
            title: "Write handlers".to_string(),
            task: "Add GET and POST handlers".to_string(),
            deliverable: "Link to the commit".to_string(),
            done: true,
            scheduled_date: Some(date(2025, 6, 2)),
            status: Some(StepStatus::Done),
            estimated_minutes: Some(60),
            created_at: Timestamp::from_second(1_735_689_600).unwrap(),
        }
    }

    #[test]
    fn test_update_result_lists_changes() {
        let output =
            UpdateResult::with_changes(step(), vec!["Marked as done".to_string()]).to_string();

        assert!(output.starts_with("Updated step with ID: 11"));
        assert!(output.contains("Changes made:\n- Marked as done"));
        assert!(output.contains("### 2. Write handlers (✓ Done)"));
        assert!(output.contains("Scheduled: 2025-06-02 · ~60 min"));
        assert!(output.contains("#### Deliverable"));
    }

    #[test]
    fn test_delete_result_counts_steps() {
        let goal = Goal {
            id: 3,
            skill_type: SkillType::Go,
            goal_text: "Learn Go".to_string(),
            deadline: None,
            start_date: None,
            duration: None,
            user_id: None,
            created_at: Timestamp::from_second(1_735_689_600).unwrap(),
            steps: vec![step()],
        };

        assert_eq!(
            DeleteResult::new(goal).to_string(),
            "Deleted goal 'Learn Go' (ID: 3) and its 1 steps\n"
        );
    }

    #[test]
    fn test_step_details_without_submission() {
        let details = StepDetails {
            step: step(),
            submission: None,
            review: None,
        };
        assert!(details.to_string().ends_with("_No submission yet._\n"));
    }

    #[test]
    fn test_step_details_with_review() {
        let details = StepDetails {
            step: step(),
            submission: None,
            review: Some(Review {
                id: 8,
                step_id: 11,
                keep: "Handlers are small".to_string(),
                problem: "Status codes are inconsistent".to_string(),
                to_try: "Map errors in one place".to_string(),
                next: "Add pagination".to_string(),
                created_at: Timestamp::from_second(1_735_689_600).unwrap(),
            }),
        };

        let output = details.to_string();
        assert!(output.contains("_No submission yet._\n\n#### Review ("));
        assert!(output.contains("**Try:** Map errors in one place"));
    }
}
