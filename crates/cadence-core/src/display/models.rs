//! Display implementations for domain models.
//!
//! All output is markdown. Steps show their stored status here; the
//! schedule view is the only place `missed` appears, because it needs a
//! reference day.

use std::fmt;

use super::datetime::{DayLabel, LocalDateTime};
use crate::models::{
    ContentType, Goal, Review, ScheduleResponse, SkillType, Step, StepStatus, Submission,
    TaskItem,
};

impl fmt::Display for StepStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for SkillType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Goal {
    /// `(done/total)` progress suffix, empty when steps are not loaded.
    pub(crate) fn progress(&self) -> String {
        if self.steps.is_empty() {
            return String::new();
        }
        let done = self.steps.iter().filter(|step| step.done).count();
        format!(" ({done}/{})", self.steps.len())
    }

    pub(crate) fn fmt_constraints(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(deadline) = self.deadline {
            writeln!(f, "- **Deadline**: {deadline}")?;
        }
        match (self.start_date, self.planned_end()) {
            (Some(start), Some(end)) => writeln!(f, "- **Study period**: {start} to {end}")?,
            (Some(start), None) => writeln!(f, "- **Starts**: {start}")?,
            _ => {}
        }
        Ok(())
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}{}", self.id, self.goal_text, self.progress())?;
        writeln!(f)?;

        writeln!(f, "- Skill: {}", self.skill_type)?;
        self.fmt_constraints(f)?;
        if let Some(user) = &self.user_id {
            writeln!(f, "- Owner: {user}")?;
        }
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;

        if self.steps.is_empty() {
            writeln!(f, "\nNo steps in this goal.")?;
        } else {
            writeln!(f, "\n## Steps")?;
            writeln!(f)?;
            for step in &self.steps {
                write!(f, "{step}")?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "### {}. {} ({})",
            self.index,
            self.title,
            self.effective_status().with_icon()
        )?;
        writeln!(f)?;

        write!(f, "- ID: {}", self.id)?;
        match self.scheduled_date {
            Some(date) => write!(f, " · Scheduled: {date}")?,
            None => write!(f, " · Not scheduled yet")?,
        }
        if let Some(minutes) = self.estimated_minutes {
            write!(f, " · ~{minutes} min")?;
        }
        writeln!(f)?;
        writeln!(f)?;

        if !self.task.is_empty() {
            writeln!(f, "{}", self.task)?;
            writeln!(f)?;
        }

        if !self.deliverable.is_empty() {
            writeln!(f, "#### Deliverable")?;
            writeln!(f)?;
            writeln!(f, "{}", self.deliverable)?;
            writeln!(f)?;
        }

        Ok(())
    }
}

impl fmt::Display for Submission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "#### Submission ({}, {})",
            self.content_type,
            LocalDateTime(&self.created_at)
        )?;
        writeln!(f)?;
        match self.content_type {
            ContentType::Url => writeln!(f, "<{}>", self.content)?,
            ContentType::Code => {
                writeln!(f, "```")?;
                writeln!(f, "{}", self.content)?;
                writeln!(f, "```")?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for Review {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "#### Review ({})", LocalDateTime(&self.created_at))?;
        for (label, text) in [
            ("Keep", &self.keep),
            ("Problem", &self.problem),
            ("Try", &self.to_try),
            ("Next", &self.next),
        ] {
            writeln!(f)?;
            writeln!(f, "**{label}:** {text}")?;
        }
        Ok(())
    }
}

impl fmt::Display for TaskItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let check = if self.done { "x" } else { " " };
        write!(
            f,
            "- [{check}] {}. {} ({})",
            self.index,
            self.title,
            self.status.with_icon()
        )?;
        if let Some(minutes) = self.estimated_minutes {
            write!(f, " · ~{minutes} min")?;
        }
        writeln!(f, " · step {}", self.step_id)
    }
}

impl fmt::Display for ScheduleResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Schedule for goal {}", self.goal_id)?;
        writeln!(f)?;

        for day in &self.days {
            writeln!(f, "## {}", DayLabel(day.date))?;
            writeln!(f)?;
            if day.tasks.is_empty() {
                writeln!(f, "_Free day_")?;
            } else {
                for task in &day.tasks {
                    write!(f, "{task}")?;
                }
            }
            writeln!(f)?;
        }

        if !self.alerts.is_empty() {
            writeln!(f, "## Alerts")?;
            writeln!(f)?;
            for alert in &self.alerts {
                writeln!(f, "- ⚠ {alert}")?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use jiff::{civil::date, Timestamp};

    use super::*;
    use crate::models::DayItem;

    fn task(index: u8, status: StepStatus) -> TaskItem {
        TaskItem {
            step_id: 40 + u64::from(index),
            goal_id: 4,
            index,
            title: format!("Step {index}"),
            status,
            scheduled_date: date(2025, 6, 1),
            estimated_minutes: None,
            done: status == StepStatus::Done,
        }
    }

    #[test]
    fn test_schedule_display_lists_days_and_alerts() {
        let response = ScheduleResponse {
            goal_id: 4,
            days: vec![
                DayItem {
                    date: date(2025, 6, 1),
                    tasks: vec![task(1, StepStatus::Done), task(2, StepStatus::Scheduled)],
                },
                DayItem {
                    date: date(2025, 6, 2),
                    tasks: vec![],
                },
            ],
            alerts: vec!["Task scheduled on 2025-06-01 is past the goal deadline (2025-05-31)".to_string()],
        };

        let output = response.to_string();
        assert!(output.starts_with("# Schedule for goal 4\n"));
        assert!(output.contains("## 2025-06-01 (Sun)"));
        assert!(output.contains("- [x] 1. Step 1 (✓ Done) · step 41"));
        assert!(output.contains("- [ ] 2. Step 2 (○ Scheduled) · step 42"));
        assert!(output.contains("## 2025-06-02 (Mon)\n\n_Free day_"));
        assert!(output.contains("## Alerts"));
        assert!(output.contains("past the goal deadline (2025-05-31)"));
    }

    #[test]
    fn test_schedule_display_omits_empty_alerts() {
        let response = ScheduleResponse {
            goal_id: 1,
            days: vec![],
            alerts: vec![],
        };
        assert!(!response.to_string().contains("Alerts"));
    }

    #[test]
    fn test_submission_display_by_content_type() {
        let mut submission = Submission {
            id: 1,
            step_id: 2,
            content: "fn main() {}".to_string(),
            content_type: ContentType::Code,
            created_at: Timestamp::from_second(1_735_689_600).unwrap(),
        };
        assert!(submission.to_string().contains("```\nfn main() {}\n```"));

        submission.content = "https://example.com/repo".to_string();
        submission.content_type = ContentType::Url;
        assert!(submission.to_string().contains("<https://example.com/repo>"));
    }

    #[test]
    fn test_review_display_sections_in_order() {
        let review = Review {
            id: 5,
            step_id: 2,
            keep: "Clear commit history".to_string(),
            problem: "No tests for the error paths".to_string(),
            to_try: "Table-driven tests".to_string(),
            next: "Add an integration test".to_string(),
            created_at: Timestamp::from_second(1_735_689_600).unwrap(),
        };

        let output = review.to_string();
        assert!(output.starts_with("#### Review ("));
        let positions: Vec<usize> = ["**Keep:**", "**Problem:**", "**Try:** Table", "**Next:**"]
            .iter()
            .map(|label| output.find(label).expect("section present"))
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
