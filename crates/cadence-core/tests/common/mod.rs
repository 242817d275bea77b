#![allow(dead_code)]

use cadence_core::{models::SkillType, CreateGoal, Planner, PlannerBuilder, StepDraft};
use tempfile::TempDir;

/// Helper function to create a test planner
pub async fn create_test_planner() -> (TempDir, Planner) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let planner = PlannerBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create planner");
    (temp_dir, planner)
}

/// Five generated-looking steps for a goal.
pub fn step_drafts() -> Vec<StepDraft> {
    [
        ("Set up the toolchain", 30),
        ("Learn the basics", 60),
        ("Build a small feature", 90),
        ("Add tests", 45),
        ("Deploy it", 60),
    ]
    .into_iter()
    .zip(1u8..)
    .map(|((title, minutes), index)| StepDraft {
        index,
        title: title.to_string(),
        task: format!("{title} for the project"),
        deliverable: "Link to the repository".to_string(),
        estimated_minutes: Some(minutes),
    })
    .collect()
}

pub fn create_goal_params(skill_type: SkillType, goal_text: &str) -> CreateGoal {
    CreateGoal {
        skill_type,
        goal_text: goal_text.to_string(),
        deadline: None,
        start_date: None,
        duration: None,
        user_id: None,
        steps: step_drafts(),
    }
}
