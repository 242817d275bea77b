mod common;

use cadence_core::{
    models::{ContentType, SkillType, StepStatus},
    Id, PlannerBuilder, ScheduleError, SubmitWork, ViewSchedule,
};
use common::{create_goal_params, create_test_planner};
use tempfile::TempDir;

fn view(goal_id: u64, today: &str) -> ViewSchedule {
    ViewSchedule {
        goal_id,
        today: Some(today.to_string()),
    }
}

fn day_counts(response: &cadence_core::ScheduleResponse) -> Vec<usize> {
    response.days.iter().map(|day| day.tasks.len()).collect()
}

#[tokio::test]
async fn test_complete_learning_workflow() {
    let (_temp_dir, planner) = create_test_planner().await;

    let mut params = create_goal_params(SkillType::NextJs, "Build a portfolio with Next.js");
    params.start_date = Some("2025-06-01".to_string());
    params.duration = Some(2);
    let goal = planner.create_goal(&params).await.expect("Failed to create goal");

    // First view: 2/2/1, and the fifth step falls after the two-day period.
    let first = planner.schedule_view(&view(goal.id, "2025-06-01")).await.unwrap();
    assert_eq!(&day_counts(&first)[..4], &[2, 2, 1, 0]);
    assert_eq!(
        first.alerts,
        vec![
            "Task scheduled on 2025-06-03 is outside the planned study period (2025-06-01 to 2025-06-02)"
                .to_string()
        ]
    );

    // Day one goes well.
    for step in &goal.steps[..2] {
        planner.complete_step(&Id { id: step.id }).await.unwrap();
    }
    planner
        .submit_work(&SubmitWork {
            step_id: goal.steps[1].id,
            content: "https://github.com/learner/portfolio".to_string(),
            content_type: ContentType::Url,
        })
        .await
        .unwrap();

    // Then nothing until 06-05: steps 3-5 were missed and come back.
    let later = planner.schedule_view(&view(goal.id, "2025-06-05")).await.unwrap();
    assert_eq!(&day_counts(&later)[..3], &[2, 1, 0]);
    let moved: Vec<u8> = later.days[..2]
        .iter()
        .flat_map(|day| day.tasks.iter().map(|task| task.index))
        .collect();
    assert_eq!(moved, vec![3, 4, 5]);
    assert!(later
        .days
        .iter()
        .flat_map(|day| &day.tasks)
        .all(|task| task.status == StepStatus::Scheduled));
    assert_eq!(later.alerts.len(), 2);
    assert!(later.alerts[0].contains("2025-06-05"));
    assert!(later.alerts[1].contains("2025-06-06"));

    // Completed steps kept their first day.
    let steps = planner.get_steps(goal.id).await.unwrap();
    assert_eq!(steps[0].scheduled_date.map(|d| d.to_string()).as_deref(), Some("2025-06-01"));
    assert_eq!(steps[0].status, Some(StepStatus::Done));

    let details = planner
        .show_step_details(&Id { id: goal.steps[1].id })
        .await
        .unwrap()
        .unwrap();
    assert!(details.to_string().contains("<https://github.com/learner/portfolio>"));
}

#[tokio::test]
async fn test_database_persistence_across_connections() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("nested").join("cadence.db");

    let goal_id = {
        let planner = PlannerBuilder::new()
            .with_database_path(Some(&db_path))
            .build()
            .await
            .unwrap();
        let goal = planner
            .create_goal(&create_goal_params(SkillType::Gcp, "Deploy to Cloud Run"))
            .await
            .unwrap();
        planner.schedule_view(&view(goal.id, "2025-02-27")).await.unwrap();
        goal.id
    };

    let planner = PlannerBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .unwrap();
    let goal = planner.get_goal(&Id { id: goal_id }).await.unwrap().unwrap();
    let dates: Vec<String> = goal
        .steps
        .iter()
        .filter_map(|step| step.scheduled_date.map(|d| d.to_string()))
        .collect();
    assert_eq!(
        dates,
        vec!["2025-02-27", "2025-02-27", "2025-02-28", "2025-02-28", "2025-03-01"]
    );
}

#[tokio::test]
async fn test_goals_are_scheduled_independently() {
    let (_temp_dir, planner) = create_test_planner().await;

    let go = planner
        .create_goal(&create_goal_params(SkillType::Go, "Learn Go"))
        .await
        .unwrap();
    let next = planner
        .create_goal(&create_goal_params(SkillType::NextJs, "Learn Next.js"))
        .await
        .unwrap();

    let go_view = planner.schedule_view(&view(go.id, "2025-06-01")).await.unwrap();
    let next_view = planner.schedule_view(&view(next.id, "2025-06-01")).await.unwrap();

    assert_eq!(&day_counts(&go_view)[..3], &[2, 2, 1]);
    assert_eq!(&day_counts(&next_view)[..3], &[2, 2, 1]);
    assert_eq!(next_view.goal_id, next.id);
    assert!(next_view.days[0].tasks.iter().all(|task| task.goal_id == next.id));
}

#[tokio::test]
async fn test_error_handling_invalid_operations() {
    let (_temp_dir, planner) = create_test_planner().await;

    assert!(planner.get_step(&Id { id: 404 }).await.unwrap().is_none());
    assert!(planner.get_goal(&Id { id: 404 }).await.unwrap().is_none());

    let skip = planner.skip_step(&Id { id: 404 }).await;
    assert!(matches!(skip, Err(ScheduleError::StepNotFound { id: 404 })));

    let mut params = create_goal_params(SkillType::Go, "Too short");
    params.steps.truncate(3);
    let err = planner.create_goal(&params).await.unwrap_err();
    assert!(matches!(err, ScheduleError::InvalidInput { .. }));
    assert!(err.to_string().contains("expected exactly 5 steps"));

    let submit = planner
        .submit_work(&SubmitWork {
            step_id: 404,
            content: "code".to_string(),
            content_type: ContentType::Code,
        })
        .await;
    assert!(matches!(submit, Err(ScheduleError::StepNotFound { .. })));
    assert!(planner.list_goals().await.unwrap().is_empty());
}
