use cadence_core::{
    models::{ContentType, NewGoal, NewReview, NewStep, ScheduleUpdate, SkillType, StepStatus},
    Database, ScheduleError, StepStore,
};
use jiff::civil::date;
use rusqlite::Connection;
use tempfile::NamedTempFile;

fn create_test_db() -> (NamedTempFile, Database) {
    let temp_file = NamedTempFile::new().expect("Failed to create temp file");
    let db = Database::new(temp_file.path()).expect("Failed to create database");
    (temp_file, db)
}

fn new_goal() -> NewGoal {
    NewGoal {
        skill_type: SkillType::NextJs,
        goal_text: "Ship a Next.js portfolio".to_string(),
        deadline: Some(date(2025, 1, 10)),
        start_date: Some(date(2025, 1, 1)),
        duration: Some(7),
        user_id: None,
    }
}

fn new_review(keep: &str) -> NewReview {
    NewReview {
        keep: keep.to_string(),
        problem: "Layout breaks on small screens".to_string(),
        to_try: "Start from a mobile-first grid".to_string(),
        next: "Add a contact form".to_string(),
    }
}

fn new_steps() -> Vec<NewStep> {
    // Deliberately out of order; storage sorts by index.
    [3u8, 1, 5, 2, 4]
        .into_iter()
        .map(|index| NewStep {
            index,
            title: format!("Step {index}"),
            task: format!("Task {index}"),
            deliverable: format!("Deliverable {index}"),
            estimated_minutes: if index == 1 { Some(45) } else { None },
        })
        .collect()
}

#[test]
fn test_database_initialization() {
    let (_temp_file, db) = create_test_db();
    assert!(db.list_goals().unwrap().is_empty());
}

#[test]
fn test_create_goal_round_trip() {
    let (_temp_file, mut db) = create_test_db();

    let created = db.create_goal(&new_goal(), &new_steps()).unwrap();
    let loaded = db
        .get_goal_with_steps(created.id)
        .unwrap()
        .expect("goal exists");

    assert_eq!(loaded.goal_text, "Ship a Next.js portfolio");
    assert_eq!(loaded.skill_type, SkillType::NextJs);
    assert_eq!(loaded.deadline, Some(date(2025, 1, 10)));
    assert_eq!(loaded.start_date, Some(date(2025, 1, 1)));
    assert_eq!(loaded.duration, Some(7));
    assert_eq!(loaded.user_id, None);

    let indices: Vec<u8> = loaded.steps.iter().map(|s| s.index).collect();
    assert_eq!(indices, vec![1, 2, 3, 4, 5]);
    assert_eq!(loaded.steps[0].estimated_minutes, Some(45));
    assert!(loaded
        .steps
        .iter()
        .all(|s| !s.done && s.scheduled_date.is_none() && s.status.is_none()));
    assert_eq!(created.steps, loaded.steps);
}

#[test]
fn test_create_goal_rejects_wrong_step_count() {
    let (_temp_file, mut db) = create_test_db();
    let mut steps = new_steps();
    steps.truncate(4);

    let result = db.create_goal(&new_goal(), &steps);
    assert!(matches!(result, Err(ScheduleError::InvalidInput { .. })));
    assert!(db.list_goals().unwrap().is_empty());
}

#[test]
fn test_create_goal_rejects_out_of_range_index() {
    let (_temp_file, mut db) = create_test_db();
    let mut steps = new_steps();
    steps[0].index = 6;

    assert!(db.create_goal(&new_goal(), &steps).is_err());
    assert!(db.list_goals().unwrap().is_empty());
}

#[test]
fn test_update_schedule_is_partial() {
    let (_temp_file, mut db) = create_test_db();
    let goal = db.create_goal(&new_goal(), &new_steps()).unwrap();
    let step_id = goal.steps[0].id;

    db.update_schedule(step_id, &ScheduleUpdate::scheduled_on(date(2025, 1, 2)))
        .unwrap();
    db.update_schedule(step_id, &ScheduleUpdate::status(StepStatus::Skipped))
        .unwrap();

    let step = db.get_step(step_id).unwrap().unwrap();
    assert_eq!(step.scheduled_date, Some(date(2025, 1, 2)));
    assert_eq!(step.status, Some(StepStatus::Skipped));

    let missing = db.update_schedule(9_999, &ScheduleUpdate::status(StepStatus::Done));
    assert!(matches!(missing, Err(ScheduleError::StepNotFound { id: 9_999 })));
}

#[test]
fn test_step_store_impl_reads_and_writes() {
    let (_temp_file, mut db) = create_test_db();
    let goal = db.create_goal(&new_goal(), &new_steps()).unwrap();

    let store: &mut dyn StepStore = &mut db;
    let steps = store.steps_for_goal(goal.id).unwrap();
    assert_eq!(steps.len(), 5);
    store
        .update_step_schedule(steps[4].id, &ScheduleUpdate::scheduled_on(date(2025, 1, 3)))
        .unwrap();

    assert!(store.steps_for_goal(goal.id + 1).unwrap().is_empty());
    assert_eq!(
        db.get_step(steps[4].id).unwrap().unwrap().status,
        Some(StepStatus::Scheduled)
    );
}

#[test]
fn test_malformed_stored_values_read_as_absent() {
    let (temp_file, mut db) = create_test_db();
    let goal = db.create_goal(&new_goal(), &new_steps()).unwrap();

    {
        let raw = Connection::open(temp_file.path()).unwrap();
        raw.execute(
            "UPDATE steps SET scheduled_date = '2025-13-45', status = 'paused' WHERE id = ?1",
            [goal.steps[0].id as i64],
        )
        .unwrap();
        raw.execute(
            "UPDATE steps SET scheduled_date = '' WHERE id = ?1",
            [goal.steps[1].id as i64],
        )
        .unwrap();
        raw.execute(
            "UPDATE goals SET deadline = 'soon' WHERE id = ?1",
            [goal.id as i64],
        )
        .unwrap();
    }

    let steps = db.get_steps(goal.id).unwrap();
    assert_eq!(steps[0].scheduled_date, None);
    assert_eq!(steps[0].status, None);
    assert_eq!(steps[1].scheduled_date, None);

    let reloaded = db.get_goal(goal.id).unwrap().unwrap();
    assert_eq!(reloaded.deadline, None);
    assert_eq!(reloaded.start_date, Some(date(2025, 1, 1)));
}

#[test]
fn test_completion_sets_status() {
    let (_temp_file, mut db) = create_test_db();
    let goal = db.create_goal(&new_goal(), &new_steps()).unwrap();
    let step_id = goal.steps[2].id;

    db.set_step_completion(step_id, true).unwrap();
    let step = db.get_step(step_id).unwrap().unwrap();
    assert!(step.done);
    assert_eq!(step.status, Some(StepStatus::Done));

    db.set_step_completion(step_id, false).unwrap();
    let step = db.get_step(step_id).unwrap().unwrap();
    assert!(!step.done);
    assert_eq!(step.status, Some(StepStatus::Scheduled));
}

#[test]
fn test_estimate_can_be_cleared() {
    let (_temp_file, mut db) = create_test_db();
    let goal = db.create_goal(&new_goal(), &new_steps()).unwrap();
    let step_id = goal.steps[0].id;

    db.set_step_estimate(step_id, Some(120)).unwrap();
    assert_eq!(db.get_step(step_id).unwrap().unwrap().estimated_minutes, Some(120));

    db.set_step_estimate(step_id, None).unwrap();
    assert_eq!(db.get_step(step_id).unwrap().unwrap().estimated_minutes, None);
}

#[test]
fn test_submission_is_replaced() {
    let (_temp_file, mut db) = create_test_db();
    let goal = db.create_goal(&new_goal(), &new_steps()).unwrap();
    let step_id = goal.steps[0].id;

    assert!(db.get_submission(step_id).unwrap().is_none());

    db.replace_submission(step_id, "console.log('hi')", ContentType::Code)
        .unwrap();
    let second = db
        .replace_submission(step_id, "https://example.com/pr/1", ContentType::Url)
        .unwrap();

    let stored = db.get_submission(step_id).unwrap().unwrap();
    assert_eq!(stored.id, second.id);
    assert_eq!(stored.content, "https://example.com/pr/1");
    assert_eq!(stored.content_type, ContentType::Url);

    let missing = db.replace_submission(9_999, "x", ContentType::Code);
    assert!(matches!(missing, Err(ScheduleError::StepNotFound { id: 9_999 })));
}

#[test]
fn test_review_is_replaced() {
    let (_temp_file, mut db) = create_test_db();
    let goal = db.create_goal(&new_goal(), &new_steps()).unwrap();
    let step_id = goal.steps[1].id;

    assert!(db.get_review(step_id).unwrap().is_none());

    db.replace_review(step_id, &new_review("Components are well named"))
        .unwrap();
    let second = db
        .replace_review(step_id, &new_review("Pages load quickly"))
        .unwrap();

    let stored = db.get_review(step_id).unwrap().unwrap();
    assert_eq!(stored, second);
    assert_eq!(stored.keep, "Pages load quickly");
    assert_eq!(stored.to_try, "Start from a mobile-first grid");
    // Other steps are unaffected.
    assert!(db.get_review(goal.steps[0].id).unwrap().is_none());

    let missing = db.replace_review(9_999, &new_review("Does not matter"));
    assert!(matches!(missing, Err(ScheduleError::StepNotFound { id: 9_999 })));
}

#[test]
fn test_delete_goal_cascades() {
    let (_temp_file, mut db) = create_test_db();
    let goal = db.create_goal(&new_goal(), &new_steps()).unwrap();
    let step_id = goal.steps[0].id;
    db.replace_submission(step_id, "code", ContentType::Code)
        .unwrap();
    db.replace_review(step_id, &new_review("Good first attempt"))
        .unwrap();

    db.delete_goal(goal.id).unwrap();

    assert!(db.get_goal(goal.id).unwrap().is_none());
    assert!(db.get_step(step_id).unwrap().is_none());
    assert!(db.get_submission(step_id).unwrap().is_none());
    assert!(db.get_review(step_id).unwrap().is_none());
    assert!(matches!(
        db.delete_goal(goal.id),
        Err(ScheduleError::GoalNotFound { .. })
    ));
}

#[test]
fn test_migration_adds_schedule_columns() {
    let temp_file = NamedTempFile::new().unwrap();
    {
        let raw = Connection::open(temp_file.path()).unwrap();
        raw.execute_batch(
            "CREATE TABLE goals (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                skill_type TEXT NOT NULL,
                goal_text TEXT NOT NULL,
                deadline TEXT,
                start_date TEXT,
                duration INTEGER,
                user_id TEXT,
                created_at TEXT NOT NULL
            );
            CREATE TABLE steps (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                goal_id INTEGER NOT NULL REFERENCES goals(id) ON DELETE CASCADE,
                step_index INTEGER NOT NULL,
                title TEXT NOT NULL,
                task TEXT NOT NULL,
                deliverable TEXT NOT NULL,
                done INTEGER NOT NULL DEFAULT 0,
                created_at TEXT NOT NULL
            );
            INSERT INTO goals (skill_type, goal_text, created_at)
                VALUES ('go', 'Legacy goal', '2024-01-01T00:00:00Z');
            INSERT INTO steps (goal_id, step_index, title, task, deliverable, created_at)
                VALUES (1, 1, 'Old step', 'task', 'deliverable', '2024-01-01T00:00:00Z');",
        )
        .unwrap();
    }

    let mut db = Database::new(temp_file.path()).expect("migration should succeed");
    let steps = db.get_steps(1).unwrap();
    assert_eq!(steps.len(), 1);
    assert_eq!(steps[0].scheduled_date, None);
    assert_eq!(steps[0].status, None);

    db.update_schedule(steps[0].id, &ScheduleUpdate::scheduled_on(date(2024, 1, 2)))
        .unwrap();

    // Opening again is a no-op for the migrated columns.
    drop(db);
    let db = Database::new(temp_file.path()).unwrap();
    assert_eq!(
        db.get_step(steps[0].id).unwrap().unwrap().scheduled_date,
        Some(date(2024, 1, 2))
    );
}
