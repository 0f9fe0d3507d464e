mod common;
use std::collections::HashSet;
use common::{approx, dt, open_pool, seed};
use tutorledger::core::billing::compute;
use tutorledger::db;
use tutorledger::errors::AppError;
use tutorledger::models::StudentInput;

#[test]
fn schema_creation_is_idempotent() {
    let path = common::setup_test_db("schema_idempotent");
    {
        let mut pool = db::DbPool::new(&path).unwrap();
        db::add_student(&mut pool, &StudentInput::new("Alice", 100.0)).unwrap();
    }
    let pool = db::DbPool::new(&path).unwrap();
    assert_eq!(db::get_all_students(&pool).unwrap().len(), 1);

    let versions = db::migrate::applied_versions(&pool.conn).unwrap();
    let unique: HashSet<&String> = versions.iter().collect();
    assert_eq!(unique.len(), versions.len());
    assert!(!versions.is_empty());
}

#[test]
fn add_student_rejects_empty_name() {
    let mut pool = open_pool("student_empty_name");
    let err = db::add_student(&mut pool, &StudentInput::new("   ", 50.0)).unwrap_err();
    assert!(matches!(err, AppError::Validation { field: "name", .. }));
    assert!(db::get_all_students(&pool).unwrap().is_empty());
}

#[test]
fn add_student_requires_rate() {
    let mut pool = open_pool("student_missing_rate");
    let input = StudentInput {
        name: "Carol".into(),
        ..Default::default()
    };
    let err = db::add_student(&mut pool, &input).unwrap_err();
    assert!(matches!(err, AppError::Validation { field: "hourly_rate", .. }));
}

#[test]
fn add_student_rejects_negative_rate() {
    let mut pool = open_pool("student_negative_rate");
    let err = db::add_student(&mut pool, &StudentInput::new("Dan", -1.0)).unwrap_err();
    assert!(matches!(err, AppError::Validation { field: "hourly_rate", .. }));
}

#[test]
fn discount_defaults_to_one() {
    let mut pool = open_pool("student_default_discount");
    let id = db::add_student(
        &mut pool,
        &StudentInput::new("Eve", 60.0).with_phone("555-0100").with_level("A2"),
    )
    .unwrap();

    let s = db::get_student(&pool, id).unwrap();
    assert_eq!(s.name, "Eve");
    assert_eq!(s.phone.as_deref(), Some("555-0100"));
    assert_eq!(s.level.as_deref(), Some("A2"));
    assert!(approx(s.discount, 1.0));
    assert!(!s.created_at.is_empty());
}

#[test]
fn students_are_ordered_by_name() {
    let mut pool = open_pool("students_ordered");
    for name in ["Zoe", "alice", "Bob", "Alice"] {
        db::add_student(&mut pool, &StudentInput::new(name, 10.0)).unwrap();
    }
    let names: Vec<String> = db::get_all_students(&pool)
        .unwrap()
        .into_iter()
        .map(|s| s.name)
        .collect();
    assert_eq!(names, ["Alice", "Bob", "Zoe", "alice"]);
}

#[test]
fn get_missing_student_is_not_found() {
    let pool = open_pool("student_missing");
    let err = db::get_student(&pool, 42).unwrap_err();
    assert!(matches!(err, AppError::NotFound { entity: "Student", id: 42 }));
}

#[test]
fn update_student_overwrites_fields() {
    let mut pool = open_pool("student_update");
    let id = db::add_student(&mut pool, &StudentInput::new("Alice", 100.0).with_phone("1")).unwrap();

    db::update_student(&mut pool, id, &StudentInput::new("Alice B.", 120.0).with_discount(0.8))
        .unwrap();

    let s = db::get_student(&pool, id).unwrap();
    assert_eq!(s.name, "Alice B.");
    assert_eq!(s.phone, None);
    assert!(approx(s.hourly_rate, 120.0));
    assert!(approx(s.discount, 0.8));
}

#[test]
fn update_student_rejects_empty_name() {
    let mut pool = open_pool("student_update_empty_name");
    let id = db::add_student(&mut pool, &StudentInput::new("Alice", 100.0).with_phone("1")).unwrap();
    let before = db::get_student(&pool, id).unwrap();

    let err = db::update_student(&mut pool, id, &StudentInput::new("   ", 120.0)).unwrap_err();
    assert!(matches!(err, AppError::Validation { field: "name", .. }));

    assert_eq!(db::get_student(&pool, id).unwrap(), before);
}

#[test]
fn update_student_rejects_negative_rate() {
    let mut pool = open_pool("student_update_negative_rate");
    let id = db::add_student(&mut pool, &StudentInput::new("Alice", 100.0)).unwrap();
    let before = db::get_student(&pool, id).unwrap();

    let err = db::update_student(&mut pool, id, &StudentInput::new("Alice", -5.0)).unwrap_err();
    assert!(matches!(err, AppError::Validation { field: "hourly_rate", .. }));

    let missing = StudentInput {
        name: "Alice".to_string(),
        ..Default::default()
    };
    let err = db::update_student(&mut pool, id, &missing).unwrap_err();
    assert!(matches!(err, AppError::Validation { field: "hourly_rate", .. }));

    assert_eq!(db::get_student(&pool, id).unwrap(), before);
}

#[test]
fn add_student_rejects_nan_discount() {
    let mut pool = open_pool("student_nan_discount");
    let err = db::add_student(&mut pool, &StudentInput::new("Alice", 100.0).with_discount(f64::NAN))
        .unwrap_err();
    assert!(matches!(err, AppError::Validation { field: "discount", .. }));
    assert!(db::get_all_students(&pool).unwrap().is_empty());
}

#[test]
fn update_missing_student_is_not_found() {
    let mut pool = open_pool("student_update_missing");
    let err = db::update_student(&mut pool, 7, &StudentInput::new("X", 1.0)).unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn rate_change_does_not_touch_recorded_lessons() {
    let mut pool = open_pool("frozen_amount");
    let (alice, _) = seed(&mut pool);

    db::update_student(&mut pool, alice, &StudentInput::new("Alice", 200.0)).unwrap();

    for l in db::get_student_lessons(&pool, alice).unwrap() {
        assert!(approx(l.amount, 135.0));
    }

    let id = db::add_lesson(
        &mut pool,
        alice,
        dt("2025-09-05 09:00"),
        dt("2025-09-05 10:00"),
        "",
    )
    .unwrap();
    assert!(approx(db::get_lesson(&pool, id).unwrap().amount, 200.0));
}

#[test]
fn added_lesson_matches_billing_calculator() {
    let mut pool = open_pool("lesson_matches_calc");
    let id = db::add_student(&mut pool, &StudentInput::new("Fay", 73.5).with_discount(0.85))
        .unwrap();

    let start = dt("2025-10-02 16:05");
    let end = dt("2025-10-02 17:50");
    let lesson_id = db::add_lesson(&mut pool, id, start, end, "algebra").unwrap();

    let expected = compute(start, end, 73.5, 0.85).unwrap();
    let lessons = db::get_student_lessons(&pool, id).unwrap();
    let l = lessons.iter().find(|l| l.id == lesson_id).unwrap();

    assert_eq!(l.start, start);
    assert_eq!(l.end, end);
    assert_eq!(l.notes, "algebra");
    assert!(approx(l.duration, expected.duration_hours));
    assert!(approx(l.amount, expected.amount));
}

#[test]
fn add_lesson_rejects_bad_range() {
    let mut pool = open_pool("lesson_bad_range");
    let id = db::add_student(&mut pool, &StudentInput::new("Gus", 10.0)).unwrap();

    let err = db::add_lesson(&mut pool, id, dt("2025-09-01 10:00"), dt("2025-09-01 10:00"), "")
        .unwrap_err();
    assert!(matches!(err, AppError::Validation { field: "end", .. }));
    assert!(db::get_student_lessons(&pool, id).unwrap().is_empty());
}

#[test]
fn add_lesson_for_unknown_student_is_not_found() {
    let mut pool = open_pool("lesson_unknown_student");
    let err = db::add_lesson(&mut pool, 99, dt("2025-09-01 09:00"), dt("2025-09-01 10:00"), "")
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound { entity: "Student", id: 99 }));
}

#[test]
fn lessons_are_most_recent_first() {
    let mut pool = open_pool("lessons_desc");
    let (alice, _) = seed(&mut pool);

    let starts: Vec<String> = db::get_student_lessons(&pool, alice)
        .unwrap()
        .iter()
        .map(|l| l.start.format("%Y-%m-%d %H:%M").to_string())
        .collect();
    assert_eq!(starts, ["2025-09-03 09:00", "2025-09-01 09:00"]);

    let all = db::get_all_lessons(&pool).unwrap();
    let names: Vec<&str> = all.iter().map(|e| e.student_name.as_str()).collect();
    assert_eq!(names, ["Bob", "Alice", "Alice"]);
}

#[test]
fn student_summary_for_alice() {
    let mut pool = open_pool("summary_alice");
    let (alice, _) = seed(&mut pool);

    let s = db::get_student_summary(&pool, alice).unwrap();
    assert_eq!(s.count, 2);
    assert!(approx(s.total_duration, 3.0));
    assert!(approx(s.total_amount, 270.0));
}

#[test]
fn student_summary_without_lessons_is_zero() {
    let mut pool = open_pool("summary_empty");
    let id = db::add_student(&mut pool, &StudentInput::new("Hal", 10.0)).unwrap();

    let s = db::get_student_summary(&pool, id).unwrap();
    assert_eq!(s.count, 0);
    assert!(approx(s.total_duration, 0.0));
    assert!(approx(s.total_amount, 0.0));
}

#[test]
fn monthly_summary_groups_by_date() {
    let mut pool = open_pool("monthly_summary");
    let (alice, _) = seed(&mut pool);
    db::add_lesson(&mut pool, alice, dt("2025-10-01 09:00"), dt("2025-10-01 10:00"), "").unwrap();

    let days = db::get_monthly_summary(&pool, 2025, 9).unwrap();
    assert_eq!(days.len(), 2);

    assert_eq!(days[0].date.to_string(), "2025-09-01");
    assert_eq!(days[0].lesson_count, 1);
    assert!(approx(days[0].total_duration, 1.5));
    assert!(approx(days[0].total_amount, 135.0));

    assert_eq!(days[1].date.to_string(), "2025-09-03");
    assert_eq!(days[1].lesson_count, 2);
    assert!(approx(days[1].total_duration, 2.5));
    assert!(approx(days[1].total_amount, 215.0));

    assert!(db::get_monthly_summary(&pool, 2025, 8).unwrap().is_empty());
}

#[test]
fn monthly_summary_rejects_bad_month() {
    let pool = open_pool("monthly_bad_month");
    let err = db::get_monthly_summary(&pool, 2025, 13).unwrap_err();
    assert!(matches!(err, AppError::Validation { field: "month", .. }));
}

#[test]
fn delete_student_removes_lessons() {
    let mut pool = open_pool("delete_student");
    let (alice, bob) = seed(&mut pool);

    let removed = db::delete_student(&mut pool, alice).unwrap();
    assert_eq!(removed, 2);

    assert!(db::get_student_lessons(&pool, alice).unwrap().is_empty());
    assert!(db::get_student(&pool, alice).unwrap_err().is_not_found());
    assert_eq!(db::get_student_lessons(&pool, bob).unwrap().len(), 1);
}

#[test]
fn deleting_twice_reports_not_found() {
    let mut pool = open_pool("delete_student_twice");
    let (alice, _) = seed(&mut pool);

    db::delete_student(&mut pool, alice).unwrap();
    let err = db::delete_student(&mut pool, alice).unwrap_err();
    assert!(matches!(err, AppError::NotFound { entity: "Student", .. }));
}

#[test]
fn delete_lesson_removes_one_row() {
    let mut pool = open_pool("delete_lesson");
    let (alice, _) = seed(&mut pool);

    let lessons = db::get_student_lessons(&pool, alice).unwrap();
    db::delete_lesson(&mut pool, lessons[0].id).unwrap();

    let left = db::get_student_lessons(&pool, alice).unwrap();
    assert_eq!(left.len(), 1);
    assert_eq!(left[0].id, lessons[1].id);

    let err = db::delete_lesson(&mut pool, lessons[0].id).unwrap_err();
    assert!(matches!(err, AppError::NotFound { entity: "Lesson", .. }));
}

#[test]
fn name_lookup() {
    let mut pool = open_pool("name_lookup");
    let (alice, _) = seed(&mut pool);

    assert_eq!(db::get_student_id_by_name(&pool, "Alice").unwrap(), Some(alice));
    assert_eq!(db::get_student_id_by_name(&pool, "alice").unwrap(), None);
    assert_eq!(db::get_student_id_by_name(&pool, "Nobody").unwrap(), None);
    assert_eq!(db::get_student_id_by_name(&pool, "").unwrap(), None);
}

#[test]
fn duplicate_names_resolve_to_oldest() {
    let mut pool = open_pool("name_lookup_dupes");
    let first = db::add_student(&mut pool, &StudentInput::new("Ivy", 10.0)).unwrap();
    db::add_student(&mut pool, &StudentInput::new("Ivy", 20.0)).unwrap();

    assert_eq!(db::get_student_id_by_name(&pool, "Ivy").unwrap(), Some(first));
}
