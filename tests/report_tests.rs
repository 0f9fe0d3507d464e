mod common;
use common::{approx, dt, open_pool, seed};
use tutorledger::core::report::{self, ExportTable};
use tutorledger::db;
use tutorledger::models::{Lesson, LessonEntry, Summary};

fn lesson(id: i64, student_id: i64, start: &str, end: &str, amount: f64) -> Lesson {
    let (s, e) = (dt(start), dt(end));
    Lesson {
        id,
        student_id,
        start: s,
        end: e,
        duration: (e - s).num_seconds() as f64 / 3600.0,
        amount,
        notes: String::new(),
        created_at: String::new(),
    }
}

fn entry(name: &str, l: Lesson) -> LessonEntry {
    LessonEntry {
        student_name: name.to_string(),
        lesson: l,
    }
}

#[test]
fn empty_input_gives_zero_totals() {
    assert_eq!(report::summarize(&[]), Summary::default());
    assert_eq!(report::overall(&[]), Summary::default());
    assert!(report::by_student(&[]).is_empty());
    assert!(report::by_date(&[]).is_empty());
}

#[test]
fn by_date_makes_one_bucket_per_calendar_day() {
    let lessons = vec![
        lesson(3, 1, "2025-09-20 18:00", "2025-09-20 19:00", 50.0),
        lesson(2, 1, "2025-09-05 14:00", "2025-09-05 15:30", 75.0),
        lesson(1, 1, "2025-09-05 09:00", "2025-09-05 10:00", 50.0),
    ];

    let days = report::by_date(&lessons);
    assert_eq!(days.len(), 2);

    assert_eq!(days[0].date.to_string(), "2025-09-05");
    assert_eq!(days[0].lesson_count, 2);
    assert!(approx(days[0].total_duration, 2.5));
    assert!(approx(days[0].total_amount, 125.0));

    assert_eq!(days[1].date.to_string(), "2025-09-20");
    assert!(approx(days[1].total_duration, 1.0));
    assert!(approx(days[1].total_amount, 50.0));
}

#[test]
fn by_student_ranks_by_amount() {
    let entries = vec![
        entry("Bob", lesson(1, 2, "2025-09-01 09:00", "2025-09-01 10:00", 80.0)),
        entry("Alice", lesson(2, 1, "2025-09-01 11:00", "2025-09-01 12:30", 135.0)),
        entry("Alice", lesson(3, 1, "2025-09-02 11:00", "2025-09-02 12:30", 135.0)),
        entry("Cara", lesson(4, 3, "2025-09-02 15:00", "2025-09-02 16:00", 300.0)),
    ];

    let ranking = report::by_student(&entries);
    let names: Vec<&str> = ranking.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["Cara", "Alice", "Bob"]);

    let alice = &ranking[1];
    assert_eq!(alice.student_id, 1);
    assert_eq!(alice.summary.count, 2);
    assert!(approx(alice.summary.total_duration, 3.0));
    assert!(approx(alice.summary.total_amount, 270.0));
}

#[test]
fn by_student_ties_fall_back_to_name() {
    let entries = vec![
        entry("Zed", lesson(1, 1, "2025-09-01 09:00", "2025-09-01 10:00", 50.0)),
        entry("Amy", lesson(2, 2, "2025-09-01 11:00", "2025-09-01 12:00", 50.0)),
    ];

    let names: Vec<String> = report::by_student(&entries)
        .into_iter()
        .map(|s| s.name)
        .collect();
    assert_eq!(names, ["Amy", "Zed"]);
}

#[test]
fn overall_matches_sum_of_students() {
    let mut pool = open_pool("report_overall");
    seed(&mut pool);

    let entries = db::get_all_lessons(&pool).unwrap();
    let total = report::overall(&entries);
    assert_eq!(total.count, 3);
    assert!(approx(total.total_duration, 4.0));
    assert!(approx(total.total_amount, 350.0));

    let per_student: f64 = report::by_student(&entries)
        .iter()
        .map(|s| s.summary.total_amount)
        .sum();
    assert!(approx(per_student, total.total_amount));
}

#[test]
fn summarize_agrees_with_stored_summary() {
    let mut pool = open_pool("report_vs_db");
    let (alice, _) = seed(&mut pool);

    let lessons = db::get_student_lessons(&pool, alice).unwrap();
    assert_eq!(
        report::summarize(&lessons),
        db::get_student_summary(&pool, alice).unwrap()
    );
}

#[test]
fn export_table_columns_depend_on_scope() {
    let mut pool = open_pool("report_export_columns");
    let (alice, _) = seed(&mut pool);

    let all = ExportTable::all_lessons(&db::get_all_lessons(&pool).unwrap());
    assert_eq!(
        all.headers,
        ["id", "student", "start_time", "end_time", "duration", "amount", "notes"]
    );
    assert_eq!(all.rows.len(), 3);
    assert_eq!(all.rows[0][1], "Bob");

    let one = ExportTable::student_lessons(&db::get_student_lessons(&pool, alice).unwrap());
    assert_eq!(
        one.headers,
        ["id", "start_time", "end_time", "duration", "amount", "notes"]
    );
    assert_eq!(one.rows.len(), 2);
    assert_eq!(one.rows[0][1], "2025-09-03 09:00:00");
    assert_eq!(one.rows[0][3], "1.5");
    assert_eq!(one.rows[0][4], "135");
    assert_eq!(one.rows[0][5], "fractions");
}
