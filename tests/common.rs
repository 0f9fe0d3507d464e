#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDateTime;
use std::env;
use std::fs;
use std::path::PathBuf;
use tutorledger::db::DbPool;
use tutorledger::models::StudentInput;

pub fn tl() -> Command {
    cargo_bin_cmd!("tutorledger")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_tutorledger.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Fresh database opened through the library.
pub fn open_pool(name: &str) -> DbPool {
    let db_path = setup_test_db(name);
    DbPool::new(&db_path).expect("open db")
}

pub fn dt(s: &str) -> NaiveDateTime {
    tutorledger::utils::date::parse_datetime(s).expect("valid datetime")
}

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

/// Alice (100/h, 10% off) with two 90-minute lessons on different days,
/// and Bob (80/h) with one hour.
pub fn seed(pool: &mut DbPool) -> (i64, i64) {
    use tutorledger::db;

    let alice = db::add_student(pool, &StudentInput::new("Alice", 100.0).with_discount(0.9))
        .expect("add alice");
    let bob = db::add_student(pool, &StudentInput::new("Bob", 80.0)).expect("add bob");

    db::add_lesson(pool, alice, dt("2025-09-01 09:00"), dt("2025-09-01 10:30"), "")
        .expect("lesson 1");
    db::add_lesson(
        pool,
        alice,
        dt("2025-09-03 09:00"),
        dt("2025-09-03 10:30"),
        "fractions",
    )
    .expect("lesson 2");
    db::add_lesson(pool, bob, dt("2025-09-03 14:00"), dt("2025-09-03 15:00"), "")
        .expect("lesson 3");

    (alice, bob)
}

/// Initialize DB and add a small dataset through the CLI
pub fn init_db_with_data(db_path: &str) {
    tl().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    tl().args([
        "--db", db_path, "student", "add", "--name", "Alice", "--rate", "100", "--discount",
        "0.9",
    ])
    .assert()
    .success();

    tl().args([
        "--db",
        db_path,
        "lesson",
        "add",
        "--student",
        "Alice",
        "--start",
        "2025-09-01 09:00",
        "--end",
        "2025-09-01 10:30",
    ])
    .assert()
    .success();

    tl().args([
        "--db",
        db_path,
        "lesson",
        "add",
        "--student",
        "Alice",
        "--start",
        "2025-09-15 09:00",
        "--end",
        "2025-09-15 10:30",
        "--notes",
        "exam prep",
    ])
    .assert()
    .success();
}
