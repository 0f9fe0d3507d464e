use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension};

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )
}

/// Create the `students` and `lessons` tables if missing.
///
/// There is no ON DELETE CASCADE: lessons are removed explicitly before
/// their student.
fn ensure_core_tables(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS students (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            name        TEXT NOT NULL,
            phone       TEXT,
            level       TEXT,
            hourly_rate REAL NOT NULL,
            discount    REAL NOT NULL DEFAULT 1.0,
            created_at  TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
        );

        CREATE TABLE IF NOT EXISTS lessons (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            student_id  INTEGER NOT NULL REFERENCES students(id),
            start_time  TEXT NOT NULL,
            end_time    TEXT NOT NULL,
            duration    REAL NOT NULL,
            amount      REAL NOT NULL,
            notes       TEXT NOT NULL DEFAULT '',
            created_at  TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
        );
        "#,
    )
}

/// A named schema step, applied at most once and recorded in `log`.
struct Migration {
    version: &'static str,
    description: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "20261016_0001_lessons_indexes",
        description: "Added lesson indexes on (student_id, start_time) and start_time",
        sql: r#"
            CREATE INDEX IF NOT EXISTS idx_lessons_student_start ON lessons(student_id, start_time);
            CREATE INDEX IF NOT EXISTS idx_lessons_start ON lessons(start_time);
        "#,
    },
    Migration {
        version: "20261016_0002_students_name_index",
        description: "Added index on students(name)",
        sql: "CREATE INDEX IF NOT EXISTS idx_students_name ON students(name);",
    },
];

fn is_applied(conn: &Connection, version: &str) -> rusqlite::Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn apply(conn: &Connection, m: &Migration) -> AppResult<()> {
    if is_applied(conn, m.version)? {
        return Ok(());
    }

    conn.execute_batch(m.sql)
        .map_err(|e| AppError::Migration(format!("{}: {}", m.version, e)))?;

    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [m.version, m.description],
    )?;

    success(format!("Migration applied: {}", m.version));
    Ok(())
}

/// Public entry point: create missing tables and run all pending migrations.
///
/// Invoked by `db::initialize::init_db()` on every open.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    ensure_log_table(conn)?;
    ensure_core_tables(conn)?;

    for m in MIGRATIONS {
        apply(conn, m)?;
    }

    Ok(())
}

/// Versions already recorded as applied, oldest first.
pub fn applied_versions(conn: &Connection) -> AppResult<Vec<String>> {
    let mut stmt = conn.prepare(
        "SELECT target FROM log WHERE operation = 'migration_applied' ORDER BY id ASC",
    )?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
