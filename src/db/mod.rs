//! Data access layer. Every read and write of students and lessons goes
//! through the functions re-exported here.

pub mod initialize;
pub mod lessons;
pub mod log;
pub mod migrate;
pub mod pool;
pub mod stats;
pub mod students;

pub use lessons::{
    add_lesson, delete_lesson, get_all_lessons, get_lesson, get_monthly_summary,
    get_student_lessons, get_student_summary,
};
pub use pool::DbPool;
pub use students::{
    add_student, delete_student, get_all_students, get_student, get_student_id_by_name,
    update_student,
};
