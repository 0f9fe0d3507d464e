pub mod lesson;
pub mod student;
pub mod summary;

pub use lesson::{Lesson, LessonEntry};
pub use student::{Student, StudentInput};
pub use summary::{DailyTotal, StudentTotal, Summary};
