use crate::cli::parser::{Commands, LessonAction};
use crate::config::Config;
use crate::core::lesson::{LessonLogic, StudentRef};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{ask_confirmation, info, warning};
use crate::utils::date::parse_datetime;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Lesson { action } = cmd else {
        return Ok(());
    };

    let mut pool = DbPool::open(cfg)?;

    match action {
        LessonAction::Add {
            student,
            student_id,
            start,
            end,
            notes,
        } => {
            let who = match (student, student_id) {
                (_, Some(id)) => StudentRef::Id(*id),
                (Some(name), None) => StudentRef::Name(name.clone()),
                (None, None) => {
                    return Err(AppError::validation(
                        "student",
                        "use --student or --student-id",
                    ));
                }
            };
            let start = parse_datetime(start)?;
            let end = parse_datetime(end)?;
            LessonLogic::add(&mut pool, cfg, &who, start, end, notes)?;
        }

        LessonAction::List { student } => {
            let who = student.clone().map(StudentRef::Name);
            LessonLogic::list(&pool, cfg, who.as_ref())?;
        }

        LessonAction::Del { id, yes } => {
            let prompt = format!("Delete lesson #{}? This action is irreversible.", id);
            if !*yes && !ask_confirmation(&prompt) {
                info("Operation cancelled.");
                return Ok(());
            }

            match LessonLogic::delete(&mut pool, *id) {
                Err(e) if e.is_not_found() => warning(format!("{}; nothing deleted.", e)),
                other => other?,
            }
        }
    }

    Ok(())
}
