use crate::cli::parser::{Commands, StudentAction};
use crate::config::Config;
use crate::core::student::{StudentChanges, StudentLogic};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::StudentInput;
use crate::models::student::parse_number;
use crate::ui::messages::{ask_confirmation, info, warning};

fn parse_optional(field: &'static str, raw: &Option<String>) -> AppResult<Option<f64>> {
    raw.as_deref().map(|r| parse_number(field, r)).transpose()
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Student { action } = cmd else {
        return Ok(());
    };

    let mut pool = DbPool::open(cfg)?;

    match action {
        StudentAction::Add {
            name,
            rate,
            phone,
            level,
            discount,
        } => {
            let input = StudentInput {
                name: name.clone(),
                phone: phone.clone(),
                level: level.clone(),
                hourly_rate: Some(parse_number("hourly_rate", rate)?),
                discount: Some(
                    parse_optional("discount", discount)?.unwrap_or(cfg.default_discount),
                ),
            };
            StudentLogic::add(&mut pool, &input)?;
        }

        StudentAction::List => StudentLogic::list(&pool, cfg)?,

        StudentAction::Show { id } => StudentLogic::show(&pool, cfg, *id)?,

        StudentAction::Edit {
            id,
            name,
            rate,
            phone,
            level,
            discount,
        } => {
            let changes = StudentChanges {
                name: name.clone(),
                phone: phone.clone(),
                level: level.clone(),
                hourly_rate: parse_optional("hourly_rate", rate)?,
                discount: parse_optional("discount", discount)?,
            };
            StudentLogic::edit(&mut pool, *id, &changes)?;
        }

        StudentAction::Del { id, yes } => {
            let prompt = format!(
                "Delete student #{} and ALL of their lessons? This action is irreversible.",
                id
            );
            if !*yes && !ask_confirmation(&prompt) {
                info("Operation cancelled.");
                return Ok(());
            }

            // a missing student is reported, not treated as a failure
            match StudentLogic::delete(&mut pool, *id) {
                Err(e) if e.is_not_found() => warning(format!("{}; nothing deleted.", e)),
                other => other?,
            }
        }
    }

    Ok(())
}
