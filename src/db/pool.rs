//! SQLite connection wrapper (one connection per CLI invocation).

use crate::config::Config;
use crate::db::initialize::init_db;
use crate::errors::AppResult;
use rusqlite::Connection;
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    /// Open the database configured in `cfg` and make sure the schema exists.
    pub fn open(cfg: &Config) -> AppResult<Self> {
        Self::new(&cfg.database)
    }

    pub fn new(path: &str) -> AppResult<Self> {
        let conn = Connection::open(Path::new(path))?;
        conn.pragma_update(None, "foreign_keys", true)?;
        init_db(&conn)?;
        Ok(Self { conn })
    }
}
