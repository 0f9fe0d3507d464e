use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    #[serde(default = "default_export_dir")]
    pub export_dir: String,
    #[serde(default = "default_discount")]
    pub default_discount: f64,
}

fn default_currency_symbol() -> String {
    "¥".to_string()
}
fn default_export_dir() -> String {
    ".".to_string()
}
fn default_discount() -> f64 {
    1.0
}

impl Default for Config {
    fn default() -> Self {
        Self::with_database(Self::database_file())
    }
}

impl Config {
    fn with_database(db_path: PathBuf) -> Self {
        Self {
            database: db_path.to_string_lossy().to_string(),
            currency_symbol: default_currency_symbol(),
            export_dir: default_export_dir(),
            default_discount: default_discount(),
        }
    }

    /// Return the standard configuration directory (`~/.tutorledger`)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".tutorledger")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("tutorledger.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("tutorledger.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        serde_yaml::from_str(&content).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Turn a `--db` argument into the path every command opens.
    ///
    /// `~/` is expanded and a relative path is taken from the current
    /// directory.
    pub fn resolve_db_path(raw: &str) -> AppResult<String> {
        let p = crate::utils::path::expand_tilde(raw);
        let abs = if p.is_absolute() {
            p
        } else {
            std::env::current_dir()?.join(p)
        };
        Ok(abs.to_string_lossy().to_string())
    }

    /// Initialize configuration and database files.
    ///
    /// `custom_db` goes through `resolve_db_path`. The database's parent
    /// directory is always created; with `is_test` the config file is left
    /// untouched.
    pub fn init_all(custom_db: Option<&str>, is_test: bool) -> AppResult<Self> {
        let db_path = match custom_db {
            Some(raw) => PathBuf::from(Self::resolve_db_path(raw)?),
            None => Self::database_file(),
        };

        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let config = Self::with_database(db_path);

        if !is_test {
            fs::create_dir_all(Self::config_dir())?;
            let yaml = serde_yaml::to_string(&config).map_err(|_| AppError::ConfigSave)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
        }

        Ok(config)
    }

    /// Directory where exports land when no explicit file is given.
    pub fn export_path(&self) -> PathBuf {
        crate::utils::path::expand_tilde(&self.export_dir)
    }
}
