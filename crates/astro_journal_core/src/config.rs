//! Runtime configuration resolved from the environment.
//!
//! | Variable                  | Default                                  |
//! |---------------------------|------------------------------------------|
//! | `ASTRO_JOURNAL_DB_PATH`   | `<temp_dir>/astro_journal.sqlite3`       |
//! | `ASTRO_JOURNAL_LOG_LEVEL` | [`default_log_level`]                    |
//! | `ASTRO_JOURNAL_LOG_DIR`   | unset (file logging stays off)           |
//!
//! Blank values are treated as unset.

use crate::logging::default_log_level;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub const DB_PATH_ENV: &str = "ASTRO_JOURNAL_DB_PATH";
pub const LOG_LEVEL_ENV: &str = "ASTRO_JOURNAL_LOG_LEVEL";
pub const LOG_DIR_ENV: &str = "ASTRO_JOURNAL_LOG_DIR";
pub const DEFAULT_DB_FILE_NAME: &str = "astro_journal.sqlite3";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    RelativeLogDir(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RelativeLogDir(value) => {
                write!(f, "{LOG_DIR_ENV} must be an absolute path, got `{value}`")
            }
        }
    }
}

impl Error for ConfigError {}

/// Resolved settings for one process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    pub db_path: PathBuf,
    pub log_level: String,
    pub log_dir: Option<PathBuf>,
}

impl CoreConfig {
    /// Reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves settings through `lookup`, which maps a variable name to its value.
    ///
    /// # Errors
    /// - `ConfigError::RelativeLogDir` when the log directory is not absolute.
    ///   [`resolve_db_path`] still resolves the database path in that case.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let db_path = resolve_db_path(&lookup);
        let log_level =
            read_value(&lookup, LOG_LEVEL_ENV).unwrap_or_else(|| default_log_level().to_string());
        let log_dir = match read_value(&lookup, LOG_DIR_ENV) {
            Some(raw) => {
                let path = PathBuf::from(&raw);
                if !path.is_absolute() {
                    return Err(ConfigError::RelativeLogDir(raw));
                }
                Some(path)
            }
            None => None,
        };

        Ok(Self {
            db_path,
            log_level,
            log_dir,
        })
    }
}

/// Database path from the process environment. Log settings never affect it.
pub fn db_path_from_env() -> PathBuf {
    resolve_db_path(|key| std::env::var(key).ok())
}

pub fn resolve_db_path(lookup: impl Fn(&str) -> Option<String>) -> PathBuf {
    read_value(&lookup, DB_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(default_db_path)
}

pub fn default_db_path() -> PathBuf {
    std::env::temp_dir().join(DEFAULT_DB_FILE_NAME)
}

fn read_value(lookup: impl Fn(&str) -> Option<String>, key: &str) -> Option<String> {
    lookup(key)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::{
        default_db_path, resolve_db_path, ConfigError, CoreConfig, DB_PATH_ENV, LOG_DIR_ENV,
        LOG_LEVEL_ENV,
    };
    use crate::logging::default_log_level;
    use std::collections::HashMap;
    use std::path::PathBuf;

    fn resolve(pairs: &[(&str, &str)]) -> Result<CoreConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        CoreConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = resolve(&[]).unwrap();
        assert_eq!(config.db_path, default_db_path());
        assert_eq!(config.log_level, default_log_level());
        assert_eq!(config.log_dir, None);
    }

    #[test]
    fn blank_values_count_as_unset() {
        let config = resolve(&[(DB_PATH_ENV, "   "), (LOG_LEVEL_ENV, "")]).unwrap();
        assert_eq!(config.db_path, default_db_path());
        assert_eq!(config.log_level, default_log_level());
    }

    #[test]
    fn explicit_values_are_trimmed_and_used() {
        let config = resolve(&[
            (DB_PATH_ENV, " /data/journal.sqlite3 "),
            (LOG_LEVEL_ENV, "warn"),
            (LOG_DIR_ENV, "/data/logs"),
        ])
        .unwrap();
        assert_eq!(config.db_path, PathBuf::from("/data/journal.sqlite3"));
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.log_dir, Some(PathBuf::from("/data/logs")));
    }

    #[test]
    fn relative_log_dir_is_rejected() {
        let err = resolve(&[(LOG_DIR_ENV, "logs")]).unwrap_err();
        assert_eq!(err, ConfigError::RelativeLogDir("logs".to_string()));
    }

    #[test]
    fn db_path_survives_an_invalid_log_dir() {
        let vars: HashMap<&str, &str> =
            HashMap::from([(DB_PATH_ENV, "/data/journal.sqlite3"), (LOG_DIR_ENV, "logs")]);
        let lookup = |key: &str| vars.get(key).map(|value| value.to_string());

        assert!(CoreConfig::from_lookup(lookup).is_err());
        assert_eq!(
            resolve_db_path(lookup),
            PathBuf::from("/data/journal.sqlite3")
        );
    }
}
