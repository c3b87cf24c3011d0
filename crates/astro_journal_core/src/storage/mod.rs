//! Local key-value backend.
//!
//! # Responsibility
//! - Define the async string key-value contract the persistence gateway
//!   writes through.
//! - Provide the durable SQLite implementation.
//!
//! # Invariants
//! - `set` replaces any previous value for the key.
//! - `remove` of an absent key is not an error.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::future::Future;

mod sqlite_kv;

pub use sqlite_kv::SqliteKeyValueStore;

/// Key holding the serialized list of journal entries.
pub const JOURNAL_ENTRIES_KEY: &str = "journal_entries";
/// Key holding the plain-text tag of the last selected sign.
pub const SELECTED_ZODIAC_SIGN_KEY: &str = "selected_zodiac_sign";

pub type KvResult<T> = Result<T, KvError>;

/// Backend failure for a single key-value operation.
#[derive(Debug)]
pub enum KvError {
    Db(DbError),
    /// A previous holder of the connection lock panicked.
    LockPoisoned,
}

impl Display for KvError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::LockPoisoned => write!(f, "key-value connection lock poisoned"),
        }
    }
}

impl Error for KvError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::LockPoisoned => None,
        }
    }
}

impl From<DbError> for KvError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for KvError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Asynchronous string key-value store.
///
/// Futures are `Send` so stores can sit behind FFI executors and
/// multi-threaded runtimes alike.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> impl Future<Output = KvResult<Option<String>>> + Send;
    fn set(&self, key: &str, value: &str) -> impl Future<Output = KvResult<()>> + Send;
    /// Removes every listed key in one backend operation.
    fn remove(&self, keys: &[&str]) -> impl Future<Output = KvResult<()>> + Send;
}
