//! Core domain logic for the astrology journal app.
//! This crate owns the app state, its persistence and the horoscope content;
//! UI shells only read snapshots and dispatch intents.

pub mod config;
pub mod content;
pub mod dates;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod storage;

pub use config::{ConfigError, CoreConfig};
pub use content::{
    build_horoscope, sign_profile, ContentError, ContentResult, HoroscopeProvider, SignProfile,
    StaticHoroscopeProvider, LUCKY_TIMES,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::app_state::AppState;
pub use model::horoscope::Horoscope;
pub use model::journal_entry::{EntryId, JournalEntry, NewJournalEntry};
pub use model::zodiac::{UnknownZodiacSign, ZodiacSign};
pub use repo::journal_repo::{JournalRepository, StorageError, StorageResult};
pub use service::app_store::{AppStore, StoreError, StoreResult};
pub use service::journal_flow::{
    remove_entry_for_date, submit_entry, validate_entry_content, EntryValidationError,
    SubmitError, SubmitOutcome,
};
pub use storage::{KeyValueStore, KvError, KvResult, SqliteKeyValueStore};

/// Store wired to the durable SQLite backend and built-in content.
pub type SqliteAppStore = AppStore<SqliteKeyValueStore, StaticHoroscopeProvider>;

/// Minimal health-check API for shell integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
