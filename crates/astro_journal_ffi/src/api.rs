//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose one session handle that owns the app store for its lifetime.
//! - Flatten store results into string-only views and action envelopes.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Intent failures are returned as `ActionResponse { ok: false, .. }`,
//!   never as exceptions.

use astro_journal_core::config::db_path_from_env;
use astro_journal_core::dates::{
    format_display_date, format_timestamp, is_today, parse_date, today_string,
};
use astro_journal_core::{
    core_version as core_version_inner, init_logging as init_logging_inner,
    logging_status as logging_status_inner, ping as ping_inner, remove_entry_for_date,
    submit_entry, validate_entry_content, AppState, ConfigError, CoreConfig, Horoscope,
    JournalEntry, SqliteAppStore, SqliteKeyValueStore, StaticHoroscopeProvider, SubmitError,
    SubmitOutcome, ZodiacSign,
};
use log::{info, warn};
use std::path::PathBuf;
use std::sync::OnceLock;

static DEFAULT_DB_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Core crate version.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes core file logging once per process.
///
/// # FFI contract
/// - `level`: `trace|debug|info|warn|error`, case-insensitive.
/// - `log_dir`: absolute directory for rolling log files.
/// - Blank arguments fall back to `ASTRO_JOURNAL_LOG_LEVEL` and
///   `ASTRO_JOURNAL_LOG_DIR`.
/// - Returns an empty string on success and the error message otherwise.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    let (level, log_dir) = match logging_settings(&level, &log_dir, CoreConfig::from_env) {
        Ok(settings) => settings,
        Err(err) => return err,
    };
    match init_logging_inner(&level, &log_dir) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Level and directory of the running logger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingStatus {
    pub level: String,
    pub log_dir: String,
}

/// `None` until `init_logging` has succeeded.
#[flutter_rust_bridge::frb(sync)]
pub fn logging_status() -> Option<LoggingStatus> {
    logging_status_inner().map(|(level, log_dir)| LoggingStatus {
        level: level.to_string(),
        log_dir: log_dir.to_string_lossy().into_owned(),
    })
}

/// Picker row for one sign.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZodiacOption {
    /// Stable tag passed back to `change_zodiac_sign`.
    pub value: String,
    /// Label with glyph, e.g. `Leo ♌`.
    pub label: String,
}

/// All twelve signs in picker order.
#[flutter_rust_bridge::frb(sync)]
pub fn zodiac_options() -> Vec<ZodiacOption> {
    ZodiacSign::ALL
        .into_iter()
        .map(|sign| ZodiacOption {
            value: sign.as_str().to_string(),
            label: sign.picker_label(),
        })
        .collect()
}

/// Journal key for today (`YYYY-MM-DD`).
#[flutter_rust_bridge::frb(sync)]
pub fn today_date() -> String {
    today_string()
}

/// Long display form of a journal key; echoes the input when it does not parse.
#[flutter_rust_bridge::frb(sync)]
pub fn display_date(date: String) -> String {
    parse_date(&date).map_or(date, format_display_date)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoroscopeView {
    pub current_date: String,
    pub description: String,
    pub compatibility: String,
    pub mood: String,
    pub color: String,
    pub lucky_number: String,
    pub lucky_time: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalEntryView {
    pub id: String,
    pub date: String,
    pub content: String,
    pub zodiac_sign: String,
    /// RFC 3339, millisecond precision.
    pub created_at: String,
    pub updated_at: String,
    /// Set once the entry was edited after creation.
    pub edited: bool,
    pub is_today: bool,
}

/// Whole-state view rendered by the screens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateView {
    pub selected_zodiac_sign: String,
    pub selected_zodiac_label: String,
    pub horoscope: Option<HoroscopeView>,
    pub journal_entries: Vec<JournalEntryView>,
    pub error: Option<String>,
}

/// Outcome envelope for every intent call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResponse {
    pub ok: bool,
    /// Entry touched by the call, when there is one.
    pub entry_id: Option<String>,
    /// Human-readable message for toasts and diagnostics.
    pub message: String,
}

impl ActionResponse {
    fn success(message: impl Into<String>, entry_id: Option<String>) -> Self {
        Self {
            ok: true,
            entry_id,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            entry_id: None,
            message: message.into(),
        }
    }
}

/// One app session: the store, its database and its published state.
#[flutter_rust_bridge::frb(opaque)]
pub struct JournalSession {
    store: SqliteAppStore,
}

impl JournalSession {
    /// Opens the journal database and runs the startup protocol.
    ///
    /// A blank `db_path` falls back to `ASTRO_JOURNAL_DB_PATH` or the temp
    /// directory default.
    pub async fn open(db_path: String) -> Result<JournalSession, String> {
        let path = match db_path.trim() {
            "" => resolve_default_db_path(),
            trimmed => PathBuf::from(trimmed),
        };
        let kv = SqliteKeyValueStore::open(&path)
            .map_err(|err| format!("journal database open failed: {err}"))?;
        let session = Self {
            store: SqliteAppStore::new(kv, StaticHoroscopeProvider::new()),
        };
        session.store.initialize().await;
        info!("event=session_open module=ffi status=ok");
        Ok(session)
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn snapshot(&self) -> StateView {
        to_state_view(&self.store.snapshot())
    }

    pub async fn change_zodiac_sign(&self, sign: String) -> ActionResponse {
        let sign = match sign.parse::<ZodiacSign>() {
            Ok(sign) => sign,
            Err(err) => return ActionResponse::failure(err.to_string()),
        };
        match self.store.change_zodiac_sign(sign).await {
            Ok(()) => ActionResponse::success(format!("Showing {}.", sign.display_name()), None),
            Err(err) => ActionResponse::failure(format!("change_zodiac_sign failed: {err}")),
        }
    }

    pub async fn refresh_horoscope(&self) -> ActionResponse {
        match self.store.fetch_horoscope(None).await {
            Ok(()) => ActionResponse::success("Horoscope refreshed.", None),
            Err(err) => ActionResponse::failure(format!("refresh_horoscope failed: {err}")),
        }
    }

    /// Saves today's entry, updating it when one already exists.
    pub async fn submit_today_entry(&self, content: String) -> ActionResponse {
        self.submit_entry(today_string(), content).await
    }

    pub async fn submit_entry(&self, date: String, content: String) -> ActionResponse {
        if parse_date(&date).is_none() {
            return ActionResponse::failure(format!("invalid journal date `{date}`"));
        }
        match submit_entry(&self.store, &date, &content).await {
            Ok(SubmitOutcome::Created(entry)) => {
                ActionResponse::success("Journal entry saved!", Some(entry.id))
            }
            Ok(SubmitOutcome::Updated(entry)) => {
                ActionResponse::success("Journal entry updated!", Some(entry.id))
            }
            Err(SubmitError::Validation(err)) => ActionResponse::failure(err.to_string()),
            Err(SubmitError::Store(err)) => {
                ActionResponse::failure(format!("submit_entry failed: {err}"))
            }
        }
    }

    /// Replaces the content of the entry with `id`.
    pub async fn update_entry(&self, id: String, content: String) -> ActionResponse {
        let content = match validate_entry_content(&content) {
            Ok(content) => content.to_string(),
            Err(err) => return ActionResponse::failure(err.to_string()),
        };
        let Some(mut entry) = self.store.snapshot().entry(&id).cloned() else {
            warn!("event=entry_update module=ffi status=rejected reason=unknown_id entry_id={id}");
            return ActionResponse::failure(format!("journal entry not found: {id}"));
        };
        entry.content = content;
        match self.store.update_journal_entry(entry).await {
            Ok(updated) => ActionResponse::success("Journal entry updated!", Some(updated.id)),
            Err(err) => ActionResponse::failure(format!("update_entry failed: {err}")),
        }
    }

    pub async fn delete_entry(&self, id: String) -> ActionResponse {
        match self.store.delete_journal_entry(&id).await {
            Ok(()) => ActionResponse::success("Journal entry deleted.", Some(id)),
            Err(err) => ActionResponse::failure(format!("delete_entry failed: {err}")),
        }
    }

    pub async fn delete_entry_for_date(&self, date: String) -> ActionResponse {
        match remove_entry_for_date(&self.store, &date).await {
            Ok(true) => ActionResponse::success("Journal entry deleted.", None),
            Ok(false) => ActionResponse::failure(format!("no journal entry for {date}")),
            Err(err) => ActionResponse::failure(format!("delete_entry_for_date failed: {err}")),
        }
    }

    pub async fn reload_entries(&self) -> ActionResponse {
        match self.store.load_journal_entries().await {
            Ok(count) => ActionResponse::success(format!("Loaded {count} journal entries."), None),
            Err(err) => ActionResponse::failure(format!("reload_entries failed: {err}")),
        }
    }

    pub async fn clear_all_data(&self) -> ActionResponse {
        match self.store.clear_all_data().await {
            Ok(()) => ActionResponse::success("All journal data cleared.", None),
            Err(err) => ActionResponse::failure(format!("clear_all_data failed: {err}")),
        }
    }
}

fn resolve_default_db_path() -> PathBuf {
    DEFAULT_DB_PATH.get_or_init(db_path_from_env).clone()
}

/// Fills blank `level` and `log_dir` from the environment config.
fn logging_settings(
    level: &str,
    log_dir: &str,
    config: impl FnOnce() -> Result<CoreConfig, ConfigError>,
) -> Result<(String, String), String> {
    let (level, log_dir) = (level.trim(), log_dir.trim());
    if !level.is_empty() && !log_dir.is_empty() {
        return Ok((level.to_string(), log_dir.to_string()));
    }

    let config = config().map_err(|err| {
        warn!("event=config_load module=ffi status=error error={err}");
        err.to_string()
    })?;
    let level = match level {
        "" => config.log_level,
        explicit => explicit.to_string(),
    };
    let log_dir = match log_dir {
        "" => config
            .log_dir
            .map(|dir| dir.to_string_lossy().into_owned())
            .unwrap_or_default(),
        explicit => explicit.to_string(),
    };
    Ok((level, log_dir))
}

fn to_state_view(state: &AppState) -> StateView {
    StateView {
        selected_zodiac_sign: state.selected_zodiac_sign.as_str().to_string(),
        selected_zodiac_label: state.selected_zodiac_sign.picker_label(),
        horoscope: state.horoscope.as_ref().map(to_horoscope_view),
        journal_entries: state.journal_entries.iter().map(to_entry_view).collect(),
        error: state.error.clone(),
    }
}

fn to_horoscope_view(horoscope: &Horoscope) -> HoroscopeView {
    HoroscopeView {
        current_date: horoscope.current_date.clone(),
        description: horoscope.description.clone(),
        compatibility: horoscope.compatibility.clone(),
        mood: horoscope.mood.clone(),
        color: horoscope.color.clone(),
        lucky_number: horoscope.lucky_number.clone(),
        lucky_time: horoscope.lucky_time.clone(),
    }
}

fn to_entry_view(entry: &JournalEntry) -> JournalEntryView {
    JournalEntryView {
        id: entry.id.clone(),
        date: entry.date.clone(),
        content: entry.content.clone(),
        zodiac_sign: entry.zodiac_sign.as_str().to_string(),
        created_at: format_timestamp(entry.created_at),
        updated_at: format_timestamp(entry.updated_at),
        edited: entry.is_edited(),
        is_today: is_today(&entry.date),
    }
}
