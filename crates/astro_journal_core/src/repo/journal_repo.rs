//! Journal persistence gateway.
//!
//! Read paths are lenient: a missing key, a backend read failure or an
//! undecodable payload all yield the empty list (or the default sign) and a
//! warning. Write paths surface `StorageError` and never report partial
//! success.

use crate::model::journal_entry::JournalEntry;
use crate::model::zodiac::ZodiacSign;
use crate::storage::{KeyValueStore, KvError, JOURNAL_ENTRIES_KEY, SELECTED_ZODIAC_SIGN_KEY};
use log::{debug, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use tokio::sync::Mutex;

pub type StorageResult<T> = Result<T, StorageError>;

/// Storage failure surfaced by gateway operations.
#[derive(Debug)]
pub enum StorageError {
    /// Backend read failed. Only produced by internal helpers; public read
    /// operations recover from it.
    Read(KvError),
    /// Backend write or removal failed.
    Write(KvError),
    /// The entries list could not be serialized.
    Encode(serde_json::Error),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Read(err) => write!(f, "storage read failed: {err}"),
            Self::Write(err) => write!(f, "storage write failed: {err}"),
            Self::Encode(err) => write!(f, "journal entries could not be encoded: {err}"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Read(err) | Self::Write(err) => Some(err),
            Self::Encode(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(value: serde_json::Error) -> Self {
        Self::Encode(value)
    }
}

/// Gateway owning the durable mirror of journal entries and selected sign.
pub struct JournalRepository<K: KeyValueStore> {
    store: K,
    entries_lock: Mutex<()>,
}

impl<K: KeyValueStore> JournalRepository<K> {
    pub fn new(store: K) -> Self {
        Self {
            store,
            entries_lock: Mutex::new(()),
        }
    }

    /// Borrow the backing store.
    pub fn store(&self) -> &K {
        &self.store
    }

    /// Upserts `entry` by id and rewrites the whole list.
    ///
    /// # Errors
    /// - `StorageError::Write` when the backend rejects the write.
    /// - `StorageError::Encode` when the list cannot be serialized.
    pub async fn put_journal_entry(&self, entry: &JournalEntry) -> StorageResult<()> {
        let _writer = self.entries_lock.lock().await;

        let mut entries = self.read_entries_lenient().await;
        entries.retain(|existing| existing.id != entry.id);
        entries.push(entry.clone());

        self.write_entries(&entries).await?;
        debug!(
            "event=entry_put module=repo status=ok entry_id={} total={}",
            entry.id,
            entries.len()
        );
        Ok(())
    }

    /// All stored entries in stored order; empty on missing or unreadable data.
    pub async fn list_journal_entries(&self) -> Vec<JournalEntry> {
        self.read_entries_lenient().await
    }

    /// First stored entry for `date`.
    pub async fn get_journal_entry_by_date(&self, date: &str) -> Option<JournalEntry> {
        self.read_entries_lenient()
            .await
            .into_iter()
            .find(|entry| entry.date == date)
    }

    /// Removes the entry with `id`. Absent ids leave the stored list untouched.
    ///
    /// # Errors
    /// - `StorageError::Write` when the backend rejects the rewrite.
    pub async fn delete_journal_entry(&self, id: &str) -> StorageResult<()> {
        let _writer = self.entries_lock.lock().await;

        let mut entries = self.read_entries_lenient().await;
        let before = entries.len();
        entries.retain(|existing| existing.id != id);
        if entries.len() == before {
            debug!("event=entry_delete module=repo status=noop entry_id={id}");
            return Ok(());
        }

        self.write_entries(&entries).await?;
        debug!(
            "event=entry_delete module=repo status=ok entry_id={id} total={}",
            entries.len()
        );
        Ok(())
    }

    /// Stored sign, or `aries` when absent, unreadable or unrecognized.
    pub async fn get_selected_zodiac_sign(&self) -> ZodiacSign {
        match self.store.get(SELECTED_ZODIAC_SIGN_KEY).await {
            Ok(Some(raw)) => raw.parse::<ZodiacSign>().unwrap_or_else(|err| {
                warn!("event=sign_read module=repo status=fallback reason=unknown_tag error={err}");
                ZodiacSign::default()
            }),
            Ok(None) => ZodiacSign::default(),
            Err(err) => {
                warn!(
                    "event=sign_read module=repo status=fallback reason=read_failed error={}",
                    StorageError::Read(err)
                );
                ZodiacSign::default()
            }
        }
    }

    /// # Errors
    /// - `StorageError::Write` when the backend rejects the write.
    pub async fn put_selected_zodiac_sign(&self, sign: ZodiacSign) -> StorageResult<()> {
        self.store
            .set(SELECTED_ZODIAC_SIGN_KEY, sign.as_str())
            .await
            .map_err(StorageError::Write)
    }

    /// Removes both persisted keys.
    ///
    /// # Errors
    /// - `StorageError::Write` when the backend rejects the removal.
    pub async fn clear_all(&self) -> StorageResult<()> {
        let _writer = self.entries_lock.lock().await;
        self.store
            .remove(&[JOURNAL_ENTRIES_KEY, SELECTED_ZODIAC_SIGN_KEY])
            .await
            .map_err(StorageError::Write)
    }

    async fn read_entries_lenient(&self) -> Vec<JournalEntry> {
        let raw = match self.store.get(JOURNAL_ENTRIES_KEY).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                warn!(
                    "event=entries_read module=repo status=fallback reason=read_failed error={}",
                    StorageError::Read(err)
                );
                return Vec::new();
            }
        };

        serde_json::from_str(&raw).unwrap_or_else(|err| {
            warn!("event=entries_read module=repo status=fallback reason=decode_failed error={err}");
            Vec::new()
        })
    }

    async fn write_entries(&self, entries: &[JournalEntry]) -> StorageResult<()> {
        let encoded = serde_json::to_string(entries)?;
        self.store
            .set(JOURNAL_ENTRIES_KEY, &encoded)
            .await
            .map_err(StorageError::Write)
    }
}
