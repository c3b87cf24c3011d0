//! Application state store.
//!
//! # Responsibility
//! - Hold the canonical `AppState` and publish every commit to subscribers.
//! - Run each intent as side effect(s) followed by a state commit.
//!
//! # Invariants
//! - Intents are serialized: one intent's side effects and commit never
//!   interleave with another's.
//! - A failed journal write leaves the in-memory entries untouched.
//! - Sign changes are optimistic and are not rolled back when persisting the
//!   sign fails.
//! - Updating or deleting an id missing from memory still writes through to
//!   storage; memory is left as is, so the two can drift until the next
//!   `load_journal_entries`.

use crate::content::{ContentError, HoroscopeProvider};
use crate::model::app_state::AppState;
use crate::model::journal_entry::{JournalEntry, NewJournalEntry};
use crate::model::zodiac::ZodiacSign;
use crate::repo::journal_repo::{JournalRepository, StorageError};
use crate::storage::KeyValueStore;
use log::{debug, error, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;
use tokio::sync::{watch, Mutex};

pub type StoreResult<T> = Result<T, StoreError>;

/// Failure reported by a store intent.
#[derive(Debug)]
pub enum StoreError {
    Storage(StorageError),
    Content(ContentError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Storage(err) => write!(f, "{err}"),
            Self::Content(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            Self::Content(err) => Some(err),
        }
    }
}

impl From<StorageError> for StoreError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

impl From<ContentError> for StoreError {
    fn from(value: ContentError) -> Self {
        Self::Content(value)
    }
}

/// Session-scoped state container.
///
/// Construct one per app session and hand references to every consumer.
pub struct AppStore<K: KeyValueStore, P: HoroscopeProvider> {
    repo: JournalRepository<K>,
    provider: P,
    state: watch::Sender<AppState>,
    intent_lock: Mutex<()>,
    initialized: AtomicBool,
}

impl<K: KeyValueStore, P: HoroscopeProvider> AppStore<K, P> {
    /// Creates a store holding the default state. Call [`AppStore::initialize`]
    /// before presenting anything.
    pub fn new(store: K, provider: P) -> Self {
        let (state, _) = watch::channel(AppState::default());
        Self {
            repo: JournalRepository::new(store),
            provider,
            state,
            intent_lock: Mutex::new(()),
            initialized: AtomicBool::new(false),
        }
    }

    /// Current state.
    pub fn snapshot(&self) -> AppState {
        self.state.borrow().clone()
    }

    /// Receiver notified after every commit.
    pub fn subscribe(&self) -> watch::Receiver<AppState> {
        self.state.subscribe()
    }

    /// The persistence gateway this store writes through.
    pub fn repository(&self) -> &JournalRepository<K> {
        &self.repo
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Startup protocol. Runs once per store; later calls return `false`.
    /// A call dropped before its final commit does not count.
    ///
    /// Reads the persisted sign and commits it, then fetches the horoscope
    /// and loads entries concurrently and commits both together. A failed
    /// horoscope fetch leaves `horoscope` empty and is only logged.
    pub async fn initialize(&self) -> bool {
        let _intent = self.intent_lock.lock().await;
        if self.initialized.load(Ordering::SeqCst) {
            debug!("event=store_init module=store status=skipped reason=already_initialized");
            return false;
        }
        let started_at = Instant::now();

        let sign = self.repo.get_selected_zodiac_sign().await;
        self.state
            .send_modify(|state| state.selected_zodiac_sign = sign);

        let (horoscope, entries) = tokio::join!(
            async { self.provider.horoscope(sign) },
            self.repo.list_journal_entries()
        );

        let horoscope = match horoscope {
            Ok(horoscope) => Some(horoscope),
            Err(err) => {
                error!("event=store_init module=store status=partial stage=horoscope sign={sign} error={err}");
                None
            }
        };
        let entry_count = entries.len();
        self.state.send_modify(|state| {
            if horoscope.is_some() {
                state.horoscope = horoscope;
            }
            state.journal_entries = entries;
        });
        self.initialized.store(true, Ordering::SeqCst);

        info!(
            "event=store_init module=store status=ok sign={sign} entries={entry_count} duration_ms={}",
            started_at.elapsed().as_millis()
        );
        true
    }

    /// Selects `sign`, persists it and refreshes the horoscope.
    ///
    /// The new sign is visible before persistence runs and stays selected
    /// even when persisting or fetching fails.
    ///
    /// # Errors
    /// - `StoreError::Storage` when the sign cannot be persisted; no horoscope
    ///   is fetched in that case.
    /// - `StoreError::Content` when the horoscope fetch fails.
    pub async fn change_zodiac_sign(&self, sign: ZodiacSign) -> StoreResult<()> {
        let _intent = self.intent_lock.lock().await;

        self.state
            .send_modify(|state| state.selected_zodiac_sign = sign);

        if let Err(err) = self.repo.put_selected_zodiac_sign(sign).await {
            error!("event=sign_change module=store status=error stage=persist sign={sign} error={err}");
            return Err(err.into());
        }
        if let Err(err) = self.commit_horoscope(sign) {
            error!("event=sign_change module=store status=error stage=horoscope sign={sign} error={err}");
            return Err(err.into());
        }

        info!("event=sign_change module=store status=ok sign={sign}");
        Ok(())
    }

    /// Replaces the horoscope with a fresh reading for `sign`, or for the
    /// selected sign when `None`.
    ///
    /// # Errors
    /// - `StoreError::Content` when the provider fails; the previous
    ///   horoscope stays visible.
    pub async fn fetch_horoscope(&self, sign: Option<ZodiacSign>) -> StoreResult<()> {
        let _intent = self.intent_lock.lock().await;

        let target = sign.unwrap_or_else(|| self.state.borrow().selected_zodiac_sign);
        if let Err(err) = self.commit_horoscope(target) {
            error!("event=horoscope_fetch module=store status=error sign={target} error={err}");
            return Err(err.into());
        }

        debug!("event=horoscope_fetch module=store status=ok sign={target}");
        Ok(())
    }

    /// Creates, persists and appends a new entry.
    ///
    /// Content is taken as given; emptiness checks belong to the caller. No
    /// de-duplication by date happens here.
    ///
    /// # Errors
    /// - `StoreError::Storage` when the entry cannot be persisted; nothing is
    ///   appended.
    pub async fn save_journal_entry(&self, new_entry: NewJournalEntry) -> StoreResult<JournalEntry> {
        let _intent = self.intent_lock.lock().await;

        let entry = JournalEntry::create(new_entry);
        if let Err(err) = self.repo.put_journal_entry(&entry).await {
            error!(
                "event=entry_save module=store status=error entry_id={} date={} error={err}",
                entry.id, entry.date
            );
            return Err(err.into());
        }

        let committed = entry.clone();
        self.state
            .send_modify(|state| state.journal_entries.push(committed));

        info!(
            "event=entry_save module=store status=ok entry_id={} date={} sign={}",
            entry.id, entry.date, entry.zodiac_sign
        );
        Ok(entry)
    }

    /// Refreshes `updated_at` on a copy of `entry`, persists it and replaces
    /// the in-memory entry with the same id.
    ///
    /// # Errors
    /// - `StoreError::Storage` when the entry cannot be persisted; memory is
    ///   left unchanged.
    pub async fn update_journal_entry(&self, entry: JournalEntry) -> StoreResult<JournalEntry> {
        let _intent = self.intent_lock.lock().await;

        let mut updated = entry;
        updated.touch();
        if let Err(err) = self.repo.put_journal_entry(&updated).await {
            error!(
                "event=entry_update module=store status=error entry_id={} error={err}",
                updated.id
            );
            return Err(err.into());
        }

        let replaced = self.state.send_if_modified(|state| {
            match state
                .journal_entries
                .iter_mut()
                .find(|existing| existing.id == updated.id)
            {
                Some(existing) => {
                    *existing = updated.clone();
                    true
                }
                None => false,
            }
        });

        if replaced {
            info!(
                "event=entry_update module=store status=ok entry_id={}",
                updated.id
            );
        } else {
            warn!(
                "event=entry_update module=store status=drift entry_id={} reason=missing_in_memory",
                updated.id
            );
        }
        Ok(updated)
    }

    /// Deletes the entry with `id` from storage, then from memory.
    ///
    /// # Errors
    /// - `StoreError::Storage` when the removal cannot be persisted; memory is
    ///   left unchanged.
    pub async fn delete_journal_entry(&self, id: &str) -> StoreResult<()> {
        let _intent = self.intent_lock.lock().await;

        if let Err(err) = self.repo.delete_journal_entry(id).await {
            error!("event=entry_delete module=store status=error entry_id={id} error={err}");
            return Err(err.into());
        }

        self.state.send_if_modified(|state| {
            let before = state.journal_entries.len();
            state.journal_entries.retain(|existing| existing.id != id);
            state.journal_entries.len() != before
        });

        info!("event=entry_delete module=store status=ok entry_id={id}");
        Ok(())
    }

    /// Replaces the in-memory entries with the full stored list. Returns the
    /// number of entries loaded.
    pub async fn load_journal_entries(&self) -> StoreResult<usize> {
        let _intent = self.intent_lock.lock().await;

        let entries = self.repo.list_journal_entries().await;
        let count = entries.len();
        self.state
            .send_modify(|state| state.journal_entries = entries);

        debug!("event=entries_load module=store status=ok entries={count}");
        Ok(count)
    }

    /// Wipes both persisted keys and resets the in-memory state to defaults.
    ///
    /// # Errors
    /// - `StoreError::Storage` when the keys cannot be removed; memory is left
    ///   unchanged.
    pub async fn clear_all_data(&self) -> StoreResult<()> {
        let _intent = self.intent_lock.lock().await;

        if let Err(err) = self.repo.clear_all().await {
            error!("event=data_clear module=store status=error error={err}");
            return Err(err.into());
        }

        self.state.send_modify(|state| {
            state.selected_zodiac_sign = ZodiacSign::default();
            state.horoscope = None;
            state.journal_entries.clear();
        });

        info!("event=data_clear module=store status=ok");
        Ok(())
    }

    fn commit_horoscope(&self, sign: ZodiacSign) -> Result<(), ContentError> {
        let horoscope = self.provider.horoscope(sign)?;
        self.state
            .send_modify(|state| state.horoscope = Some(horoscope));
        Ok(())
    }
}
