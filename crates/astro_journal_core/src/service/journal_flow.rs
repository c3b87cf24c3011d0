//! Journal screen flow: validation and save-or-update routing.
//!
//! # Invariants
//! - Empty or whitespace-only content never reaches the store.
//! - Content is stored trimmed.
//! - A date that already has an entry is routed to an update, so the screen
//!   keeps one entry per day.

use crate::content::HoroscopeProvider;
use crate::model::journal_entry::{JournalEntry, NewJournalEntry};
use crate::service::app_store::{AppStore, StoreError};
use crate::storage::KeyValueStore;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Content rejected before any intent runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryValidationError {
    EmptyContent,
}

impl Display for EntryValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyContent => write!(f, "journal entry content must not be empty"),
        }
    }
}

impl Error for EntryValidationError {}

#[derive(Debug)]
pub enum SubmitError {
    Validation(EntryValidationError),
    Store(StoreError),
}

impl Display for SubmitError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for SubmitError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Store(err) => Some(err),
        }
    }
}

impl From<EntryValidationError> for SubmitError {
    fn from(value: EntryValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<StoreError> for SubmitError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Which intent a submission went through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created(JournalEntry),
    Updated(JournalEntry),
}

impl SubmitOutcome {
    pub fn entry(&self) -> &JournalEntry {
        match self {
            Self::Created(entry) | Self::Updated(entry) => entry,
        }
    }
}

/// Returns the trimmed content, or `EmptyContent` when nothing remains.
pub fn validate_entry_content(content: &str) -> Result<&str, EntryValidationError> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err(EntryValidationError::EmptyContent);
    }
    Ok(trimmed)
}

/// Saves `content` as the entry for `date`.
///
/// Updates the date's existing entry when there is one; otherwise creates a
/// new entry tagged with the currently selected sign.
///
/// # Errors
/// - `SubmitError::Validation` for empty content.
/// - `SubmitError::Store` when the underlying intent fails.
pub async fn submit_entry<K, P>(
    store: &AppStore<K, P>,
    date: &str,
    content: &str,
) -> Result<SubmitOutcome, SubmitError>
where
    K: KeyValueStore,
    P: HoroscopeProvider,
{
    let content = validate_entry_content(content)?;
    let snapshot = store.snapshot();

    match snapshot.entry_for_date(date) {
        Some(existing) => {
            let mut edited = existing.clone();
            edited.content = content.to_string();
            let updated = store.update_journal_entry(edited).await?;
            Ok(SubmitOutcome::Updated(updated))
        }
        None => {
            let created = store
                .save_journal_entry(NewJournalEntry::new(
                    date,
                    content,
                    snapshot.selected_zodiac_sign,
                ))
                .await?;
            Ok(SubmitOutcome::Created(created))
        }
    }
}

/// Deletes the entry for `date`. Returns `false` when the date has none.
///
/// # Errors
/// - `StoreError::Storage` when the removal cannot be persisted.
pub async fn remove_entry_for_date<K, P>(store: &AppStore<K, P>, date: &str) -> Result<bool, StoreError>
where
    K: KeyValueStore,
    P: HoroscopeProvider,
{
    let Some(id) = store.snapshot().entry_for_date(date).map(|entry| entry.id.clone()) else {
        return Ok(false);
    };
    store.delete_journal_entry(&id).await?;
    Ok(true)
}
