//! Journal entry entity.
//!
//! # Invariants
//! - `id` is assigned once at creation and never reused or mutated.
//! - `created_at` never changes after creation.
//! - `updated_at` only moves forward; every `touch` makes it strictly later.
//! - Timestamps carry millisecond precision so the persisted JSON mirror
//!   compares equal to the in-memory copy.

use crate::dates::now_millis;
use crate::model::zodiac::ZodiacSign;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque entry identifier in string form.
pub type EntryId = String;

/// A user-authored text record tied to one calendar date.
///
/// Serialized with camelCase field names (`zodiacSign`, `createdAt`,
/// `updatedAt`) to match the stored `journal_entries` list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    pub id: EntryId,
    /// Calendar date `YYYY-MM-DD`.
    pub date: String,
    pub content: String,
    /// Sign selected when the entry was first saved.
    pub zodiac_sign: ZodiacSign,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Caller-supplied fields for a brand new entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewJournalEntry {
    pub date: String,
    pub content: String,
    pub zodiac_sign: ZodiacSign,
}

impl NewJournalEntry {
    pub fn new(date: impl Into<String>, content: impl Into<String>, zodiac_sign: ZodiacSign) -> Self {
        Self {
            date: date.into(),
            content: content.into(),
            zodiac_sign,
        }
    }
}

impl JournalEntry {
    /// Allocates a new entry with a fresh id and `created_at == updated_at == now`.
    pub fn create(new_entry: NewJournalEntry) -> Self {
        let now = now_millis();
        Self {
            id: Uuid::new_v4().to_string(),
            date: new_entry.date,
            content: new_entry.content,
            zodiac_sign: new_entry.zodiac_sign,
            created_at: now,
            updated_at: now,
        }
    }

    /// Refreshes `updated_at`.
    ///
    /// Falls back to one millisecond past the previous value when the clock has
    /// not advanced, so edits are always observable as newer.
    pub fn touch(&mut self) {
        let now = now_millis();
        self.updated_at = if now > self.updated_at {
            now
        } else {
            self.updated_at + Duration::milliseconds(1)
        };
    }

    /// Returns whether the entry was edited after creation.
    pub fn is_edited(&self) -> bool {
        self.updated_at > self.created_at
    }
}
