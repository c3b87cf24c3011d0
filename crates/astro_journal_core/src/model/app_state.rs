//! Aggregate snapshot published by the application store.

use crate::model::horoscope::Horoscope;
use crate::model::journal_entry::JournalEntry;
use crate::model::zodiac::ZodiacSign;

/// Read-only view of everything the screens render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    pub selected_zodiac_sign: ZodiacSign,
    /// `None` until the first successful horoscope fetch.
    pub horoscope: Option<Horoscope>,
    /// Insertion order, not date order.
    pub journal_entries: Vec<JournalEntry>,
    /// Legacy slot kept for consumers that render it. No intent ever sets it;
    /// failures are reported through each intent's return value.
    pub error: Option<String>,
}

impl AppState {
    /// First entry written for `date`, if any.
    pub fn entry_for_date(&self, date: &str) -> Option<&JournalEntry> {
        self.journal_entries.iter().find(|entry| entry.date == date)
    }

    /// Entry with `id`, if any.
    pub fn entry(&self, id: &str) -> Option<&JournalEntry> {
        self.journal_entries.iter().find(|entry| entry.id == id)
    }
}
