//! Domain model for the astrology journal.
//!
//! # Responsibility
//! - Define the sign, horoscope, journal entry and app state shapes.
//! - Keep wire field names identical to the persisted JSON mirror.
//!
//! # Invariants
//! - A `JournalEntry` is identified by its `id`; the `date` is only a lookup key.
//! - `Horoscope` values are never persisted.

pub mod app_state;
pub mod horoscope;
pub mod journal_entry;
pub mod zodiac;
