//! Daily horoscope record.

use serde::{Deserialize, Serialize};

/// One generated horoscope reading.
///
/// Field names follow the content feed schema (`snake_case`). A new reading
/// replaces the previous one wholesale; there is no identity to track.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Horoscope {
    /// Display date, e.g. `"Mon Jan 01 2024"`.
    pub current_date: String,
    pub description: String,
    pub compatibility: String,
    pub mood: String,
    pub color: String,
    /// Single digit `"1"..="9"`.
    pub lucky_number: String,
    /// One of the fixed hour ranges, e.g. `"6am to 7am"`.
    pub lucky_time: String,
}
