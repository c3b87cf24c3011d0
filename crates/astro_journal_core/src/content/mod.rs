//! Horoscope content provider.
//!
//! # Responsibility
//! - Produce a `Horoscope` for a sign from the static per-sign tables.
//!
//! # Invariants
//! - `compatibility`, `mood` and `color` are fixed per sign.
//! - `description` is one of the sign's three canned texts.
//! - `lucky_number` is one digit in `1..=9`; `lucky_time` is one of `LUCKY_TIMES`.

use crate::model::horoscope::Horoscope;
use crate::model::zodiac::ZodiacSign;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod horoscope_provider;
mod profiles;

pub use horoscope_provider::{build_horoscope, StaticHoroscopeProvider};
pub use profiles::{sign_profile, SignProfile, LUCKY_TIMES};

pub type ContentResult<T> = Result<T, ContentError>;

/// Failure reported by a content source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    Unavailable { sign: ZodiacSign, reason: String },
}

impl Display for ContentError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable { sign, reason } => {
                write!(f, "horoscope for {sign} unavailable: {reason}")
            }
        }
    }
}

impl Error for ContentError {}

/// Source of horoscope readings.
pub trait HoroscopeProvider: Send + Sync {
    /// Generates a reading for `sign`. Not idempotent: repeated calls may differ.
    fn horoscope(&self, sign: ZodiacSign) -> ContentResult<Horoscope>;
}
