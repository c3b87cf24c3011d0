//! Static, randomized horoscope generation.

use super::profiles::{sign_profile, LUCKY_TIMES};
use super::{ContentResult, HoroscopeProvider};
use crate::dates::{horoscope_date, local_today};
use crate::model::horoscope::Horoscope;
use crate::model::zodiac::ZodiacSign;
use chrono::NaiveDate;
use rand::seq::SliceRandom;
use rand::Rng;

/// Provider backed by the built-in text pools. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticHoroscopeProvider;

impl StaticHoroscopeProvider {
    pub fn new() -> Self {
        Self
    }
}

impl HoroscopeProvider for StaticHoroscopeProvider {
    fn horoscope(&self, sign: ZodiacSign) -> ContentResult<Horoscope> {
        Ok(build_horoscope(sign, local_today(), &mut rand::thread_rng()))
    }
}

/// Builds a reading for `sign` dated `date`, drawing from `rng`.
///
/// Description, lucky number and lucky time are independent uniform draws.
pub fn build_horoscope<R: Rng>(sign: ZodiacSign, date: NaiveDate, rng: &mut R) -> Horoscope {
    let profile = sign_profile(sign);
    let description = profile
        .descriptions
        .choose(rng)
        .copied()
        .unwrap_or(profile.descriptions[0]);
    let lucky_number = rng.gen_range(1..=9u8);
    let lucky_time = LUCKY_TIMES.choose(rng).copied().unwrap_or(LUCKY_TIMES[0]);

    Horoscope {
        current_date: horoscope_date(date),
        description: description.to_string(),
        compatibility: profile.compatibility.to_string(),
        mood: profile.mood.to_string(),
        color: profile.color.to_string(),
        lucky_number: lucky_number.to_string(),
        lucky_time: lucky_time.to_string(),
    }
}
