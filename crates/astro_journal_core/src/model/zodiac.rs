//! The twelve zodiac signs.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// One of the twelve fixed zodiac categories.
///
/// Serialized as the lowercase tag (`"aries"`, `"taurus"`, ...), which is also
/// the exact text stored under the selected-sign key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZodiacSign {
    #[default]
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl ZodiacSign {
    /// All signs in calendar order, starting at Aries.
    pub const ALL: [ZodiacSign; 12] = [
        Self::Aries,
        Self::Taurus,
        Self::Gemini,
        Self::Cancer,
        Self::Leo,
        Self::Virgo,
        Self::Libra,
        Self::Scorpio,
        Self::Sagittarius,
        Self::Capricorn,
        Self::Aquarius,
        Self::Pisces,
    ];

    /// Stable lowercase tag.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Aries => "aries",
            Self::Taurus => "taurus",
            Self::Gemini => "gemini",
            Self::Cancer => "cancer",
            Self::Leo => "leo",
            Self::Virgo => "virgo",
            Self::Libra => "libra",
            Self::Scorpio => "scorpio",
            Self::Sagittarius => "sagittarius",
            Self::Capricorn => "capricorn",
            Self::Aquarius => "aquarius",
            Self::Pisces => "pisces",
        }
    }

    /// Capitalized name for headings, e.g. `"Sagittarius"`.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    /// Astrological glyph for the sign.
    pub fn glyph(self) -> char {
        match self {
            Self::Aries => '♈',
            Self::Taurus => '♉',
            Self::Gemini => '♊',
            Self::Cancer => '♋',
            Self::Leo => '♌',
            Self::Virgo => '♍',
            Self::Libra => '♎',
            Self::Scorpio => '♏',
            Self::Sagittarius => '♐',
            Self::Capricorn => '♑',
            Self::Aquarius => '♒',
            Self::Pisces => '♓',
        }
    }

    /// Picker label: display name followed by the glyph, e.g. `"Leo ♌"`.
    pub fn picker_label(self) -> String {
        format!("{} {}", self.display_name(), self.glyph())
    }
}

impl Display for ZodiacSign {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of the twelve sign tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownZodiacSign(pub String);

impl Display for UnknownZodiacSign {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown zodiac sign: `{}`", self.0)
    }
}

impl Error for UnknownZodiacSign {}

impl FromStr for ZodiacSign {
    type Err = UnknownZodiacSign;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|sign| sign.as_str() == normalized)
            .ok_or_else(|| UnknownZodiacSign(value.to_string()))
    }
}
