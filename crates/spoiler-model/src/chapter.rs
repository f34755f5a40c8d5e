//! Chapter ordinals and lenient decoding of upstream chapter tags.
//!
//! Chapter numbers arrive from the content API untyped: integers, floats,
//! numeric strings, `null`, or garbage. Anything that is not a strictly
//! positive integer decodes as *absent*, so bad upstream data degrades to
//! "always eligible" instead of hiding everything.

use std::fmt;
use std::num::NonZeroU32;

use serde::{Deserialize, Deserializer, Serialize};

/// A strictly positive chapter ordinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Chapter(NonZeroU32);

impl Chapter {
    /// Returns `None` for chapter 0.
    pub const fn new(value: u32) -> Option<Self> {
        match NonZeroU32::new(value) {
            Some(value) => Some(Self(value)),
            None => None,
        }
    }

    pub const fn get(self) -> u32 {
        self.0.get()
    }

    /// Accepts any signed integer; non-positive and out-of-range values are absent.
    pub fn from_i64(value: i64) -> Option<Self> {
        u32::try_from(value).ok().and_then(Self::new)
    }

    /// Accepts integral floats only (`12.0` but not `12.5`).
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_f64(value: f64) -> Option<Self> {
        if !value.is_finite() || value.fract() != 0.0 {
            return None;
        }
        if value < 1.0 || value > f64::from(u32::MAX) {
            return None;
        }
        Self::new(value as u32)
    }

    /// Parses a trimmed numeric string with the same rules as numbers.
    pub fn parse_lenient(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        if let Ok(int) = trimmed.parse::<i64>() {
            return Self::from_i64(int);
        }
        trimmed.parse::<f64>().ok().and_then(Self::from_f64)
    }
}

impl fmt::Display for Chapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Chapter> for u32 {
    fn from(chapter: Chapter) -> Self {
        chapter.get()
    }
}

impl<'de> Deserialize<'de> for Chapter {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = u32::deserialize(deserializer)?;
        Self::new(value).ok_or_else(|| serde::de::Error::custom("chapter must be positive"))
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawChapter {
    Int(i64),
    Float(f64),
    Text(String),
    Other(serde::de::IgnoredAny),
}

impl RawChapter {
    fn into_chapter(self) -> Option<Chapter> {
        match self {
            Self::Int(value) => Chapter::from_i64(value),
            Self::Float(value) => Chapter::from_f64(value),
            Self::Text(value) => Chapter::parse_lenient(&value),
            Self::Other(_) => None,
        }
    }
}

/// `deserialize_with` helper for `Option<Chapter>` fields fed by upstream data.
///
/// Never fails on the value itself; malformed input yields `None`.
pub fn deserialize_lenient<'de, D>(deserializer: D) -> Result<Option<Chapter>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawChapter>::deserialize(deserializer)?;
    Ok(raw.and_then(RawChapter::into_chapter))
}
