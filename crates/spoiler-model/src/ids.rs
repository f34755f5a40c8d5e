use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ModelError;

/// Kind of wiki entity that can own content or chapter variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Character,
    Arc,
    Gamble,
    Organization,
    Volume,
    Chapter,
    Event,
    Guide,
    Quote,
    Media,
}

impl EntityKind {
    pub const fn all() -> &'static [EntityKind] {
        &[
            Self::Character,
            Self::Arc,
            Self::Gamble,
            Self::Organization,
            Self::Volume,
            Self::Chapter,
            Self::Event,
            Self::Guide,
            Self::Quote,
            Self::Media,
        ]
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Character => "character",
            Self::Arc => "arc",
            Self::Gamble => "gamble",
            Self::Organization => "organization",
            Self::Volume => "volume",
            Self::Chapter => "chapter",
            Self::Event => "event",
            Self::Guide => "guide",
            Self::Quote => "quote",
            Self::Media => "media",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let needle = value.trim();
        Self::all()
            .iter()
            .copied()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| ModelError::UnknownEntityKind(value.to_string()))
    }
}

/// Identity of one wiki entity, rendered as `kind:id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EntityRef {
    pub kind: EntityKind,
    pub id: u64,
}

impl EntityRef {
    pub const fn new(kind: EntityKind, id: u64) -> Self {
        Self { kind, id }
    }
}

impl fmt::Display for EntityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.id)
    }
}

impl FromStr for EntityRef {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (kind, id) = value
            .trim()
            .split_once(':')
            .ok_or_else(|| ModelError::InvalidEntityRef(value.to_string()))?;
        let kind = kind.parse()?;
        let id = id
            .trim()
            .parse()
            .map_err(|_| ModelError::InvalidEntityRef(value.to_string()))?;
        Ok(Self { kind, id })
    }
}

impl TryFrom<String> for EntityRef {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<EntityRef> for String {
    fn from(value: EntityRef) -> Self {
        value.to_string()
    }
}

/// Separator between a key and its sub-key. Plain keys may not contain it,
/// so derived keys never collide with item keys.
pub const SUB_KEY_SEPARATOR: char = '#';

/// Identity of one gated item within a view.
///
/// Reveal state is keyed on this, so two items never share a reveal even
/// when they carry the same spoiler chapter.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ItemKey(String);

impl ItemKey {
    pub fn new(value: impl Into<String>) -> Result<Self, ModelError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ModelError::EmptyItemKey);
        }
        if trimmed.contains(SUB_KEY_SEPARATOR) {
            return Err(ModelError::ReservedKeySeparator(trimmed.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Derive a sub-key such as `character:5#2`.
    #[must_use]
    pub fn with_suffix(&self, suffix: impl fmt::Display) -> Self {
        Self(format!("{}{SUB_KEY_SEPARATOR}{suffix}", self.0))
    }
}

impl fmt::Display for ItemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for ItemKey {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ItemKey> for String {
    fn from(value: ItemKey) -> Self {
        value.0
    }
}

impl From<EntityRef> for ItemKey {
    fn from(value: EntityRef) -> Self {
        Self(value.to_string())
    }
}

impl FromStr for ItemKey {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::new(value)
    }
}
