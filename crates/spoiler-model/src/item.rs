use serde::{Deserialize, Serialize};

use crate::chapter::{Chapter, deserialize_lenient};
use crate::ids::ItemKey;

/// Spoiler tags carried by any content unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatedItem {
    /// Chapter at or before which the item is safe.
    #[serde(
        default,
        deserialize_with = "deserialize_lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub spoiler_chapter: Option<Chapter>,
    /// Server-side hint; only consulted when `spoiler_chapter` is absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_spoiler: Option<bool>,
}

impl GatedItem {
    /// An item with no tag and no hint.
    pub const fn untagged() -> Self {
        Self {
            spoiler_chapter: None,
            is_spoiler: None,
        }
    }

    /// An item tagged with `chapter`; chapter 0 yields an untagged item.
    pub const fn at_chapter(chapter: u32) -> Self {
        Self {
            spoiler_chapter: Chapter::new(chapter),
            is_spoiler: None,
        }
    }

    #[must_use]
    pub const fn with_spoiler_flag(mut self, is_spoiler: bool) -> Self {
        self.is_spoiler = Some(is_spoiler);
        self
    }
}

/// One record from a content listing (arc, quote, guide, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    pub key: ItemKey,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(flatten)]
    pub gate: GatedItem,
}

impl ContentItem {
    pub fn new(key: ItemKey, gate: GatedItem) -> Self {
        Self {
            key,
            title: None,
            gate,
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Title for display, falling back to the key.
    pub fn label(&self) -> &str {
        self.title.as_deref().unwrap_or(self.key.as_str())
    }
}
