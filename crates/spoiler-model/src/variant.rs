//! Chapter-tagged alternative depictions of one entity.

use serde::{Deserialize, Deserializer, Serialize};

use crate::chapter::{Chapter, deserialize_lenient};
use crate::ids::EntityRef;

/// One depiction (image, video, text) that becomes accurate at `chapter`.
///
/// A variant without a chapter is a fallback and is always eligible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterVariant<P> {
    #[serde(
        rename = "chapterNumber",
        default,
        deserialize_with = "deserialize_lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub chapter: Option<Chapter>,
    pub payload: P,
}

impl<P> ChapterVariant<P> {
    /// Chapter 0 is treated as absent.
    pub const fn new(chapter: u32, payload: P) -> Self {
        Self {
            chapter: Chapter::new(chapter),
            payload,
        }
    }

    pub const fn fallback(payload: P) -> Self {
        Self {
            chapter: None,
            payload,
        }
    }

    pub const fn is_fallback(&self) -> bool {
        self.chapter.is_none()
    }
}

/// All variants belonging to one owning entity.
///
/// Variants are kept in group order: ascending chapter, fallbacks last,
/// ties in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VariantGroup<P> {
    owner: EntityRef,
    variants: Vec<ChapterVariant<P>>,
}

impl<P> VariantGroup<P> {
    pub fn new(owner: EntityRef, mut variants: Vec<ChapterVariant<P>>) -> Self {
        variants.sort_by_key(|variant| (variant.chapter.is_none(), variant.chapter));
        Self { owner, variants }
    }

    pub fn empty(owner: EntityRef) -> Self {
        Self {
            owner,
            variants: Vec::new(),
        }
    }

    pub fn owner(&self) -> EntityRef {
        self.owner
    }

    pub fn variants(&self) -> &[ChapterVariant<P>] {
        &self.variants
    }

    pub fn get(&self, index: usize) -> Option<&ChapterVariant<P>> {
        self.variants.get(index)
    }

    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }
}

#[derive(Deserialize)]
#[serde(bound = "P: Deserialize<'de>")]
struct RawVariantGroup<P> {
    owner: EntityRef,
    #[serde(default)]
    variants: Vec<ChapterVariant<P>>,
}

impl<'de, P> Deserialize<'de> for VariantGroup<P>
where
    P: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawVariantGroup::<P>::deserialize(deserializer)?;
        Ok(Self::new(raw.owner, raw.variants))
    }
}
