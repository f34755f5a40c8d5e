//! Value types shared by the spoiler gate engine and its callers.

pub mod chapter;
pub mod error;
pub mod ids;
pub mod item;
pub mod progress;
pub mod variant;

pub use chapter::Chapter;
pub use error::{ModelError, Result};
pub use ids::{EntityKind, EntityRef, ItemKey, SUB_KEY_SEPARATOR};
pub use item::{ContentItem, GatedItem};
pub use progress::ProgressState;
pub use variant::{ChapterVariant, VariantGroup};
