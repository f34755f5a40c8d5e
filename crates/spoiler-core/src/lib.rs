//! Spoiler gating engine.
//!
//! Given a viewer's reading progress this crate decides which content can
//! be shown ([`SpoilerGate`]), which chapter-tagged depiction of an entity
//! to show first ([`select_current`]), how the viewer steps through the
//! remaining depictions ([`CyclingController`]) and which gated items they
//! unlocked by hand ([`RevealSession`]). [`GatedView`] bundles the pieces
//! for one rendered view.
//!
//! Everything here is synchronous and free of I/O; progress is always
//! passed in, never looked up.

pub mod cycle;
pub mod gate;
pub mod reveal;
pub mod select;
pub mod source;
pub mod view;

pub use cycle::{CycleState, CyclingController};
pub use gate::{
    DEFAULT_UNTAGGED_THRESHOLD, GateDecision, GatePolicy, GateReason, SpoilerGate, should_hide,
};
pub use reveal::RevealSession;
pub use select::{select_current, select_in_group, select_index};
pub use source::ProgressSource;
pub use view::{GatedView, Partition, Visibility, variant_key};

pub use spoiler_model::{
    Chapter, ChapterVariant, ContentItem, EntityKind, EntityRef, GatedItem, ItemKey,
    ProgressState, VariantGroup,
};
