//! Per-view adapter combining the gate, the viewer's progress and the
//! view's reveal session.
//!
//! Every surface that shows gated content (detail pages, timelines, media
//! thumbnails, membership lists) goes through one of these instead of
//! re-implementing the rules.

use serde::{Deserialize, Serialize};

use spoiler_model::{ChapterVariant, ContentItem, EntityRef, GatedItem, ItemKey, ProgressState};

use crate::cycle::CyclingController;
use crate::gate::{GateDecision, GatePolicy, SpoilerGate};
use crate::reveal::RevealSession;
use crate::source::ProgressSource;

/// What a view should do with an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    /// Safe for the viewer's progress.
    Visible,
    /// Render the gate overlay.
    Hidden,
    /// Would be hidden, but the viewer unlocked it in this view.
    Revealed,
}

impl Visibility {
    pub const fn is_shown(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Visible => "visible",
            Self::Hidden => "hidden",
            Self::Revealed => "revealed",
        }
    }
}

/// Items of a listing split by whether they can be shown right now.
#[derive(Debug, Default)]
pub struct Partition<'a> {
    pub shown: Vec<&'a ContentItem>,
    pub gated: Vec<&'a ContentItem>,
}

#[derive(Debug, Clone, Default)]
pub struct GatedView {
    gate: SpoilerGate,
    progress: ProgressState,
    session: RevealSession,
}

impl GatedView {
    pub fn new(policy: GatePolicy, progress: ProgressState) -> Self {
        Self {
            gate: SpoilerGate::new(policy),
            progress,
            session: RevealSession::new(),
        }
    }

    pub fn from_source(policy: GatePolicy, source: &impl ProgressSource) -> Self {
        Self::new(policy, source.progress())
    }

    pub fn progress(&self) -> ProgressState {
        self.progress
    }

    /// Progress changes never clear reveals made in this view.
    pub fn set_progress(&mut self, progress: ProgressState) {
        self.progress = progress;
    }

    pub fn session(&self) -> &RevealSession {
        &self.session
    }

    pub fn reveal(&mut self, key: ItemKey) -> bool {
        self.session.reveal(key)
    }

    pub fn decision(&self, item: &GatedItem) -> GateDecision {
        self.gate.evaluate(item, &self.progress)
    }

    pub fn visibility(&self, key: &ItemKey, item: &GatedItem) -> Visibility {
        if !self.decision(item).is_hidden() {
            Visibility::Visible
        } else if self.session.is_revealed(key) {
            Visibility::Revealed
        } else {
            Visibility::Hidden
        }
    }

    pub fn item_visibility(&self, item: &ContentItem) -> Visibility {
        self.visibility(&item.key, &item.gate)
    }

    pub fn partition<'a>(&self, items: &'a [ContentItem]) -> Partition<'a> {
        let mut partition = Partition::default();
        for item in items {
            if self.item_visibility(item).is_shown() {
                partition.shown.push(item);
            } else {
                partition.gated.push(item);
            }
        }
        partition
    }

    /// The controller's current variant and whether it may be displayed.
    ///
    /// A variant's chapter doubles as its spoiler chapter; fallbacks have
    /// no tag and fall under the untagged rule.
    pub fn current_variant<'c, P>(
        &self,
        controller: &'c CyclingController<P>,
    ) -> Option<(&'c ChapterVariant<P>, Visibility)> {
        let index = controller.index()?;
        let variant = controller.current()?;
        let visibility = self.variant_visibility(controller.group().owner(), index, variant);
        Some((variant, visibility))
    }

    /// Visibility of the variant at `index` in `owner`'s group.
    pub fn variant_visibility<P>(
        &self,
        owner: EntityRef,
        index: usize,
        variant: &ChapterVariant<P>,
    ) -> Visibility {
        self.visibility(&variant_key(owner, index), &variant_gate(variant))
    }

    /// Unlock whatever the controller currently shows.
    pub fn reveal_current<P>(&mut self, controller: &CyclingController<P>) -> bool {
        match controller.index() {
            Some(index) => self.reveal(variant_key(controller.group().owner(), index)),
            None => false,
        }
    }
}

/// Reveal key for the variant at `index` of `owner`'s group.
pub fn variant_key(owner: EntityRef, index: usize) -> ItemKey {
    ItemKey::from(owner).with_suffix(index)
}

fn variant_gate<P>(variant: &ChapterVariant<P>) -> GatedItem {
    GatedItem {
        spoiler_chapter: variant.chapter,
        is_spoiler: None,
    }
}
