//! The hide/show decision for a single content item.
//!
//! Decisions are recomputed from the item's tags and the viewer's
//! [`ProgressState`] every time; any server-computed "is spoiler" boolean is
//! only a hint used when the item carries no chapter tag.
//!
//! # Rules
//!
//! 1. `show_all` never hides.
//! 2. A chapter tag hides while it is ahead of the effective progress.
//! 3. Without a tag, the server hint decides.
//! 4. With neither, the item is hidden for viewers at or below
//!    [`GatePolicy::untagged_threshold`].

use serde::{Deserialize, Serialize};
use tracing::trace;

use spoiler_model::{Chapter, GatedItem, ProgressState};

/// Progress at or below which untagged, unflagged content is hidden.
pub const DEFAULT_UNTAGGED_THRESHOLD: u32 = 5;

/// Tunables for the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GatePolicy {
    /// Untagged legacy content stays hidden while effective progress is
    /// at or below this chapter.
    pub untagged_threshold: u32,
}

impl Default for GatePolicy {
    fn default() -> Self {
        Self {
            untagged_threshold: DEFAULT_UNTAGGED_THRESHOLD,
        }
    }
}

impl GatePolicy {
    #[must_use]
    pub const fn with_untagged_threshold(mut self, threshold: u32) -> Self {
        self.untagged_threshold = threshold;
        self
    }
}

/// Which rule produced a decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GateReason {
    ShowAll,
    ChapterTag,
    ServerFlag,
    UntaggedDefault,
}

impl GateReason {
    pub const fn label(&self) -> &'static str {
        match self {
            Self::ShowAll => "show all",
            Self::ChapterTag => "chapter tag",
            Self::ServerFlag => "server flag",
            Self::UntaggedDefault => "untagged default",
        }
    }
}

/// Outcome of evaluating one item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GateDecision {
    pub hidden: bool,
    pub reason: GateReason,
    pub effective_progress: u32,
}

impl GateDecision {
    pub const fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub const fn is_visible(&self) -> bool {
        !self.hidden
    }
}

/// Pure spoiler predicate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpoilerGate {
    policy: GatePolicy,
}

impl SpoilerGate {
    pub const fn new(policy: GatePolicy) -> Self {
        Self { policy }
    }

    pub const fn policy(&self) -> GatePolicy {
        self.policy
    }

    pub fn evaluate(&self, item: &GatedItem, progress: &ProgressState) -> GateDecision {
        let effective_progress = progress.effective_progress();
        let (hidden, reason) = if progress.show_all {
            (false, GateReason::ShowAll)
        } else if let Some(chapter) = item.spoiler_chapter {
            (chapter.get() > effective_progress, GateReason::ChapterTag)
        } else if let Some(flag) = item.is_spoiler {
            (flag, GateReason::ServerFlag)
        } else {
            (
                effective_progress <= self.policy.untagged_threshold,
                GateReason::UntaggedDefault,
            )
        };
        trace!(
            hidden,
            reason = reason.label(),
            effective_progress,
            spoiler_chapter = item.spoiler_chapter.map(Chapter::get),
            "gate decision"
        );
        GateDecision {
            hidden,
            reason,
            effective_progress,
        }
    }

    pub fn should_hide(&self, item: &GatedItem, progress: &ProgressState) -> bool {
        self.evaluate(item, progress).is_hidden()
    }
}

/// [`SpoilerGate::should_hide`] with the default policy.
pub fn should_hide(item: &GatedItem, progress: &ProgressState) -> bool {
    SpoilerGate::default().should_hide(item, progress)
}
