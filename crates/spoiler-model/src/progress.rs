//! Reader progress as supplied by the surrounding application.

use serde::{Deserialize, Serialize};

/// Snapshot of how far a viewer has read and how they want gating applied.
///
/// The engine never mutates this; callers build a fresh value whenever the
/// viewer's settings change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProgressState {
    /// Chapters the viewer has read.
    pub raw_progress: u32,
    /// Replaces `raw_progress` when greater than zero.
    ///
    /// Zero means "no override", never "override to chapter 0".
    pub tolerance_override: u32,
    /// Global kill switch: nothing is hidden while set.
    pub show_all: bool,
}

impl ProgressState {
    pub const fn new(raw_progress: u32) -> Self {
        Self {
            raw_progress,
            tolerance_override: 0,
            show_all: false,
        }
    }

    #[must_use]
    pub const fn with_tolerance_override(mut self, tolerance_override: u32) -> Self {
        self.tolerance_override = tolerance_override;
        self
    }

    #[must_use]
    pub const fn with_show_all(mut self, show_all: bool) -> Self {
        self.show_all = show_all;
        self
    }

    /// Progress used for every gating comparison.
    pub const fn effective_progress(&self) -> u32 {
        if self.tolerance_override > 0 {
            self.tolerance_override
        } else {
            self.raw_progress
        }
    }

    pub const fn has_override(&self) -> bool {
        self.tolerance_override > 0
    }
}
