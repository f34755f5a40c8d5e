//! Manual navigation through an entity's variants.
//!
//! The controller starts on the variant [`select_index`] picks for the
//! viewer's progress, then lets the viewer step freely through the whole
//! group, wrapping at both ends. Stepping is not gated: a view that renders
//! [`CyclingController::current`] must run it through the spoiler gate.

use tracing::debug;

use spoiler_model::{ChapterVariant, ProgressState, VariantGroup};

use crate::select::select_index;

/// Position of the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleState {
    Empty,
    Positioned(usize),
}

#[derive(Debug, Clone)]
pub struct CyclingController<P> {
    group: VariantGroup<P>,
    progress: ProgressState,
    /// Progress-derived starting index, used to detect eligibility changes.
    anchor: Option<usize>,
    state: CycleState,
}

impl<P> CyclingController<P> {
    pub fn new(group: VariantGroup<P>, progress: ProgressState) -> Self {
        let mut controller = Self {
            group,
            progress,
            anchor: None,
            state: CycleState::Empty,
        };
        controller.reposition();
        controller
    }

    /// Replace the group (new entity or refetched media) and reposition.
    pub fn reset(&mut self, group: VariantGroup<P>) {
        self.group = group;
        self.reposition();
    }

    /// Apply new progress.
    ///
    /// The position only moves when the progress-derived starting variant
    /// changes; calling this repeatedly with equivalent progress keeps any
    /// manual navigation.
    pub fn update_progress(&mut self, progress: ProgressState) {
        self.progress = progress;
        let anchor = select_index(self.group.variants(), &self.progress);
        if anchor != self.anchor {
            self.reposition();
        }
    }

    pub fn current(&self) -> Option<&ChapterVariant<P>> {
        self.index().and_then(|index| self.group.get(index))
    }

    pub fn next(&mut self) {
        if let CycleState::Positioned(index) = self.state {
            self.state = CycleState::Positioned((index + 1) % self.group.len());
        }
    }

    pub fn previous(&mut self) {
        if let CycleState::Positioned(index) = self.state {
            let len = self.group.len();
            self.state = CycleState::Positioned((index + len - 1) % len);
        }
    }

    /// Move `steps` positions; negative values walk backwards.
    pub fn step(&mut self, steps: i64) {
        if let CycleState::Positioned(index) = self.state {
            let len = i64::try_from(self.group.len()).unwrap_or(i64::MAX);
            let offset = i64::try_from(index).unwrap_or(0);
            let target = (offset + steps.rem_euclid(len)).rem_euclid(len);
            self.state = CycleState::Positioned(usize::try_from(target).unwrap_or(0));
        }
    }

    pub fn state(&self) -> CycleState {
        self.state
    }

    pub fn index(&self) -> Option<usize> {
        match self.state {
            CycleState::Empty => None,
            CycleState::Positioned(index) => Some(index),
        }
    }

    /// Whether the controller still sits on the progress-derived start.
    pub fn is_at_anchor(&self) -> bool {
        match self.state {
            CycleState::Empty => true,
            CycleState::Positioned(index) => Some(index) == self.anchor.or(Some(0)),
        }
    }

    pub fn group(&self) -> &VariantGroup<P> {
        &self.group
    }

    pub fn progress(&self) -> ProgressState {
        self.progress
    }

    pub fn len(&self) -> usize {
        self.group.len()
    }

    pub fn is_empty(&self) -> bool {
        self.group.is_empty()
    }

    fn reposition(&mut self) {
        self.anchor = select_index(self.group.variants(), &self.progress);
        self.state = if self.group.is_empty() {
            CycleState::Empty
        } else {
            // Nothing eligible: start at the earliest variant and let the
            // gate hide it.
            CycleState::Positioned(self.anchor.unwrap_or(0))
        };
        debug!(
            owner = %self.group.owner(),
            variants = self.group.len(),
            index = ?self.index(),
            effective_progress = self.progress.effective_progress(),
            "cycling controller positioned"
        );
    }
}
