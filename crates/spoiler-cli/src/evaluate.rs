//! Runs exported content through a [`GatedView`] and collects the outcome.

use serde_json::Value;
use tracing::{debug, info};

use spoiler_core::{
    Chapter, ContentItem, CyclingController, EntityRef, GateReason, GatedView, ItemKey,
    VariantGroup, Visibility, select_index,
};

/// Gate outcome for one listed item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateRow {
    pub key: ItemKey,
    pub label: String,
    pub spoiler_chapter: Option<Chapter>,
    pub is_spoiler: Option<bool>,
    pub visibility: Visibility,
    pub reason: GateReason,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateSummary {
    pub effective_progress: u32,
    pub rows: Vec<GateRow>,
}

impl GateSummary {
    pub fn hidden_count(&self) -> usize {
        self.rows
            .iter()
            .filter(|row| row.visibility == Visibility::Hidden)
            .count()
    }

    pub fn shown_count(&self) -> usize {
        self.rows.len() - self.hidden_count()
    }

    /// Drop every row that is currently shown.
    #[must_use]
    pub fn hidden_only(mut self) -> Self {
        self.rows.retain(|row| row.visibility == Visibility::Hidden);
        self
    }
}

pub fn evaluate_items(items: &[ContentItem], view: &GatedView) -> GateSummary {
    let rows: Vec<GateRow> = items
        .iter()
        .map(|item| GateRow {
            key: item.key.clone(),
            label: item.label().to_string(),
            spoiler_chapter: item.gate.spoiler_chapter,
            is_spoiler: item.gate.is_spoiler,
            visibility: view.item_visibility(item),
            reason: view.decision(&item.gate).reason,
        })
        .collect();
    let summary = GateSummary {
        effective_progress: view.progress().effective_progress(),
        rows,
    };
    info!(
        items = summary.rows.len(),
        hidden = summary.hidden_count(),
        "evaluated content items"
    );
    summary
}

/// A variant picked out of a group, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantView {
    pub index: usize,
    pub chapter: Option<Chapter>,
    pub payload: String,
    pub visibility: Visibility,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionOutcome {
    pub owner: EntityRef,
    pub variant_count: usize,
    pub effective_progress: u32,
    pub selected: Option<VariantView>,
}

pub fn select_variant(group: &VariantGroup<Value>, view: &GatedView) -> SelectionOutcome {
    let progress = view.progress();
    let selected = select_index(group.variants(), &progress).and_then(|index| {
        let variant = group.get(index)?;
        Some(VariantView {
            index,
            chapter: variant.chapter,
            payload: payload_label(&variant.payload),
            visibility: view.variant_visibility(group.owner(), index, variant),
        })
    });
    debug!(owner = %group.owner(), selected = ?selected.as_ref().map(|v| v.index), "variant selected");
    SelectionOutcome {
        owner: group.owner(),
        variant_count: group.len(),
        effective_progress: progress.effective_progress(),
        selected,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleOutcome {
    pub owner: EntityRef,
    pub variant_count: usize,
    pub steps: i64,
    pub start: Option<VariantView>,
    pub end: Option<VariantView>,
}

/// Start a carousel at the progress-derived position and walk `steps`.
///
/// `reveal_end` unlocks whatever the walk lands on, as a viewer clicking
/// through the gate overlay would.
pub fn cycle_variants(
    group: VariantGroup<Value>,
    view: &mut GatedView,
    steps: i64,
    reveal_end: bool,
) -> CycleOutcome {
    let owner = group.owner();
    let variant_count = group.len();
    let mut controller = CyclingController::new(group, view.progress());
    let start = current_view(view, &controller);
    controller.step(steps);
    if reveal_end {
        view.reveal_current(&controller);
    }
    let end = current_view(view, &controller);
    CycleOutcome {
        owner,
        variant_count,
        steps,
        start,
        end,
    }
}

fn current_view(view: &GatedView, controller: &CyclingController<Value>) -> Option<VariantView> {
    let index = controller.index()?;
    let (variant, visibility) = view.current_variant(controller)?;
    Some(VariantView {
        index,
        chapter: variant.chapter,
        payload: payload_label(&variant.payload),
        visibility,
    })
}

/// Strings are shown bare; anything else as compact JSON.
pub fn payload_label(payload: &Value) -> String {
    match payload {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
