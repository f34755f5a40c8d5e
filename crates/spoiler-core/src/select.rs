//! Picks the depiction of an entity that matches the viewer's progress.

use spoiler_model::{Chapter, ChapterVariant, ProgressState, VariantGroup};

/// Index of the most advanced variant the viewer may see.
///
/// Variants are ranked by chapter, highest first, with fallbacks (no
/// chapter) ranked below every tagged variant but always eligible. Equal
/// chapters resolve to the earliest in `variants`. Returns `None` when no
/// variant is eligible; there is no fallback to a spoiler variant.
pub fn select_index<P>(variants: &[ChapterVariant<P>], progress: &ProgressState) -> Option<usize> {
    let effective = progress.effective_progress();
    let mut best: Option<(usize, Option<Chapter>)> = None;
    for (index, variant) in variants.iter().enumerate() {
        let eligible = variant
            .chapter
            .is_none_or(|chapter| chapter.get() <= effective);
        if !eligible {
            continue;
        }
        // None < Some(_), so fallbacks lose to any eligible tagged variant.
        let replace = match best {
            None => true,
            Some((_, best_chapter)) => variant.chapter > best_chapter,
        };
        if replace {
            best = Some((index, variant.chapter));
        }
    }
    best.map(|(index, _)| index)
}

pub fn select_current<'a, P>(
    variants: &'a [ChapterVariant<P>],
    progress: &ProgressState,
) -> Option<&'a ChapterVariant<P>> {
    select_index(variants, progress).map(|index| &variants[index])
}

pub fn select_in_group<'a, P>(
    group: &'a VariantGroup<P>,
    progress: &ProgressState,
) -> Option<&'a ChapterVariant<P>> {
    select_current(group.variants(), progress)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chapters(variants: &[ChapterVariant<&str>]) -> Vec<Option<u32>> {
        variants
            .iter()
            .map(|variant| variant.chapter.map(Chapter::get))
            .collect()
    }

    #[test]
    fn picks_latest_unlocked() {
        let variants = vec![
            ChapterVariant::new(10, "a"),
            ChapterVariant::new(50, "b"),
            ChapterVariant::new(90, "c"),
        ];
        let selected = select_current(&variants, &ProgressState::new(60)).expect("selected");
        assert_eq!(selected.payload, "b");
        assert_eq!(chapters(&variants), vec![Some(10), Some(50), Some(90)]);
    }

    #[test]
    fn unordered_input_is_fine() {
        let variants = vec![
            ChapterVariant::new(90, "c"),
            ChapterVariant::new(10, "a"),
            ChapterVariant::new(50, "b"),
        ];
        assert_eq!(select_index(&variants, &ProgressState::new(95)), Some(0));
        assert_eq!(select_index(&variants, &ProgressState::new(49)), Some(1));
    }

    #[test]
    fn ties_prefer_input_order() {
        let variants = vec![
            ChapterVariant::new(20, "first"),
            ChapterVariant::new(20, "second"),
        ];
        let selected = select_current(&variants, &ProgressState::new(30)).expect("selected");
        assert_eq!(selected.payload, "first");
    }

    #[test]
    fn fallback_only_when_nothing_tagged_qualifies() {
        let variants = vec![
            ChapterVariant::fallback("base"),
            ChapterVariant::new(40, "later"),
        ];
        assert_eq!(
            select_current(&variants, &ProgressState::new(10)).map(|v| v.payload),
            Some("base")
        );
        assert_eq!(
            select_current(&variants, &ProgressState::new(40)).map(|v| v.payload),
            Some("later")
        );
    }

    #[test]
    fn nothing_eligible_returns_none() {
        let variants = vec![ChapterVariant::new(30, "x"), ChapterVariant::new(45, "y")];
        assert!(select_current(&variants, &ProgressState::new(29)).is_none());
        assert!(select_current::<&str>(&[], &ProgressState::new(29)).is_none());
    }

    #[test]
    fn override_drives_selection() {
        let variants = vec![ChapterVariant::new(10, "a"), ChapterVariant::new(90, "c")];
        let progress = ProgressState::new(20).with_tolerance_override(100);
        assert_eq!(select_index(&variants, &progress), Some(1));
    }
}
