//! End-to-end behaviour of the gate, selector, controller and reveal session.

use spoiler_core::{
    ChapterVariant, ContentItem, CycleState, CyclingController, EntityKind, EntityRef, GatePolicy,
    GatedItem, GatedView, ItemKey, ProgressState, VariantGroup, Visibility, select_current,
    select_in_group, should_hide,
};

fn key(value: &str) -> ItemKey {
    ItemKey::new(value).expect("item key")
}

fn portraits(chapters: &[u32]) -> VariantGroup<String> {
    VariantGroup::new(
        EntityRef::new(EntityKind::Character, 12),
        chapters
            .iter()
            .map(|&chapter| ChapterVariant::new(chapter, format!("portrait-{chapter}.png")))
            .collect(),
    )
}

#[test]
fn tagged_item_ahead_of_progress_is_hidden() {
    let item = GatedItem::at_chapter(120);
    let progress = ProgressState::new(80);
    assert!(should_hide(&item, &progress));
}

#[test]
fn tolerance_override_unlocks_item() {
    let item = GatedItem::at_chapter(120);
    let progress = ProgressState::new(80).with_tolerance_override(150);
    assert!(!should_hide(&item, &progress));
}

#[test]
fn selector_picks_middle_variant() {
    let group = portraits(&[10, 50, 90]);
    let selected = select_in_group(&group, &ProgressState::new(60)).expect("selection");
    assert_eq!(selected.payload, "portrait-50.png");
}

#[test]
fn empty_group_yields_nothing() {
    let group = portraits(&[]);
    assert!(select_current(group.variants(), &ProgressState::new(60)).is_none());
    let controller = CyclingController::new(group, ProgressState::new(60));
    assert!(controller.current().is_none());
    assert_eq!(controller.state(), CycleState::Empty);
}

#[test]
fn untagged_item_protects_new_readers() {
    let item = GatedItem::untagged();
    assert!(should_hide(&item, &ProgressState::new(3)));
    assert!(!should_hide(&item, &ProgressState::new(6)));
}

#[test]
fn untagged_boundary_is_inclusive() {
    let item = GatedItem::untagged();
    assert!(should_hide(&item, &ProgressState::new(5)));
}

#[test]
fn reveal_unlocks_only_that_item() {
    let mut view = GatedView::new(GatePolicy::default(), ProgressState::new(10));
    let a = ContentItem::new(key("arc:1"), GatedItem::at_chapter(40));
    let b = ContentItem::new(key("arc:2"), GatedItem::at_chapter(40));

    assert_eq!(view.item_visibility(&a), Visibility::Hidden);
    assert!(view.reveal(a.key.clone()));
    assert_eq!(view.item_visibility(&a), Visibility::Revealed);
    assert_eq!(view.item_visibility(&b), Visibility::Hidden);
}

#[test]
fn reveals_survive_progress_changes_but_not_remount() {
    let mut view = GatedView::new(GatePolicy::default(), ProgressState::new(10));
    let item = ContentItem::new(key("gamble:9"), GatedItem::at_chapter(40));
    view.reveal(item.key.clone());
    view.set_progress(ProgressState::new(12));
    assert_eq!(view.item_visibility(&item), Visibility::Revealed);

    view.set_progress(ProgressState::new(40));
    assert_eq!(view.item_visibility(&item), Visibility::Visible);

    let remounted = GatedView::new(GatePolicy::default(), ProgressState::new(10));
    assert_eq!(remounted.item_visibility(&item), Visibility::Hidden);
}

#[test]
fn partition_splits_listing() {
    let mut view = GatedView::new(GatePolicy::default(), ProgressState::new(50));
    let items = vec![
        ContentItem::new(key("quote:1"), GatedItem::at_chapter(20)).with_title("Early"),
        ContentItem::new(key("quote:2"), GatedItem::at_chapter(80)).with_title("Late"),
        ContentItem::new(key("quote:3"), GatedItem::untagged().with_spoiler_flag(true)),
        ContentItem::new(key("quote:4"), GatedItem::untagged()),
    ];
    view.reveal(key("quote:3"));

    let partition = view.partition(&items);
    let shown: Vec<&str> = partition.shown.iter().map(|item| item.key.as_str()).collect();
    let gated: Vec<&str> = partition.gated.iter().map(|item| item.key.as_str()).collect();
    assert_eq!(shown, vec!["quote:1", "quote:3", "quote:4"]);
    assert_eq!(gated, vec!["quote:2"]);
}

#[test]
fn carousel_gates_variants_past_progress() {
    let mut view = GatedView::new(GatePolicy::default(), ProgressState::new(60));
    let mut controller = CyclingController::new(portraits(&[10, 50, 90]), view.progress());

    let (variant, visibility) = view.current_variant(&controller).expect("current");
    assert_eq!(variant.payload, "portrait-50.png");
    assert_eq!(visibility, Visibility::Visible);

    controller.next();
    let (variant, visibility) = view.current_variant(&controller).expect("current");
    assert_eq!(variant.payload, "portrait-90.png");
    assert_eq!(visibility, Visibility::Hidden);

    assert!(view.reveal_current(&controller));
    let (_, visibility) = view.current_variant(&controller).expect("current");
    assert_eq!(visibility, Visibility::Revealed);

    controller.next();
    let (variant, visibility) = view.current_variant(&controller).expect("current");
    assert_eq!(variant.payload, "portrait-10.png");
    assert_eq!(visibility, Visibility::Visible);
}

#[test]
fn carousel_with_nothing_eligible_stays_hidden() {
    let view = GatedView::new(GatePolicy::default(), ProgressState::new(20));
    let controller = CyclingController::new(portraits(&[40, 80]), view.progress());
    let (variant, visibility) = view.current_variant(&controller).expect("current");
    assert_eq!(variant.payload, "portrait-40.png");
    assert_eq!(visibility, Visibility::Hidden);
}

#[test]
fn show_all_overrides_everything() {
    let view = GatedView::new(
        GatePolicy::default(),
        ProgressState::new(0).with_show_all(true),
    );
    let items = vec![
        ContentItem::new(key("arc:1"), GatedItem::at_chapter(500)),
        ContentItem::new(key("arc:2"), GatedItem::untagged().with_spoiler_flag(true)),
        ContentItem::new(key("arc:3"), GatedItem::untagged()),
    ];
    assert!(view.partition(&items).gated.is_empty());
}

#[test]
fn variant_reveal_never_unlocks_content_items() {
    let mut view = GatedView::new(GatePolicy::default(), ProgressState::new(20));
    let controller = CyclingController::new(portraits(&[40, 80]), view.progress());
    assert!(view.reveal_current(&controller));

    let owner_item = ContentItem::new(
        ItemKey::from(EntityRef::new(EntityKind::Character, 12)),
        GatedItem::at_chapter(40),
    );
    assert_eq!(view.item_visibility(&owner_item), Visibility::Hidden);
    assert!(ItemKey::new("character:12#0").is_err());
}

#[test]
fn malformed_variant_chapter_falls_under_untagged_rule() {
    let group: VariantGroup<String> = serde_json::from_str(
        r#"{"owner": "character:12", "variants": [{"chapterNumber": "soon", "payload": "base.png"}]}"#,
    )
    .expect("decode group");
    assert!(group.variants()[0].is_fallback());

    let early = GatedView::new(GatePolicy::default(), ProgressState::new(5));
    let controller = CyclingController::new(group.clone(), early.progress());
    let (variant, visibility) = early.current_variant(&controller).expect("current");
    assert_eq!(variant.payload, "base.png");
    assert_eq!(visibility, Visibility::Hidden);

    let later = GatedView::new(GatePolicy::default(), ProgressState::new(6));
    let controller = CyclingController::new(group, later.progress());
    let (_, visibility) = later.current_variant(&controller).expect("current");
    assert_eq!(visibility, Visibility::Visible);
}
