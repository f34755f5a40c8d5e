//! Tests for spoiler-model types.

use spoiler_model::{
    Chapter, ChapterVariant, ContentItem, EntityKind, EntityRef, GatedItem, ItemKey, ModelError,
    VariantGroup,
};

#[test]
fn malformed_spoiler_chapters_decode_as_absent() {
    for raw in ["0", "-4", "12.5", "null", "\"soon\"", "true", "[]"] {
        let json = format!(r#"{{"spoilerChapter": {raw}}}"#);
        let item: GatedItem = serde_json::from_str(&json).expect("lenient decode");
        assert_eq!(item.spoiler_chapter, None, "input {raw}");
    }
}

#[test]
fn integral_spoiler_chapters_decode() {
    for (raw, expected) in [("12", 12), ("12.0", 12), ("\"33\"", 33)] {
        let json = format!(r#"{{"spoilerChapter": {raw}}}"#);
        let item: GatedItem = serde_json::from_str(&json).expect("decode");
        assert_eq!(item.spoiler_chapter.map(Chapter::get), Some(expected));
    }
}

#[test]
fn missing_tags_decode_as_untagged() {
    let item: GatedItem = serde_json::from_str("{}").expect("decode");
    assert_eq!(item, GatedItem::untagged());
}

#[test]
fn server_flag_is_kept() {
    let item: GatedItem = serde_json::from_str(r#"{"isSpoiler": true}"#).expect("decode");
    assert_eq!(item.is_spoiler, Some(true));
    assert_eq!(item.spoiler_chapter, None);
}

#[test]
fn content_item_without_title_uses_key_as_label() {
    let item: ContentItem =
        serde_json::from_str(r#"{"key": "quote:3", "isSpoiler": false}"#).expect("decode");
    assert_eq!(item.label(), "quote:3");
    assert_eq!(item.gate.is_spoiler, Some(false));
}

#[test]
fn empty_item_key_is_rejected() {
    assert_eq!(ItemKey::new("   "), Err(ModelError::EmptyItemKey));
    assert!(serde_json::from_str::<ContentItem>(r#"{"key": ""}"#).is_err());
}

#[test]
fn item_key_rejects_sub_key_separator() {
    assert_eq!(
        ItemKey::new("character:12#1"),
        Err(ModelError::ReservedKeySeparator("character:12#1".to_string()))
    );
    assert!(serde_json::from_str::<ContentItem>(r##"{"key": "arc:1#0"}"##).is_err());

    let derived = ItemKey::from(EntityRef::new(EntityKind::Character, 12)).with_suffix(1);
    assert_eq!(derived.as_str(), "character:12#1");
}

#[test]
fn entity_ref_parses_and_renders() {
    let entity: EntityRef = "Character:42".parse().expect("parse");
    assert_eq!(entity, EntityRef::new(EntityKind::Character, 42));
    assert_eq!(entity.to_string(), "character:42");
    assert_eq!(ItemKey::from(entity).as_str(), "character:42");
}

#[test]
fn entity_ref_rejects_bad_input() {
    assert!(matches!(
        "character".parse::<EntityRef>(),
        Err(ModelError::InvalidEntityRef(_))
    ));
    assert!(matches!(
        "dragon:1".parse::<EntityRef>(),
        Err(ModelError::UnknownEntityKind(_))
    ));
    assert!(matches!(
        "arc:x".parse::<EntityRef>(),
        Err(ModelError::InvalidEntityRef(_))
    ));
}

#[test]
fn variant_group_decodes_and_orders() {
    let json = r#"{
        "owner": "character:5",
        "variants": [
            {"chapterNumber": 90, "payload": "c.png"},
            {"payload": "base.png"},
            {"chapterNumber": -2, "payload": "broken.png"},
            {"chapterNumber": 10, "payload": "a.png"}
        ]
    }"#;
    let group: VariantGroup<String> = serde_json::from_str(json).expect("decode group");
    assert_eq!(group.owner(), EntityRef::new(EntityKind::Character, 5));
    let payloads: Vec<&str> = group
        .variants()
        .iter()
        .map(|variant| variant.payload.as_str())
        .collect();
    assert_eq!(payloads, vec!["a.png", "c.png", "base.png", "broken.png"]);
    assert!(group.get(3).is_some_and(ChapterVariant::is_fallback));
}

#[test]
fn variant_group_without_variants_is_empty() {
    let group: VariantGroup<String> =
        serde_json::from_str(r#"{"owner": "volume:2"}"#).expect("decode group");
    assert!(group.is_empty());
    assert_eq!(group.len(), 0);
}
