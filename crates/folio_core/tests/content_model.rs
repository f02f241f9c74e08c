use folio_core::{CaptionedImage, Category, ContentBlock, ImageSize, Tab, UiEvent};
use serde_json::json;

#[test]
fn content_blocks_use_the_original_wire_tags() {
    let paragraph = ContentBlock::paragraph("hello");
    assert_eq!(
        serde_json::to_value(&paragraph).unwrap(),
        json!({"type": "paragraph", "text": "hello"})
    );

    let image = ContentBlock::sized_image("/p/a.png", Some("cap"), ImageSize::Small);
    assert_eq!(
        serde_json::to_value(&image).unwrap(),
        json!({"type": "image", "src": "/p/a.png", "caption": "cap", "size": "small"})
    );

    let row = ContentBlock::image_row([CaptionedImage::new("/p/b.png", None)]);
    let value = serde_json::to_value(&row).unwrap();
    assert_eq!(value["type"], "image-row");
    assert_eq!(value["images"][0]["src"], "/p/b.png");
}

#[test]
fn content_blocks_round_trip_through_json() {
    let blocks = vec![
        ContentBlock::paragraph("text"),
        ContentBlock::image("/a.png", None),
        ContentBlock::image_row([
            CaptionedImage::new("/b.png", Some("left")),
            CaptionedImage::new("/c.png", Some("right")),
        ]),
    ];

    let json = serde_json::to_string(&blocks).unwrap();
    let decoded: Vec<ContentBlock> = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, blocks);
}

#[test]
fn unknown_block_tags_are_rejected_at_the_boundary() {
    // The original renderer silently skipped unknown tags; here they cannot
    // enter the model at all.
    let result: Result<ContentBlock, _> =
        serde_json::from_value(json!({"type": "video", "src": "/v.mp4"}));
    assert!(result.is_err());
}

#[test]
fn categories_serialize_as_display_labels() {
    assert_eq!(
        serde_json::to_value(Category::MachineLearning).unwrap(),
        json!("Machine Learning")
    );
    assert_eq!(serde_json::to_value(Category::Llms).unwrap(), json!("LLMs"));
    assert_eq!(
        serde_json::from_value::<Category>(json!("Full Stack")).unwrap(),
        Category::FullStack
    );
}

#[test]
fn category_labels_match_display_output() {
    for category in Category::ALL {
        assert_eq!(category.to_string(), category.label());
    }
}

#[test]
fn image_size_resolution_defaults_to_large() {
    assert_eq!(ImageSize::resolve(None), ImageSize::Large);
    assert_eq!(ImageSize::resolve(Some(ImageSize::Small)), ImageSize::Small);
    assert_eq!(ImageSize::Large.max_width_px(), 600);
    assert_eq!(ImageSize::Small.max_width_px(), 200);
}

#[test]
fn ui_events_serialize_with_snake_case_discriminators() {
    assert_eq!(
        serde_json::to_value(UiEvent::SelectProject { project: 9 }).unwrap(),
        json!({"event": "select_project", "project": 9})
    );
    assert_eq!(
        serde_json::to_value(UiEvent::SelectTab { tab: Tab::Projects }).unwrap(),
        json!({"event": "select_tab", "tab": "projects"})
    );
    assert_eq!(
        serde_json::to_value(UiEvent::BackFromProject).unwrap(),
        json!({"event": "back_from_project"})
    );
}
