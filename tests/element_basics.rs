use std::sync::Arc;

use egui::{Vec2, pos2, vec2};
use image::{Rgba, RgbaImage};
use yearbook_editor::config::TextDefaults;
use yearbook_editor::document::Page;
use yearbook_editor::element::{Element, ElementType, factory};
use yearbook_editor::fonts::FontBook;
use yearbook_editor::selection::hit_test;

fn fonts() -> FontBook {
    FontBook::builtin().unwrap()
}

#[test]
fn test_default_text_factory() {
    let fonts = fonts();
    let text = factory::create_default_text("Hello", pos2(40.0, 60.0), &TextDefaults::default(), &fonts)
        .unwrap();

    assert_eq!(text.element_type(), "text");
    assert_eq!(text.position(), pos2(40.0, 60.0));

    let text = text.as_text().unwrap();
    assert_eq!(text.font_size(), 20.0);
    assert_eq!(text.color(), "#fff");
    assert_eq!(text.font_family(), "Arial");
    assert!(text.measured_width() > 0.0);
}

#[test]
fn test_text_rect_sits_on_baseline() {
    let fonts = fonts();
    let text = factory::create_default_text("Hi", pos2(10.0, 20.0), &TextDefaults::default(), &fonts)
        .unwrap();

    let rect = text.rect();
    assert_eq!(rect.min, pos2(10.0, 0.0));
    assert_eq!(rect.max.y, 20.0);
    assert!(rect.max.x > 10.0);
}

#[test]
fn test_image_factory_uses_natural_size() {
    let pixels = Arc::new(RgbaImage::from_pixel(12, 8, Rgba([0, 0, 255, 255])));
    let image = factory::create_image(pixels, pos2(5.0, 5.0)).unwrap();

    assert_eq!(image.element_type(), "img");
    assert_eq!(image.rect().min, pos2(5.0, 5.0));
    assert_eq!(image.rect().max, pos2(17.0, 13.0));
}

#[test]
fn test_translate_moves_rect() {
    let fonts = fonts();
    let mut text = factory::create_default_text("Move me", pos2(50.0, 50.0), &TextDefaults::default(), &fonts)
        .unwrap();
    let before = text.rect();

    text.translate(Vec2::new(10.0, -5.0)).unwrap();

    let after = text.rect();
    assert_eq!(after.min, before.min + vec2(10.0, -5.0));
    assert_eq!(after.size(), before.size());

    assert!(text.translate(vec2(f32::INFINITY, 0.0)).is_err());
    assert_eq!(text.rect(), after);
}

#[test]
fn test_hit_test_prefers_topmost() {
    let fonts = fonts();
    let mut page = Page::new();
    let square = |color| Arc::new(RgbaImage::from_pixel(50, 50, Rgba(color)));

    page.add_element(factory::create_image(square([255, 0, 0, 255]), pos2(0.0, 0.0)).unwrap());
    page.add_element(factory::create_image(square([0, 255, 0, 255]), pos2(25.0, 25.0)).unwrap());
    page.add_element(
        factory::create_default_text("far away", pos2(400.0, 400.0), &TextDefaults::default(), &fonts)
            .unwrap(),
    );

    // Overlap of the two squares
    assert_eq!(hit_test(&page, pos2(30.0, 30.0)), Some(1));
    // Only the first square
    assert_eq!(hit_test(&page, pos2(10.0, 10.0)), Some(0));
    // Nothing
    assert_eq!(hit_test(&page, pos2(200.0, 10.0)), None);
}

#[test]
fn test_element_json_tags() {
    let fonts = fonts();
    let text = factory::create_default_text("Hi", pos2(10.0, 20.0), &TextDefaults::default(), &fonts)
        .unwrap();
    let json = serde_json::to_value(&text).unwrap();

    assert_eq!(json["type"], "text");
    assert_eq!(json["fontSize"], 20.0);
    assert_eq!(json["fontFamily"], "Arial");
    assert!(json.get("measuredWidth").is_none());

    let back: ElementType = serde_json::from_value(json).unwrap();
    assert_eq!(back, text);
}
