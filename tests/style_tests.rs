// Host-side tests for CSS value formatting.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
#[path = "../src/style.rs"]
mod style;

use folio_core::card::LabelPlacement;
use folio_core::carousel::CardTransform;
use folio_core::geometry::Rect;
use glam::Vec3;
use style::*;

#[test]
fn card_transform_orders_translate_tilt_curve_skew() {
    let t = CardTransform {
        position: Vec3::new(180.0, 64.0, 220.0),
        rotation_y: -50.0,
        curve: -1.5,
        skew: -3.25,
        brightness: 0.8,
        paint_order: 820,
    };
    assert_eq!(
        card_transform(&t),
        "translate3d(180.00px, 64.00px, 220.00px) rotateY(-50deg) rotateZ(-1.500deg) skewY(-3.250deg)"
    );
}

#[test]
fn filters_and_paint_order() {
    assert_eq!(brightness_filter(0.3), "brightness(0.300)");
    assert_eq!(z_index(1000), "1000");
    assert_eq!(z_index(-80), "-80");
}

#[test]
fn opacity_is_clamped() {
    assert_eq!(opacity(1.4), "1.000");
    assert_eq!(opacity(-0.2), "0.000");
    assert_eq!(opacity(0.8), "0.800");
}

#[test]
fn rect_becomes_absolute_box() {
    let props = rect_properties(&Rect::new(12.0, 34.5, 180.0, 240.0));
    assert_eq!(props[0], ("left", "12.00px".to_string()));
    assert_eq!(props[1], ("top", "34.50px".to_string()));
    assert_eq!(props[2], ("width", "180.00px".to_string()));
    assert_eq!(props[3], ("height", "240.00px".to_string()));
}

#[test]
fn detail_transforms() {
    assert_eq!(rotate_y(-50.0), "rotateY(-50.000deg)");
    assert_eq!(translate_y(-20.0), "translateY(-20.00px)");
    assert_eq!(translate_y_scale(30.0, 0.988), "translateY(30.00px) scale(0.9880)");
}

#[test]
fn label_sits_outside_the_card_on_the_chosen_side() {
    let above = label_position(LabelPlacement::Above);
    assert_eq!(above[0], ("top", "-40.00px".to_string()));
    assert_eq!(above[1].1, "auto");
    let below = label_position(LabelPlacement::Below);
    assert_eq!(below[0].1, "auto");
    assert_eq!(below[1], ("bottom", "-40.00px".to_string()));
}

#[test]
fn base_css_hides_the_hidden_class_over_inline_display() {
    let css = base_css();
    assert!(css.starts_with(&format!(".{}", constants::HIDDEN_CLASS)));
    assert!(css.contains("display:none!important"));
}
