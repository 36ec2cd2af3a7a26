// Host-side tests for card presentation state.

use folio_core::card::*;
use folio_core::carousel::{CardFrame, CardTransform};
use folio_core::geometry::Rect;
use glam::Vec3;

const VIEWPORT_HEIGHT: f32 = 800.0;

fn frame(hidden: bool) -> CardFrame {
    CardFrame {
        transform: CardTransform {
            position: Vec3::ZERO,
            rotation_y: -50.0,
            curve: 0.0,
            skew: 0.0,
            brightness: 1.0,
            paint_order: 1000,
        },
        hidden,
    }
}

fn upper() -> Rect {
    Rect::new(100.0, 100.0, 200.0, 120.0)
}

fn lower() -> Rect {
    Rect::new(100.0, 600.0, 200.0, 120.0)
}

#[test]
fn label_goes_above_cards_in_the_lower_half() {
    assert_eq!(label_placement_for(&lower(), VIEWPORT_HEIGHT), LabelPlacement::Above);
    assert_eq!(label_placement_for(&upper(), VIEWPORT_HEIGHT), LabelPlacement::Below);
}

#[test]
fn placement_is_measured_only_when_hover_begins() {
    let mut card = CardPresenter::new(0);
    card.pointer_enter(upper(), VIEWPORT_HEIGHT);
    assert!(card.is_label_visible());
    assert_eq!(card.label_placement(), LabelPlacement::Below);

    // Focus while already hovered keeps the original placement.
    card.focus(lower(), VIEWPORT_HEIGHT);
    assert_eq!(card.label_placement(), LabelPlacement::Below);

    card.pointer_leave();
    assert!(card.is_label_visible());
    card.blur();
    assert!(!card.is_label_visible());

    card.focus(lower(), VIEWPORT_HEIGHT);
    assert_eq!(card.label_placement(), LabelPlacement::Above);
}

#[test]
fn hidden_card_drops_hover_and_refuses_input() {
    let mut card = CardPresenter::new(4);
    card.apply(frame(false));
    card.pointer_enter(upper(), VIEWPORT_HEIGHT);
    assert!(card.is_label_visible());

    card.apply(frame(true));
    assert!(card.is_hidden());
    assert!(!card.is_label_visible());

    card.pointer_enter(upper(), VIEWPORT_HEIGHT);
    card.focus(upper(), VIEWPORT_HEIGHT);
    assert!(!card.is_label_visible());
    assert!(card.activate(upper()).is_none());
}

#[test]
fn activation_reports_the_captured_rect() {
    let mut card = CardPresenter::new(7);
    card.apply(frame(false));
    let rect = Rect::new(321.0, 123.0, 180.0, 240.0);
    let activation = card.activate(rect).expect("visible card activates");
    assert_eq!(activation.index, 7);
    assert_eq!(activation.origin_rect, rect);
}
