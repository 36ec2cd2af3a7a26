// Host-side tests for the detail transition controller: phase flow,
// recognizer hand-off, closing discipline and geometry round trips.

use folio_core::detail::*;
use folio_core::geometry::{Rect, Viewport};
use folio_core::input::DeltaEvent;
use std::time::Duration;

const FRAME: Duration = Duration::from_micros(16_667);

fn viewport() -> Viewport {
    Viewport::new(1280.0, 800.0)
}

fn origin() -> Rect {
    Rect::new(220.0, 310.0, 180.0, 240.0)
}

fn open(secondary: usize) -> (DetailController, Vec<DetailEvent>) {
    let mut out = Vec::new();
    let c = DetailController::open(
        2,
        origin(),
        viewport(),
        secondary,
        DetailConfig::default(),
        &mut out,
    );
    (c, out)
}

fn run(c: &mut DetailController, out: &mut Vec<DetailEvent>, secs: f32) {
    let frames = (secs / FRAME.as_secs_f32()).ceil() as usize;
    for _ in 0..frames {
        c.tick(FRAME, out);
    }
}

fn closed_count(out: &[DetailEvent]) -> usize {
    out.iter().filter(|e| **e == DetailEvent::Closed).count()
}

fn to_preview(secondary: usize) -> (DetailController, Vec<DetailEvent>) {
    let (mut c, mut out) = open(secondary);
    run(&mut c, &mut out, 1.0);
    assert_eq!(c.phase(), TransitionPhase::Preview);
    (c, out)
}

fn to_fullscreen(secondary: usize) -> (DetailController, Vec<DetailEvent>) {
    let (mut c, mut out) = to_preview(secondary);
    c.on_input(DeltaEvent::wheel(60.0), &mut out);
    assert_eq!(c.phase(), TransitionPhase::Expanding);
    run(&mut c, &mut out, 2.0);
    assert_eq!(c.phase(), TransitionPhase::Fullscreen);
    (c, out)
}

#[test]
fn opening_morphs_origin_into_preview_rect() {
    let (mut c, mut out) = open(3);
    assert_eq!(out, vec![DetailEvent::PhaseChanged(TransitionPhase::Opening)]);
    assert_eq!(c.visual().container, origin());
    assert_eq!(c.live_recognizer(), None);

    run(&mut c, &mut out, 1.0);
    assert_eq!(c.phase(), TransitionPhase::Preview);
    assert_eq!(c.live_recognizer(), Some(TransitionPhase::Preview));
    assert!(!c.is_animating());

    let v = c.visual();
    assert!(v.container.max_edge_delta(&viewport().preview_rect()) < 1e-3);
    assert!((v.border_radius - 16.0).abs() < 1e-4);
    assert!((v.overlay_opacity - 1.0).abs() < 1e-4);
    assert!((v.hero_scale - 1.05).abs() < 1e-4);
    assert!((v.content_opacity[0] - 0.8).abs() < 1e-4);
    assert!((v.content_offset_y[0] - 20.0).abs() < 1e-4);
    assert!(v.content_opacity[1..].iter().all(|o| *o == 0.0));
    assert!(!c.sections_visible());
}

#[test]
fn input_during_opening_is_ignored() {
    let (mut c, mut out) = open(1);
    run(&mut c, &mut out, 0.2);
    c.on_input(DeltaEvent::wheel(200.0), &mut out);
    c.on_input(DeltaEvent::wheel(-200.0), &mut out);
    assert_eq!(c.phase(), TransitionPhase::Opening);
    assert!(!c.is_closing());
}

#[test]
fn preview_dead_zone_keeps_phase() {
    let (mut c, mut out) = to_preview(2);
    for d in [30.0, -30.0, 12.0, -25.0, 29.9] {
        c.on_input(DeltaEvent::wheel(d), &mut out);
        assert_eq!(c.phase(), TransitionPhase::Preview, "delta {d}");
    }
}

#[test]
fn swipe_up_expands_to_fullscreen() {
    let (mut c, mut out) = to_preview(2);
    c.on_input(DeltaEvent::wheel(45.0), &mut out);
    assert_eq!(c.phase(), TransitionPhase::Expanding);
    // Preview recognizer is gone before the morph starts.
    assert_eq!(c.live_recognizer(), None);
    assert!(c.sections_visible());

    // Staggered: later blocks start after earlier ones.
    run(&mut c, &mut out, 0.3);
    let v = c.visual();
    assert!(v.content_opacity[1] > v.content_opacity[3]);

    run(&mut c, &mut out, 2.0);
    assert_eq!(c.phase(), TransitionPhase::Fullscreen);
    assert_eq!(c.live_recognizer(), Some(TransitionPhase::Fullscreen));
    let v = c.visual();
    assert!(v.container.max_edge_delta(&viewport().full_rect()) < 1e-3);
    assert!(v.border_radius.abs() < 1e-4);
    assert!((v.hero_scale - 1.15).abs() < 1e-4);
    assert!(v.content_opacity.iter().all(|o| (o - 1.0).abs() < 1e-4));
    assert!(v.content_offset_y.iter().all(|y| y.abs() < 1e-4));
    assert!(c.sections_visible());
}

#[test]
fn swipe_down_in_preview_closes() {
    let (mut c, mut out) = to_preview(0);
    c.on_input(DeltaEvent::wheel(-45.0), &mut out);
    assert_eq!(c.phase(), TransitionPhase::Closing);
    assert!(c.is_closing());
}

#[test]
fn fullscreen_scroll_drives_parallax() {
    let (mut c, mut out) = to_fullscreen(3);
    c.on_input(DeltaEvent::wheel(100.0), &mut out);
    assert!((c.scroll_position() - 80.0).abs() < 1e-4);
    run(&mut c, &mut out, 0.5);

    let v = c.visual();
    assert!((v.scroll_offset - 80.0).abs() < 1e-3);
    assert!((v.hero_offset_y - 32.0).abs() < 1e-3);
    assert!((v.hero_scale - (1.15 + 80.0 * 0.0002)).abs() < 1e-4);
    for (i, offset) in v.gallery_offsets.iter().enumerate() {
        let center = gallery_image_center_y(i, 80.0, &viewport());
        let expected = gallery_parallax_offset(i, center, &viewport(), 50.0);
        assert!((offset - expected).abs() < 1e-3, "image {i}");
    }
    // Neighbouring images move in opposite directions.
    assert!(v.gallery_offsets[0] * v.gallery_offsets[1] < 0.0);
}

#[test]
fn parallax_offset_is_zero_at_viewport_centre() {
    let vp = viewport();
    assert_eq!(gallery_parallax_offset(0, vp.center_y(), &vp, 50.0), 0.0);
    assert!((gallery_parallax_offset(0, vp.center_y() + vp.height, &vp, 50.0) + 50.0).abs() < 1e-4);
    assert!((gallery_parallax_offset(1, vp.center_y() + vp.height, &vp, 50.0) - 50.0).abs() < 1e-4);
    assert!((gallery_image_center_y(0, 0.0, &vp) - 1200.0).abs() < 1e-4);
}

#[test]
fn pull_past_threshold_closes_exactly_once() {
    let (mut c, mut out) = to_fullscreen(2);
    out.clear();
    for _ in 0..30 {
        c.on_input(DeltaEvent::wheel(-20.0), &mut out);
        c.tick(FRAME, &mut out);
    }
    let closings = out
        .iter()
        .filter(|e| **e == DetailEvent::PhaseChanged(TransitionPhase::Closing))
        .count();
    assert_eq!(closings, 1);
    run(&mut c, &mut out, 2.0);
    assert_eq!(closed_count(&out), 1);
    assert!(c.is_finished());
}

#[test]
fn pull_feedback_moves_the_surface_until_released() {
    let (mut c, mut out) = to_fullscreen(1);
    c.on_input(DeltaEvent::wheel(-60.0), &mut out);
    run(&mut c, &mut out, 0.3);
    let v = c.visual();
    assert!((v.surface_offset_y - 30.0).abs() < 1e-3);
    assert!((v.surface_scale - 0.988).abs() < 1e-4);

    c.on_input(DeltaEvent::wheel(20.0), &mut out);
    assert_eq!(c.pull_progress(), 0.0);
    run(&mut c, &mut out, 0.5);
    let v = c.visual();
    assert!(v.surface_offset_y.abs() < 1e-3);
    assert!((v.surface_scale - 1.0).abs() < 1e-4);
    assert_eq!(c.phase(), TransitionPhase::Fullscreen);
}

#[test]
fn closing_hides_content_and_neutralises_surface_synchronously() {
    let (mut c, mut out) = to_fullscreen(2);
    c.on_input(DeltaEvent::wheel(200.0), &mut out);
    c.on_input(DeltaEvent::wheel(-10.0), &mut out);
    run(&mut c, &mut out, 0.05);

    assert!(c.request_close(&mut out));
    let v = c.visual();
    assert!(v.content_hidden);
    assert!(v.content_opacity.iter().all(|o| *o == 0.0));
    assert_eq!(v.surface_offset_y, 0.0);
    assert_eq!(v.surface_scale, 1.0);
    assert_eq!(v.scroll_offset, 0.0);
    assert!(v.gallery_offsets.iter().all(|g| *g == 0.0));
    assert_eq!(c.live_recognizer(), None);
    assert!(!c.sections_visible());

    // Stays hidden for the whole close.
    run(&mut c, &mut out, 0.3);
    assert!(c.visual().content_opacity.iter().all(|o| *o == 0.0));
}

#[test]
fn close_is_idempotent() {
    let (mut c, mut out) = to_preview(1);
    assert!(c.request_close(&mut out));
    assert!(!c.request_close(&mut out));
    run(&mut c, &mut out, 0.2);
    assert!(!c.request_close(&mut out));
    run(&mut c, &mut out, 2.0);
    assert!(!c.request_close(&mut out));
    run(&mut c, &mut out, 1.0);
    assert_eq!(closed_count(&out), 1);
}

#[test]
fn closing_from_preview_returns_to_origin_rect() {
    let (mut c, mut out) = to_preview(2);
    c.request_close(&mut out);
    run(&mut c, &mut out, 2.0);
    let v = c.visual();
    assert!(v.container.max_edge_delta(&origin()) < 1e-3);
    assert!(v.container.max_edge_delta(&c.preview_rect()) > 1.0);
    assert!((v.container_rotation_y + 50.0).abs() < 1e-4);
    assert!(v.overlay_opacity.abs() < 1e-4);
    assert!((v.border_radius - 8.0).abs() < 1e-4);
    assert_eq!(c.phase(), TransitionPhase::Closed);
}

#[test]
fn closing_from_fullscreen_returns_to_origin_rect() {
    let (mut c, mut out) = to_fullscreen(4);
    c.on_input(DeltaEvent::wheel(300.0), &mut out);
    run(&mut c, &mut out, 0.2);
    c.request_close(&mut out);
    run(&mut c, &mut out, 2.0);
    let v = c.visual();
    assert!(v.container.max_edge_delta(&origin()) < 1e-3);
    assert!((v.hero_scale - 1.0).abs() < 1e-4);
    assert!(v.hero_offset_y.abs() < 1e-4);
    assert_eq!(closed_count(&out), 1);
}

#[test]
fn close_during_opening_cancels_the_opening_morph() {
    let (mut c, mut out) = open(2);
    run(&mut c, &mut out, 0.2);
    c.request_close(&mut out);
    run(&mut c, &mut out, 2.0);
    assert!(!out.contains(&DetailEvent::PhaseChanged(TransitionPhase::Preview)));
    assert_eq!(c.live_recognizer(), None);
    assert!(c.visual().container.max_edge_delta(&origin()) < 1e-3);
    assert_eq!(closed_count(&out), 1);
}

#[test]
fn close_during_expanding_never_reaches_fullscreen() {
    let (mut c, mut out) = to_preview(2);
    c.on_input(DeltaEvent::wheel(45.0), &mut out);
    run(&mut c, &mut out, 0.1);
    c.request_close(&mut out);
    run(&mut c, &mut out, 2.0);
    assert!(!out.contains(&DetailEvent::PhaseChanged(TransitionPhase::Fullscreen)));
    assert_eq!(c.live_recognizer(), None);
    assert_eq!(closed_count(&out), 1);
}

#[test]
fn input_after_close_is_dropped() {
    let (mut c, mut out) = to_fullscreen(1);
    c.request_close(&mut out);
    for _ in 0..10 {
        c.on_input(DeltaEvent::wheel(-50.0), &mut out);
        c.on_input(DeltaEvent::wheel(50.0), &mut out);
    }
    assert_eq!(c.scroll_position(), 0.0);
    run(&mut c, &mut out, 2.0);
    c.on_input(DeltaEvent::wheel(50.0), &mut out);
    assert_eq!(closed_count(&out), 1);
    assert_eq!(c.phase(), TransitionPhase::Closed);
}

#[test]
fn item_without_secondary_images_still_has_text_blocks() {
    let (c, _) = to_fullscreen(0);
    assert_eq!(c.visual().content_opacity.len(), 2);
    assert!(c.visual().gallery_offsets.is_empty());
}
