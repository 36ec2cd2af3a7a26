// Host-side tests for the carousel driver: smoothing, wrapping, depth
// shading and input gating.

use folio_core::carousel::*;
use folio_core::input::DeltaEvent;

fn driver(n: usize) -> CarouselDriver {
    CarouselDriver::new(n, CarouselConfig::default())
}

fn run_frames(d: &mut CarouselDriver, n: usize) {
    for _ in 0..n {
        d.frame();
    }
}

#[test]
fn wrap_offset_stays_in_half_open_range() {
    let l = 2160.0;
    for i in -5000..5000 {
        let v = i as f64 * 7.3;
        let w = wrap_offset(v, l);
        assert!(w >= -l / 2.0 && w < l / 2.0, "wrap({v}) = {w}");
    }
    assert_eq!(wrap_offset(1080.0, l), -1080.0);
    assert_eq!(wrap_offset(-1080.0, l), -1080.0);
    assert_eq!(wrap_offset(0.0, 0.0), 0.0);
}

#[test]
fn progress_converges_without_overshoot() {
    let mut d = driver(12);
    d.on_raw_delta(500.0);
    let target = d.state().target_progress;
    assert!((target - 250.0).abs() < 1e-4);

    let mut prev = d.state().progress;
    let mut prev_err = (target - prev).abs();
    for _ in 0..400 {
        d.frame();
        let p = d.state().progress;
        assert!(p >= prev, "progress went backwards");
        assert!(p <= target + 1e-3, "overshoot: {p} > {target}");
        let err = (target - p).abs();
        assert!(err <= prev_err * 0.921 + 1e-4);
        prev = p;
        prev_err = err;
    }
    assert!(prev_err < 1e-2, "did not converge, err {prev_err}");
}

#[test]
fn twelve_card_scenario_lands_card_zero_at_minus_250() {
    let mut d = driver(12);
    for _ in 0..5 {
        // 5 x 100 = 500 of raw wheel delta over several frames
        assert!(d.on_input(DeltaEvent::wheel(100.0)));
        d.frame();
    }
    assert!((d.state().target_progress - 250.0).abs() < 1e-3);
    run_frames(&mut d, 400);
    let offset = d.state().offsets[0];
    assert!((offset + 250.0).abs() < 0.05, "card 0 offset {offset}");
    assert!((d.loop_length() - 2160.0).abs() < f32::EPSILON);
}

#[test]
fn offsets_are_periodic_in_loop_length() {
    let config = CarouselConfig::default();
    let n = 12;
    let l = config.loop_length(n);
    let lf = f64::from(l);
    for p in [0.0_f64, 37.5, 250.0, 999.0, -640.0, 1080.0, 12_345.6] {
        let mut a = CarouselState {
            progress: p,
            target_progress: p,
            ..Default::default()
        };
        let mut b = CarouselState {
            progress: p + lf,
            target_progress: p + lf,
            ..Default::default()
        };
        advance(&mut a, &config, n);
        advance(&mut b, &config, n);
        for (x, y) in a.offsets.iter().zip(&b.offsets) {
            assert!(*x >= -l / 2.0 && *x < l / 2.0, "p={p}: {x} out of range");
            assert!(*y >= -l / 2.0 && *y < l / 2.0, "p={p}: {y} out of range");
            assert!((x - y).abs() < 1e-3, "p={p}: {x} vs {y}");
        }
    }
}

#[test]
fn brightness_is_monotonic_in_depth_and_clamped() {
    let config = CarouselConfig::default();
    let l = config.loop_length(12);
    let state = CarouselState::default();
    let mut prev = f32::INFINITY;
    for step in 0..=108 {
        let offset = step as f32 * 10.0;
        let t = card_transform(offset, &state, &config, l);
        assert!(t.brightness >= 0.3 && t.brightness <= 1.0);
        assert!(t.brightness <= prev);
        let mirrored = card_transform(-offset, &state, &config, l);
        assert!((mirrored.brightness - t.brightness).abs() < 1e-6);
        prev = t.brightness;
    }
    let front = card_transform(0.0, &state, &config, l);
    assert!((front.brightness - 1.0).abs() < 1e-6);
}

#[test]
fn front_cards_paint_above_back_cards() {
    assert!(paint_order(0.0) > paint_order(180.0));
    assert!(paint_order(-90.0) > paint_order(360.0));
    assert_eq!(paint_order(180.0), paint_order(-180.0));
}

#[test]
fn card_transform_places_cards_along_tilted_diagonal() {
    let config = CarouselConfig::default();
    let state = CarouselState::default();
    let t = card_transform(360.0, &state, &config, config.loop_length(12));
    assert!((t.position.x - 360.0).abs() < 1e-4);
    assert!((t.position.y - 128.0).abs() < 1e-4);
    assert!((t.position.z - 440.0).abs() < 1e-4);
    assert_eq!(t.rotation_y, -50.0);
}

#[test]
fn skew_and_curve_lean_while_moving_and_relax_at_rest() {
    let mut d = driver(12);
    d.on_raw_delta(2000.0);
    run_frames(&mut d, 10);
    let moving = d.state().clone();
    assert!(moving.skew < 0.0 && moving.skew >= -15.0);
    assert!(moving.curve < 0.0 && moving.curve >= -4.0);

    // Shared by every card.
    let frames = d.frames();
    assert!(frames.windows(2).all(|w| w[0].transform.skew == w[1].transform.skew));
    assert!(frames.windows(2).all(|w| w[0].transform.curve == w[1].transform.curve));

    run_frames(&mut d, 2000);
    assert!(d.state().skew.abs() < 1e-2);
    assert!(d.state().curve.abs() < 1e-2);
}

#[test]
fn input_is_gated_while_an_item_is_selected() {
    let mut d = driver(12);
    d.set_selected(Some(3));
    assert!(d.is_gated());
    assert!(!d.on_raw_delta(400.0));
    assert!(!d.on_input(DeltaEvent::wheel(400.0)));
    assert!(!d.step(100.0));
    assert_eq!(d.state().target_progress, 0.0);

    let frames = d.frame();
    assert!(frames[3].hidden);
    assert_eq!(frames.iter().filter(|f| f.hidden).count(), 1);

    d.set_selected(None);
    assert!(d.on_raw_delta(400.0));
    assert!((d.state().target_progress - 200.0).abs() < 1e-4);
    assert!(d.frame().iter().all(|f| !f.hidden));
}

#[test]
fn key_step_bypasses_wheel_scaling() {
    let mut d = driver(12);
    assert!(d.step(100.0));
    assert!((d.state().target_progress - 100.0).abs() < 1e-4);
    assert!(d.step(-100.0));
    assert!(d.state().target_progress.abs() < 1e-4);
}

#[test]
fn tiny_deltas_accumulate_through_tolerance() {
    let mut d = driver(12);
    assert!(!d.on_input(DeltaEvent::wheel(4.0)));
    assert!(!d.on_input(DeltaEvent::wheel(4.0)));
    assert!(d.on_input(DeltaEvent::wheel(4.0)));
    assert!((d.state().target_progress - 6.0).abs() < 1e-4);
}
