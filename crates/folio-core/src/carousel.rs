//! Carousel driver: turns bursty wheel/touch/pointer deltas into a smoothly
//! interpolated, infinitely wrapping 3D track.
//!
//! The driver owns a [`CarouselState`] and advances it once per display
//! refresh with [`CarouselDriver::frame`]. Every frame it derives one
//! [`CardFrame`] per catalog item; the rendering layer only applies them.
//!
//! Skew and curve are global: one value per frame, shared by every card, so
//! the whole track leans together while it moves.

use crate::constants::*;
use crate::input::{DeltaEvent, DeltaFilter};
use glam::Vec3;

/// Tunables for the track layout and its smoothing.
#[derive(Clone, Debug)]
pub struct CarouselConfig {
    pub card_spacing: f32,
    pub y_per_card: f32,
    pub z_per_card: f32,
    pub tilt_y_deg: f32,
    pub wheel_scale: f32,
    pub progress_smoothing: f32,
    pub skew_max_deg: f32,
    pub skew_gain: f32,
    pub skew_smoothing: f32,
    pub curve_max_deg: f32,
    pub curve_gain: f32,
    pub curve_smoothing: f32,
    pub brightness_floor: f32,
    pub brightness_falloff: f32,
    pub tolerance: f32,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            card_spacing: CARD_SPACING,
            y_per_card: Y_OFFSET_PER_CARD,
            z_per_card: Z_OFFSET_PER_CARD,
            tilt_y_deg: GALLERY_TILT_Y_DEG,
            wheel_scale: WHEEL_DELTA_SCALE,
            progress_smoothing: PROGRESS_SMOOTHING,
            skew_max_deg: SKEW_MAX_DEG,
            skew_gain: SKEW_VELOCITY_GAIN,
            skew_smoothing: SKEW_SMOOTHING,
            curve_max_deg: CURVE_MAX_DEG,
            curve_gain: CURVE_VELOCITY_GAIN,
            curve_smoothing: CURVE_SMOOTHING,
            brightness_floor: BRIGHTNESS_FLOOR,
            brightness_falloff: BRIGHTNESS_DEPTH_FALLOFF,
            tolerance: CAROUSEL_TOLERANCE,
        }
    }
}

impl CarouselConfig {
    #[inline]
    pub fn loop_length(&self, item_count: usize) -> f32 {
        item_count as f32 * self.card_spacing
    }
}

/// Per-frame simulation state. Progress is unbounded and kept in `f64` so
/// card offsets stay periodic in the loop length however far the track has
/// travelled.
#[derive(Clone, Debug, Default)]
pub struct CarouselState {
    pub progress: f64,
    pub target_progress: f64,
    /// `progress` change during the last frame.
    pub velocity: f32,
    pub skew: f32,
    pub curve: f32,
    /// Wrapped track offset of every card, indexed like the catalog.
    pub offsets: Vec<f32>,
}

/// Transform for one card, in CSS pixels and degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardTransform {
    pub position: Vec3,
    pub rotation_y: f32,
    pub curve: f32,
    pub skew: f32,
    pub brightness: f32,
    pub paint_order: i32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardFrame {
    pub transform: CardTransform,
    /// The card's item is open in the detail view.
    pub hidden: bool,
}

/// Wrap `value` into `[-loop_length / 2, loop_length / 2)`.
#[inline]
pub fn wrap_offset(value: f64, loop_length: f64) -> f64 {
    if loop_length <= 0.0 {
        return 0.0;
    }
    let mut r = value.rem_euclid(loop_length);
    if r >= loop_length * 0.5 {
        r -= loop_length;
    }
    r
}

/// Depth-based brightness: 1.0 at the front, falling to the floor.
#[inline]
pub fn depth_brightness(z: f32, loop_length: f32, config: &CarouselConfig) -> f32 {
    let half = (loop_length * 0.5).max(f32::EPSILON);
    let normalized = z.abs() / half;
    (1.0 - normalized * config.brightness_falloff).clamp(config.brightness_floor, 1.0)
}

/// Cards closer to the front paint above cards further away.
#[inline]
pub fn paint_order(offset: f32) -> i32 {
    (PAINT_ORDER_BASE - offset.abs()).round() as i32
}

/// Advance the smoothed progress and the velocity-driven skew/curve by one
/// frame, then recompute every card offset.
pub fn advance(state: &mut CarouselState, config: &CarouselConfig, item_count: usize) {
    let previous = state.progress;
    state.progress +=
        (state.target_progress - state.progress) * f64::from(config.progress_smoothing);
    state.velocity = (state.progress - previous) as f32;

    let speed = state.velocity.abs();
    let target_skew = (-speed * config.skew_gain).clamp(-config.skew_max_deg, 0.0);
    state.skew += (target_skew - state.skew) * config.skew_smoothing;
    let target_curve = (-speed * config.curve_gain).clamp(-config.curve_max_deg, 0.0);
    state.curve += (target_curve - state.curve) * config.curve_smoothing;

    let loop_length = config.loop_length(item_count);
    state.offsets.resize(item_count, 0.0);
    for (i, offset) in state.offsets.iter_mut().enumerate() {
        *offset = card_offset(i, config.card_spacing, state.progress, loop_length);
    }
}

/// Wrapped track offset of card `index` at `progress`.
#[inline]
pub fn card_offset(index: usize, spacing: f32, progress: f64, loop_length: f32) -> f32 {
    let raw = index as f64 * f64::from(spacing) - progress;
    wrap_offset(raw, f64::from(loop_length)) as f32
}

/// Transform for a card at `offset` given the frame's shared skew/curve.
pub fn card_transform(
    offset: f32,
    state: &CarouselState,
    config: &CarouselConfig,
    loop_length: f32,
) -> CardTransform {
    let steps = offset / config.card_spacing;
    let position = Vec3::new(offset, steps * config.y_per_card, steps * config.z_per_card);
    CardTransform {
        position,
        rotation_y: config.tilt_y_deg,
        curve: state.curve,
        skew: state.skew,
        brightness: depth_brightness(position.z, loop_length, config),
        paint_order: paint_order(offset),
    }
}

/// Owns the carousel state and the per-card output of the latest frame.
#[derive(Debug)]
pub struct CarouselDriver {
    config: CarouselConfig,
    state: CarouselState,
    item_count: usize,
    selected: Option<usize>,
    filter: DeltaFilter,
    frames: Vec<CardFrame>,
}

impl CarouselDriver {
    pub fn new(item_count: usize, config: CarouselConfig) -> Self {
        let filter = DeltaFilter::new(config.tolerance);
        let mut driver = Self {
            config,
            state: CarouselState::default(),
            item_count,
            selected: None,
            filter,
            frames: Vec::with_capacity(item_count),
        };
        driver.rebuild_frames();
        driver
    }

    #[inline]
    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    #[inline]
    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    #[inline]
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    #[inline]
    pub fn loop_length(&self) -> f32 {
        self.config.loop_length(self.item_count)
    }

    /// Input is gated off while a detail view is open.
    #[inline]
    pub fn is_gated(&self) -> bool {
        self.selected.is_some()
    }

    #[inline]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn set_selected(&mut self, selected: Option<usize>) {
        self.selected = selected;
        self.filter.reset();
        for (i, frame) in self.frames.iter_mut().enumerate() {
            frame.hidden = selected == Some(i);
        }
    }

    /// Accumulate a raw vertical delta. Returns whether it was applied.
    pub fn on_raw_delta(&mut self, delta_y: f32) -> bool {
        if self.is_gated() || !delta_y.is_finite() {
            return false;
        }
        self.state.target_progress += f64::from(delta_y * self.config.wheel_scale);
        true
    }

    /// Feed one event through the tolerance filter, then [`Self::on_raw_delta`].
    pub fn on_input(&mut self, event: DeltaEvent) -> bool {
        if self.is_gated() {
            return false;
        }
        match self.filter.push(event) {
            Some(delta) => self.on_raw_delta(delta),
            None => false,
        }
    }

    /// Keyboard step, added to the target without wheel scaling.
    pub fn step(&mut self, amount: f32) -> bool {
        if self.is_gated() || !amount.is_finite() {
            return false;
        }
        self.state.target_progress += f64::from(amount);
        true
    }

    /// Run one display-refresh update and return the cards' new transforms.
    pub fn frame(&mut self) -> &[CardFrame] {
        advance(&mut self.state, &self.config, self.item_count);
        self.rebuild_frames();
        &self.frames
    }

    /// Transforms computed by the latest [`Self::frame`].
    #[inline]
    pub fn frames(&self) -> &[CardFrame] {
        &self.frames
    }

    fn rebuild_frames(&mut self) {
        let loop_length = self.loop_length();
        if self.state.offsets.len() != self.item_count {
            let spacing = self.config.card_spacing;
            let progress = self.state.progress;
            self.state.offsets = (0..self.item_count)
                .map(|i| card_offset(i, spacing, progress, loop_length))
                .collect();
        }
        self.frames.clear();
        for (i, offset) in self.state.offsets.iter().enumerate() {
            self.frames.push(CardFrame {
                transform: card_transform(*offset, &self.state, &self.config, loop_length),
                hidden: self.selected == Some(i),
            });
        }
    }
}
