//! Vertical delta stream shared by the carousel and the detail recognizers.

use crate::constants::KEY_STEP;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeltaSource {
    Wheel,
    Touch,
    Pointer,
}

/// One vertical input sample.
///
/// Positive deltas mean "forward": wheel scrolling down, or a finger/pointer
/// dragging upwards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DeltaEvent {
    pub delta: f32,
    pub source: DeltaSource,
}

impl DeltaEvent {
    pub fn wheel(delta_y: f32) -> Self {
        Self {
            delta: delta_y,
            source: DeltaSource::Wheel,
        }
    }

    /// Build from a drag movement in screen space (`y` grows downwards).
    /// The sign is flipped so that swiping up reads like scrolling down.
    pub fn drag(source: DeltaSource, screen_dy: f32) -> Self {
        Self {
            delta: -screen_dy,
            source,
        }
    }
}

/// Accumulates raw deltas and dispatches once the accumulated magnitude
/// reaches the tolerance. Dispatching resets the accumulator.
#[derive(Clone, Copy, Debug)]
pub struct DeltaFilter {
    tolerance: f32,
    pending: f32,
}

impl DeltaFilter {
    pub fn new(tolerance: f32) -> Self {
        Self {
            tolerance: tolerance.max(0.0),
            pending: 0.0,
        }
    }

    pub fn push(&mut self, event: DeltaEvent) -> Option<f32> {
        if !event.delta.is_finite() {
            return None;
        }
        self.pending += event.delta;
        if self.pending.abs() >= self.tolerance && self.pending != 0.0 {
            let out = self.pending;
            self.pending = 0.0;
            Some(out)
        } else {
            None
        }
    }

    pub fn reset(&mut self) {
        self.pending = 0.0;
    }
}

/// Keyboard step for carousel navigation, already in progress units.
#[inline]
pub fn step_for_key(key: &str) -> Option<f32> {
    match key {
        "ArrowDown" | "ArrowRight" => Some(KEY_STEP),
        "ArrowUp" | "ArrowLeft" => Some(-KEY_STEP),
        _ => None,
    }
}

/// Keys that activate a focused card.
#[inline]
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}

#[inline]
pub fn is_close_key(key: &str) -> bool {
    key == "Escape"
}
