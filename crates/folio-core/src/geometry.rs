//! Screen-space rectangles and viewport helpers.
//!
//! All values are CSS pixels in viewport coordinates (origin at the top-left
//! corner, y growing downwards), matching what `getBoundingClientRect`
//! reports in the browser.

use crate::constants::{PREVIEW_HEIGHT_FRACTION, PREVIEW_WIDTH_FRACTION};
use glam::Vec2;

/// Axis-aligned rectangle in viewport coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width * 0.5, self.top + self.height * 0.5)
    }

    /// Linear interpolation of every edge; `t` is not clamped so eased
    /// curves may overshoot.
    #[inline]
    pub fn lerp(&self, to: &Rect, t: f32) -> Rect {
        Rect {
            left: self.left + (to.left - self.left) * t,
            top: self.top + (to.top - self.top) * t,
            width: self.width + (to.width - self.width) * t,
            height: self.height + (to.height - self.height) * t,
        }
    }

    /// Largest per-edge difference, used for tolerance comparisons.
    pub fn max_edge_delta(&self, other: &Rect) -> f32 {
        (self.left - other.left)
            .abs()
            .max((self.top - other.top).abs())
            .max((self.width - other.width).abs())
            .max((self.height - other.height).abs())
    }
}

/// Visible viewport size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Rectangle covering the whole viewport.
    #[inline]
    pub fn full_rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }

    /// Centred rectangle used by the detail preview phase.
    pub fn preview_rect(&self) -> Rect {
        let width = self.width * PREVIEW_WIDTH_FRACTION;
        let height = self.height * PREVIEW_HEIGHT_FRACTION;
        Rect::new(
            (self.width - width) * 0.5,
            (self.height - height) * 0.5,
            width,
            height,
        )
    }

    #[inline]
    pub fn center_y(&self) -> f32 {
        self.height * 0.5
    }
}
