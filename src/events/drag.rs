/// Tracks one touch or pointer drag and reports vertical movement between
/// samples, in screen space (`y` grows downwards).
#[derive(Clone, Copy, Debug, Default)]
pub struct DragTracker {
    last_y: Option<f32>,
}

impl DragTracker {
    pub fn begin(&mut self, y: f32) {
        self.last_y = Some(y);
    }

    /// Movement since the previous sample; `None` when no drag is active.
    pub fn move_to(&mut self, y: f32) -> Option<f32> {
        let last = self.last_y?;
        self.last_y = Some(y);
        let dy = y - last;
        (dy != 0.0).then_some(dy)
    }

    pub fn end(&mut self) {
        self.last_y = None;
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.last_y.is_some()
    }
}

/// Wheel deltas reported in lines or pages are converted to pixels.
#[inline]
pub fn wheel_delta_px(delta_y: f64, delta_mode: u32, viewport_height: f32) -> f32 {
    match delta_mode {
        1 => delta_y as f32 * 16.0,
        2 => delta_y as f32 * viewport_height,
        _ => delta_y as f32,
    }
}
