//! Gesture recognizers installed by the detail view, one per stable phase.
//!
//! Recognizers are plain state: they interpret filtered vertical deltas and
//! report intent. Installing, replacing and dropping them is the detail
//! controller's job.

use crate::constants::*;
use crate::input::{DeltaEvent, DeltaFilter};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PreviewIntent {
    Expand,
    Close,
}

/// Swipe recognizer for the preview phase. Deltas inside the dead zone do
/// nothing.
#[derive(Clone, Debug)]
pub struct PreviewRecognizer {
    filter: DeltaFilter,
    threshold: f32,
}

impl PreviewRecognizer {
    pub fn new(tolerance: f32, threshold: f32) -> Self {
        Self {
            filter: DeltaFilter::new(tolerance),
            threshold,
        }
    }

    pub fn on_input(&mut self, event: DeltaEvent) -> Option<PreviewIntent> {
        let delta = self.filter.push(event)?;
        self.classify(delta)
    }

    #[inline]
    pub fn classify(&self, delta: f32) -> Option<PreviewIntent> {
        if delta > self.threshold {
            Some(PreviewIntent::Expand)
        } else if delta < -self.threshold {
            Some(PreviewIntent::Close)
        } else {
            None
        }
    }
}

impl Default for PreviewRecognizer {
    fn default() -> Self {
        Self::new(PREVIEW_TOLERANCE, SWIPE_THRESHOLD)
    }
}

/// Tunables for the fullscreen recognizer.
#[derive(Clone, Copy, Debug)]
pub struct PullConfig {
    pub tolerance: f32,
    pub pull_gain: f32,
    pub close_threshold: f32,
    pub scroll_gain: f32,
}

impl Default for PullConfig {
    fn default() -> Self {
        Self {
            tolerance: FULLSCREEN_TOLERANCE,
            pull_gain: PULL_GAIN,
            close_threshold: PULL_CLOSE_THRESHOLD,
            scroll_gain: SCROLL_GAIN,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FullscreenAction {
    /// Rubber band past the top. `close` is set on the one delta that
    /// crosses the threshold.
    Pull { progress: f32, close: bool },
    /// Regular scroll. `released_pull` is set when this delta also cancelled
    /// an accumulated pull.
    Scroll { position: f32, released_pull: bool },
}

/// Disambiguates rubber-band close, pull reset and normal scrolling from one
/// vertical delta stream.
#[derive(Clone, Debug)]
pub struct FullscreenRecognizer {
    config: PullConfig,
    filter: DeltaFilter,
    scroll_position: f32,
    pull_progress: f32,
    close_fired: bool,
}

impl FullscreenRecognizer {
    pub fn new(config: PullConfig) -> Self {
        Self {
            filter: DeltaFilter::new(config.tolerance),
            config,
            scroll_position: 0.0,
            pull_progress: 0.0,
            close_fired: false,
        }
    }

    #[inline]
    pub fn scroll_position(&self) -> f32 {
        self.scroll_position
    }

    #[inline]
    pub fn pull_progress(&self) -> f32 {
        self.pull_progress
    }

    pub fn on_input(&mut self, event: DeltaEvent) -> Option<FullscreenAction> {
        let delta = self.filter.push(event)?;
        self.on_delta(delta)
    }

    /// Interpret one dispatched delta. Returns `None` once the close has
    /// fired.
    pub fn on_delta(&mut self, delta: f32) -> Option<FullscreenAction> {
        if self.close_fired {
            return None;
        }
        if self.scroll_position <= 0.0 && delta < 0.0 {
            self.pull_progress += delta.abs() * self.config.pull_gain;
            let close = self.pull_progress > self.config.close_threshold;
            if close {
                self.close_fired = true;
            }
            return Some(FullscreenAction::Pull {
                progress: self.pull_progress,
                close,
            });
        }
        let released_pull = delta > 0.0 && self.pull_progress > 0.0;
        if released_pull {
            self.pull_progress = 0.0;
        }
        self.scroll_position = (self.scroll_position + delta * self.config.scroll_gain).max(0.0);
        Some(FullscreenAction::Scroll {
            position: self.scroll_position,
            released_pull,
        })
    }
}

impl Default for FullscreenRecognizer {
    fn default() -> Self {
        Self::new(PullConfig::default())
    }
}

/// Surface translation for a given pull progress.
#[inline]
pub fn pull_translate(progress: f32) -> f32 {
    (progress * PULL_TRANSLATE_PER_PROGRESS).min(PULL_TRANSLATE_MAX)
}

/// Surface scale for a given pull progress, never below `1 - 2%`.
#[inline]
pub fn pull_scale(progress: f32) -> f32 {
    1.0 - (progress * PULL_SCALE_PER_PROGRESS).min(PULL_SCALE_MAX_REDUCTION)
}
