//! Time-based interpolation primitives used by the detail transitions.
//!
//! A [`Tween`] describes one property moving between two values over a
//! delayed window; a [`Timeline`] owns the clock shared by a group of tweens
//! and reports completion exactly once. [`Follow`] is a retargetable tween
//! for gesture feedback, where every input event restarts the motion from
//! the current value towards a new target.

use crate::geometry::Rect;
use std::time::Duration;

/// Maps normalized time in [0, 1] to eased progress.
pub type EasingFn = fn(f32) -> f32;

#[inline]
pub fn linear(t: f32) -> f32 {
    t.clamp(0.0, 1.0)
}

/// Quadratic ease-in.
#[inline]
pub fn power2_in(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t
}

/// Quadratic ease-out.
#[inline]
pub fn power2_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t) * (1.0 - t)
}

/// Cubic ease-out.
#[inline]
pub fn power3_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Quadratic ease-in-out.
#[inline]
pub fn power2_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

/// Values a tween can interpolate.
pub trait Lerp: Copy {
    fn lerp(self, to: Self, t: f32) -> Self;
}

impl Lerp for f32 {
    #[inline]
    fn lerp(self, to: Self, t: f32) -> Self {
        self + (to - self) * t
    }
}

impl Lerp for Rect {
    #[inline]
    fn lerp(self, to: Self, t: f32) -> Self {
        Rect::lerp(&self, &to, t)
    }
}

#[inline]
fn secs(s: f32) -> Duration {
    Duration::from_secs_f32(s.max(0.0))
}

/// One property animating from `from` to `to` inside a timeline.
#[derive(Clone, Copy, Debug)]
pub struct Tween<T> {
    from: T,
    to: T,
    delay: Duration,
    duration: Duration,
    easing: EasingFn,
}

impl<T: Lerp> Tween<T> {
    pub fn new(from: T, to: T, duration_sec: f32) -> Self {
        let duration = secs(duration_sec);
        Self {
            from,
            to,
            delay: Duration::ZERO,
            duration: if duration.is_zero() {
                Duration::from_nanos(1)
            } else {
                duration
            },
            easing: linear,
        }
    }

    /// A tween that holds `value` for its whole (zero-length) window.
    pub fn hold(value: T) -> Self {
        Self::new(value, value, 0.0)
    }

    pub fn delay(mut self, delay_sec: f32) -> Self {
        self.delay = secs(delay_sec);
        self
    }

    pub fn easing(mut self, easing: EasingFn) -> Self {
        self.easing = easing;
        self
    }

    /// Time at which this tween reaches `to`.
    #[inline]
    pub fn end(&self) -> Duration {
        self.delay + self.duration
    }

    #[inline]
    pub fn target(&self) -> T {
        self.to
    }

    /// Same window, new end value. Past the start, the remainder of the
    /// window runs from the value sampled at `at` so nothing jumps.
    pub fn retarget(&self, at: Duration, to: T) -> Self {
        if at <= self.delay {
            return Self { to, ..*self };
        }
        if at >= self.end() {
            return Self::hold(to);
        }
        Self {
            from: self.sample(at),
            to,
            delay: at,
            duration: self.end() - at,
            easing: self.easing,
        }
    }

    /// Raw progress in [0, 1] at `elapsed` timeline time.
    pub fn progress(&self, elapsed: Duration) -> f32 {
        let local = elapsed.saturating_sub(self.delay);
        let t = local.as_secs_f64() / self.duration.as_secs_f64();
        (t as f32).clamp(0.0, 1.0)
    }

    pub fn sample(&self, elapsed: Duration) -> T {
        let t = self.progress(elapsed);
        if t >= 1.0 {
            return self.to;
        }
        self.from.lerp(self.to, (self.easing)(t))
    }
}

/// Start offsets for a staggered group: `base + i * each`.
pub fn stagger_delay(index: usize, base_sec: f32, each_sec: f32) -> f32 {
    base_sec + index as f32 * each_sec
}

/// Shared clock for a group of tweens.
///
/// Completion is reported once by [`Timeline::advance`]; a killed timeline
/// never reports completion and ignores further time.
#[derive(Clone, Copy, Debug)]
pub struct Timeline {
    elapsed: Duration,
    length: Duration,
    completed: bool,
    killed: bool,
}

impl Timeline {
    pub fn new(length: Duration) -> Self {
        Self {
            elapsed: Duration::ZERO,
            length,
            completed: false,
            killed: false,
        }
    }

    /// Advance the clock. Returns `true` on the single call that crosses the
    /// end of the timeline.
    pub fn advance(&mut self, dt: Duration) -> bool {
        if self.killed || self.completed {
            return false;
        }
        self.elapsed = self.elapsed.saturating_add(dt);
        if self.elapsed >= self.length {
            self.elapsed = self.length;
            self.completed = true;
            return true;
        }
        false
    }

    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    #[inline]
    pub fn length(&self) -> Duration {
        self.length
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        self.completed
    }

    pub fn kill(&mut self) {
        self.killed = true;
    }

    #[inline]
    pub fn is_killed(&self) -> bool {
        self.killed
    }
}

/// Retargetable tween: each [`Follow::retarget`] restarts from the current
/// value, so rapid input produces continuous motion.
#[derive(Clone, Copy, Debug)]
pub struct Follow<T> {
    tween: Tween<T>,
    elapsed: Duration,
}

impl<T: Lerp> Follow<T> {
    pub fn at(value: T) -> Self {
        Self {
            tween: Tween::hold(value),
            elapsed: Duration::ZERO,
        }
    }

    #[inline]
    pub fn value(&self) -> T {
        self.tween.sample(self.elapsed)
    }

    pub fn retarget(&mut self, to: T, duration_sec: f32, easing: EasingFn) {
        let from = self.value();
        self.tween = Tween::new(from, to, duration_sec).easing(easing);
        self.elapsed = Duration::ZERO;
    }

    /// Jump to `value` with no motion, discarding any in-flight tween.
    pub fn snap(&mut self, value: T) {
        self.tween = Tween::hold(value);
        self.elapsed = Duration::ZERO;
    }

    pub fn tick(&mut self, dt: Duration) {
        self.elapsed = self.elapsed.saturating_add(dt);
    }

    #[inline]
    pub fn is_settled(&self) -> bool {
        self.elapsed >= self.tween.end()
    }
}
