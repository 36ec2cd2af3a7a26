//! Detail transition controller.
//!
//! Owns the overlay for one selected item: the geometry morph between the
//! card's origin rectangle, the centred preview rectangle and the full
//! viewport, the gesture recognizer of the current phase, fullscreen
//! parallax and the closing hand-off.
//!
//! Two slots hold everything that can outlive a phase: `morph` (the running
//! timeline) and `recognizer` (the live input handler). Each is cleared
//! explicitly before a successor is installed, so an abandoned phase can
//! neither receive input nor keep writing to [`DetailVisual`].

use crate::constants::*;
use crate::geometry::{Rect, Viewport};
use crate::gesture::{
    pull_scale, pull_translate, FullscreenAction, FullscreenRecognizer, PreviewIntent,
    PreviewRecognizer, PullConfig,
};
use crate::input::DeltaEvent;
use crate::tween::{
    linear, power2_in_out, power2_out, power3_out, stagger_delay, Follow, Timeline, Tween,
};
use smallvec::SmallVec;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionPhase {
    Opening,
    Preview,
    Expanding,
    Fullscreen,
    Closing,
    /// Closing finished and the close callback has been dispatched.
    Closed,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DetailEvent {
    PhaseChanged(TransitionPhase),
    /// The closing animation completed. Emitted once per controller.
    Closed,
}

#[derive(Clone, Copy, Debug)]
pub struct DetailConfig {
    pub preview_tolerance: f32,
    pub swipe_threshold: f32,
    pub pull: PullConfig,
    pub hero_parallax: f32,
    pub hero_scale_per_scroll: f32,
    pub gallery_parallax_amplitude: f32,
    pub close_tilt_y_deg: f32,
}

impl Default for DetailConfig {
    fn default() -> Self {
        Self {
            preview_tolerance: PREVIEW_TOLERANCE,
            swipe_threshold: SWIPE_THRESHOLD,
            pull: PullConfig::default(),
            hero_parallax: HERO_PARALLAX_FACTOR,
            hero_scale_per_scroll: HERO_SCALE_PER_SCROLL,
            gallery_parallax_amplitude: GALLERY_PARALLAX_AMPLITUDE,
            close_tilt_y_deg: GALLERY_TILT_Y_DEG,
        }
    }
}

/// Everything the rendering layer needs to draw the overlay this frame.
#[derive(Clone, Debug, PartialEq)]
pub struct DetailVisual {
    pub container: Rect,
    pub container_rotation_y: f32,
    pub border_radius: f32,
    pub overlay_opacity: f32,
    pub hero_scale: f32,
    pub hero_offset_y: f32,
    /// Per content block: hero text, one per secondary image, footer.
    pub content_opacity: Vec<f32>,
    pub content_offset_y: Vec<f32>,
    /// Set synchronously when closing starts.
    pub content_hidden: bool,
    pub surface_offset_y: f32,
    pub surface_scale: f32,
    pub scroll_offset: f32,
    pub gallery_offsets: Vec<f32>,
}

impl DetailVisual {
    fn initial(origin: Rect, blocks: usize, secondary: usize) -> Self {
        Self {
            container: origin,
            container_rotation_y: 0.0,
            border_radius: RADIUS_CARD,
            overlay_opacity: 0.0,
            hero_scale: 1.0,
            hero_offset_y: 0.0,
            content_opacity: vec![0.0; blocks],
            content_offset_y: vec![CONTENT_OFFSET_HIDDEN; blocks],
            content_hidden: false,
            surface_offset_y: 0.0,
            surface_scale: 1.0,
            scroll_offset: 0.0,
            gallery_offsets: vec![0.0; secondary],
        }
    }
}

type BlockTweens = SmallVec<[Tween<f32>; 8]>;

/// One phase's timeline and the tweens it drives. Properties a phase does
/// not animate hold their value from when the morph started.
#[derive(Debug)]
struct Morph {
    timeline: Timeline,
    container: Tween<Rect>,
    rotation_y: Tween<f32>,
    radius: Tween<f32>,
    overlay: Tween<f32>,
    hero_scale: Tween<f32>,
    hero_offset: Tween<f32>,
    content_opacity: BlockTweens,
    content_offset: BlockTweens,
}

impl Morph {
    fn holding(v: &DetailVisual) -> Self {
        Self {
            timeline: Timeline::new(Duration::ZERO),
            container: Tween::hold(v.container),
            rotation_y: Tween::hold(v.container_rotation_y),
            radius: Tween::hold(v.border_radius),
            overlay: Tween::hold(v.overlay_opacity),
            hero_scale: Tween::hold(v.hero_scale),
            hero_offset: Tween::hold(v.hero_offset_y),
            content_opacity: v.content_opacity.iter().map(|o| Tween::hold(*o)).collect(),
            content_offset: v.content_offset_y.iter().map(|o| Tween::hold(*o)).collect(),
        }
    }

    /// Size the timeline to the latest-ending tween.
    fn sealed(mut self) -> Self {
        let mut end = self
            .container
            .end()
            .max(self.rotation_y.end())
            .max(self.radius.end())
            .max(self.overlay.end())
            .max(self.hero_scale.end())
            .max(self.hero_offset.end());
        for t in self.content_opacity.iter().chain(self.content_offset.iter()) {
            end = end.max(t.end());
        }
        self.timeline = Timeline::new(end);
        self
    }

    fn apply(&self, v: &mut DetailVisual) {
        let t = self.timeline.elapsed();
        v.container = self.container.sample(t);
        v.container_rotation_y = self.rotation_y.sample(t);
        v.border_radius = self.radius.sample(t);
        v.overlay_opacity = self.overlay.sample(t);
        v.hero_scale = self.hero_scale.sample(t);
        v.hero_offset_y = self.hero_offset.sample(t);
        if v.content_hidden {
            return;
        }
        for (out, tw) in v.content_opacity.iter_mut().zip(&self.content_opacity) {
            *out = tw.sample(t);
        }
        for (out, tw) in v.content_offset_y.iter_mut().zip(&self.content_offset) {
            *out = tw.sample(t);
        }
    }
}

/// The single live input handler.
#[derive(Debug)]
enum Recognizer {
    None,
    Preview(PreviewRecognizer),
    Fullscreen(FullscreenRecognizer),
}

/// Smoothed gesture feedback used while fullscreen.
#[derive(Debug)]
struct Feedback {
    surface_y: Follow<f32>,
    surface_scale: Follow<f32>,
    scroll: Follow<f32>,
    hero_offset: Follow<f32>,
    hero_scale: Follow<f32>,
    gallery: Vec<Follow<f32>>,
}

impl Feedback {
    fn at(v: &DetailVisual) -> Self {
        Self {
            surface_y: Follow::at(v.surface_offset_y),
            surface_scale: Follow::at(v.surface_scale),
            scroll: Follow::at(v.scroll_offset),
            hero_offset: Follow::at(v.hero_offset_y),
            hero_scale: Follow::at(v.hero_scale),
            gallery: v.gallery_offsets.iter().map(|o| Follow::at(*o)).collect(),
        }
    }

    fn tick(&mut self, dt: Duration) {
        self.surface_y.tick(dt);
        self.surface_scale.tick(dt);
        self.scroll.tick(dt);
        self.hero_offset.tick(dt);
        self.hero_scale.tick(dt);
        for g in &mut self.gallery {
            g.tick(dt);
        }
    }

    fn apply(&self, v: &mut DetailVisual) {
        v.surface_offset_y = self.surface_y.value();
        v.surface_scale = self.surface_scale.value();
        v.scroll_offset = self.scroll.value();
        v.hero_offset_y = self.hero_offset.value();
        v.hero_scale = self.hero_scale.value();
        for (out, g) in v.gallery_offsets.iter_mut().zip(&self.gallery) {
            *out = g.value();
        }
    }
}

/// Screen-space vertical centre of secondary image `index` when the content
/// is scrolled by `scroll`. The hero and every image section are one
/// viewport tall.
#[inline]
pub fn gallery_image_center_y(index: usize, scroll: f32, viewport: &Viewport) -> f32 {
    let section_top = (index as f32 + 1.0) * viewport.height;
    section_top + viewport.height * 0.5 - scroll
}

/// Parallax offset for secondary image `index`: proportional to its signed
/// distance from the viewport centre, direction alternating by parity.
#[inline]
pub fn gallery_parallax_offset(
    index: usize,
    center_y: f32,
    viewport: &Viewport,
    amplitude: f32,
) -> f32 {
    let height = viewport.height.max(1.0);
    let distance = (center_y - viewport.center_y()) / height;
    let direction = if index % 2 == 0 { 1.0 } else { -1.0 };
    distance * -amplitude * direction
}

fn retarget_gallery(
    gallery: &mut [Follow<f32>],
    position: f32,
    viewport: &Viewport,
    amplitude: f32,
) {
    for (i, g) in gallery.iter_mut().enumerate() {
        let center = gallery_image_center_y(i, position, viewport);
        let offset = gallery_parallax_offset(i, center, viewport, amplitude);
        g.retarget(offset, GALLERY_PARALLAX_SEC, linear);
    }
}

#[derive(Debug)]
pub struct DetailController {
    config: DetailConfig,
    item_index: usize,
    origin_rect: Rect,
    preview_rect: Rect,
    viewport: Viewport,
    phase: TransitionPhase,
    closing: bool,
    close_notified: bool,
    morph: Option<Morph>,
    recognizer: Recognizer,
    feedback: Option<Feedback>,
    visual: DetailVisual,
}

impl DetailController {
    /// Open the overlay for `item_index` from the card rectangle captured at
    /// activation, starting the opening morph.
    pub fn open(
        item_index: usize,
        origin_rect: Rect,
        viewport: Viewport,
        secondary_count: usize,
        config: DetailConfig,
        out: &mut Vec<DetailEvent>,
    ) -> Self {
        let blocks = secondary_count + 2;
        let visual = DetailVisual::initial(origin_rect, blocks, secondary_count);
        let mut controller = Self {
            config,
            item_index,
            origin_rect,
            preview_rect: viewport.preview_rect(),
            viewport,
            phase: TransitionPhase::Opening,
            closing: false,
            close_notified: false,
            morph: None,
            recognizer: Recognizer::None,
            feedback: None,
            visual,
        };
        let morph = controller.opening_morph();
        controller.start_morph(morph);
        log::info!(
            "[detail] opening item {} from ({:.0},{:.0} {:.0}x{:.0})",
            item_index,
            origin_rect.left,
            origin_rect.top,
            origin_rect.width,
            origin_rect.height
        );
        out.push(DetailEvent::PhaseChanged(TransitionPhase::Opening));
        controller
    }

    #[inline]
    pub fn phase(&self) -> TransitionPhase {
        self.phase
    }

    #[inline]
    pub fn item_index(&self) -> usize {
        self.item_index
    }

    #[inline]
    pub fn origin_rect(&self) -> Rect {
        self.origin_rect
    }

    #[inline]
    pub fn preview_rect(&self) -> Rect {
        self.preview_rect
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Follow a viewport resize. Morphs heading for the preview or full
    /// rectangle are retargeted, settled phases snap to the new rectangle and
    /// fullscreen parallax is recomputed. The origin rectangle is kept: the
    /// close always lands on the card captured at activation.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        if viewport == self.viewport {
            return;
        }
        log::debug!(
            "[detail] viewport {:.0}x{:.0} -> {:.0}x{:.0}",
            self.viewport.width,
            self.viewport.height,
            viewport.width,
            viewport.height
        );
        self.viewport = viewport;
        self.preview_rect = viewport.preview_rect();
        let target = match self.phase {
            TransitionPhase::Opening | TransitionPhase::Preview => self.preview_rect,
            TransitionPhase::Expanding | TransitionPhase::Fullscreen => viewport.full_rect(),
            TransitionPhase::Closing | TransitionPhase::Closed => return,
        };
        match &mut self.morph {
            Some(morph) => {
                let at = morph.timeline.elapsed();
                morph.container = morph.container.retarget(at, target);
                morph.apply(&mut self.visual);
            }
            None => self.visual.container = target,
        }
        if let Some(feedback) = &mut self.feedback {
            let position = match &self.recognizer {
                Recognizer::Fullscreen(r) => r.scroll_position(),
                _ => 0.0,
            };
            retarget_gallery(
                &mut feedback.gallery,
                position,
                &self.viewport,
                self.config.gallery_parallax_amplitude,
            );
        }
    }

    #[inline]
    pub fn visual(&self) -> &DetailVisual {
        &self.visual
    }

    #[inline]
    pub fn is_closing(&self) -> bool {
        self.closing
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.phase == TransitionPhase::Closed
    }

    /// Whether a timeline is currently running.
    #[inline]
    pub fn is_animating(&self) -> bool {
        self.morph.is_some()
    }

    /// Whether a gesture recognizer is installed, and for which phase.
    pub fn live_recognizer(&self) -> Option<TransitionPhase> {
        match self.recognizer {
            Recognizer::None => None,
            Recognizer::Preview(_) => Some(TransitionPhase::Preview),
            Recognizer::Fullscreen(_) => Some(TransitionPhase::Fullscreen),
        }
    }

    /// Secondary image sections and footer are mounted once expansion starts.
    pub fn sections_visible(&self) -> bool {
        !self.visual.content_hidden
            && matches!(
                self.phase,
                TransitionPhase::Expanding | TransitionPhase::Fullscreen
            )
    }

    pub fn scroll_position(&self) -> f32 {
        match &self.recognizer {
            Recognizer::Fullscreen(r) => r.scroll_position(),
            _ => 0.0,
        }
    }

    pub fn pull_progress(&self) -> f32 {
        match &self.recognizer {
            Recognizer::Fullscreen(r) => r.pull_progress(),
            _ => 0.0,
        }
    }

    /// Route one vertical input event to the live recognizer.
    pub fn on_input(&mut self, event: DeltaEvent, out: &mut Vec<DetailEvent>) {
        match &mut self.recognizer {
            Recognizer::None => {}
            Recognizer::Preview(r) => match r.on_input(event) {
                Some(PreviewIntent::Expand) => self.expand(out),
                Some(PreviewIntent::Close) => {
                    self.request_close(out);
                }
                None => {}
            },
            Recognizer::Fullscreen(r) => {
                if let Some(action) = r.on_input(event) {
                    self.apply_fullscreen_action(action, out);
                }
            }
        }
    }

    /// Force the closing transition from any phase. Returns `false` when a
    /// close is already running or finished.
    pub fn request_close(&mut self, out: &mut Vec<DetailEvent>) -> bool {
        if self.closing {
            log::debug!("[detail] close already in progress; ignoring");
            return false;
        }
        self.closing = true;
        self.release_recognizer();
        self.cancel_morph();

        // Hide content and neutralise the damped surface before anything
        // animates, so no stale layout shows during the morph.
        self.feedback = None;
        self.visual.content_hidden = true;
        self.visual.content_opacity.iter_mut().for_each(|o| *o = 0.0);
        self.visual.surface_offset_y = 0.0;
        self.visual.surface_scale = 1.0;
        self.visual.scroll_offset = 0.0;
        self.visual.gallery_offsets.iter_mut().for_each(|o| *o = 0.0);

        let morph = self.closing_morph();
        self.start_morph(morph);
        self.set_phase(TransitionPhase::Closing, out);
        true
    }

    /// Advance the running timeline and gesture feedback by `dt`.
    pub fn tick(&mut self, dt: Duration, out: &mut Vec<DetailEvent>) {
        if let Some(feedback) = &mut self.feedback {
            feedback.tick(dt);
            feedback.apply(&mut self.visual);
        }
        let completed = match &mut self.morph {
            Some(morph) => {
                let done = morph.timeline.advance(dt);
                morph.apply(&mut self.visual);
                done
            }
            None => false,
        };
        if completed {
            self.morph = None;
            self.on_morph_complete(out);
        }
    }

    fn on_morph_complete(&mut self, out: &mut Vec<DetailEvent>) {
        match self.phase {
            TransitionPhase::Opening => {
                self.set_phase(TransitionPhase::Preview, out);
                self.install(Recognizer::Preview(PreviewRecognizer::new(
                    self.config.preview_tolerance,
                    self.config.swipe_threshold,
                )));
            }
            TransitionPhase::Expanding => {
                self.set_phase(TransitionPhase::Fullscreen, out);
                self.feedback = Some(Feedback::at(&self.visual));
                self.install(Recognizer::Fullscreen(FullscreenRecognizer::new(
                    self.config.pull,
                )));
            }
            TransitionPhase::Closing => {
                self.set_phase(TransitionPhase::Closed, out);
                if !self.close_notified {
                    self.close_notified = true;
                    log::info!("[detail] closed item {}", self.item_index);
                    out.push(DetailEvent::Closed);
                }
            }
            TransitionPhase::Preview | TransitionPhase::Fullscreen | TransitionPhase::Closed => {}
        }
    }

    fn expand(&mut self, out: &mut Vec<DetailEvent>) {
        if self.phase != TransitionPhase::Preview {
            return;
        }
        self.release_recognizer();
        let morph = self.expanding_morph();
        self.start_morph(morph);
        self.set_phase(TransitionPhase::Expanding, out);
    }

    fn apply_fullscreen_action(&mut self, action: FullscreenAction, out: &mut Vec<DetailEvent>) {
        let Some(feedback) = &mut self.feedback else {
            return;
        };
        match action {
            FullscreenAction::Pull { progress, close } => {
                feedback
                    .surface_y
                    .retarget(pull_translate(progress), PULL_FEEDBACK_SEC, linear);
                feedback
                    .surface_scale
                    .retarget(pull_scale(progress), PULL_FEEDBACK_SEC, linear);
                if close {
                    log::info!("[detail] pull-to-close threshold reached ({:.2})", progress);
                    self.request_close(out);
                }
            }
            FullscreenAction::Scroll {
                position,
                released_pull,
            } => {
                if released_pull {
                    feedback.surface_y.retarget(0.0, PULL_RELEASE_SEC, power2_out);
                    feedback.surface_scale.retarget(1.0, PULL_RELEASE_SEC, power2_out);
                }
                feedback.scroll.retarget(position, SCROLL_FOLLOW_SEC, linear);
                feedback.hero_offset.retarget(
                    position * self.config.hero_parallax,
                    SCROLL_FOLLOW_SEC,
                    linear,
                );
                feedback.hero_scale.retarget(
                    HERO_SCALE_FULLSCREEN + position * self.config.hero_scale_per_scroll,
                    SCROLL_FOLLOW_SEC,
                    linear,
                );
                retarget_gallery(
                    &mut feedback.gallery,
                    position,
                    &self.viewport,
                    self.config.gallery_parallax_amplitude,
                );
            }
        }
    }

    fn install(&mut self, recognizer: Recognizer) {
        self.release_recognizer();
        self.recognizer = recognizer;
    }

    fn release_recognizer(&mut self) {
        if !matches!(self.recognizer, Recognizer::None) {
            log::debug!("[detail] releasing {:?} recognizer", self.live_recognizer());
        }
        self.recognizer = Recognizer::None;
    }

    fn start_morph(&mut self, morph: Morph) {
        self.cancel_morph();
        self.morph = Some(morph);
    }

    fn cancel_morph(&mut self) {
        if let Some(mut morph) = self.morph.take() {
            morph.timeline.kill();
            log::debug!(
                "[detail] killed timeline at {:.2}s of {:.2}s",
                morph.timeline.elapsed().as_secs_f32(),
                morph.timeline.length().as_secs_f32()
            );
        }
    }

    fn set_phase(&mut self, phase: TransitionPhase, out: &mut Vec<DetailEvent>) {
        if self.phase == phase {
            return;
        }
        log::info!("[detail] {:?} -> {:?}", self.phase, phase);
        self.phase = phase;
        out.push(DetailEvent::PhaseChanged(phase));
    }

    fn opening_morph(&self) -> Morph {
        let v = &self.visual;
        let mut m = Morph::holding(v);
        m.overlay = Tween::new(v.overlay_opacity, 1.0, OPEN_OVERLAY_SEC).easing(power2_out);
        m.container = Tween::new(v.container, self.preview_rect, OPEN_MORPH_SEC).easing(power3_out);
        m.radius = Tween::new(v.border_radius, RADIUS_PREVIEW, OPEN_MORPH_SEC).easing(power3_out);
        m.hero_scale = Tween::new(1.0, HERO_SCALE_PREVIEW, OPEN_HERO_SEC).easing(power2_out);
        // Only the title block is revealed in preview.
        if let (Some(o), Some(y)) = (m.content_opacity.first_mut(), m.content_offset.first_mut()) {
            *o = Tween::new(0.0, CONTENT_OPACITY_PREVIEW, OPEN_CONTENT_SEC)
                .delay(OPEN_CONTENT_DELAY_SEC)
                .easing(power2_out);
            *y = Tween::new(CONTENT_OFFSET_HIDDEN, CONTENT_OFFSET_PREVIEW, OPEN_CONTENT_SEC)
                .delay(OPEN_CONTENT_DELAY_SEC)
                .easing(power2_out);
        }
        m.sealed()
    }

    fn expanding_morph(&self) -> Morph {
        let v = &self.visual;
        let mut m = Morph::holding(v);
        m.container =
            Tween::new(v.container, self.viewport.full_rect(), EXPAND_MORPH_SEC).easing(power2_out);
        m.radius =
            Tween::new(v.border_radius, RADIUS_FULLSCREEN, EXPAND_MORPH_SEC).easing(power2_out);
        m.hero_scale =
            Tween::new(v.hero_scale, HERO_SCALE_FULLSCREEN, EXPAND_HERO_SEC).easing(power2_out);
        for (i, (o, y)) in m
            .content_opacity
            .iter_mut()
            .zip(m.content_offset.iter_mut())
            .enumerate()
        {
            let delay = stagger_delay(i, EXPAND_CONTENT_DELAY_SEC, EXPAND_CONTENT_STAGGER_SEC);
            *o = Tween::new(v.content_opacity[i], 1.0, EXPAND_CONTENT_SEC)
                .delay(delay)
                .easing(power2_out);
            *y = Tween::new(v.content_offset_y[i], 0.0, EXPAND_CONTENT_SEC)
                .delay(delay)
                .easing(power2_out);
        }
        m.sealed()
    }

    /// Always targets the original card rectangle, whichever phase the
    /// close started from.
    fn closing_morph(&self) -> Morph {
        let v = &self.visual;
        let mut m = Morph::holding(v);
        m.hero_scale = Tween::new(v.hero_scale, 1.0, CLOSE_HERO_SEC).easing(power2_out);
        m.hero_offset = Tween::new(v.hero_offset_y, 0.0, CLOSE_HERO_SEC).easing(power2_out);
        m.radius = Tween::new(v.border_radius, RADIUS_CLOSING, CLOSE_RADIUS_SEC)
            .delay(CLOSE_RADIUS_DELAY_SEC)
            .easing(power2_out);
        m.container = Tween::new(v.container, self.origin_rect, CLOSE_MORPH_SEC)
            .delay(CLOSE_MORPH_DELAY_SEC)
            .easing(power2_in_out);
        m.rotation_y = Tween::new(
            v.container_rotation_y,
            self.config.close_tilt_y_deg,
            CLOSE_MORPH_SEC,
        )
        .delay(CLOSE_MORPH_DELAY_SEC)
        .easing(power2_in_out);
        m.overlay = Tween::new(v.overlay_opacity, 0.0, CLOSE_OVERLAY_SEC)
            .delay(CLOSE_OVERLAY_DELAY_SEC)
            .easing(power2_out);
        m.sealed()
    }
}
